//! 请求参数错误处理器
//!
//! JSON 体或查询参数反序列化失败时，actix 默认返回纯文本 400；
//! 这里统一替换为信封格式的 400 响应。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ApiResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        JsonPayloadError::OverflowKnownLength { length, limit } => {
            format!("Request body too large: {length} bytes (limit {limit})")
        }
        JsonPayloadError::Overflow { limit } => {
            format!("Request body too large (limit {limit} bytes)")
        }
        _ => "Invalid request body".to_string(),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error(message));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query parameter error on {}: {}", req.path(), err);

    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("Invalid query parameters: {e}"),
        _ => "Invalid query parameters".to_string(),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error(message));
    InternalError::from_response(err, response).into()
}
