use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::password::verify_password;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    // 1. 根据用户名或邮箱获取用户信息
    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            // 2. 验证密码
            if !verify_password(&login_request.password, &user.password_hash) {
                return Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error("Username or password is incorrect")));
            }

            // 3. 停用账号不允许登录
            if !user.active {
                return Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error("Account is disabled")));
            }

            // 4. 更新最后登录时间，失败不阻塞登录
            let _ = storage.update_last_login(&user.user_id).await;

            // 5. 签发访问令牌
            match user.generate_access_token() {
                Ok(token) => {
                    tracing::info!("User {} logged in successfully", user.username);

                    let response = LoginResponse {
                        token,
                        expires_in: config.jwt.access_token_expiry,
                        user,
                    };

                    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
                }
                Err(e) => {
                    tracing::error!("Failed to generate JWT token: {}", e);
                    Ok(HttpResponse::InternalServerError()
                        .json(ApiResponse::error("Login failed, unable to generate token")))
                }
            }
        }
        // 不区分用户不存在与密码错误
        Ok(None) => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error("Username or password is incorrect"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Login failed: {e}")))),
    }
}
