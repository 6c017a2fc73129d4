use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 登录响应模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

// 当前用户信息响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UserInfoResponse {
    pub user: User,
}
