use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功，返回访问令牌"),
        (status = 401, description = "用户名或密码错误"),
        (status = 429, description = "尝试过于频繁")
    ),
    tag = "auth"
)]
pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    responses(
        (status = 200, description = "当前登录用户信息"),
        (status = 401, description = "缺少认证头"),
        (status = 403, description = "令牌无效或过期")
    ),
    tag = "auth"
)]
pub async fn profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                // 登录端点单独限流，防止暴力破解
                web::scope("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route("", web::post().to(login)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/profile", web::get().to(profile)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};

    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::UpdateUserRequest;
    use crate::storage::Storage;
    use crate::test_utils::{self, TEST_PASSWORD};

    // 限流按 IP 计数，每个测试用独立地址避免相互影响
    macro_rules! init_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($storage.clone()))
                    .app_data(web::Data::new(test_utils::memory_cache()))
                    .configure(configure_auth_routes),
            )
            .await
        };
    }

    fn login_request(ip: &str, username: &str, password: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(format!("{ip}:40000").parse().unwrap())
            .set_json(serde_json::json!({ "username": username, "password": password }))
    }

    #[actix_web::test]
    async fn login_returns_token_for_valid_credentials() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        test_utils::seed_user(&storage, "auth_admin", UserRole::Admin).await;
        let app = init_app!(storage);

        let resp =
            test::call_service(&app, login_request("10.1.0.1", "auth_admin", TEST_PASSWORD).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert!(
            !body["data"]["token"]
                .as_str()
                .unwrap_or_default()
                .is_empty()
        );
        assert!(body["data"]["expires_in"].as_i64().unwrap() > 0);
        assert_eq!(body["data"]["user"]["username"], "auth_admin");
        // 密码哈希绝不能出现在响应里
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn login_rejects_wrong_password() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        test_utils::seed_user(&storage, "auth_user2", UserRole::Teacher).await;
        let app = init_app!(storage);

        let resp =
            test::call_service(&app, login_request("10.1.0.2", "auth_user2", "Wrong@Pass99").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
    }

    #[actix_web::test]
    async fn login_rejects_unknown_user_with_same_message() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = init_app!(storage);

        let resp =
            test::call_service(
                &app,
                login_request("10.1.0.3", "no_such_user", TEST_PASSWORD).to_request(),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Username or password is incorrect");
    }

    #[actix_web::test]
    async fn login_rejects_disabled_account() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let user = test_utils::seed_user(&storage, "auth_gone", UserRole::Student).await;
        storage
            .update_user(
                &user.user_id,
                UpdateUserRequest {
                    email: None,
                    password: None,
                    role: None,
                    full_name: None,
                    active: Some(false),
                },
            )
            .await
            .unwrap();
        let app = init_app!(storage);

        let resp =
            test::call_service(&app, login_request("10.1.0.4", "auth_gone", TEST_PASSWORD).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Account is disabled");
    }

    #[actix_web::test]
    async fn login_is_rate_limited_per_ip() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = init_app!(storage);

        // 登录限制 5 次/分钟，第 6 次必须 429
        for _ in 0..5 {
            let resp =
                test::call_service(
                    &app,
                    login_request("10.1.0.9", "nobody99", "Bad@Pass123").to_request(),
                )
                .await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
        let resp =
            test::call_service(&app, login_request("10.1.0.9", "nobody99", "Bad@Pass123").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn profile_without_auth_header_is_unauthorized() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn profile_with_invalid_token_is_forbidden() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .insert_header(("Authorization", "Bearer not-a-real-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn profile_returns_current_user() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "auth_self", UserRole::Teacher).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["username"], "auth_self");
        assert_eq!(body["data"]["user"]["role"], "teacher");
    }
}
