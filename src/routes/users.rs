use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: web::Path<String>) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&user_id, &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: web::Path<String>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(&user_id, update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(
    req: HttpRequest,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&user_id, &req).await
}

// 配置路由：用户管理仅限管理员
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_users))
                    .route("", web::post().to(create_user))
                    .route("/{id}", web::get().to(get_user))
                    .route("/{id}", web::put().to(update_user))
                    .route("/{id}", web::delete().to(delete_user)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};

    use super::*;
    use crate::storage::Storage;
    use crate::test_utils;

    macro_rules! init_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($storage.clone()))
                    .app_data(web::Data::new(test_utils::memory_cache()))
                    .configure(configure_user_routes),
            )
            .await
        };
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {token}"))
    }

    fn new_user_payload(username: &str) -> serde_json::Value {
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "NewUser@Pass1",
            "role": "teacher"
        })
    }

    #[actix_web::test]
    async fn user_management_is_admin_only() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let teacher_token =
            test_utils::seed_user_token(&storage, "usr_teacher", UserRole::Teacher).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(bearer(&teacher_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&teacher_token))
            .set_json(new_user_payload("usr_blocked"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_lists_users_without_password_hashes() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "usr_admin1", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert!(items.iter().any(|u| u["username"] == "usr_admin1"));
        assert!(items.iter().all(|u| u.get("password_hash").is_none()));
    }

    #[actix_web::test]
    async fn duplicate_username_returns_conflict() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "usr_admin2", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&token))
            .set_json(new_user_payload("usr_dup01"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&token))
            .set_json(new_user_payload("usr_dup01"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Username or email already exists");
    }

    #[actix_web::test]
    async fn create_rejects_invalid_email_and_short_username() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "usr_admin3", UserRole::Admin).await;
        let app = init_app!(storage);

        let mut payload = new_user_payload("usr_bad01");
        payload["email"] = serde_json::json!("not-an-email");
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&token))
            .set_json(new_user_payload("ab"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn admin_cannot_delete_own_account() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let admin = test_utils::seed_user(&storage, "usr_admin4", UserRole::Admin).await;
        let token = admin.generate_access_token().unwrap();
        let app = init_app!(storage);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", admin.user_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Cannot delete current user");
    }

    #[actix_web::test]
    async fn delete_marks_user_inactive() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "usr_admin5", UserRole::Admin).await;
        let victim = test_utils::seed_user(&storage, "usr_victim", UserRole::Student).await;
        let app = init_app!(storage);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", victim.user_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // 软删除：记录保留但标记停用
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", victim.user_id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["data"]["user"]["active"].as_bool().unwrap());
    }

    #[actix_web::test]
    async fn delete_unknown_user_returns_not_found() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "usr_admin6", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/no-such-user")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
