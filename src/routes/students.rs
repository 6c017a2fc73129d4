use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&student_id, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: web::Path<String>,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&student_id, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&student_id, &req).await
}

// 配置路由：读取开放给教职员，写操作仅限管理员
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_students))
                    .route("/{id}", web::get().to(get_student)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_student))
                    .route("/{id}", web::put().to(update_student))
                    .route("/{id}", web::delete().to(delete_student)),
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
                    .configure(configure_student_routes),
            )
            .await
        };
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn list_requires_authentication() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = init_app!(storage);

        let req = test::TestRequest::get().uri("/api/v1/students").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn teacher_can_list_but_student_cannot() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let teacher_token =
            test_utils::seed_user_token(&storage, "stu_teacher", UserRole::Teacher).await;
        let student_token =
            test_utils::seed_user_token(&storage, "stu_pupil", UserRole::Student).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(bearer(&teacher_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(bearer(&student_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn teacher_cannot_create_student() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_ro_staff", UserRole::Teacher).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "full_name": "测试学生" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_creates_student_and_blank_name_is_rejected() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin1", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "full_name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "full_name": "赵新同学",
                "email": "xin.zhao@example.com",
                "date_of_birth": "2012-06-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["student"]["full_name"], "赵新同学");
        assert!(body["data"]["student"]["active"].as_bool().unwrap());
    }

    #[actix_web::test]
    async fn create_rejects_malformed_birth_date() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin2", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "full_name": "日期异常",
                "date_of_birth": "06/01/2012"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn update_unknown_student_returns_not_found() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin3", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::put()
            .uri("/api/v1/students/no-such-id")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "phone": "13800009999" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn soft_deleted_student_leaves_default_list_but_stays_addressable() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin4", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::delete()
            .uri("/api/v1/students/fx-student-0001")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // 默认列表不含停用学生
        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let ids: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["student_id"].as_str().unwrap())
            .collect();
        assert!(!ids.contains(&"fx-student-0001"));

        // 按 ID 仍可读取，记录只是标记停用
        let req = test::TestRequest::get()
            .uri("/api/v1/students/fx-student-0001")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["data"]["student"]["active"].as_bool().unwrap());

        // include_inactive=true 时重新出现
        let req = test::TestRequest::get()
            .uri("/api/v1/students?include_inactive=true")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let ids: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["student_id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"fx-student-0001"));
    }

    #[actix_web::test]
    async fn pagination_slices_sorted_fixture_data() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin5", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/students?page=2&pageSize=1")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // 固定数据按创建时间倒序：0004, 0003, 0002, 0001（0005 已停用）
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["items"][0]["student_id"], "fx-student-0003");
        assert_eq!(body["data"]["pagination"]["page"], 2);
        assert_eq!(body["data"]["pagination"]["page_size"], 1);
        assert_eq!(body["data"]["pagination"]["total"], 4);
        assert_eq!(body["data"]["pagination"]["total_pages"], 4);
    }

    #[actix_web::test]
    async fn search_matches_guardian_name() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "stu_admin6", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/students?search=%E7%8E%8B%E5%BB%BA%E5%9B%BD")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["items"][0]["student_id"], "fx-student-0001");
    }
}
