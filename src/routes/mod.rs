pub mod audit;
pub mod auth;
pub mod class_subjects;
pub mod classes;
pub mod frontend;
pub mod student_classes;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use audit::configure_audit_routes;
pub use auth::configure_auth_routes;
pub use class_subjects::configure_class_subject_routes;
pub use classes::configure_class_routes;
pub use frontend::configure_frontend_routes;
pub use student_classes::configure_student_class_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
