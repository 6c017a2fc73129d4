//! 预导入模块，方便使用

pub use super::audit_logs::{
    ActiveModel as AuditLogActiveModel, Entity as AuditLogs, Model as AuditLogModel,
};
pub use super::class_subjects::{
    ActiveModel as ClassSubjectActiveModel, Entity as ClassSubjects, Model as ClassSubjectModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::student_classes::{
    ActiveModel as StudentClassActiveModel, Entity as StudentClasses, Model as StudentClassModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
