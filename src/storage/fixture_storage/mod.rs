//! 内存固定数据存储
//!
//! 演示模式后端：启动时从内置 JSON 固定数据装载一批学生、教师、
//! 班级、科目与关联记录，全部状态保存在进程内存中，重启即复位。
//! 错误消息刻意与 SQLite 保持一致（`UNIQUE constraint failed` /
//! `FOREIGN KEY constraint failed`），服务层无需区分后端。

use std::sync::RwLock;

use dashmap::DashMap;

use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    audit::{entities::AuditLog, requests::AuditLogListQuery, responses::AuditLogListResponse},
    class_subjects::{
        entities::ClassSubject,
        requests::{ClassSubjectListQuery, CreateClassSubjectRequest},
        responses::ClassSubjectListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    student_classes::{
        entities::StudentClass,
        requests::{CreateStudentClassRequest, StudentClassListQuery},
        responses::StudentClassListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

const STUDENTS_FIXTURE: &str = include_str!("fixtures/students.json");
const TEACHERS_FIXTURE: &str = include_str!("fixtures/teachers.json");
const CLASSES_FIXTURE: &str = include_str!("fixtures/classes.json");
const SUBJECTS_FIXTURE: &str = include_str!("fixtures/subjects.json");
const STUDENT_CLASSES_FIXTURE: &str = include_str!("fixtures/student_classes.json");
const CLASS_SUBJECTS_FIXTURE: &str = include_str!("fixtures/class_subjects.json");

pub struct FixtureStorage {
    users: DashMap<String, User>,
    students: DashMap<String, Student>,
    teachers: DashMap<String, Teacher>,
    classes: DashMap<String, Class>,
    subjects: DashMap<String, Subject>,
    student_classes: DashMap<String, StudentClass>,
    class_subjects: DashMap<String, ClassSubject>,
    // 审计日志追加写，Vec 天然保序
    audit_logs: RwLock<Vec<AuditLog>>,
}

// 分页计算，语义与 SeaORM Paginator 一致（0 条时 0 页）
fn paginate<T>(mut items: Vec<T>, page: Option<i64>, size: Option<i64>) -> (Vec<T>, PaginationInfo) {
    let page = page.unwrap_or(1).max(1);
    let size = size.unwrap_or(10).clamp(1, 100);
    let total = items.len() as i64;
    let total_pages = if total == 0 {
        0
    } else {
        (total as u64).div_ceil(size as u64) as i64
    };

    let start = ((page - 1) * size) as usize;
    let items = if start >= items.len() {
        Vec::new()
    } else {
        items.drain(start..).take(size as usize).collect()
    };

    (
        items,
        PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    )
}

fn matches_search(haystacks: &[Option<&str>], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .flatten()
        .any(|h| h.to_lowercase().contains(&needle))
}

impl FixtureStorage {
    /// 装载内置固定数据，失败即 panic（数据随二进制一起编译，属构建缺陷）
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let storage = Self {
            users: DashMap::new(),
            students: DashMap::new(),
            teachers: DashMap::new(),
            classes: DashMap::new(),
            subjects: DashMap::new(),
            student_classes: DashMap::new(),
            class_subjects: DashMap::new(),
            audit_logs: RwLock::new(Vec::new()),
        };

        let students: Vec<Student> =
            serde_json::from_str(STUDENTS_FIXTURE).expect("内置学生固定数据无效");
        for s in students {
            storage.students.insert(s.student_id.clone(), s);
        }

        let teachers: Vec<Teacher> =
            serde_json::from_str(TEACHERS_FIXTURE).expect("内置教师固定数据无效");
        for t in teachers {
            storage.teachers.insert(t.teacher_id.clone(), t);
        }

        let classes: Vec<Class> =
            serde_json::from_str(CLASSES_FIXTURE).expect("内置班级固定数据无效");
        for c in classes {
            storage.classes.insert(c.class_id.clone(), c);
        }

        let subjects: Vec<Subject> =
            serde_json::from_str(SUBJECTS_FIXTURE).expect("内置科目固定数据无效");
        for s in subjects {
            storage.subjects.insert(s.subject_id.clone(), s);
        }

        let enrollments: Vec<StudentClass> =
            serde_json::from_str(STUDENT_CLASSES_FIXTURE).expect("内置选课固定数据无效");
        for e in enrollments {
            storage.student_classes.insert(e.id.clone(), e);
        }

        let assignments: Vec<ClassSubject> =
            serde_json::from_str(CLASS_SUBJECTS_FIXTURE).expect("内置排课固定数据无效");
        for a in assignments {
            storage.class_subjects.insert(a.id.clone(), a);
        }

        storage
    }
}

#[async_trait::async_trait]
impl super::Storage for FixtureStorage {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        if self
            .users
            .iter()
            .any(|u| u.value().username == req.username)
        {
            return Err(SchoolSystemError::database_operation(
                "创建用户失败: UNIQUE constraint failed: users.username",
            ));
        }
        if self.users.iter().any(|u| u.value().email == req.email) {
            return Err(SchoolSystemError::database_operation(
                "创建用户失败: UNIQUE constraint failed: users.email",
            ));
        }

        let now = chrono::Utc::now();
        let user = User {
            user_id: uuid::Uuid::new_v4().to_string(),
            username: req.username,
            email: req.email,
            password_hash: req.password,
            role: req.role,
            full_name: req.full_name,
            active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        };

        self.users.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.users.get(user_id).map(|u| u.value().clone()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.value().username == username)
            .map(|u| u.value().clone()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.value().email == email)
            .map(|u| u.value().clone()))
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.value().username == identifier || u.value().email == identifier)
            .map(|u| u.value().clone()))
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|u| u.value().clone())
            .filter(|u| {
                if let Some(ref role) = query.role
                    && &u.role != role
                {
                    return false;
                }
                if !query.include_inactive.unwrap_or(false) && !u.active {
                    return false;
                }
                if let Some(ref search) = query.search {
                    return matches_search(
                        &[
                            Some(u.username.as_str()),
                            Some(u.email.as_str()),
                            u.full_name.as_deref(),
                        ],
                        search,
                    );
                }
                true
            })
            .collect();

        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.user_id.cmp(&a.user_id)));

        let (items, pagination) = paginate(users, query.page, query.size);
        Ok(UserListResponse { items, pagination })
    }

    async fn update_user(&self, user_id: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        let Some(mut user) = self.users.get_mut(user_id) else {
            return Ok(None);
        };

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password) = update.password {
            user.password_hash = password;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(full_name) = update.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(active) = update.active {
            user.active = active;
        }
        user.updated_at = chrono::Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let Some(mut user) = self.users.get_mut(user_id) else {
            return Ok(false);
        };
        user.active = false;
        user.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn update_last_login(&self, user_id: &str) -> Result<bool> {
        let Some(mut user) = self.users.get_mut(user_id) else {
            return Ok(false);
        };
        user.last_login = Some(chrono::Utc::now());
        Ok(true)
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.users.len() as u64)
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now();
        let student = Student {
            student_id: uuid::Uuid::new_v4().to_string(),
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            date_of_birth: req.date_of_birth,
            guardian_name: req.guardian_name,
            active: true,
            created_at: now,
            updated_at: now,
        };

        self.students
            .insert(student.student_id.clone(), student.clone());
        Ok(student)
    }

    async fn get_student_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(self.students.get(student_id).map(|s| s.value().clone()))
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let mut students: Vec<Student> = self
            .students
            .iter()
            .map(|s| s.value().clone())
            .filter(|s| {
                if !query.include_inactive.unwrap_or(false) && !s.active {
                    return false;
                }
                if let Some(ref search) = query.search {
                    return matches_search(
                        &[
                            Some(s.full_name.as_str()),
                            s.email.as_deref(),
                            s.guardian_name.as_deref(),
                        ],
                        search,
                    );
                }
                true
            })
            .collect();

        students.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.student_id.cmp(&a.student_id))
        });

        let (items, pagination) = paginate(students, query.page, query.size);
        Ok(StudentListResponse { items, pagination })
    }

    async fn update_student(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(mut student) = self.students.get_mut(student_id) else {
            return Ok(None);
        };

        if let Some(full_name) = update.full_name {
            student.full_name = full_name;
        }
        if let Some(email) = update.email {
            student.email = Some(email);
        }
        if let Some(phone) = update.phone {
            student.phone = Some(phone);
        }
        if let Some(date_of_birth) = update.date_of_birth {
            student.date_of_birth = Some(date_of_birth);
        }
        if let Some(guardian_name) = update.guardian_name {
            student.guardian_name = Some(guardian_name);
        }
        student.updated_at = chrono::Utc::now();

        Ok(Some(student.clone()))
    }

    async fn delete_student(&self, student_id: &str) -> Result<bool> {
        let Some(mut student) = self.students.get_mut(student_id) else {
            return Ok(false);
        };
        student.active = false;
        student.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now();
        let teacher = Teacher {
            teacher_id: uuid::Uuid::new_v4().to_string(),
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            subject_specialty: req.subject_specialty,
            active: true,
            created_at: now,
            updated_at: now,
        };

        self.teachers
            .insert(teacher.teacher_id.clone(), teacher.clone());
        Ok(teacher)
    }

    async fn get_teacher_by_id(&self, teacher_id: &str) -> Result<Option<Teacher>> {
        Ok(self.teachers.get(teacher_id).map(|t| t.value().clone()))
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let mut teachers: Vec<Teacher> = self
            .teachers
            .iter()
            .map(|t| t.value().clone())
            .filter(|t| {
                if !query.include_inactive.unwrap_or(false) && !t.active {
                    return false;
                }
                if let Some(ref search) = query.search {
                    return matches_search(
                        &[
                            Some(t.full_name.as_str()),
                            t.email.as_deref(),
                            t.subject_specialty.as_deref(),
                        ],
                        search,
                    );
                }
                true
            })
            .collect();

        teachers.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.teacher_id.cmp(&a.teacher_id))
        });

        let (items, pagination) = paginate(teachers, query.page, query.size);
        Ok(TeacherListResponse { items, pagination })
    }

    async fn update_teacher(
        &self,
        teacher_id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let Some(mut teacher) = self.teachers.get_mut(teacher_id) else {
            return Ok(None);
        };

        if let Some(full_name) = update.full_name {
            teacher.full_name = full_name;
        }
        if let Some(email) = update.email {
            teacher.email = Some(email);
        }
        if let Some(phone) = update.phone {
            teacher.phone = Some(phone);
        }
        if let Some(subject_specialty) = update.subject_specialty {
            teacher.subject_specialty = Some(subject_specialty);
        }
        teacher.updated_at = chrono::Utc::now();

        Ok(Some(teacher.clone()))
    }

    async fn delete_teacher(&self, teacher_id: &str) -> Result<bool> {
        let Some(mut teacher) = self.teachers.get_mut(teacher_id) else {
            return Ok(false);
        };
        teacher.active = false;
        teacher.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now();
        let class = Class {
            class_id: uuid::Uuid::new_v4().to_string(),
            name: req.name,
            grade_level: req.grade_level,
            teacher_id: req.teacher_id,
            created_at: now,
            updated_at: now,
        };

        self.classes.insert(class.class_id.clone(), class.clone());
        Ok(class)
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        Ok(self.classes.get(class_id).map(|c| c.value().clone()))
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let mut classes: Vec<Class> = self
            .classes
            .iter()
            .map(|c| c.value().clone())
            .filter(|c| {
                if let Some(ref grade_level) = query.grade_level
                    && c.grade_level.as_deref() != Some(grade_level.as_str())
                {
                    return false;
                }
                if let Some(ref search) = query.search {
                    return matches_search(&[Some(c.name.as_str())], search);
                }
                true
            })
            .collect();

        classes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.class_id.cmp(&a.class_id))
        });

        let (items, pagination) = paginate(classes, query.page, query.size);
        Ok(ClassListResponse { items, pagination })
    }

    async fn update_class(
        &self,
        class_id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(mut class) = self.classes.get_mut(class_id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            class.name = name;
        }
        if let Some(grade_level) = update.grade_level {
            class.grade_level = Some(grade_level);
        }
        if let Some(teacher_id) = update.teacher_id {
            class.teacher_id = Some(teacher_id);
        }
        class.updated_at = chrono::Utc::now();

        Ok(Some(class.clone()))
    }

    async fn delete_class(&self, class_id: &str) -> Result<bool> {
        let removed = self.classes.remove(class_id).is_some();
        if removed {
            // 级联删除选课/排课记录，与数据库外键行为一致
            self.student_classes.retain(|_, e| e.class_id != class_id);
            self.class_subjects.retain(|_, a| a.class_id != class_id);
        }
        Ok(removed)
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now();
        let subject = Subject {
            subject_id: uuid::Uuid::new_v4().to_string(),
            name: req.name,
            code: req.code,
            created_at: now,
            updated_at: now,
        };

        self.subjects
            .insert(subject.subject_id.clone(), subject.clone());
        Ok(subject)
    }

    async fn get_subject_by_id(&self, subject_id: &str) -> Result<Option<Subject>> {
        Ok(self.subjects.get(subject_id).map(|s| s.value().clone()))
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let mut subjects: Vec<Subject> = self
            .subjects
            .iter()
            .map(|s| s.value().clone())
            .filter(|s| {
                if let Some(ref search) = query.search {
                    return matches_search(&[Some(s.name.as_str()), s.code.as_deref()], search);
                }
                true
            })
            .collect();

        subjects.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.subject_id.cmp(&a.subject_id))
        });

        let (items, pagination) = paginate(subjects, query.page, query.size);
        Ok(SubjectListResponse { items, pagination })
    }

    async fn update_subject(
        &self,
        subject_id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let Some(mut subject) = self.subjects.get_mut(subject_id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            subject.name = name;
        }
        if let Some(code) = update.code {
            subject.code = Some(code);
        }
        subject.updated_at = chrono::Utc::now();

        Ok(Some(subject.clone()))
    }

    async fn delete_subject(&self, subject_id: &str) -> Result<bool> {
        let removed = self.subjects.remove(subject_id).is_some();
        if removed {
            self.class_subjects
                .retain(|_, a| a.subject_id != subject_id);
        }
        Ok(removed)
    }

    async fn create_student_class(
        &self,
        req: CreateStudentClassRequest,
    ) -> Result<StudentClass> {
        if !self.students.contains_key(&req.student_id) {
            return Err(SchoolSystemError::database_operation(
                "创建选课记录失败: FOREIGN KEY constraint failed",
            ));
        }
        if !self.classes.contains_key(&req.class_id) {
            return Err(SchoolSystemError::database_operation(
                "创建选课记录失败: FOREIGN KEY constraint failed",
            ));
        }
        if self.student_classes.iter().any(|e| {
            e.value().student_id == req.student_id && e.value().class_id == req.class_id
        }) {
            return Err(SchoolSystemError::database_operation(
                "创建选课记录失败: UNIQUE constraint failed: student_classes.student_id, student_classes.class_id",
            ));
        }

        let enrollment = StudentClass {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: req.student_id,
            class_id: req.class_id,
            created_at: chrono::Utc::now(),
        };

        self.student_classes
            .insert(enrollment.id.clone(), enrollment.clone());
        Ok(enrollment)
    }

    async fn get_student_class_by_id(&self, id: &str) -> Result<Option<StudentClass>> {
        Ok(self.student_classes.get(id).map(|e| e.value().clone()))
    }

    async fn list_student_classes_with_pagination(
        &self,
        query: StudentClassListQuery,
    ) -> Result<StudentClassListResponse> {
        let mut enrollments: Vec<StudentClass> = self
            .student_classes
            .iter()
            .map(|e| e.value().clone())
            .filter(|e| {
                if let Some(ref student_id) = query.student_id
                    && &e.student_id != student_id
                {
                    return false;
                }
                if let Some(ref class_id) = query.class_id
                    && &e.class_id != class_id
                {
                    return false;
                }
                true
            })
            .collect();

        enrollments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (items, pagination) = paginate(enrollments, query.page, query.size);
        Ok(StudentClassListResponse { items, pagination })
    }

    async fn delete_student_class(&self, id: &str) -> Result<bool> {
        Ok(self.student_classes.remove(id).is_some())
    }

    async fn create_class_subject(
        &self,
        req: CreateClassSubjectRequest,
    ) -> Result<ClassSubject> {
        if !self.classes.contains_key(&req.class_id) {
            return Err(SchoolSystemError::database_operation(
                "创建排课记录失败: FOREIGN KEY constraint failed",
            ));
        }
        if !self.subjects.contains_key(&req.subject_id) {
            return Err(SchoolSystemError::database_operation(
                "创建排课记录失败: FOREIGN KEY constraint failed",
            ));
        }
        if self.class_subjects.iter().any(|a| {
            a.value().class_id == req.class_id && a.value().subject_id == req.subject_id
        }) {
            return Err(SchoolSystemError::database_operation(
                "创建排课记录失败: UNIQUE constraint failed: class_subjects.class_id, class_subjects.subject_id",
            ));
        }

        let assignment = ClassSubject {
            id: uuid::Uuid::new_v4().to_string(),
            class_id: req.class_id,
            subject_id: req.subject_id,
            created_at: chrono::Utc::now(),
        };

        self.class_subjects
            .insert(assignment.id.clone(), assignment.clone());
        Ok(assignment)
    }

    async fn get_class_subject_by_id(&self, id: &str) -> Result<Option<ClassSubject>> {
        Ok(self.class_subjects.get(id).map(|a| a.value().clone()))
    }

    async fn list_class_subjects_with_pagination(
        &self,
        query: ClassSubjectListQuery,
    ) -> Result<ClassSubjectListResponse> {
        let mut assignments: Vec<ClassSubject> = self
            .class_subjects
            .iter()
            .map(|a| a.value().clone())
            .filter(|a| {
                if let Some(ref class_id) = query.class_id
                    && &a.class_id != class_id
                {
                    return false;
                }
                if let Some(ref subject_id) = query.subject_id
                    && &a.subject_id != subject_id
                {
                    return false;
                }
                true
            })
            .collect();

        assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (items, pagination) = paginate(assignments, query.page, query.size);
        Ok(ClassSubjectListResponse { items, pagination })
    }

    async fn delete_class_subject(&self, id: &str) -> Result<bool> {
        Ok(self.class_subjects.remove(id).is_some())
    }

    async fn append_audit_log(&self, entry: AuditLog) -> Result<()> {
        let mut logs = self
            .audit_logs
            .write()
            .map_err(|_| SchoolSystemError::database_operation("审计日志锁被毒化"))?;
        logs.push(entry);
        Ok(())
    }

    async fn list_audit_logs_with_pagination(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse> {
        let logs = self
            .audit_logs
            .read()
            .map_err(|_| SchoolSystemError::database_operation("审计日志锁被毒化"))?;

        let mut entries: Vec<AuditLog> = logs
            .iter()
            .filter(|l| {
                if let Some(ref actor) = query.actor
                    && &l.actor != actor
                {
                    return false;
                }
                if let Some(ref action) = query.action
                    && &l.action != action
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (items, pagination) = paginate(entries, query.page, query.size);
        Ok(AuditLogListResponse { items, pagination })
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    fn make_user_request(username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "$argon2id$fake-hash".to_string(),
            role: UserRole::Teacher,
            full_name: None,
        }
    }

    #[tokio::test]
    async fn test_fixtures_seeded() {
        let storage = FixtureStorage::new();

        let students = storage
            .list_students_with_pagination(StudentListQuery::default())
            .await
            .unwrap();
        // 固定数据含一名已停用学生，默认列表不含
        assert_eq!(students.pagination.total, 4);

        let all = storage
            .list_students_with_pagination(StudentListQuery {
                include_inactive: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all.pagination.total, 5);

        let classes = storage
            .list_classes_with_pagination(ClassListQuery::default())
            .await
            .unwrap();
        assert_eq!(classes.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let storage = FixtureStorage::new();

        storage
            .create_user(make_user_request("zhang_laoshi", "zhang@example.com"))
            .await
            .unwrap();

        let err = storage
            .create_user(make_user_request("zhang_laoshi", "other@example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[tokio::test]
    async fn test_enrollment_fk_and_duplicate() {
        let storage = FixtureStorage::new();

        // 固定数据中 fx-student-0005 未加入 fx-class-0002
        storage
            .create_student_class(CreateStudentClassRequest {
                student_id: "fx-student-0005".to_string(),
                class_id: "fx-class-0002".to_string(),
            })
            .await
            .unwrap();

        let dup = storage
            .create_student_class(CreateStudentClassRequest {
                student_id: "fx-student-0005".to_string(),
                class_id: "fx-class-0002".to_string(),
            })
            .await
            .unwrap_err();
        assert!(dup.to_string().contains("UNIQUE constraint failed"));

        let dangling = storage
            .create_student_class(CreateStudentClassRequest {
                student_id: "no-such-student".to_string(),
                class_id: "fx-class-0002".to_string(),
            })
            .await
            .unwrap_err();
        assert!(dangling.to_string().contains("FOREIGN KEY constraint failed"));
    }

    #[tokio::test]
    async fn test_soft_delete_student_keeps_row() {
        let storage = FixtureStorage::new();

        assert!(storage.delete_student("fx-student-0001").await.unwrap());

        let found = storage.get_student_by_id("fx-student-0001").await.unwrap();
        assert!(found.is_some_and(|s| !s.active));

        let listed = storage
            .list_students_with_pagination(StudentListQuery::default())
            .await
            .unwrap();
        assert!(
            !listed
                .items
                .iter()
                .any(|s| s.student_id == "fx-student-0001")
        );
    }

    #[tokio::test]
    async fn test_delete_class_cascades() {
        let storage = FixtureStorage::new();

        assert!(storage.delete_class("fx-class-0001").await.unwrap());

        let enrollments = storage
            .list_student_classes_with_pagination(StudentClassListQuery {
                class_id: Some("fx-class-0001".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(enrollments.pagination.total, 0);

        let assignments = storage
            .list_class_subjects_with_pagination(ClassSubjectListQuery {
                class_id: Some("fx-class-0001".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(assignments.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_pagination_page_two() {
        let storage = FixtureStorage::new();

        let page2 = storage
            .list_subjects_with_pagination(SubjectListQuery {
                page: Some(2),
                size: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page2.items.len(), 1);
        assert_eq!(page2.pagination.page, 2);
        assert_eq!(page2.pagination.total, 4);
        assert_eq!(page2.pagination.total_pages, 4);
    }

    #[tokio::test]
    async fn test_audit_log_roundtrip() {
        let storage = FixtureStorage::new();

        storage
            .append_audit_log(AuditLog::new(
                "admin",
                "student.create",
                Some("fx-student-0001".to_string()),
                None,
            ))
            .await
            .unwrap();

        let logs = storage
            .list_audit_logs_with_pagination(AuditLogListQuery {
                actor: Some("admin".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(logs.pagination.total, 1);
        assert_eq!(logs.items[0].action, "student.create");
    }
}
