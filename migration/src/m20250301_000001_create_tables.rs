use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().null())
                    .col(
                        ColumnDef::new(Users::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        // 注意：邮箱不加唯一约束，历史数据存在重复邮箱
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::DateOfBirth).string().null())
                    .col(ColumnDef::new(Students::GuardianName).string().null())
                    .col(
                        ColumnDef::new(Students::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::TeacherId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::FullName).string().not_null())
                    .col(ColumnDef::new(Teachers::Email).string().null())
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::SubjectSpecialty).string().null())
                    .col(
                        ColumnDef::new(Teachers::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        // teacher_id 不加外键，班主任可以先于教师记录录入
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::ClassId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::GradeLevel).string().null())
                    .col(ColumnDef::new(Classes::TeacherId).string().null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::SubjectId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Code).string().null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生班级关联表
        manager
            .create_table(
                Table::create()
                    .table(StudentClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentClasses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentClasses::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentClasses::ClassId).string().not_null())
                    .col(
                        ColumnDef::new(StudentClasses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentClasses::Table, StudentClasses::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentClasses::Table, StudentClasses::ClassId)
                            .to(Classes::Table, Classes::ClassId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级科目关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSubjects::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassSubjects::ClassId).string().not_null())
                    .col(ColumnDef::new(ClassSubjects::SubjectId).string().not_null())
                    .col(
                        ColumnDef::new(ClassSubjects::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::ClassId)
                            .to(Classes::Table, Classes::ClassId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::SubjectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 学生/教师表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_full_name")
                    .table(Students::Table)
                    .col(Students::FullName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_active")
                    .table(Students::Table)
                    .col(Students::Active)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_full_name")
                    .table(Teachers::Table)
                    .col(Teachers::FullName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_active")
                    .table(Teachers::Table)
                    .col(Teachers::Active)
                    .to_owned(),
            )
            .await?;

        // 班级表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_teacher_id")
                    .table(Classes::Table)
                    .col(Classes::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 关联表唯一索引，防止重复选课/排课
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_classes_pair")
                    .table(StudentClasses::Table)
                    .col(StudentClasses::StudentId)
                    .col(StudentClasses::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_subjects_pair")
                    .table(ClassSubjects::Table)
                    .col(ClassSubjects::ClassId)
                    .col(ClassSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按依赖关系逆序删除
        manager
            .drop_table(Table::drop().table(ClassSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    Username,
    Email,
    PasswordHash,
    Role,
    FullName,
    Active,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    StudentId,
    FullName,
    Email,
    Phone,
    DateOfBirth,
    GuardianName,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    TeacherId,
    FullName,
    Email,
    Phone,
    SubjectSpecialty,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    ClassId,
    Name,
    GradeLevel,
    TeacherId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    SubjectId,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentClasses {
    Table,
    Id,
    StudentId,
    ClassId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassSubjects {
    Table,
    Id,
    ClassId,
    SubjectId,
    CreatedAt,
}
