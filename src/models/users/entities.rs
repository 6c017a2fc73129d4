use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
    Parent,  // 家长
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
    pub const PARENT: &'static str = "parent";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Teacher, &Self::Student, &Self::Parent]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::PARENT => Ok(UserRole::Parent),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: admin, teacher, student, parent"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Parent => write!(f, "{}", UserRole::PARENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            "parent" => Ok(UserRole::Parent),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub fn generate_access_token(&self) -> crate::errors::Result<String> {
        crate::utils::jwt::JwtUtils::generate_access_token(&self.username, &self.role.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_roundtrip() {
        for s in ["admin", "teacher", "student", "parent"] {
            let role = UserRole::from_str(s).unwrap();
            assert_eq!(role.to_string(), s);
        }
        assert!(UserRole::from_str("principal").is_err());
    }

    #[test]
    fn test_role_deserialize_rejects_unknown() {
        let ok: Result<UserRole, _> = serde_json::from_str("\"admin\"");
        assert!(ok.is_ok());
        let bad: Result<UserRole, _> = serde_json::from_str("\"root\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            user_id: "u-1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            role: UserRole::Admin,
            full_name: None,
            active: true,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
