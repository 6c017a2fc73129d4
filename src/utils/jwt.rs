use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (用户名)
    pub role: String, // 用户角色
    pub iat: usize,   // 签发时间 (时间戳)
    pub exp: usize,   // 过期时间 (时间戳)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    // 无刷新令牌、无吊销列表：令牌在自然过期前一直有效
    pub fn generate_access_token(username: &str, role: &str) -> Result<String> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            username,
            role,
            chrono::Duration::seconds(config.jwt.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        username: &str,
        role: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| SchoolSystemError::authentication(format!("令牌签发失败: {e}")))
    }

    // 验证 JWT token，返回解码后的 Claims
    pub fn verify_access_token(
        token: &str,
    ) -> std::result::Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = JwtUtils::generate_access_token("admin", "admin").unwrap();
        assert!(!token.is_empty());

        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_expiry(
            "alice",
            "teacher",
            chrono::Duration::seconds(-60),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(JwtUtils::verify_access_token("not-a-jwt").is_err());
        assert!(JwtUtils::verify_access_token("").is_err());
    }
}
