//! civix-auth-core - 认证核心库
//!
//! JWT/Claims 核心逻辑

use chrono::{Duration, Utc};
use civix_common::UserId;
use civix_errors::{AppError, AppResult};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// 邮箱
    pub email: String,
    /// 角色（user / authority）
    pub role: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
    /// JWT ID
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: &UserId, email: &str, role: &str, expires_in_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.0.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::now_v7().to_string(),
        }
    }

    pub fn user_id(&self) -> AppResult<UserId> {
        Uuid::parse_str(&self.sub)
            .map(UserId::from_uuid)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Token 服务
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
}

impl TokenService {
    pub fn new(secret: &str, expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    /// 生成访问令牌
    pub fn generate_token(&self, user_id: &UserId, email: &str, role: &str) -> AppResult<String> {
        let claims = Claims::new(user_id, email, role, self.expires_in);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
    }

    /// 验证令牌
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0; // 不允许时间偏差

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    /// 获取令牌过期时间（秒）
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: i64 = 7 * 24 * 3600;

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new("test-secret-key-at-least-32-chars-long", WEEK);
        let user_id = UserId::new();

        let token = service
            .generate_token(&user_id, "citizen@example.com", "user")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.0.to_string());
        assert_eq!(claims.email, "citizen@example.com");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.has_role("user"));
        assert!(!claims.has_role("authority"));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new("test-secret-key-at-least-32-chars-long", -3600);
        let user_id = UserId::new();

        let token = service
            .generate_token(&user_id, "citizen@example.com", "user")
            .unwrap();
        let result = service.validate_token(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = TokenService::new("correct-secret-key-32-chars-long!!", WEEK);
        let other = TokenService::new("wrong-secret-key-32-chars-long!!!!", WEEK);
        let user_id = UserId::new();

        let token = other
            .generate_token(&user_id, "citizen@example.com", "user")
            .unwrap();
        let result = service.validate_token(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new("test-secret-key-at-least-32-chars-long", WEEK);
        let user_id = UserId::new();

        let mut token = service
            .generate_token(&user_id, "citizen@example.com", "user")
            .unwrap();
        token.push('x');
        let result = service.validate_token(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new("test-secret-key-at-least-32-chars-long", WEEK);

        assert!(service.validate_token("not-a-jwt").is_err());
        assert!(service.validate_token("").is_err());
    }
}
