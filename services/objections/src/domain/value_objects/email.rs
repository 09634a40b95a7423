//! Email 值对象

use std::fmt;

use civix_errors::AppError;
use serde::{Deserialize, Serialize};

/// Email 值对象
///
/// 按原样保存，大小写敏感。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(pub String);

impl Email {
    /// 创建新的 Email
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        // 验证邮箱格式
        if !Self::is_valid(&email) {
            return Err(EmailError::InvalidFormat(email));
        }

        Ok(Self(email))
    }

    /// 验证邮箱格式
    fn is_valid(email: &str) -> bool {
        email.contains('@')
            && email.len() >= 3
            && email.len() <= 254
            && !email.starts_with('@')
            && !email.ends_with('@')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email 错误
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("test@example.com");
        assert!(email.is_ok());
        assert_eq!(email.unwrap().0, "test@example.com");
    }

    #[test]
    fn test_email_case_preserved() {
        // 邮箱按原样保存，不做大小写折叠
        let email = Email::new("Test@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Test@Example.COM");
    }

    #[test]
    fn test_email_case_sensitive_equality() {
        let email1 = Email::new("test@example.com").unwrap();
        let email2 = Email::new("TEST@EXAMPLE.COM").unwrap();
        assert_ne!(email1, email2);
    }

    #[test]
    fn test_invalid_email_no_at() {
        let email = Email::new("invalid.email.com");
        assert!(email.is_err());
    }

    #[test]
    fn test_invalid_email_starts_with_at() {
        let email = Email::new("@example.com");
        assert!(email.is_err());
    }

    #[test]
    fn test_invalid_email_ends_with_at() {
        let email = Email::new("test@");
        assert!(email.is_err());
    }

    #[test]
    fn test_invalid_email_empty() {
        let email = Email::new("");
        assert!(email.is_err());
    }

    #[test]
    fn test_email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }
}
