//! 异议实体
//!
//! 状态机：pending → pending_approval → resolved，只前进不后退。

use std::fmt;

use chrono::{DateTime, Utc};
use civix_common::{ObjectionId, UserId};
use civix_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 异议状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectionStatus {
    Pending,
    PendingApproval,
    Resolved,
}

impl ObjectionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::PendingApproval => "pending_approval",
            Self::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "pending_approval" => Some(Self::PendingApproval),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ObjectionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// 异议实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objection {
    pub id: ObjectionId,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    pub status: ObjectionStatus,
    /// 提交人；legacy 匿名提交为 None
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Objection {
    /// 标记为待确认
    ///
    /// 只允许从 pending 进入 pending_approval。
    pub fn mark_pending_approval(&mut self) -> AppResult<()> {
        match self.status {
            ObjectionStatus::Pending => {
                self.status = ObjectionStatus::PendingApproval;
                Ok(())
            }
            ObjectionStatus::PendingApproval => Err(AppError::conflict(
                "Objection is already awaiting approval",
            )),
            ObjectionStatus::Resolved => Err(AppError::conflict("Objection is already resolved")),
        }
    }

    /// 确认解决
    ///
    /// 只允许从 pending_approval 进入 resolved。
    pub fn approve(&mut self) -> AppResult<()> {
        match self.status {
            ObjectionStatus::PendingApproval => {
                self.status = ObjectionStatus::Resolved;
                Ok(())
            }
            ObjectionStatus::Pending => Err(AppError::conflict(
                "Objection has not been marked for approval",
            )),
            ObjectionStatus::Resolved => Err(AppError::conflict("Objection is already resolved")),
        }
    }

    /// 是否属于指定用户
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}

/// 新建异议（已校验的输入）
#[derive(Debug, Clone)]
pub struct NewObjection {
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    pub user_id: Option<UserId>,
}

impl NewObjection {
    /// 校验并构造，必填字段缺失或为空时返回 ValidationError
    pub fn new(
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
        image_url: impl Into<String>,
        objection_type: impl Into<String>,
        user_id: Option<UserId>,
    ) -> AppResult<Self> {
        let description = description.into();
        let image_url = image_url.into();
        let objection_type = objection_type.into();

        if description.trim().is_empty() {
            return Err(AppError::validation("description is required"));
        }
        if image_url.trim().is_empty() {
            return Err(AppError::validation("image_url is required"));
        }
        if objection_type.trim().is_empty() {
            return Err(AppError::validation("objection_type is required"));
        }
        // 经纬度必填，但不做范围校验
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(AppError::validation("latitude and longitude are required"));
        }

        Ok(Self {
            description,
            latitude,
            longitude,
            image_url,
            objection_type,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_objection() -> Objection {
        Objection {
            id: ObjectionId::from_i64(1),
            description: "Broken streetlight".to_string(),
            latitude: 24.89,
            longitude: 91.87,
            image_url: "https://cdn/x.jpg".to_string(),
            objection_type: "streetlights".to_string(),
            status: ObjectionStatus::Pending,
            user_id: Some(UserId::new()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_forward_transitions() {
        let mut objection = pending_objection();

        assert!(objection.mark_pending_approval().is_ok());
        assert_eq!(objection.status, ObjectionStatus::PendingApproval);

        assert!(objection.approve().is_ok());
        assert_eq!(objection.status, ObjectionStatus::Resolved);
    }

    #[test]
    fn test_cannot_skip_to_resolved() {
        let mut objection = pending_objection();

        let result = objection.approve();
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(objection.status, ObjectionStatus::Pending);
    }

    #[test]
    fn test_cannot_mark_twice() {
        let mut objection = pending_objection();
        objection.mark_pending_approval().unwrap();

        let result = objection.mark_pending_approval();
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(objection.status, ObjectionStatus::PendingApproval);
    }

    #[test]
    fn test_resolved_is_terminal() {
        let mut objection = pending_objection();
        objection.mark_pending_approval().unwrap();
        objection.approve().unwrap();

        assert!(objection.mark_pending_approval().is_err());
        assert!(objection.approve().is_err());
        assert_eq!(objection.status, ObjectionStatus::Resolved);
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            ObjectionStatus::Pending,
            ObjectionStatus::PendingApproval,
            ObjectionStatus::Resolved,
        ] {
            assert_eq!(ObjectionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ObjectionStatus::parse("unknown"), None);
    }

    #[test]
    fn test_new_objection_requires_description() {
        let result = NewObjection::new("", 24.89, 91.87, "https://cdn/x.jpg", "potholes", None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_objection_requires_image() {
        let result = NewObjection::new("Pothole", 24.89, 91.87, "  ", "potholes", None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_objection_requires_type() {
        let result = NewObjection::new("Pothole", 24.89, 91.87, "https://cdn/x.jpg", "", None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_objection_requires_finite_coordinates() {
        let result = NewObjection::new(
            "Pothole",
            f64::NAN,
            91.87,
            "https://cdn/x.jpg",
            "potholes",
            None,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_ownership() {
        let owner = UserId::new();
        let other = UserId::new();
        let mut objection = pending_objection();
        objection.user_id = Some(owner.clone());

        assert!(objection.is_owned_by(&owner));
        assert!(!objection.is_owned_by(&other));

        objection.user_id = None;
        assert!(!objection.is_owned_by(&owner));
    }
}
