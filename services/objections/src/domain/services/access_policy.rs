//! 访问策略
//!
//! 所有角色/归属判断集中在这里，处理器不得自行比较角色。

use civix_common::UserId;
use civix_errors::{AppError, AppResult};

use crate::domain::entities::{Objection, ObjectionStatus, Role};
use crate::domain::repositories::ObjectionFilter;

/// 已认证身份
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_authority(&self) -> bool {
        self.role == Role::Authority
    }
}

/// 访问策略
pub struct AccessPolicy;

impl AccessPolicy {
    /// 列表查询范围
    ///
    /// authority 可见全部，未指定状态时排除已解决；
    /// 普通用户只能看自己的异议。
    pub fn list_scope(identity: &Identity, status: Option<ObjectionStatus>) -> ObjectionFilter {
        if identity.is_authority() {
            ObjectionFilter {
                owner: None,
                exclude_resolved: status.is_none(),
                status,
            }
        } else {
            ObjectionFilter {
                owner: Some(identity.user_id.clone()),
                status,
                exclude_resolved: false,
            }
        }
    }

    /// 归档列表范围
    ///
    /// None 表示全部可见；普通用户只看自己的归档行。
    pub fn resolved_scope(identity: &Identity) -> Option<UserId> {
        if identity.is_authority() {
            None
        } else {
            Some(identity.user_id.clone())
        }
    }

    /// 单条可见性
    ///
    /// 普通用户访问他人异议时返回 NotFound，不暴露存在性。
    pub fn ensure_can_view(identity: &Identity, objection: &Objection) -> AppResult<()> {
        if identity.is_authority() || objection.is_owned_by(&identity.user_id) {
            Ok(())
        } else {
            Err(AppError::not_found("Objection not found"))
        }
    }

    /// 只有 authority 才能标记待确认
    pub fn ensure_authority(identity: &Identity) -> AppResult<()> {
        if identity.is_authority() {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only authority users may resolve objections",
            ))
        }
    }

    /// 只有提交人才能确认解决
    pub fn ensure_owner(identity: &Identity, objection: &Objection) -> AppResult<()> {
        if objection.is_owned_by(&identity.user_id) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only the submitting user may approve the resolution",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use civix_common::ObjectionId;

    use super::*;

    fn authority() -> Identity {
        Identity::new(UserId::new(), Role::Authority)
    }

    fn citizen() -> Identity {
        Identity::new(UserId::new(), Role::User)
    }

    fn objection_owned_by(owner: &Identity) -> Objection {
        Objection {
            id: ObjectionId::from_i64(1),
            description: "Overflowing bin".to_string(),
            latitude: 24.89,
            longitude: 91.87,
            image_url: "https://cdn/bin.jpg".to_string(),
            objection_type: "waste".to_string(),
            status: crate::domain::entities::ObjectionStatus::Pending,
            user_id: Some(owner.user_id.clone()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_authority_scope_excludes_resolved_by_default() {
        let filter = AccessPolicy::list_scope(&authority(), None);
        assert!(filter.owner.is_none());
        assert!(filter.status.is_none());
        assert!(filter.exclude_resolved);
    }

    #[test]
    fn test_authority_scope_with_status_filter() {
        let filter =
            AccessPolicy::list_scope(&authority(), Some(ObjectionStatus::PendingApproval));
        assert!(filter.owner.is_none());
        assert_eq!(filter.status, Some(ObjectionStatus::PendingApproval));
        assert!(!filter.exclude_resolved);
    }

    #[test]
    fn test_user_scope_is_owner_bound() {
        let identity = citizen();
        let filter = AccessPolicy::list_scope(&identity, None);
        assert_eq!(filter.owner, Some(identity.user_id));
        assert!(!filter.exclude_resolved);
    }

    #[test]
    fn test_resolved_scope() {
        assert!(AccessPolicy::resolved_scope(&authority()).is_none());

        let identity = citizen();
        assert_eq!(
            AccessPolicy::resolved_scope(&identity),
            Some(identity.user_id)
        );
    }

    #[test]
    fn test_owner_can_view() {
        let owner = citizen();
        let objection = objection_owned_by(&owner);
        assert!(AccessPolicy::ensure_can_view(&owner, &objection).is_ok());
    }

    #[test]
    fn test_authority_can_view_any() {
        let owner = citizen();
        let objection = objection_owned_by(&owner);
        assert!(AccessPolicy::ensure_can_view(&authority(), &objection).is_ok());
    }

    #[test]
    fn test_other_user_gets_not_found() {
        let owner = citizen();
        let objection = objection_owned_by(&owner);
        let result = AccessPolicy::ensure_can_view(&citizen(), &objection);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_ensure_authority() {
        assert!(AccessPolicy::ensure_authority(&authority()).is_ok());
        assert!(matches!(
            AccessPolicy::ensure_authority(&citizen()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_ensure_owner() {
        let owner = citizen();
        let objection = objection_owned_by(&owner);

        assert!(AccessPolicy::ensure_owner(&owner, &objection).is_ok());
        assert!(matches!(
            AccessPolicy::ensure_owner(&citizen(), &objection),
            Err(AppError::Forbidden(_))
        ));
        // authority 也不能替提交人确认
        assert!(matches!(
            AccessPolicy::ensure_owner(&authority(), &objection),
            Err(AppError::Forbidden(_))
        ));
    }
}
