//! 已解决异议归档实体

use chrono::{DateTime, Utc};
use civix_common::{ObjectionId, UserId};
use serde::{Deserialize, Serialize};

use super::Objection;

/// 已解决异议（归档快照）
///
/// 只追加；每条异议至多一条归档，由 objection_id 唯一约束保证。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedObjection {
    pub objection_id: ObjectionId,
    pub user_id: UserId,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedObjection {
    /// 从异议生成归档快照
    pub fn snapshot_of(objection: &Objection, owner: UserId) -> Self {
        Self {
            objection_id: objection.id.clone(),
            user_id: owner,
            description: objection.description.clone(),
            latitude: objection.latitude,
            longitude: objection.longitude,
            image_url: objection.image_url.clone(),
            objection_type: objection.objection_type.clone(),
            resolved_at: Utc::now(),
        }
    }
}

/// 归档行读取模型（含提交人显示名）
#[derive(Debug, Clone)]
pub struct ResolvedObjectionView {
    pub resolved: ResolvedObjection,
    pub owner_name: Option<String>,
}
