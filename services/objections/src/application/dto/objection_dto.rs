//! 异议 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Objection, ResolvedObjectionView};

/// 异议 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectionDto {
    pub id: i64,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    pub status: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ObjectionDto {
    pub fn from_entity(objection: &Objection) -> Self {
        Self {
            id: objection.id.as_i64(),
            description: objection.description.clone(),
            latitude: objection.latitude,
            longitude: objection.longitude,
            image_url: objection.image_url.clone(),
            objection_type: objection.objection_type.clone(),
            status: objection.status.as_str().to_string(),
            user_id: objection.user_id.as_ref().map(|id| id.0.to_string()),
            created_at: objection.created_at,
        }
    }
}

/// 归档 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedObjectionDto {
    pub objection_id: i64,
    pub user_id: String,
    /// 提交人显示名（authority 列表展示用）
    pub user_name: Option<String>,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedObjectionDto {
    pub fn from_view(view: &ResolvedObjectionView) -> Self {
        Self {
            objection_id: view.resolved.objection_id.as_i64(),
            user_id: view.resolved.user_id.0.to_string(),
            user_name: view.owner_name.clone(),
            description: view.resolved.description.clone(),
            latitude: view.resolved.latitude,
            longitude: view.resolved.longitude,
            image_url: view.resolved.image_url.clone(),
            objection_type: view.resolved.objection_type.clone(),
            resolved_at: view.resolved.resolved_at,
        }
    }
}
