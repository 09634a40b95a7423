//! 测试用内存仓储
//!
//! 以内存结构模拟持久层，不依赖真实 PostgreSQL。

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use civix_common::{ObjectionId, UserId};
use civix_errors::{AppError, AppResult};

use objection_service::domain::entities::{
    NewObjection, Objection, ObjectionStatus, ResolvedObjection, ResolvedObjectionView, Role, User,
};
use objection_service::domain::repositories::{
    ObjectionFilter, ObjectionRepository, ResolvedObjectionRepository, UserRepository,
};
use objection_service::domain::services::Identity;
use objection_service::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use objection_service::domain::value_objects::Email;

/// 共享内存存储
#[derive(Default)]
pub struct InMemoryStore {
    pub objections: Mutex<Vec<Objection>>,
    pub resolved: Mutex<Vec<ResolvedObjection>>,
    next_id: Mutex<i64>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct InMemoryObjectionRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryObjectionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ObjectionRepository for InMemoryObjectionRepository {
    async fn insert(&self, objection: &NewObjection) -> AppResult<Objection> {
        let mut next_id = self.store.next_id.lock().unwrap();
        *next_id += 1;

        let objection = Objection {
            id: ObjectionId::from_i64(*next_id),
            description: objection.description.clone(),
            latitude: objection.latitude,
            longitude: objection.longitude,
            image_url: objection.image_url.clone(),
            objection_type: objection.objection_type.clone(),
            status: ObjectionStatus::Pending,
            user_id: objection.user_id.clone(),
            created_at: Utc::now(),
        };

        self.store
            .objections
            .lock()
            .unwrap()
            .push(objection.clone());
        Ok(objection)
    }

    async fn find_by_id(&self, id: &ObjectionId) -> AppResult<Option<Objection>> {
        Ok(self
            .store
            .objections
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == *id)
            .cloned())
    }

    async fn list(&self, filter: &ObjectionFilter) -> AppResult<Vec<Objection>> {
        let objections = self.store.objections.lock().unwrap();
        let mut items: Vec<Objection> = objections
            .iter()
            .filter(|o| match &filter.owner {
                Some(owner) => o.user_id.as_ref() == Some(owner),
                None => true,
            })
            .filter(|o| match &filter.status {
                Some(status) => o.status == *status,
                None => true,
            })
            .filter(|o| !filter.exclude_resolved || o.status != ObjectionStatus::Resolved)
            .cloned()
            .collect();

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn update_status(
        &self,
        id: &ObjectionId,
        from: &ObjectionStatus,
        to: &ObjectionStatus,
    ) -> AppResult<bool> {
        let mut objections = self.store.objections.lock().unwrap();
        for objection in objections.iter_mut() {
            if objection.id == *id && objection.status == *from {
                objection.status = to.clone();
                return Ok(true);
            }
        }
        Ok(false)
    }
}

pub struct InMemoryResolvedObjectionRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryResolvedObjectionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ResolvedObjectionRepository for InMemoryResolvedObjectionRepository {
    async fn insert_snapshot(&self, snapshot: &ResolvedObjection) -> AppResult<()> {
        let mut resolved = self.store.resolved.lock().unwrap();
        // 模拟 objection_id 唯一约束
        if resolved
            .iter()
            .any(|r| r.objection_id == snapshot.objection_id)
        {
            return Err(AppError::database("duplicate archive row"));
        }
        resolved.push(snapshot.clone());
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<ResolvedObjectionView>> {
        let mut items: Vec<ResolvedObjection> =
            self.store.resolved.lock().unwrap().iter().cloned().collect();
        items.sort_by(|a, b| b.resolved_at.cmp(&a.resolved_at));

        Ok(items
            .into_iter()
            .map(|resolved| ResolvedObjectionView {
                resolved,
                owner_name: None,
            })
            .collect())
    }

    async fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<ResolvedObjectionView>> {
        let mut items: Vec<ResolvedObjection> = self
            .store
            .resolved
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == *owner)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.resolved_at.cmp(&a.resolved_at));

        Ok(items
            .into_iter()
            .map(|resolved| ResolvedObjectionView {
                resolved,
                owner_name: None,
            })
            .collect())
    }
}

/// 内存 Unit of Work（没有真实事务语义，提交为空操作）
pub struct InMemoryUnitOfWork {
    objections: InMemoryObjectionRepository,
    resolved: InMemoryResolvedObjectionRepository,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn objections(&self) -> &dyn ObjectionRepository {
        &self.objections
    }

    fn resolved_objections(&self) -> &dyn ResolvedObjectionRepository {
        &self.resolved
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryUnitOfWorkFactory {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWorkFactory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(InMemoryUnitOfWork {
            objections: InMemoryObjectionRepository::new(self.store.clone()),
            resolved: InMemoryResolvedObjectionRepository::new(self.store.clone()),
        }))
    }
}

/// 内存用户仓储
#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        // 精确匹配，大小写敏感
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == *email))
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

pub fn citizen_identity() -> Identity {
    Identity::new(UserId::new(), Role::User)
}

pub fn authority_identity() -> Identity {
    Identity::new(UserId::new(), Role::Authority)
}
