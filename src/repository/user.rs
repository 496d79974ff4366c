use async_trait::async_trait;
use sqlx::PgPool;

use crate::utils::error::Result;

/// Seam through which domain logic will reach storage. Only the shape is
/// settled so far; no entity attributes are defined yet.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self) -> Result<()>;
}

pub struct PgUserRepository {
    pub pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Intentionally unimplemented. No route dispatches here; calling it
    /// halts the task.
    async fn find(&self) -> Result<()> {
        unimplemented!("user repository find")
    }
}
