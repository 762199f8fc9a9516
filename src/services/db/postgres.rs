//! sqlx Postgres pool as a session factory.
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, pool::PoolConnection, postgres::PgPoolOptions};

use super::{SessionError, SessionFactory, SessionResult};
use crate::config::DatabaseConfig;

/// One pooled connection per request. Pooling and transaction semantics
/// belong to sqlx.
#[derive(Clone, Debug)]
pub struct PgSessionFactory {
    pool: PgPool,
}

impl PgSessionFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> SessionResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl SessionFactory for PgSessionFactory {
    type Session = PoolConnection<Postgres>;

    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn open(&self) -> SessionResult<Self::Session> {
        self.pool.acquire().await.map_err(|e| match e {
            // Pool exhausted or shut down: no connection can be handed out.
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                SessionError::Unavailable(e.to_string())
            }
            other => SessionError::Db(other),
        })
    }

    fn close(&self, session: Self::Session) {
        // Dropping a PoolConnection checks it back into the pool.
        drop(session);
    }
}
