//! Session factory interface and the request-scoped session guard.
use std::fmt;
use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while opening a session.
///
/// Kept independent from `AppError`; the HTTP layer maps it to a 500.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}

/// Produces database sessions and takes them back.
///
/// Implementations must be cheap to clone (typically `Arc`/pool inside).
/// `close` is synchronous so it can run from `Drop`.
#[async_trait]
pub trait SessionFactory: Clone + Send + Sync + 'static {
    type Session: Send + 'static;

    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Check out a new session.
    async fn open(&self) -> SessionResult<Self::Session>;

    // Release a session opened by this factory.
    fn close(&self, session: Self::Session);
}

/// A session owned by exactly one request.
///
/// The session is handed back to its factory exactly once: either through
/// [`DbSession::close`] or when the guard is dropped (handler returned,
/// failed, panicked, or its future was cancelled).
pub struct DbSession<F: SessionFactory> {
    factory: F,
    session: Option<F::Session>,
}

impl<F: SessionFactory> DbSession<F> {
    pub async fn open(factory: &F) -> SessionResult<Self> {
        let session = factory.open().await?;
        tracing::debug!(backend = factory.backend_name(), "database session opened");

        Ok(Self {
            factory: factory.clone(),
            session: Some(session),
        })
    }

    /// Release the session before the end of the request.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(session) = self.session.take() {
            self.factory.close(session);
            tracing::debug!(
                backend = self.factory.backend_name(),
                "database session closed"
            );
        }
    }
}

impl<F: SessionFactory> Deref for DbSession<F> {
    type Target = F::Session;

    fn deref(&self) -> &Self::Target {
        // `session` is only taken in `release`, which consumes or drops the guard.
        match self.session.as_ref() {
            Some(session) => session,
            None => unreachable!("database session used after release"),
        }
    }
}

impl<F: SessionFactory> DerefMut for DbSession<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.session.as_mut() {
            Some(session) => session,
            None => unreachable!("database session used after release"),
        }
    }
}

impl<F: SessionFactory> Drop for DbSession<F> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<F: SessionFactory> fmt::Debug for DbSession<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSession")
            .field("backend", &self.factory.backend_name())
            .field("open", &self.session.is_some())
            .finish()
    }
}
