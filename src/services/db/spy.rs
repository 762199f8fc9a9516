//! In-memory session factory that records every open/close.
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use async_trait::async_trait;

use super::{SessionError, SessionFactory, SessionResult};

#[derive(Debug)]
pub struct SpySession {
    pub id: u64,
    pub queries: u32,
}

#[derive(Clone, Debug, Default)]
pub struct SpySessionFactory {
    inner: Arc<SpyInner>,
    fail_open: bool,
}

#[derive(Debug, Default)]
struct SpyInner {
    next_id: AtomicU64,
    opened: AtomicUsize,
    closed: AtomicUsize,
    closed_ids: Mutex<Vec<u64>>,
}

impl SpySessionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> usize {
        self.inner.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.inner.closed.load(Ordering::SeqCst)
    }

    pub fn closed_ids(&self) -> Vec<u64> {
        self.inner.closed_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionFactory for SpySessionFactory {
    type Session = SpySession;

    fn backend_name(&self) -> &'static str {
        "spy"
    }

    async fn open(&self) -> SessionResult<SpySession> {
        if self.fail_open {
            return Err(SessionError::Unavailable("spy configured to fail".into()));
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.opened.fetch_add(1, Ordering::SeqCst);
        Ok(SpySession { id, queries: 0 })
    }

    fn close(&self, session: SpySession) {
        self.inner.closed.fetch_add(1, Ordering::SeqCst);
        self.inner.closed_ids.lock().unwrap().push(session.id);
    }
}
