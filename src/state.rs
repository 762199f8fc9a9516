/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: PgSessionFactory (リクエストごとにセッションを払い出す)
 *   - auth: AuthService (起動時に一度だけ構築、以降は不変)
 * - Clone 前提で持つ (内部は Arc/Pool で Clone cheap)
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::services::{auth::AuthService, db::PgSessionFactory};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgSessionFactory,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: PgSessionFactory, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }
}

// DbSession<PgSessionFactory> extractor 用
impl FromRef<AppState> for PgSessionFactory {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
