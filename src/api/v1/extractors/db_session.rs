/*
 * Responsibility
 * - handler の引数として DbSession<F> を受け取れるようにする
 * - F は FromRef で AppState (テストでは任意の state) から取り出す
 * - 解放は DbSession の Drop に任せる (成功 / エラー / キャンセルいずれでも 1 回)
 */
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::db::{DbSession, SessionFactory};

impl<S, F> FromRequestParts<S> for DbSession<F>
where
    F: SessionFactory + FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let factory = F::from_ref(state);
        Ok(DbSession::open(&factory).await?)
    }
}
