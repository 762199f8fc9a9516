/*
 * Responsibility
 * - GET /users/me: 認証済み主体をそのまま返す
 */
use axum::Json;

use crate::api::v1::extractors::{CurrentUser, CurrentUserExtractor};

pub async fn me(CurrentUserExtractor(user): CurrentUserExtractor) -> Json<CurrentUser> {
    tracing::debug!(user_id = user.id, "resolved current user");
    Json(user)
}
