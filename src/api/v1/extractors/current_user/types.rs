/*
 * Responsibility
 * - Handler から見える「認証済み主体」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - 永続化しない (1 リクエストの間だけ生きる値)
 */
use serde::{Deserialize, Serialize};

use crate::services::auth::VerifiedAccessToken;

/// 認証済みのリクエストに付与される主体
///
/// - `username` はトークンの `sub`
/// - `id` はトークンの `id` (数値のユーザーID)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub id: i64,
}

impl From<VerifiedAccessToken> for CurrentUser {
    fn from(token: VerifiedAccessToken) -> Self {
        Self {
            username: token.username,
            id: token.user_id,
        }
    }
}
