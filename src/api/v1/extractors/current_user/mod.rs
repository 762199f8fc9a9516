/*!
 * Current user extractor
 *
 * Responsibility:
 * - 認証済みリクエストの主体 (CurrentUser) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - CurrentUser
 * - CurrentUserExtractor
 */

mod core;
mod types;

pub use self::core::CurrentUserExtractor;
pub use types::CurrentUser;
