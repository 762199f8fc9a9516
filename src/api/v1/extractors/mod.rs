/*
 * Responsibility
 * - handler が受け取る request-scoped な値の extractor 群
 *   - CurrentUserExtractor: middleware が検証した主体
 *   - DbSession<F>: リクエスト単位の DB セッション
 */
pub mod current_user;
mod db_session;

pub use current_user::{CurrentUser, CurrentUserExtractor};
