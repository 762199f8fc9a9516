/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (Bearer 検証), cors, http (request id / trace / limit / timeout)
 */
pub mod auth;
pub mod bearer_auth;
pub mod cors;
pub mod http;
