//! access token (JWT) 検証 → CurrentUser を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を受け取り、AuthService で署名 + claims を検証する
//! - 失敗理由 (ヘッダ欠落 / 署名不正 / claim 欠落) はログにだけ残し、クライアントには同じ 401 を返す

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::CurrentUser;
use crate::error::AppError;
use crate::middleware::bearer_auth::bearer_token;
use crate::services::auth::AuthService;

/// 認証が必要なルート群に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/users/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.auth.clone());
/// ```
pub fn apply<S>(router: Router<S>, auth: Arc<AuthService>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Router の state とは独立に、検証器だけを middleware の state として渡す
    router.layer(middleware::from_fn_with_state(auth, access_middleware))
}

async fn access_middleware(
    State(auth): State<Arc<AuthService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("missing or non-bearer authorization header");
        return Err(AppError::Unauthorized);
    };

    let verified = match auth.verify(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(
        username = %verified.username,
        user_id = verified.user_id,
        "access token verified"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser::from(verified));

    Ok(next.run(req).await)
}
