use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::CurrentUser;

/// Handler で CurrentUser を受け取るための extractor
/// middleware が CurrentUser を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（ミドルウェア未設定のルート）
pub struct CurrentUserExtractor(pub CurrentUser);

impl<S> FromRequestParts<S> for CurrentUserExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(CurrentUserExtractor)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    async fn me(CurrentUserExtractor(user): CurrentUserExtractor) -> Json<CurrentUser> {
        Json(user)
    }

    #[tokio::test]
    async fn rejects_when_no_principal_was_attached() {
        let app = Router::new().route("/me", get(me));

        let response = app
            .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn hands_attached_principal_to_handler() {
        let app = Router::new().route("/me", get(me));

        let mut request = Request::builder().uri("/me").body(Body::empty()).unwrap();
        request.extensions_mut().insert(CurrentUser {
            username: "alice".to_string(),
            id: 42,
        });

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let user: CurrentUser = serde_json::from_slice(&body).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id, 42);
    }
}
