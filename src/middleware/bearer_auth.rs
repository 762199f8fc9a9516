/*
 * Responsibility
 * - Authorization ヘッダから Bearer トークンを取り出す
 * - scheme は大文字小文字を区別しない ("Bearer" / "bearer")
 * - 検証 (署名 / claims) はここでは行わない (services::auth の責務)
 */
use axum::http::{HeaderMap, header};

/// `Authorization: Bearer <token>` の `<token>` 部分を返す
///
/// ヘッダが無い / scheme が Bearer でない / トークンが空の場合は `None`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use rstest::rstest;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[rstest]
    #[case("Bearer abc.def.ghi", "abc.def.ghi")]
    #[case("bearer abc.def.ghi", "abc.def.ghi")]
    #[case("BEARER abc", "abc")]
    #[case("Bearer   padded  ", "padded")]
    fn extracts_token(#[case] value: &str, #[case] expected: &str) {
        let headers = headers(value);
        assert_eq!(bearer_token(&headers), Some(expected));
    }

    #[rstest]
    #[case::basic("Basic YWxpY2U6c2VjcmV0")]
    #[case::no_token("Bearer")]
    #[case::blank_token("Bearer    ")]
    #[case::no_scheme("abc.def.ghi")]
    fn rejects_other_shapes(#[case] value: &str) {
        let headers = headers(value);
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn missing_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
