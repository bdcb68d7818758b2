/// Extract the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` with the scheme in any ASCII case. Returns
/// `None` for other schemes, a missing token, or a token with inner
/// whitespace.
pub fn extract_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}
