use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::state::AppState;

/// Basic-auth gate in front of every route.
///
/// Parses the `Authorization: Basic` header and delegates the decision to
/// the injected credential verifier; the policy itself lives outside this
/// layer.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic)
        .is_some_and(|(user, pass)| state.verifier.verify(&user, &pass));

    if authorized {
        next.run(request).await
    } else {
        unauthorized()
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"tickerboard\"")],
        "unauthorized",
    )
        .into_response()
}

/// Decode `Basic base64(user:pass)` into its parts.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, pass) = text.split_once(':')?;
    Some((user.to_owned(), pass.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_header() {
        // "alice:wonder"
        let parsed = decode_basic("Basic YWxpY2U6d29uZGVy").expect("must decode");
        assert_eq!(parsed, (String::from("alice"), String::from("wonder")));
    }

    #[test]
    fn keeps_colons_inside_the_password() {
        // "alice:won:der"
        let parsed = decode_basic("Basic YWxpY2U6d29uOmRlcg==").expect("must decode");
        assert_eq!(parsed, (String::from("alice"), String::from("won:der")));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(decode_basic("Bearer token").is_none());
        assert!(decode_basic("Basic !!!not-base64!!!").is_none());
        assert!(decode_basic("Basic bm8tc2VwYXJhdG9y").is_none()); // "no-separator"
    }
}
