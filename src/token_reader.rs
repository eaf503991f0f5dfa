use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

use crate::error::{Error, Result, TokenReaderError, TokenReaderResult};

const OAUTH_TOKEN_KEY: &str = "oauth_token";

const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";

const SCREEN_NAME_KEY: &str = "screen_name";

const USER_ID_KEY: &str = "user_id";

/// Outcome of one token-exchange step.
///
/// `redirect_url` is populated only while the handshake is incomplete;
/// `screen_name` and `user_id` arrive only with the final access-token
/// response. Callers branch on `redirect_url` being non-empty to know
/// whether a browser authorization step is still pending.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResponse {
    /// OAuth Token
    pub oauth_token: String,
    /// OAuth Token Secret
    pub oauth_token_secret: String,
    /// Browser authorization URL, empty once the handshake is complete
    #[serde(skip)]
    pub redirect_url: String,
    /// Authorized user's screen name
    #[serde(default)]
    pub screen_name: String,
    /// Authorized user's numeric id
    #[serde(default)]
    pub user_id: String,
}

/// Add token-response parsing to `reqwest::Response`.
// this trait is sealed
#[async_trait(?Send)]
pub trait TokenReader: private::Sealed {
    async fn parse_oauth_token(self, authenticate_url: &str) -> Result<TokenResponse>;
}

#[async_trait(?Send)]
impl TokenReader for Response {
    async fn parse_oauth_token(self, authenticate_url: &str) -> Result<TokenResponse> {
        let status = self.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        let text = self.text().await?;
        Ok(read_oauth_token(&text, authenticate_url)?)
    }
}

/// Destructures the `key=value&key=value` token endpoint body.
///
/// A body that is empty or carries no `&` at all is rejected outright;
/// each segment splits on the first `=` only.
pub(crate) fn read_oauth_token(
    text: &str,
    authenticate_url: &str,
) -> TokenReaderResult<TokenResponse> {
    if text.is_empty() || !text.contains('&') {
        return Err(TokenReaderError::Malformed);
    }
    let mut values = text
        .split('&')
        .map(|segment| {
            let mut parts = segment.splitn(2, '=');
            (
                parts.next().unwrap_or_default(),
                parts.next().unwrap_or_default(),
            )
        })
        .collect::<HashMap<&str, &str>>();
    let oauth_token = values.remove(OAUTH_TOKEN_KEY);
    let oauth_token_secret = values.remove(OAUTH_TOKEN_SECRET_KEY);
    match (oauth_token, oauth_token_secret) {
        (Some(token), Some(secret)) => {
            let mut response = TokenResponse {
                oauth_token: token.to_string(),
                oauth_token_secret: secret.to_string(),
                ..Default::default()
            };
            match (values.remove(SCREEN_NAME_KEY), values.remove(USER_ID_KEY)) {
                // Final handshake
                (Some(screen_name), Some(user_id)) => {
                    response.screen_name = screen_name.to_string();
                    response.user_id = user_id.to_string();
                }
                _ => {
                    response.redirect_url = format!(
                        "{}?oauth_token={}",
                        authenticate_url, response.oauth_token
                    );
                }
            }
            Ok(response)
        }
        (_, _) => Err(TokenReaderError::MissingRequiredValues),
    }
}

mod private {
    use reqwest::Response;

    pub trait Sealed {}
    impl Sealed for Response {}
}

#[cfg(test)]
mod test {
    use super::*;

    const AUTHENTICATE: &str = "https://api.twitter.com/oauth/authenticate";

    #[test]
    fn request_token_step_yields_redirect() {
        let parsed =
            read_oauth_token("oauth_token=abc&oauth_token_secret=xyz", AUTHENTICATE).unwrap();
        assert_eq!(parsed.oauth_token, "abc");
        assert_eq!(parsed.oauth_token_secret, "xyz");
        assert_eq!(
            parsed.redirect_url,
            "https://api.twitter.com/oauth/authenticate?oauth_token=abc"
        );
        assert_eq!(parsed.screen_name, "");
        assert_eq!(parsed.user_id, "");
    }

    #[test]
    fn access_token_step_yields_user_identity() {
        let parsed = read_oauth_token(
            "oauth_token=abc&oauth_token_secret=xyz&screen_name=bob&user_id=42",
            AUTHENTICATE,
        )
        .unwrap();
        assert_eq!(parsed.oauth_token, "abc");
        assert_eq!(parsed.oauth_token_secret, "xyz");
        assert_eq!(parsed.screen_name, "bob");
        assert_eq!(parsed.user_id, "42");
        assert_eq!(parsed.redirect_url, "");
    }

    #[test]
    fn empty_body_is_malformed() {
        let parsed = read_oauth_token("", AUTHENTICATE);
        assert_eq!(parsed, Err(TokenReaderError::Malformed));
        assert_eq!(
            parsed.unwrap_err().to_string(),
            "Could not parse values."
        );
    }

    #[test]
    fn body_without_ampersand_is_malformed() {
        let parsed = read_oauth_token("oauth_token=abc", AUTHENTICATE);
        assert_eq!(parsed, Err(TokenReaderError::Malformed));
    }

    #[test]
    fn missing_token_secret_is_reported() {
        let parsed = read_oauth_token(
            "oauth_token=abc&oauth_callback_confirmed=true",
            AUTHENTICATE,
        );
        assert_eq!(parsed, Err(TokenReaderError::MissingRequiredValues));
        assert_eq!(
            parsed.unwrap_err().to_string(),
            "Could not find required values"
        );
    }

    #[test]
    fn missing_token_is_reported() {
        let parsed = read_oauth_token(
            "oauth_token_secret=xyz&oauth_callback_confirmed=true",
            AUTHENTICATE,
        );
        assert_eq!(parsed, Err(TokenReaderError::MissingRequiredValues));
    }

    #[test]
    fn value_splits_on_first_equals_only() {
        let parsed =
            read_oauth_token("oauth_token=a=b&oauth_token_secret=xyz", AUTHENTICATE).unwrap();
        assert_eq!(parsed.oauth_token, "a=b");
    }

    #[test]
    fn partial_identity_still_redirects() {
        // screen_name without user_id is not a final handshake
        let parsed = read_oauth_token(
            "oauth_token=abc&oauth_token_secret=xyz&screen_name=bob",
            AUTHENTICATE,
        )
        .unwrap();
        assert!(parsed.redirect_url.ends_with("?oauth_token=abc"));
        assert_eq!(parsed.screen_name, "");
    }

    #[tokio::test]
    async fn non_success_status_short_circuits_before_the_body() {
        // the body would parse fine; the status alone must fail the call
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(403)
                .body("oauth_token=abc&oauth_token_secret=xyz")
                .unwrap(),
        );
        let err = response.parse_oauth_token(AUTHENTICATE).await.unwrap_err();
        match err {
            Error::Status(status) => assert_eq!(status.to_string(), "403 Forbidden"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_response_parses_through_the_reader() {
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(200)
                .body("oauth_token=abc&oauth_token_secret=xyz")
                .unwrap(),
        );
        let parsed = response.parse_oauth_token(AUTHENTICATE).await.unwrap();
        assert_eq!(parsed.oauth_token, "abc");
        assert_eq!(
            parsed.redirect_url,
            "https://api.twitter.com/oauth/authenticate?oauth_token=abc"
        );
    }

    #[test]
    fn split_agrees_with_serde_urlencoded() {
        let body = "oauth_token=Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik\
                    &oauth_token_secret=Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM\
                    &oauth_callback_confirmed=true";
        let split = read_oauth_token(body, AUTHENTICATE).unwrap();
        let decoded: TokenResponse = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(split.oauth_token, decoded.oauth_token);
        assert_eq!(split.oauth_token_secret, decoded.oauth_token_secret);
    }
}
