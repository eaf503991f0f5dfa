use http::Method;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;

use crate::credentials::{Credentials, SecretsProvider};
use crate::encode::percent_encode;
use crate::error::{Error, Result};
use crate::signer::{OAuthParameters, Signer};
use crate::token_reader::{TokenReader, TokenResponse};

/// Provider URLs for the three signed operations plus the browser
/// authorization page. Defaults to the fixed Twitter endpoints; override to
/// point the client at a stand-in server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub request_token: String,
    pub access_token: String,
    pub authenticate: String,
    pub status_update: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            request_token: "https://api.twitter.com/oauth/request_token".into(),
            access_token: "https://api.twitter.com/oauth/access_token".into(),
            authenticate: "https://api.twitter.com/oauth/authenticate".into(),
            status_update: "https://api.twitter.com/1.1/statuses/update.json".into(),
        }
    }
}

/// Asynchronous Twitter client.
///
/// One type serves both roles: consumer-only credentials
/// (`Credentials<()>`) unlock the token-exchange calls, token-carrying
/// credentials (`Credentials<String>`) unlock status updates. All
/// operations are one-shot; no state is retained between calls beyond the
/// immutable credentials.
#[derive(Debug, Clone)]
pub struct Client<T = ()> {
    http: HttpClient,
    credentials: Credentials<T>,
    endpoints: Endpoints,
}

impl<T> Client<T>
where
    Credentials<T>: SecretsProvider,
{
    pub fn new(credentials: Credentials<T>) -> Self {
        Client::with_endpoints(credentials, Endpoints::default())
    }

    pub fn with_endpoints(credentials: Credentials<T>, endpoints: Endpoints) -> Self {
        Client {
            http: HttpClient::new(),
            credentials,
            endpoints,
        }
    }
}

impl Client<()> {
    /// First handshake step. On success the result carries the redirect URL
    /// the end user must open to authorize the app.
    pub async fn request_token(&self, callback_url: &str) -> Result<TokenResponse> {
        let header = Signer::new(
            &self.credentials,
            OAuthParameters::new().callback(callback_url),
        )
        .authorization(Method::POST, &self.endpoints.request_token, &[]);
        debug!("requesting token, callback {}", callback_url);
        let response =
            signed_empty_post(self.http.post(self.endpoints.request_token.as_str()), header)
                .send()
                .await?;
        response.parse_oauth_token(&self.endpoints.authenticate).await
    }

    /// Final handshake step, exchanging the authorized request token and
    /// verifier for an access token.
    pub async fn access_token(
        &self,
        callback_url: &str,
        token: &str,
        verifier: &str,
    ) -> Result<TokenResponse> {
        let credentials = exchange_credentials(&self.credentials, token);
        let header = Signer::new(
            &credentials,
            OAuthParameters::new().callback(callback_url).verifier(verifier),
        )
        .authorization(Method::POST, &self.endpoints.access_token, &[]);
        debug!("exchanging request token for access token");
        let response =
            signed_empty_post(self.http.post(self.endpoints.access_token.as_str()), header)
                .send()
                .await?;
        response.parse_oauth_token(&self.endpoints.authenticate).await
    }
}

impl Client<String> {
    /// Publishes `message` as a status update and returns the raw response
    /// body.
    pub async fn post_update(&self, message: &str) -> Result<String> {
        let header = Signer::new(&self.credentials, OAuthParameters::new()).authorization(
            Method::POST,
            &self.endpoints.status_update,
            &[("status", message)],
        );
        let url = status_update_url(&self.endpoints.status_update, message);
        debug!("posting status update ({} bytes)", message.len());
        let response = signed_empty_post(self.http.post(url.as_str()), header)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        Ok(response.text().await?)
    }
}

/// `<status-update-endpoint>?status=<percent-encoded message>`. The message
/// is signed as a parameter, so the URL must carry the identical encoding.
pub(crate) fn status_update_url(endpoint: &str, message: &str) -> String {
    format!("{}?status={}", endpoint, percent_encode(message))
}

/// Credentials used to sign the access-token exchange: the request token
/// value stands in for the not-yet-issued token secret.
pub(crate) fn exchange_credentials(
    consumer: &impl SecretsProvider,
    token: &str,
) -> Credentials<String> {
    let (consumer_key, consumer_secret) = consumer.consumer_pair();
    Credentials::new(consumer_key, consumer_secret).token(token, token)
}

/// Empty-body POST carrying the Authorization header; the provider expects
/// JSON content negotiation headers even on bodyless requests.
fn signed_empty_post(builder: reqwest::RequestBuilder, authorization: String) -> reqwest::RequestBuilder {
    builder
        .header(AUTHORIZATION, authorization)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .body("")
}
