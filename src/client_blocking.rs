use http::Method;
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::client::{exchange_credentials, status_update_url, Endpoints};
use crate::credentials::{Credentials, SecretsProvider};
use crate::error::{Error, Result};
use crate::signer::{OAuthParameters, Signer};
use crate::token_reader::TokenResponse;
use crate::token_reader_blocking::TokenReaderBlocking;

/// Blocking counterpart of [`Client`](crate::Client). Signing is shared with
/// the async path; only the transport differs, occupying the calling thread
/// for the full round trip.
#[derive(Debug, Clone)]
pub struct BlockingClient<T = ()> {
    http: HttpClient,
    credentials: Credentials<T>,
    endpoints: Endpoints,
}

impl<T> BlockingClient<T>
where
    Credentials<T>: SecretsProvider,
{
    pub fn new(credentials: Credentials<T>) -> Self {
        BlockingClient::with_endpoints(credentials, Endpoints::default())
    }

    pub fn with_endpoints(credentials: Credentials<T>, endpoints: Endpoints) -> Self {
        BlockingClient {
            http: HttpClient::new(),
            credentials,
            endpoints,
        }
    }
}

impl BlockingClient<()> {
    /// First handshake step; see [`Client::request_token`](crate::Client::request_token).
    pub fn request_token(&self, callback_url: &str) -> Result<TokenResponse> {
        let header = Signer::new(
            &self.credentials,
            OAuthParameters::new().callback(callback_url),
        )
        .authorization(Method::POST, &self.endpoints.request_token, &[]);
        debug!("requesting token, callback {}", callback_url);
        let response =
            signed_empty_post(self.http.post(self.endpoints.request_token.as_str()), header)
                .send()?;
        response.parse_oauth_token(&self.endpoints.authenticate)
    }

    /// Final handshake step; see [`Client::access_token`](crate::Client::access_token).
    pub fn access_token(
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
                .send()?;
        response.parse_oauth_token(&self.endpoints.authenticate)
    }
}

impl BlockingClient<String> {
    /// Publishes `message` as a status update and returns the raw response
    /// body.
    pub fn post_update(&self, message: &str) -> Result<String> {
        let header = Signer::new(&self.credentials, OAuthParameters::new()).authorization(
            Method::POST,
            &self.endpoints.status_update,
            &[("status", message)],
        );
        let url = status_update_url(&self.endpoints.status_update, message);
        debug!("posting status update ({} bytes)", message.len());
        let response = signed_empty_post(self.http.post(url.as_str()), header).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        Ok(response.text()?)
    }
}

/// Blocking counterpart of the async helper: empty-body POST with the
/// Authorization header and JSON content negotiation headers.
fn signed_empty_post(
    builder: reqwest::blocking::RequestBuilder,
    authorization: String,
) -> reqwest::blocking::RequestBuilder {
    builder
        .header(AUTHORIZATION, authorization)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .body("")
}
