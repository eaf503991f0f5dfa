use std::borrow::Cow;

use http::Method;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use time::OffsetDateTime;

use crate::credentials::SecretsProvider;
use crate::header::authorization_header;
use crate::signature::{sign, ParamList};
use crate::{
    OAUTH_CALLBACK_KEY, OAUTH_CONSUMER_KEY, OAUTH_NONCE_KEY, OAUTH_SIGNATURE_METHOD_KEY,
    OAUTH_TIMESTAMP_KEY, OAUTH_TOKEN_KEY, OAUTH_VERIFIER_KEY, OAUTH_VERSION_KEY,
};

pub(crate) const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub(crate) const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Per-call OAuth parameters merged into the signed set.
///
/// `nonce` and `timestamp` are normally generated when the header is built;
/// fixing them exists to reproduce known signatures in tests.
#[derive(Debug, Clone, Default)]
pub struct OAuthParameters<'a> {
    callback: Option<Cow<'a, str>>,
    nonce: Option<Cow<'a, str>>,
    timestamp: Option<u64>,
    verifier: Option<Cow<'a, str>>,
}

impl<'a> OAuthParameters<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// set the oauth_callback value
    pub fn callback<T>(self, callback: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            callback: Some(callback.into()),
            ..self
        }
    }

    /// set the oauth_nonce value
    pub fn nonce<T>(self, nonce: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    /// set the oauth_timestamp value
    pub fn timestamp<T>(self, timestamp: T) -> Self
    where
        T: Into<u64>,
    {
        OAuthParameters {
            timestamp: Some(timestamp.into()),
            ..self
        }
    }

    /// set the oauth_verifier value
    pub fn verifier<T>(self, verifier: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            verifier: Some(verifier.into()),
            ..self
        }
    }
}

/// Binds credentials and per-call parameters, producing complete
/// `Authorization` header values.
#[derive(Debug, Clone)]
pub struct Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    secrets: &'a TSecretsProvider,
    parameters: OAuthParameters<'a>,
}

impl<'a, TSecretsProvider> Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    pub fn new(secrets: &'a TSecretsProvider, parameters: OAuthParameters<'a>) -> Self {
        Signer {
            secrets,
            parameters,
        }
    }

    /// Builds the signed parameter set for `method` on `base_url` plus any
    /// `extra` request parameters, signs it and returns the header value.
    ///
    /// The nonce and timestamp are fixed exactly once here, so the header
    /// carries the same pair the signature was computed over.
    pub fn authorization(&self, method: Method, base_url: &str, extra: &[(&str, &str)]) -> String {
        let (consumer_key, consumer_secret) = self.secrets.consumer_pair();
        let (token, token_secret) = self.secrets.token_option_pair();

        let nonce = match &self.parameters.nonce {
            Some(nonce) => nonce.to_string(),
            None => generate_nonce(),
        };
        let timestamp = self
            .parameters
            .timestamp
            .unwrap_or_else(unix_timestamp)
            .to_string();

        let mut params = ParamList::new();
        params.insert(OAUTH_CONSUMER_KEY.into(), consumer_key.into());
        params.insert(OAUTH_NONCE_KEY.into(), nonce.into());
        params.insert(OAUTH_SIGNATURE_METHOD_KEY.into(), SIGNATURE_METHOD.into());
        params.insert(OAUTH_TIMESTAMP_KEY.into(), timestamp.into());
        params.insert(OAUTH_VERSION_KEY.into(), OAUTH_VERSION.into());
        if let Some(callback) = &self.parameters.callback {
            params.insert(OAUTH_CALLBACK_KEY.into(), callback.clone());
        }
        if let Some(token) = token {
            params.insert(OAUTH_TOKEN_KEY.into(), token.into());
        }
        if let Some(verifier) = &self.parameters.verifier {
            params.insert(OAUTH_VERIFIER_KEY.into(), verifier.clone());
        }
        for &(key, value) in extra {
            params.insert(key.into(), value.into());
        }

        let signature = sign(&method, base_url, &params, consumer_secret, token_secret);
        authorization_header(&params, &signature)
    }
}

/// 32 alphanumeric characters from the thread RNG, unique per call even
/// when two requests fall into the same clock tick.
fn generate_nonce() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

fn unix_timestamp() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp() as u64
}
