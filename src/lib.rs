/*!
OAuth 1.0a client for the Twitter v1.1 API: three-legged token exchange and
signed status updates.

# Overview

Every request is authorized with an RFC 5849 `Authorization` header signed
with HMAC-SHA1. The whole dance happens in-process: strict RFC 3986
percent-encoding, signature base string construction, header assembly and
parsing of the `key=value&key=value` token-endpoint response format. An
async client and (behind the `blocking` feature, enabled by default) a
blocking one are provided; both run the exact same signing code.

# How to use

## Acquiring an access token

```no_run
use twitter_oauth1::{Client, Credentials};

# async fn run() -> twitter_oauth1::Result<()> {
let credentials = Credentials::new("[CONSUMER_KEY]", "[CONSUMER_SECRET]");
let client = Client::new(credentials);

// step 1: acquire the request token
let issued = client.request_token("https://example.com/callback").await?;

// step 2: the end user authorizes the app in a browser
println!("please access: {}", issued.redirect_url);

// step 3: trade the authorized token and verifier for an access token
let granted = client
    .access_token("https://example.com/callback", &issued.oauth_token, "[VERIFIER]")
    .await?;
println!("authorized as @{} ({})", granted.screen_name, granted.user_id);
# Ok(())
# }
```

## Posting a status update

```no_run
use twitter_oauth1::{Client, Credentials};

# async fn run() -> twitter_oauth1::Result<()> {
let credentials = Credentials::new("[CONSUMER_KEY]", "[CONSUMER_SECRET]")
    .token("[ACCESS_TOKEN]", "[TOKEN_SECRET]");
let client = Client::new(credentials);
let body = client.post_update("Hello, Twitter!").await?;
println!("{}", body);
# Ok(())
# }
```
*/
mod client;
#[cfg(feature = "blocking")]
mod client_blocking;
mod credentials;
mod encode;
mod error;
mod header;
mod signature;
mod signer;
mod token_reader;
#[cfg(feature = "blocking")]
mod token_reader_blocking;

// exposed to external program
pub use client::{Client, Endpoints};
#[cfg(feature = "blocking")]
pub use client_blocking::BlockingClient;
pub use credentials::{Credentials, SecretsProvider};
pub use encode::percent_encode;
pub use error::{Error, Result, TokenReaderError, TokenReaderResult};
pub use header::authorization_header;
pub use signature::{parameter_string, sign, signature_base_string, signing_key, ParamList};
pub use signer::{OAuthParameters, Signer};
pub use token_reader::{TokenReader, TokenResponse};
#[cfg(feature = "blocking")]
pub use token_reader_blocking::TokenReaderBlocking;

// exposed constant variables
/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_verifier`.
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";

// crate-private constant variables
pub(crate) const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub(crate) const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
pub(crate) const OAUTH_TOKEN_KEY: &str = "oauth_token";
