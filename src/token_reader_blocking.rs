use reqwest::blocking::Response;

use crate::error::{Error, Result};
use crate::token_reader::{read_oauth_token, TokenResponse};

/// Add token-response parsing to `reqwest::blocking::Response`.
// this trait is sealed
pub trait TokenReaderBlocking: private::Sealed {
    fn parse_oauth_token(self, authenticate_url: &str) -> Result<TokenResponse>;
}

impl TokenReaderBlocking for Response {
    fn parse_oauth_token(self, authenticate_url: &str) -> Result<TokenResponse> {
        let status = self.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        let text = self.text()?;
        Ok(read_oauth_token(&text, authenticate_url)?)
    }
}

mod private {
    use reqwest::blocking::Response;

    pub trait Sealed {}
    impl Sealed for Response {}
}
