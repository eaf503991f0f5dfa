/// Consumer key/secret, optionally extended with a token pair.
///
/// Built once at startup and borrowed by whichever component performs a
/// signed call; nothing here mutates after construction. The type parameter
/// records whether a token pair is attached: `Credentials<()>` can drive the
/// token-exchange handshake, `Credentials<String>` can sign user-scoped
/// calls.
#[derive(Debug, Clone)]
pub struct Credentials<T = ()> {
    consumer_key: String,
    consumer_secret: String,
    token: T,
    token_secret: T,
}

impl Credentials<()> {
    pub fn new<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: (),
            token_secret: (),
        }
    }

    /// Attaches a token pair issued by the provider.
    pub fn token<TKey, TSecret>(self, token: TKey, token_secret: TSecret) -> Credentials<String>
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        Credentials {
            consumer_key: self.consumer_key,
            consumer_secret: self.consumer_secret,
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }
}

/// Read access to signing secrets, independent of whether a token pair is
/// present.
pub trait SecretsProvider {
    fn consumer_pair(&self) -> (&str, &str);

    fn token_pair_option(&self) -> Option<(&str, &str)>;

    fn token_option_pair(&self) -> (Option<&str>, Option<&str>) {
        self.token_pair_option()
            .map(|(token, secret)| (Some(token), Some(secret)))
            .unwrap_or((None, None))
    }
}

impl SecretsProvider for Credentials<()> {
    fn consumer_pair(&self) -> (&str, &str) {
        (&self.consumer_key, &self.consumer_secret)
    }

    fn token_pair_option(&self) -> Option<(&str, &str)> {
        None
    }
}

impl SecretsProvider for Credentials<String> {
    fn consumer_pair(&self) -> (&str, &str) {
        (&self.consumer_key, &self.consumer_secret)
    }

    fn token_pair_option(&self) -> Option<(&str, &str)> {
        Some((&self.token, &self.token_secret))
    }
}
