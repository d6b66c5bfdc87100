use strum::{AsRefStr, Display, EnumString};

/// Signature algorithms understood by the verifier
///
/// Tokens are matched exactly (case-sensitive, SHA-256 only)
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 over SHA-256
    #[strum(serialize = "rsa-sha256")]
    RsaSha256,

    /// HMAC-SHA256 over a shared secret
    #[strum(serialize = "hmac-sha256")]
    HmacSha256,

    /// ECDSA over SHA-256, curve determined by the key
    #[strum(serialize = "ecdsa-sha256")]
    EcdsaSha256,
}

impl Algorithm {
    /// Map a transmitted algorithm token to its algorithm
    #[inline]
    pub fn from_token(token: &str) -> crate::Result<Self> {
        token
            .parse()
            .map_err(|_| crate::Error::UnsupportedAlgorithm(token.to_owned()))
    }
}
