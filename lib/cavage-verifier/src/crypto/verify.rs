use super::VerifyingKey;
use ring::hmac;

impl VerifyingKey {
    /// Check that the signature corresponds with the message
    ///
    /// HMAC tags are compared in constant time
    #[inline]
    #[must_use]
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        match self {
            Self::Ecdsa(key) | Self::Rsa(key) => key.verify(msg, signature).is_ok(),
            Self::Hmac(key) => hmac::verify(key, msg, signature).is_ok(),
        }
    }
}
