use crate::{
    cavage::{self, signature_string},
    crypto::{Algorithm, VerifyingKey},
    request::RequestView,
    Error, Result,
};
use typed_builder::TypedBuilder;

/// Result of a verification attempt
#[derive(Debug)]
#[must_use]
pub enum VerificationOutcome<R> {
    /// The signature is valid. Carries the untouched request.
    Verified(R),

    /// The signature is well-formed but doesn't match
    Forbidden,

    /// The signature couldn't be checked
    Error(Error),
}

impl<R> VerificationOutcome<R> {
    /// Whether the signature was valid
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(..))
    }

    /// Get the request back, if the signature was valid
    pub fn into_verified(self) -> Option<R> {
        match self {
            Self::Verified(request) => Some(request),
            Self::Forbidden | Self::Error(..) => None,
        }
    }
}

/// HTTP signature verifier
#[derive(Clone, Debug, TypedBuilder)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Verifier {
    /// Accept RSA keys with a modulus of at least 1024 bits instead of 2048 bits
    ///
    /// The published draft-cavage test key is a 1024-bit key
    #[builder(default = true)]
    allow_legacy_rsa: bool,

    /// Fall back to the `Signature` header if the `Authorization` header doesn't carry a signature
    #[builder(default = true)]
    accept_signature_header: bool,
}

impl Verifier {
    /// Whether RSA keys with a 1024-bit modulus are accepted
    #[must_use]
    pub fn allow_legacy_rsa(&self) -> bool {
        self.allow_legacy_rsa
    }

    /// Whether the `Signature` header is consulted
    #[must_use]
    pub fn accept_signature_header(&self) -> bool {
        self.accept_signature_header
    }

    /// Verify the HTTP signature of the request
    ///
    /// `key_material` is the key the caller resolved from the signature's `keyId`.
    /// It is the shared secret for HMAC, and a PEM or DER encoded public key for RSA and ECDSA.
    #[instrument(skip_all)]
    pub fn verify<R>(&self, request: R, key_material: &[u8]) -> VerificationOutcome<R>
    where
        R: RequestView,
    {
        match self.check(&request, key_material) {
            Ok(true) => VerificationOutcome::Verified(request),
            Ok(false) => {
                debug!("signature mismatch");
                VerificationOutcome::Forbidden
            }
            Err(error) => {
                debug!(%error, "couldn't check signature");
                VerificationOutcome::Error(error)
            }
        }
    }

    fn check<R>(&self, request: &R, key_material: &[u8]) -> Result<bool>
    where
        R: RequestView,
    {
        if key_material.is_empty() {
            return Err(Error::EmptyKeyMaterial);
        }

        let raw_params = cavage::locate(request, self.accept_signature_header)?;
        let params = cavage::parse(raw_params)?;
        debug!(key_id = params.key_id, algorithm = params.algorithm);

        let signature_string = signature_string::construct(request, &params.headers);
        trace!(%signature_string);

        let algorithm = Algorithm::from_token(params.algorithm)?;
        let key = VerifyingKey::load(algorithm, key_material, self.allow_legacy_rsa)?;

        Ok(key.verify(signature_string.as_bytes(), &params.signature))
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Verify the HTTP signature of the request using the default [`Verifier`]
#[inline]
pub fn verify<R>(request: R, key_material: &[u8]) -> VerificationOutcome<R>
where
    R: RequestView,
{
    Verifier::default().verify(request, key_material)
}
