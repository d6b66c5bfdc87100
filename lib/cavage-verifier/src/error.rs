use miette::Diagnostic;
use thiserror::Error;

/// Reasons a signature couldn't even be checked
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// The caller passed empty key material
    #[error("Key material is empty")]
    #[diagnostic(code(cavage::empty_key_material))]
    EmptyKeyMaterial,

    /// Signature value isn't valid standard Base64
    #[error("Signature is not valid Base64")]
    #[diagnostic(code(cavage::invalid_base64))]
    InvalidBase64(#[from] base64_simd::Error),

    /// Key material couldn't be turned into a usable key
    #[error("Failed to load key")]
    #[diagnostic(code(cavage::key_load))]
    KeyLoad(#[from] crate::crypto::parse::Error),

    /// A required parameter is absent from the signature metadata
    #[error("Missing required parameter `{0}`")]
    #[diagnostic(
        code(cavage::malformed_header),
        help("the metadata needs `keyId`, `algorithm` and `signature` entries in the form name=\"value\"")
    )]
    MalformedHeader(&'static str),

    /// Neither an `Authorization: Signature` nor a `Signature` header is present
    #[error("Signature/Authorization header missing")]
    #[diagnostic(code(cavage::missing_signature_header))]
    MissingSignatureHeader,

    /// Algorithm token isn't one of the supported ones
    #[error("Unsupported algorithm `{0}`")]
    #[diagnostic(
        code(cavage::unsupported_algorithm),
        help("supported algorithms are `rsa-sha256`, `hmac-sha256` and `ecdsa-sha256`")
    )]
    UnsupportedAlgorithm(String),
}

