//!
//! Parse cryptographic keys for use in the HTTP signature verification
//!

use super::Algorithm;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, RSA_ENCRYPTION, SECP_256_R_1, SECP_384_R_1};
use miette::Diagnostic;
use pkcs8::{
    der::{asn1::UintRef, Decode, DecodeValue, FixedTag, Header, Reader, Tag},
    Document, SubjectPublicKeyInfoRef,
};
use ring::{
    hmac,
    signature::{
        EcdsaVerificationAlgorithm, RsaParameters, UnparsedPublicKey, ECDSA_P256_SHA256_ASN1,
        ECDSA_P384_SHA256_ASN1, RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY,
        RSA_PKCS1_2048_8192_SHA256,
    },
};
use thiserror::Error;

const PEM_PREAMBLE: &[u8] = b"-----BEGIN";
const PEM_LABEL_SPKI: &str = "PUBLIC KEY";
const PEM_LABEL_PKCS1: &str = "RSA PUBLIC KEY";

const MAX_RSA_MODULUS_BITS: usize = 8192;

/// Key parsing error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Malformed DER structure
    #[error(transparent)]
    Der(#[from] pkcs8::der::Error),

    /// Key doesn't match the algorithm it is used with
    #[error("Key can't be used with `{0}`")]
    KeyTypeMismatch(Algorithm),

    /// Malformed key
    #[error("Malformed key")]
    MalformedKey,

    /// Malformed SubjectPublicKeyInfo structure
    #[error(transparent)]
    Spki(#[from] pkcs8::spki::Error),

    /// Unknown key type
    #[error("Unknown key type")]
    UnknownKeyType,

    /// Elliptic curve isn't supported
    #[error("Unsupported elliptic curve")]
    UnsupportedCurve,

    /// RSA modulus size outside of the accepted range
    #[error("Unsupported RSA key size ({0} bits)")]
    UnsupportedKeySize(usize),
}

/// Closed set of keys the verifier can check signatures with
pub enum VerifyingKey {
    /// ECDSA public key
    Ecdsa(UnparsedPublicKey<Vec<u8>>),

    /// HMAC shared secret
    Hmac(hmac::Key),

    /// RSA public key
    Rsa(UnparsedPublicKey<Vec<u8>>),
}

impl VerifyingKey {
    /// Load the key material for use with the given algorithm
    ///
    /// For HMAC the key material is the raw shared secret.
    /// For RSA and ECDSA it is a public key in one of these forms:
    ///
    /// - PEM `PUBLIC KEY` (SubjectPublicKeyInfo)
    /// - DER SubjectPublicKeyInfo
    /// - PEM `RSA PUBLIC KEY` or DER PKCS#1 (RSA only)
    ///
    /// `allow_legacy_rsa` lowers the minimum RSA modulus from 2048 to 1024 bits.
    #[inline]
    pub fn load(
        algorithm: Algorithm,
        key_material: &[u8],
        allow_legacy_rsa: bool,
    ) -> Result<Self, Error> {
        match algorithm {
            Algorithm::HmacSha256 => Ok(Self::Hmac(hmac::Key::new(
                hmac::HMAC_SHA256,
                key_material,
            ))),
            Algorithm::RsaSha256 => rsa_public_key(key_material, allow_legacy_rsa),
            Algorithm::EcdsaSha256 => ecdsa_public_key(key_material),
        }
    }
}

#[derive(Clone, Copy)]
enum Encoding {
    /// DER of unknown structure
    Der,

    /// PEM-wrapped PKCS#1 `RSAPublicKey`
    Pkcs1,

    /// PEM-wrapped SubjectPublicKeyInfo
    Spki,
}

fn decode(key_material: &[u8]) -> Result<(Encoding, Document), Error> {
    let trimmed = key_material.trim_ascii();
    if !trimmed.starts_with(PEM_PREAMBLE) {
        return Ok((Encoding::Der, Document::from_der(key_material)?));
    }

    let pem = std::str::from_utf8(trimmed).map_err(|_| Error::MalformedKey)?;
    let (label, document) = Document::from_pem(pem)?;
    let encoding = match label {
        PEM_LABEL_SPKI => Encoding::Spki,
        PEM_LABEL_PKCS1 => Encoding::Pkcs1,
        _ => return Err(Error::UnknownKeyType),
    };

    Ok((encoding, document))
}

/// `RSAPublicKey` structure from RFC 8017
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    _public_exponent: UintRef<'a>,
}

impl<'a> DecodeValue<'a> for RsaPublicKey<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> pkcs8::der::Result<Self> {
        Ok(Self {
            modulus: reader.decode()?,
            _public_exponent: reader.decode()?,
        })
    }
}

impl FixedTag for RsaPublicKey<'_> {
    const TAG: Tag = Tag::Sequence;
}

impl RsaPublicKey<'_> {
    fn modulus_bits(&self) -> usize {
        let bytes = self.modulus.as_bytes();
        let leading_zeros = bytes.first().map_or(0, |byte| byte.leading_zeros() as usize);

        (bytes.len() * 8).saturating_sub(leading_zeros)
    }
}

fn rsa_public_key(key_material: &[u8], allow_legacy_rsa: bool) -> Result<VerifyingKey, Error> {
    let (encoding, document) = decode(key_material)?;

    let raw_key = match encoding {
        Encoding::Pkcs1 => document.as_bytes().to_vec(),
        // Bare DER that isn't a SubjectPublicKeyInfo is treated as PKCS#1
        Encoding::Der if document.decode_msg::<SubjectPublicKeyInfoRef<'_>>().is_err() => {
            document.as_bytes().to_vec()
        }
        Encoding::Der | Encoding::Spki => rsa_spki_key(&document)?,
    };

    let modulus_bits = RsaPublicKey::from_der(&raw_key)?.modulus_bits();
    let (min_bits, verify_algo): (usize, &'static RsaParameters) = if allow_legacy_rsa {
        (1024, &RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY)
    } else {
        (2048, &RSA_PKCS1_2048_8192_SHA256)
    };

    if !(min_bits..=MAX_RSA_MODULUS_BITS).contains(&modulus_bits) {
        return Err(Error::UnsupportedKeySize(modulus_bits));
    }

    Ok(VerifyingKey::Rsa(UnparsedPublicKey::new(verify_algo, raw_key)))
}

fn ecdsa_public_key(key_material: &[u8]) -> Result<VerifyingKey, Error> {
    let (encoding, document) = decode(key_material)?;
    if matches!(encoding, Encoding::Pkcs1) {
        return Err(Error::KeyTypeMismatch(Algorithm::EcdsaSha256));
    }

    let spki: SubjectPublicKeyInfoRef<'_> = document.decode_msg()?;
    if spki.algorithm.oid != ID_EC_PUBLIC_KEY {
        return Err(Error::KeyTypeMismatch(Algorithm::EcdsaSha256));
    }

    let curve = spki.algorithm.parameters_oid()?;
    let (verify_algo, point_len): (&'static EcdsaVerificationAlgorithm, usize) =
        if curve == SECP_256_R_1 {
            (&ECDSA_P256_SHA256_ASN1, 65)
        } else if curve == SECP_384_R_1 {
            (&ECDSA_P384_SHA256_ASN1, 97)
        } else {
            return Err(Error::UnsupportedCurve);
        };

    let point = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::MalformedKey)?;

    // Only uncompressed points are supported
    if point.len() != point_len || point[0] != 0x04 {
        return Err(Error::MalformedKey);
    }

    Ok(VerifyingKey::Ecdsa(UnparsedPublicKey::new(
        verify_algo,
        point.to_vec(),
    )))
}

/// Extract the PKCS#1 key of a SubjectPublicKeyInfo, making sure it is an RSA key
fn rsa_spki_key(document: &Document) -> Result<Vec<u8>, Error> {
    let spki: SubjectPublicKeyInfoRef<'_> = document.decode_msg()?;
    if spki.algorithm.oid == ID_EC_PUBLIC_KEY {
        return Err(Error::KeyTypeMismatch(Algorithm::RsaSha256));
    } else if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(Error::UnknownKeyType);
    }

    let raw_bytes = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::MalformedKey)?
        .to_vec();

    Ok(raw_bytes)
}
