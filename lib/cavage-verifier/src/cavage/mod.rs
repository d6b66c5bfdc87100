//!
//! Handling of draft-cavage signature metadata
//!

mod locate;
mod parse;

pub mod signature_string;

pub use self::locate::locate;
pub use self::parse::parse;

/// Header list used when the metadata doesn't carry a `headers` parameter
pub const DEFAULT_HEADERS: &[&str] = &["date"];

/// Parsed signature metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParameters<'a> {
    /// Opaque identifier of the key the signature was created with
    pub key_id: &'a str,

    /// Algorithm token, exactly as transmitted
    pub algorithm: &'a str,

    /// Ordered, non-empty list of the signed header names
    pub headers: Vec<&'a str>,

    /// Decoded signature bytes
    pub signature: Vec<u8>,
}
