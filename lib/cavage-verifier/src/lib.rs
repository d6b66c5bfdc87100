//!
//! Verification of HTTP signatures following the draft-cavage scheme
//!
//! The verifier locates the signature metadata in either the `Authorization` or the `Signature` header,
//! rebuilds the signing string from the listed headers and checks the signature with the caller-provided key.
//!
//! Supported algorithms:
//!
//! - `rsa-sha256`
//! - `hmac-sha256`
//! - `ecdsa-sha256`
//!
//! Resolving the `keyId` to key material is up to the caller. So is enforcing the freshness of the `Date` header.
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod cavage;
pub mod crypto;
pub mod request;

mod error;
mod verifier;

pub use self::error::Error;
pub use self::request::RequestView;
pub use self::verifier::{verify, VerificationOutcome, Verifier};

type Result<T, E = Error> = std::result::Result<T, E>;
