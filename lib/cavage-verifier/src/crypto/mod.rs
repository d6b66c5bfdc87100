//!
//! Common cryptographic operations
//!

mod algorithm;
mod verify;

pub mod parse;

pub use self::algorithm::Algorithm;
pub use self::parse::VerifyingKey;
