//!
//! Utilities for handling signature strings
//!

use crate::request::RequestView;
use itertools::Itertools;
use std::fmt::Write;

/// Pseudo-header standing in for the request line
pub const REQUEST_TARGET: &str = "(request-target)";

/// Construct the signature string from the list of signed headers and an HTTP request
///
/// Header names are used exactly as they appear in the list.
/// A header missing from the request contributes an empty value instead of failing.
#[inline]
pub fn construct<R>(request: &R, headers: &[&str]) -> String
where
    R: RequestView + ?Sized,
{
    let mut signature_string = String::new();
    for &name in headers {
        if name == REQUEST_TARGET {
            let _ = writeln!(
                signature_string,
                "{name}: {} {}?{}",
                request.method().to_lowercase(),
                request.path(),
                request.query(),
            );
        } else {
            let value = request.header(name).map(str::trim).join(", ");
            if value.is_empty() {
                debug!(header = name, "signed header missing from request");
            }

            let _ = writeln!(signature_string, "{name}: {value}");
        }
    }

    // Remove the last new-line
    signature_string.pop();

    signature_string
}
