use crate::{request::RequestView, Error, Result};

const AUTHORIZATION: &str = "authorization";
const SIGNATURE: &str = "signature";
const SIGNATURE_SCHEME: &str = "Signature ";

/// Find the raw signature metadata of the request
///
/// An `Authorization` header using the `Signature` scheme takes precedence over a `Signature` header.
/// The `Signature` header is only consulted if `accept_signature_header` is set.
#[inline]
pub fn locate<R>(request: &R, accept_signature_header: bool) -> Result<&str>
where
    R: RequestView + ?Sized,
{
    if let Some(params) = request
        .header(AUTHORIZATION)
        .find_map(|value| value.strip_prefix(SIGNATURE_SCHEME))
    {
        return Ok(params);
    }

    if accept_signature_header {
        if let Some(params) = request.header(SIGNATURE).next() {
            return Ok(params);
        }
    }

    Err(Error::MissingSignatureHeader)
}
