use http::Request;
use miette::{miette, IntoDiagnostic};

/// Parse a raw HTTP/1.1 request head into a request without a body
///
/// Parsing stops at the first empty line. Anything after it is ignored.
pub fn parse(raw: &str) -> miette::Result<Request<()>> {
    let mut lines = raw.lines();
    let request_line = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| miette!("Request is missing its request line"))?;

    let mut parts = request_line.split_ascii_whitespace();
    let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
        return Err(miette!("Malformed request line: {request_line:?}"));
    };

    let mut builder = Request::builder().method(method).uri(target);
    for line in lines.take_while(|line| !line.trim().is_empty()) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| miette!("Malformed header line: {line:?}"))?;

        builder = builder.header(name.trim(), value.trim());
    }

    builder.body(()).into_diagnostic()
}
