use super::{SignatureParameters, DEFAULT_HEADERS};
use crate::{Error, Result};

/// Iterator over the values of every `name="value"` occurrence of a single parameter
///
/// The scan doesn't assume any separators. An occurrence counts if the name isn't preceded by a word character.
/// Occurrences without a closing quote are skipped.
struct Occurrences<'a> {
    /// Reference to the raw metadata
    input: &'a str,

    /// Parameter name to look for
    name: &'static str,

    /// Byte offset the next search starts at
    offset: usize,
}

impl<'a> Occurrences<'a> {
    fn new(input: &'a str, name: &'static str) -> Self {
        Self {
            input,
            name,
            offset: 0,
        }
    }

    fn starts_word(&self, start: usize) -> bool {
        self.input[..start]
            .chars()
            .next_back()
            .map_or(true, |prev| !(prev.is_alphanumeric() || prev == '_'))
    }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.offset + self.input.get(self.offset..)?.find(self.name)?;
            self.offset = start + self.name.len();

            if !self.starts_word(start) {
                continue;
            }

            let Some(value) = self.input[self.offset..].strip_prefix("=\"") else {
                continue;
            };
            let Some(end) = value.find('"') else {
                continue;
            };

            return Some(&value[..end]);
        }
    }
}

/// Value of the last occurrence of the parameter
fn last_value<'a>(input: &'a str, name: &'static str) -> Option<&'a str> {
    let mut occurrences = Occurrences::new(input, name);
    let first = occurrences.next()?;
    let (count, last) = occurrences.fold((1_usize, first), |(count, _), value| (count + 1, value));

    if count > 1 {
        trace!(parameter = name, count, "using last occurrence");
    }

    Some(last)
}

/// Parse the raw signature metadata into its parameters
///
/// Each parameter is found by scanning for its `name="value"` pattern anywhere in the input.
/// Unknown parameters are ignored. If a parameter occurs more than once, the last occurrence wins.
#[inline]
pub fn parse(input: &str) -> Result<SignatureParameters<'_>> {
    let key_id = last_value(input, "keyId").ok_or(Error::MalformedHeader("keyId"))?;
    let algorithm = last_value(input, "algorithm").ok_or(Error::MalformedHeader("algorithm"))?;
    let signature = last_value(input, "signature").ok_or(Error::MalformedHeader("signature"))?;

    let headers = match last_value(input, "headers") {
        Some(raw) => {
            let headers = raw.split_ascii_whitespace().collect::<Vec<_>>();
            if headers.is_empty() {
                return Err(Error::MalformedHeader("headers"));
            }
            headers
        }
        None => DEFAULT_HEADERS.to_vec(),
    };

    let signature = base64_simd::STANDARD.decode_to_vec(signature)?;

    Ok(SignatureParameters {
        key_id,
        algorithm,
        headers,
        signature,
    })
}

#[cfg(test)]
mod test {
    use super::parse;
    use crate::Error;
    use proptest::{prop_assert_eq, proptest};

    const HEADER: &str = r#"keyId="Test",algorithm="rsa-sha256",headers="(request-target) host date",signature="qdx+H7PHHDZgy4y/Ahn9Tny9V3GP6YgBPyUXMmoxWtLbHpUnXS2mg2+SbrQDMCJypxBLSPQR2aAjn7ndmw2iicw3HMbe8VfEdKFYRqzic+efkb3nndiv/x1xSHDJWeSWkx3ButlYSuBskLu6kd9Fswtemr3lgdDEmn04swr2Os0=""#;

    #[test]
    fn parse_header() {
        let params = parse(HEADER).unwrap();

        assert_eq!(params.key_id, "Test");
        assert_eq!(params.algorithm, "rsa-sha256");
        assert_eq!(params.headers, ["(request-target)", "host", "date"]);
        assert_eq!(params.signature.len(), 128);
    }

    #[test]
    fn order_and_separators_dont_matter() {
        let params =
            parse(r#"signature="c2ln" headers="host date";algorithm="hmac-sha256"   keyId="k1""#)
                .unwrap();

        assert_eq!(params.key_id, "k1");
        assert_eq!(params.algorithm, "hmac-sha256");
        assert_eq!(params.headers, ["host", "date"]);
        assert_eq!(params.signature, b"sig");
    }

    #[test]
    fn headers_default_to_date() {
        let params = parse(r#"keyId="Test",algorithm="rsa-sha256",signature="c2ln""#).unwrap();
        assert_eq!(params.headers, ["date"]);
    }

    #[test]
    fn headers_keep_their_case() {
        let params =
            parse(r#"keyId="Test",algorithm="rsa-sha256",headers="Host Date",signature="c2ln""#)
                .unwrap();
        assert_eq!(params.headers, ["Host", "Date"]);
    }

    #[test]
    fn headers_split_on_whitespace_runs() {
        let params =
            parse("keyId=\"Test\",algorithm=\"rsa-sha256\",headers=\" host  date\t\",signature=\"c2ln\"")
                .unwrap();
        assert_eq!(params.headers, ["host", "date"]);
    }

    #[test]
    fn empty_headers_rejected() {
        let result = parse(r#"keyId="Test",algorithm="rsa-sha256",headers="",signature="c2ln""#);
        assert!(matches!(result, Err(Error::MalformedHeader("headers"))));
    }

    #[test]
    fn missing_required_parameters() {
        let cases = [
            (r#"algorithm="rsa-sha256",signature="c2ln""#, "keyId"),
            (r#"keyId="Test",signature="c2ln""#, "algorithm"),
            (r#"keyId="Test",algorithm="rsa-sha256""#, "signature"),
        ];

        for (input, missing) in cases {
            match parse(input) {
                Err(Error::MalformedHeader(param)) => assert_eq!(param, missing),
                other => panic!("expected missing `{missing}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn unquoted_value_is_not_a_parameter() {
        let result = parse(r#"keyId=Test,algorithm="rsa-sha256",signature="c2ln""#);
        assert!(matches!(result, Err(Error::MalformedHeader("keyId"))));
    }

    #[test]
    fn unbalanced_quote_doesnt_hide_parameters() {
        let params =
            parse(r#"note="unterminated, keyId="Test",algorithm="hmac-sha256",signature="c2ln""#)
                .unwrap();

        assert_eq!(params.key_id, "Test");
        assert_eq!(params.algorithm, "hmac-sha256");
        assert_eq!(params.signature, b"sig");
    }

    #[test]
    fn name_must_start_a_word() {
        let result = parse(r#"xkeyId="Test",algorithm="rsa-sha256",signature="c2ln""#);
        assert!(matches!(result, Err(Error::MalformedHeader("keyId"))));

        let params =
            parse(r#"xkeyId="Other";keyId="Test",algorithm="rsa-sha256",signature="c2ln""#).unwrap();
        assert_eq!(params.key_id, "Test");
    }

    #[test]
    fn unterminated_value_is_skipped() {
        let params =
            parse(r#"keyId="Test",algorithm="rsa-sha256",signature="c2ln",keyId="dangling"#).unwrap();
        assert_eq!(params.key_id, "Test");
    }

    #[test]
    fn invalid_base64() {
        let result = parse(r#"keyId="Test",algorithm="rsa-sha256",signature="not base64!""#);
        assert!(matches!(result, Err(Error::InvalidBase64(..))));
    }

    #[test]
    fn unknown_parameters_ignored() {
        let params = parse(
            r#"keyId="Test",algorithm="rsa-sha256",created="1402170695",signature="c2ln""#,
        )
        .unwrap();
        assert_eq!(params.key_id, "Test");
    }

    proptest! {
        #[test]
        fn last_occurrence_wins(first in "[A-Za-z0-9:/._-]{1,32}", last in "[A-Za-z0-9:/._-]{1,32}") {
            let input = format!(r#"keyId="{first}",algorithm="hmac-sha256",signature="c2ln",keyId="{last}""#);
            let params = parse(&input).unwrap();

            prop_assert_eq!(params.key_id, last.as_str());
        }

        #[test]
        fn trailing_duplicate_is_idempotent(key_id in "[A-Za-z0-9]{1,32}") {
            let input = format!(r#"keyId="{key_id}",algorithm="hmac-sha256",signature="c2ln""#);
            let duplicated = format!(r#"{input},signature="c2ln""#);

            prop_assert_eq!(parse(&input).unwrap(), parse(&duplicated).unwrap());
        }
    }
}
