use crate::util::Kaomoji;
use cavage_verifier::cavage;

pub fn do_it(header: &str) -> miette::Result<()> {
    let params = header.strip_prefix("Signature ").unwrap_or(header);
    let parsed = match cavage::parse(params) {
        Ok(parsed) => parsed,
        Err(err) => return Err(miette::Error::new(err).with_source_code(params.to_owned())),
    };

    println!("✅ Header is valid! {}", Kaomoji::Pleased);
    println!("key id:    {}", parsed.key_id);
    println!("algorithm: {}", parsed.algorithm);
    println!("headers:   {}", parsed.headers.join(" "));
    println!("signature: {} bytes", parsed.signature.len());

    Ok(())
}
