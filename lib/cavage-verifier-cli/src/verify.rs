use crate::{
    args::VerifyArgs,
    config::Configuration,
    request,
    util::Kaomoji,
};
use cavage_verifier::VerificationOutcome;
use miette::{Context, IntoDiagnostic};
use std::fs;

pub fn do_it(args: &VerifyArgs) -> miette::Result<()> {
    let config = match args.config {
        Some(ref path) => Configuration::load(path)?,
        None => Configuration::default(),
    };

    let raw_request = fs::read_to_string(&args.request)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.request.display()))?;
    let key = fs::read(&args.key)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.key.display()))?;

    let request = request::parse(&raw_request)?;
    debug!(?request, "parsed request");

    match config.verifier.verify(&request, &key) {
        VerificationOutcome::Verified(..) => {
            println!("✅ Signature is valid! {}", Kaomoji::Pleased);
            Ok(())
        }
        VerificationOutcome::Forbidden => {
            miette::bail!("Signature doesn't match the request {}", Kaomoji::Suspicious)
        }
        VerificationOutcome::Error(err) => Err(miette::Error::new(err)),
    }
}
