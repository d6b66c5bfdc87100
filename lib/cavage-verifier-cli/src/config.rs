use cavage_verifier::Verifier;
use miette::{Context, IntoDiagnostic};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    pub verifier: Verifier,
}

impl Configuration {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let content = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).into_diagnostic()
    }
}
