use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseHeaderArgs {
    /// The header to parse, with or without the `Signature ` prefix
    pub header: String,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// File containing the raw request head (request line and headers)
    #[arg(long, short)]
    pub request: PathBuf,

    /// File containing the key material (PEM/DER public key or HMAC secret)
    #[arg(long, short)]
    pub key: PathBuf,

    /// TOML configuration file with a `[verifier]` table
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ToolSubcommand {
    /// Parse the HTTP Signature header and report any format errors
    ParseHeader(ParseHeaderArgs),

    /// Verify the signature of a request stored on disk
    Verify(VerifyArgs),
}

#[derive(Parser)]
#[command(about, version)]
pub struct ToolArgs {
    #[clap(subcommand)]
    pub subcommand: ToolSubcommand,
}
