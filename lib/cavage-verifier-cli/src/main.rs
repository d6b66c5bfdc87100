#[macro_use]
extern crate tracing;

use self::args::{ToolArgs, ToolSubcommand};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod config;
mod parse_header;
mod request;
mod util;
mod verify;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = ToolArgs::parse();
    match args.subcommand {
        ToolSubcommand::ParseHeader(args) => parse_header::do_it(&args.header),
        ToolSubcommand::Verify(args) => verify::do_it(&args),
    }
}
