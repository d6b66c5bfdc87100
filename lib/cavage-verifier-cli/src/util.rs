use owo_colors::{OwoColorize, Stream};
use std::fmt::{self, Display};

/// Reaction printed next to a result
#[derive(Clone, Copy)]
pub enum Kaomoji {
    /// Printed to stdout next to a successful check
    Pleased,

    /// Printed through the error report on stderr next to a signature mismatch
    Suspicious,
}

impl Display for Kaomoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pleased => write!(
                f,
                "{}",
                "(^///^)".if_supports_color(Stream::Stdout, |text| text.green())
            ),
            Self::Suspicious => write!(
                f,
                "{}",
                "(¬_¬ )".if_supports_color(Stream::Stderr, |text| text.red())
            ),
        }
    }
}
