use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// HTML-handling policy for a deployment.
///
/// Selects which implicit extensions and index files are considered when
/// resolving a request path, and how trailing slashes are normalized in
/// the canonical URL. Immutable per-deployment configuration; the closed
/// set of variants is exhaustively matched by the resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HtmlHandling {
    /// Serve `/foo.html` at `/foo` and `/foo/index.html` at `/foo/`,
    /// preserving whichever form matches.
    #[default]
    AutoTrailingSlash,
    /// Canonical URLs never end in a trailing slash, except the root.
    DropTrailingSlash,
    /// Canonical URLs for HTML matches always end in a trailing slash.
    ForceTrailingSlash,
    /// No implicit resolution at all: exact literal matches only.
    None,
}

impl HtmlHandling {
    /// The configuration-file spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoTrailingSlash => "auto-trailing-slash",
            Self::DropTrailingSlash => "drop-trailing-slash",
            Self::ForceTrailingSlash => "force-trailing-slash",
            Self::None => "none",
        }
    }
}

impl fmt::Display for HtmlHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HtmlHandling {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto-trailing-slash" => Ok(Self::AutoTrailingSlash),
            "drop-trailing-slash" => Ok(Self::DropTrailingSlash),
            "force-trailing-slash" => Ok(Self::ForceTrailingSlash),
            "none" => Ok(Self::None),
            other => Err(TypeError::UnknownMode(other.to_string())),
        }
    }
}
