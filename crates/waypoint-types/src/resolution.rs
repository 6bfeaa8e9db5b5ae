use serde::{Deserialize, Serialize};

use crate::digest::ContentKey;

/// Outcome of resolving one request path against a deployment.
///
/// Each incoming request produces exactly one `Resolution`; the HTTP
/// boundary turns it into a 200, 307, or 404. `NotFound` is a normal
/// terminal state of the resolution machine, not an error — any
/// fallback handling (custom 404 pages and the like) is a separate stage
/// applied after this one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Serve the asset identified by `key` at `path` as-is.
    Serve { key: ContentKey, path: String },
    /// Redirect to the canonical URL for the matched asset.
    Redirect { location: String },
    /// No candidate path matched.
    NotFound,
}

impl Resolution {
    /// Returns `true` for the `NotFound` terminal state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The matched content key, if this resolution serves an asset.
    pub fn key(&self) -> Option<&ContentKey> {
        match self {
            Self::Serve { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_predicate() {
        assert!(Resolution::NotFound.is_not_found());
        let serve = Resolution::Serve {
            key: ContentKey::of(b"x"),
            path: "/x".into(),
        };
        assert!(!serve.is_not_found());
    }

    #[test]
    fn key_only_on_serve() {
        let key = ContentKey::of(b"body");
        let serve = Resolution::Serve { key, path: "/a".into() };
        assert_eq!(serve.key(), Some(&key));
        let redirect = Resolution::Redirect { location: "/a/".into() };
        assert_eq!(redirect.key(), None);
    }
}
