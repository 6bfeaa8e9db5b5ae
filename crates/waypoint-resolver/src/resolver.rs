use std::sync::Arc;

use waypoint_types::{ContentKey, HtmlHandling, Resolution};

use crate::candidates::{build_candidates, canonical_path};
use crate::error::OracleResult;
use crate::oracle::ExistenceOracle;

/// A matched candidate: the literal path that hit and its content key.
struct Match {
    path: String,
    key: ContentKey,
}

/// Resolves request paths to serve / redirect / not-found decisions.
///
/// Holds no per-request state: one resolver can run arbitrarily many
/// concurrent resolutions against its manifest snapshot. Probes are
/// issued strictly in candidate order and stop at the first hit, so the
/// oracle never sees a probe the decision does not need.
pub struct PathResolver {
    oracle: Arc<dyn ExistenceOracle>,
    mode: HtmlHandling,
}

impl PathResolver {
    pub fn new(oracle: Arc<dyn ExistenceOracle>, mode: HtmlHandling) -> Self {
        Self { oracle, mode }
    }

    /// The HTML-handling mode this resolver applies.
    pub fn mode(&self) -> HtmlHandling {
        self.mode
    }

    /// Resolve a decoded request pathname (query and fragment already
    /// stripped by the caller; always begins with `/`).
    ///
    /// Exhausting the candidate list is the normal `NotFound` terminal
    /// state. Oracle faults are propagated unmodified — no retries, no
    /// masking.
    pub async fn resolve(&self, request_path: &str) -> OracleResult<Resolution> {
        let Some(matched) = self.first_match(request_path).await? else {
            return Ok(Resolution::NotFound);
        };

        let canonical = canonical_path(self.mode, &matched.path);
        if canonical == request_path {
            return Ok(Resolution::Serve {
                key: matched.key,
                path: canonical,
            });
        }

        // Redirect safety: the canonical URL must resolve back to the
        // same asset, or following the redirect would land on different
        // (or no) content. An exact literal hit is served in place when
        // its canonical form is unsafe; a rewritten hit is simply not
        // reachable through this request path.
        match self.first_match(&canonical).await? {
            Some(target) if target.key == matched.key => {
                tracing::debug!(from = request_path, to = %canonical, "redirecting to canonical path");
                Ok(Resolution::Redirect { location: canonical })
            }
            _ if matched.path == request_path => Ok(Resolution::Serve {
                key: matched.key,
                path: matched.path,
            }),
            _ => Ok(Resolution::NotFound),
        }
    }

    /// Probe candidates in order; first hit wins.
    async fn first_match(&self, path: &str) -> OracleResult<Option<Match>> {
        for candidate in build_candidates(self.mode, path) {
            if let Some(key) = self.oracle.exists(&candidate).await? {
                return Ok(Some(Match { path: candidate, key }));
            }
        }
        Ok(None)
    }
}
