//! Candidate construction and canonicalization, per HTML-handling mode.
//!
//! Both operations are driven by the *shape* of a path (root, implicit
//! index, explicit `.html`, trailing slash, plain) so that the per-mode
//! differences reduce to probe ordering and slash policy. Keeping the
//! mode dispatch closed in this module means adding or auditing a mode
//! touches nothing else.

use waypoint_types::HtmlHandling;

/// Suffix shape of a request or matched path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Root,
    IndexHtml,
    Index,
    Html,
    TrailingSlash,
    Plain,
}

fn shape_of(path: &str) -> Shape {
    if path == "/" {
        Shape::Root
    } else if path.ends_with("/index.html") {
        Shape::IndexHtml
    } else if path.ends_with("/index") {
        Shape::Index
    } else if path.ends_with(".html") {
        Shape::Html
    } else if path.ends_with('/') {
        Shape::TrailingSlash
    } else {
        Shape::Plain
    }
}

/// The `.html` sibling of the directory implied by `path` minus `suffix`.
///
/// `/guide/index` with suffix `/index` yields `/guide.html`. Degenerates
/// to `None` when the implied parent is the root: there is no `.html`
/// sibling of `/`.
fn sibling_html(path: &str, suffix: &str) -> Option<String> {
    let parent = path.strip_suffix(suffix)?;
    if parent.is_empty() {
        None
    } else {
        Some(format!("{parent}.html"))
    }
}

/// Ordered list of literal paths to probe for a request path.
///
/// The literal request path always comes first: an exact asset wins over
/// any implicit rewrite in every mode. The rest of the order encodes the
/// mode's preference between an `.html` sibling and a nested
/// `index.html`.
pub fn build_candidates(mode: HtmlHandling, path: &str) -> Vec<String> {
    let mut candidates = vec![path.to_string()];
    if mode == HtmlHandling::None {
        return candidates;
    }

    match shape_of(path) {
        Shape::Root => candidates.push("/index.html".to_string()),
        Shape::IndexHtml => {
            candidates.extend(sibling_html(path, "/index.html"));
        }
        Shape::Index => {
            let with_ext = format!("{path}.html");
            let sibling = sibling_html(path, "/index");
            if mode == HtmlHandling::DropTrailingSlash {
                candidates.extend(sibling);
                candidates.push(with_ext);
            } else {
                candidates.push(with_ext);
                candidates.extend(sibling);
            }
        }
        Shape::Html => {
            let base = path.strip_suffix(".html").expect("html shape");
            candidates.push(format!("{base}/index.html"));
        }
        Shape::TrailingSlash => {
            let nested_index = format!("{path}index.html");
            let sibling = sibling_html(path, "/");
            if mode == HtmlHandling::DropTrailingSlash {
                candidates.extend(sibling);
                candidates.push(nested_index);
            } else {
                candidates.push(nested_index);
                candidates.extend(sibling);
            }
        }
        Shape::Plain => {
            let with_ext = format!("{path}.html");
            let nested_index = format!("{path}/index.html");
            if mode == HtmlHandling::ForceTrailingSlash {
                candidates.push(nested_index);
                candidates.push(with_ext);
            } else {
                candidates.push(with_ext);
                candidates.push(nested_index);
            }
        }
    }
    candidates
}

/// The canonical URL for a matched literal path under a mode.
///
/// Canonicalization inspects the matched file's own shape, not the
/// request that found it: `/guide/index.html` canonicalizes to the
/// `/guide/` directory form however it was reached. Non-HTML assets are
/// never rewritten, and the root is never rewritten away from itself.
pub fn canonical_path(mode: HtmlHandling, matched: &str) -> String {
    if mode == HtmlHandling::None {
        return matched.to_string();
    }

    if matched.ends_with("/index.html") {
        // keep the trailing slash of the enclosing directory
        let dir = &matched[..matched.len() - "index.html".len()];
        match mode {
            HtmlHandling::DropTrailingSlash if dir != "/" => dir[..dir.len() - 1].to_string(),
            _ => dir.to_string(),
        }
    } else if let Some(base) = matched.strip_suffix(".html") {
        match mode {
            HtmlHandling::ForceTrailingSlash => format!("{base}/"),
            _ => base.to_string(),
        }
    } else {
        matched.to_string()
    }
}
