//! Root-relative path helpers
//!
//! Paths are plain `/`-separated strings so the digest map reads the same
//! regardless of the host that produced it.

/// Replace every backslash separator with a forward slash
#[must_use]
pub fn to_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Directory part of a `/`-separated path, or `""` for a bare file name
#[must_use]
pub fn dirname(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

/// Join segments with `/`, skipping empty ones, and normalize separators
///
/// A document at the root has an empty directory; dropping it keeps the
/// joined path relative instead of producing a leading `/`.
#[must_use]
pub fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let joined = segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    to_slash(&joined)
}

/// Collapse `.` and `..` segments and repeated separators
///
/// Leading `..` segments of a relative path are kept since there is
/// nothing to pop them against. An empty result becomes `.`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = to_slash(path);
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
