// canonical path helpers - no state, total over every input string

pub const ROOT: &str = "/";

/// Collapse `.`, `..` and repeated separators into a canonical absolute path.
///
/// `..` above the root is absorbed silently, so this never fails.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            seg => parts.push(seg),
        }
    }
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Resolve `raw` against `cwd`. Absolute paths ignore `cwd`.
pub fn resolve(raw: &str, cwd: &str) -> String {
    if raw.starts_with('/') {
        normalize(raw)
    } else {
        normalize(&format!("{}/{}", cwd, raw))
    }
}

/// Parent of a canonical path, `None` for the root.
pub fn parent_path(canonical: &str) -> Option<String> {
    if canonical == ROOT {
        return None;
    }
    match canonical.rfind('/') {
        Some(0) | None => Some(ROOT.to_string()),
        Some(idx) => Some(canonical[..idx].to_string()),
    }
}

/// Every ancestor of `canonical`, root first. The path itself is not included.
pub fn ancestors(canonical: &str) -> Vec<String> {
    if canonical == ROOT {
        return Vec::new();
    }
    let segments: Vec<&str> = canonical.split('/').filter(|s| !s.is_empty()).collect();
    let mut result = vec![ROOT.to_string()];
    for i in 1..segments.len() {
        result.push(format!("/{}", segments[..i].join("/")));
    }
    result
}
