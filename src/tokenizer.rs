use std::sync::LazyLock;

use regex::Regex;

// double-quoted run, single-quoted run, or a bare word without quote chars
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'|[^\s'"]+"#).expect("token pattern is valid"));

/// Split a command line into arguments.
///
/// A matched pair of quotes forms one token with the quotes removed. A stray
/// quote character that never closes belongs to no token.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(line.trim())
        .map(|m| strip_quotes(m.as_str()).to_string())
        .collect()
}

fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 {
        for quote in ['"', '\''] {
            if token.starts_with(quote) && token.ends_with(quote) {
                return &token[1..token.len() - 1];
            }
        }
    }
    token
}
