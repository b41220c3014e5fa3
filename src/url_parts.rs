use url::Url;

/// Decomposed view of a URL string: scheme, network-location and path.
/// Components that cannot be determined are left empty rather than
/// reported as errors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
}

impl UrlParts {
    /// Host portion of the netloc with a leading `www.` removed,
    /// suitable for ranking lookups.
    pub fn domain(&self) -> &str {
        let host = self
            .netloc
            .rsplit('@')
            .next()
            .unwrap_or(self.netloc.as_str());
        let host = match host.rsplit_once(':') {
            Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
                name
            }
            _ => host,
        };
        host.strip_prefix("www.").unwrap_or(host)
    }
}

/// Parse a URL string without ever failing. Absolute URLs go through the
/// `url` crate; anything it rejects (relative references, garbage, empty
/// input) falls back to a manual split so callers always get a usable,
/// possibly partial, result.
pub fn parse_lenient(raw: &str) -> UrlParts {
    if let Ok(parsed) = Url::parse(raw) {
        let mut netloc = String::new();
        if !parsed.username().is_empty() {
            netloc.push_str(parsed.username());
            if let Some(password) = parsed.password() {
                netloc.push(':');
                netloc.push_str(password);
            }
            netloc.push('@');
        }
        if let Some(host) = parsed.host_str() {
            netloc.push_str(host);
        }
        if let Some(port) = parsed.port() {
            netloc.push(':');
            netloc.push_str(&port.to_string());
        }
        return UrlParts {
            scheme: parsed.scheme().to_string(),
            netloc,
            path: parsed.path().to_string(),
        };
    }

    // Manual fallback. A scheme is only split off when the prefix looks
    // like one; a netloc only exists when `//` literally follows it.
    let (scheme, rest) = match raw.split_once(':') {
        Some((candidate, rest)) if is_scheme(candidate) => {
            (candidate.to_ascii_lowercase(), rest)
        }
        _ => (String::new(), raw),
    };

    let (netloc, path_part) = match rest.strip_prefix("//") {
        Some(after) => match after.find(['/', '?', '#']) {
            Some(idx) if after.as_bytes()[idx] == b'/' => (&after[..idx], &after[idx..]),
            Some(idx) => (&after[..idx], ""),
            None => (after, ""),
        },
        None => ("", rest),
    };

    let path = path_part
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .to_string();

    UrlParts {
        scheme,
        netloc: netloc.to_string(),
        path,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
