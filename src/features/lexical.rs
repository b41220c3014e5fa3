use crate::url_parts::UrlParts;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::IpAddr;

/// URLs at or above this length are treated as suspiciously long.
pub const LONG_URL_THRESHOLD: usize = 54;

lazy_static! {
    static ref SHORTENER_PATTERN: Regex =
        Regex::new(r"bit\.ly|goo\.gl|tinyurl|t\.co|is\.gd|ow\.ly|buff\.ly").unwrap();
}

/// True when the entire input string parses as an IPv4 or IPv6 literal.
///
/// Deliberately checks the raw input, not the extracted host, so any URL
/// carrying a scheme prefix evaluates to false. This mirrors the behavior
/// the classifier was trained against.
pub fn is_ip_literal(url: &str) -> bool {
    url.parse::<IpAddr>().is_ok()
}

pub fn has_at_sign(url: &str) -> bool {
    url.contains('@')
}

pub fn is_long_url(url: &str) -> bool {
    url.len() >= LONG_URL_THRESHOLD
}

/// Number of non-empty `/`-separated segments in the parsed path.
/// The one indicator reported as a count rather than a flag.
pub fn path_depth(parts: &UrlParts) -> usize {
    parts.path.split('/').filter(|s| !s.is_empty()).count()
}

/// True when a `//` occurs past the scheme-delimiter region, i.e. the last
/// occurrence sits at an index greater than 6.
pub fn has_late_double_slash(url: &str) -> bool {
    matches!(url.rfind("//"), Some(idx) if idx > 6)
}

/// True when the literal string `https` is embedded in the
/// network-location. Catches hosts dressed up to look secure, e.g.
/// `https-paypal.example.com`; unrelated to the connection scheme.
pub fn https_in_netloc(parts: &UrlParts) -> bool {
    parts.netloc.contains("https")
}

/// True when the URL matches a known link-shortener domain anywhere in
/// the string.
pub fn is_shortened(url: &str) -> bool {
    SHORTENER_PATTERN.is_match(url)
}

pub fn hyphen_in_netloc(parts: &UrlParts) -> bool {
    parts.netloc.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_parts::parse_lenient;

    #[test]
    fn test_ip_literal_on_raw_string() {
        assert!(is_ip_literal("192.168.0.1"));
        assert!(is_ip_literal("::1"));
        // Scheme prefix defeats the literal parse, by contract.
        assert!(!is_ip_literal("http://192.168.0.1"));
        assert!(!is_ip_literal("http://example.com"));
    }

    #[test]
    fn test_at_sign() {
        assert!(has_at_sign("http://user@example.com"));
        assert!(!has_at_sign("http://example.com"));
    }

    #[test]
    fn test_long_url_boundary() {
        let exactly_54 = "http://example.com/".to_string() + &"a".repeat(35);
        assert_eq!(exactly_54.len(), 54);
        assert!(is_long_url(&exactly_54));

        let exactly_53 = "http://example.com/".to_string() + &"a".repeat(34);
        assert_eq!(exactly_53.len(), 53);
        assert!(!is_long_url(&exactly_53));
    }

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth(&parse_lenient("http://example.com/a/b/c")), 3);
        assert_eq!(path_depth(&parse_lenient("http://example.com")), 0);
        assert_eq!(path_depth(&parse_lenient("http://example.com/")), 0);
        assert_eq!(path_depth(&parse_lenient("http://example.com//x///y/")), 2);
    }

    #[test]
    fn test_late_double_slash() {
        assert!(!has_late_double_slash("http://example.com/page"));
        assert!(has_late_double_slash("http://example.com//evil.com"));
        assert!(has_late_double_slash("https://example.com/redirect//next"));
        assert!(!has_late_double_slash("no-slashes-here"));
    }

    #[test]
    fn test_https_in_netloc() {
        assert!(https_in_netloc(&parse_lenient("http://https-login.example.com")));
        assert!(!https_in_netloc(&parse_lenient("https://example.com")));
        assert!(!https_in_netloc(&parse_lenient("http://example.com/https")));
    }

    #[test]
    fn test_shortener_match() {
        assert!(is_shortened("http://bit.ly/abc"));
        assert!(is_shortened("https://tinyurl.com/xyz"));
        assert!(is_shortened("http://t.co/q"));
        assert!(!is_shortened("http://example.com"));
    }

    #[test]
    fn test_hyphen_in_netloc() {
        assert!(hyphen_in_netloc(&parse_lenient("http://my-site.com")));
        // Hyphen in the path must not count.
        assert!(!hyphen_in_netloc(&parse_lenient("http://mysite.com/my-page")));
    }
}
