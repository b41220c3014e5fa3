//! Indicators computed from the fetched page, when one is available.
//!
//! Each check takes `Option<&PageResponse>` and resolves to its documented
//! default when the fetch failed or was never attempted, so a dead host can
//! never fail the extraction.

use crate::fetcher::PageResponse;
use lazy_static::lazy_static;
use regex::Regex;

/// Redirect chains longer than this trip the forwarding indicator.
pub const FORWARDING_THRESHOLD: usize = 2;

lazy_static! {
    static ref IFRAME_PATTERN: Regex = Regex::new(r"<iframe>|<frameBorder>").unwrap();
    static ref MOUSEOVER_PATTERN: Regex =
        Regex::new(r"<script>.+onmouseover.+</script>").unwrap();
    static ref RIGHT_CLICK_PATTERN: Regex = Regex::new(r"event.button ?== ?2").unwrap();
}

/// True when no hidden-iframe pattern shows up in the body. Note the
/// inverted polarity: finding an iframe clears the flag, and a missing
/// response counts as clean.
pub fn no_iframe(page: Option<&PageResponse>) -> bool {
    match page {
        Some(page) => !IFRAME_PATTERN.is_match(&page.body),
        None => true,
    }
}

/// True when a script block wires up an `onmouseover` handler.
pub fn has_mouseover_script(page: Option<&PageResponse>) -> bool {
    match page {
        Some(page) => MOUSEOVER_PATTERN.is_match(&page.body),
        None => false,
    }
}

/// True unless the body tests for mouse button 2, the usual way pages
/// suppress the context menu. Missing response counts as enabled.
pub fn right_click_enabled(page: Option<&PageResponse>) -> bool {
    match page {
        Some(page) => !RIGHT_CLICK_PATTERN.is_match(&page.body),
        None => true,
    }
}

/// True when the fetch followed more than [`FORWARDING_THRESHOLD`]
/// redirects before settling.
pub fn excessive_forwarding(page: Option<&PageResponse>) -> bool {
    match page {
        Some(page) => page.redirects > FORWARDING_THRESHOLD,
        None => false,
    }
}
