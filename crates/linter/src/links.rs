//! Resolution of JSDoc `{@link ...}` markup in detail texts.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const API_REFERENCE: &str = "https://ui5.sap.com/#/api/";

/// `{@link target}`, `{@link target text}` or `{@link target|text}`
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{@link\s+([^\s}|]+)(?:\s*\|\s*|\s+)?([^}]*)\}").unwrap_or_else(|err| {
        unreachable!("invalid link pattern: {err}");
    })
});

/// Replace `{@link ...}` markup with its text and the API reference URL.
///
/// `{@link sap.m.Button}` becomes `sap.m.Button (https://ui5.sap.com/#/api/sap.m.Button)`.
/// Links to members use the class page, `#/api/sap.m.Button%23methods/setText`.
/// Targets without a class (`#setText`) keep only their text. Markup the
/// pattern does not recognize is left untouched.
#[must_use]
pub fn resolve_links(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures<'_>| {
        let target = &caps[1];
        let label = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|label| !label.is_empty())
            .unwrap_or(target);

        match url_for(target) {
            Some(url) => format!("{label} ({url})"),
            None => label.to_string(),
        }
    })
    .into_owned()
}

fn url_for(target: &str) -> Option<String> {
    if target.starts_with("http://") || target.starts_with("https://") {
        return Some(target.to_string());
    }

    let (symbol, member) = match target.split_once('#') {
        Some(("", _)) => return None,
        Some((symbol, member)) => (symbol, Some(member)),
        None => (target, None),
    };

    let symbol = symbol.replace('/', "%2F");
    Some(match member {
        Some(member) => {
            let member = member.trim_start_matches("methods:").trim_start_matches("events:");
            format!("{API_REFERENCE}{symbol}%23methods/{member}")
        }
        None => format!("{API_REFERENCE}{symbol}"),
    })
}
