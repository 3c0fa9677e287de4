use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::mapping::UrlMapping;

/// Legacy index paper pages on either host. The path token stops at whitespace and at the
/// characters that usually close a link in markup.
static LEGACY_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://(?:cs\.)?paperswithcode\.com/paper/[^\s"')\]>;]+"#).unwrap()
});

/// Outcome of rewriting one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionResult {
    /// The document with every resolved URL substituted.
    pub text: String,
    /// Number of distinct candidate URLs that were resolved.
    pub replaced: usize,
    /// Candidates with no entry in the mapping, in discovery order.
    pub unmatched: Vec<String>,
}

impl ConversionResult {
    /// Distinct candidate URLs found in the input.
    pub fn discovered(&self) -> usize {
        self.replaced + self.unmatched.len()
    }

    /// Share of discovered URLs that were converted, as a percentage.
    pub fn conversion_rate(&self) -> Option<f64> {
        match self.discovered() {
            0 => None,
            n => Some(self.replaced as f64 * 100.0 / n as f64),
        }
    }
}

/// Find every legacy index URL in `text`, in order of first appearance and without duplicates.
pub fn find_candidates(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    LEGACY_URL_RE
        .find_iter(text)
        .map(|m| trim_trailing_punctuation(m.as_str()))
        .filter(|url| seen.insert(*url))
        .collect()
}

/// Drop sentence punctuation and closing markup that a greedy match picks up.
fn trim_trailing_punctuation(url: &str) -> &str {
    url.trim_end_matches(|c: char| {
        matches!(c, '"' | '\'' | ';' | ')' | ']' | '>' | ',' | '.' | '!')
    })
}

/// Rewrite every legacy index URL in `text` that `mapping` knows about.
///
/// Each resolved URL is replaced everywhere it occurs in the document, not only where it was
/// discovered. Longer URLs are substituted before shorter ones, so a resolved URL that is a prefix
/// of another resolved URL leaves the longer one intact. The replace is literal, so an unmatched URL
/// that extends a resolved one still has its resolved prefix rewritten.
pub fn convert(text: &str, mapping: &UrlMapping) -> ConversionResult {
    let candidates = find_candidates(text);
    debug!(count = candidates.len(), "discovered legacy URLs");

    let mut resolved = Vec::new();
    let mut unmatched = Vec::new();
    for url in candidates {
        match mapping.get(url) {
            Some(target) => {
                debug!(source = url, target, "resolved");
                resolved.push((url, target));
            }
            None => {
                debug!(source = url, "no mapping");
                unmatched.push(url.to_string());
            }
        }
    }

    let replaced = resolved.len();
    resolved.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
    let text = resolved
        .into_iter()
        .fold(text.to_string(), |acc, (source, target)| {
            acc.replace(source, target)
        });

    ConversionResult {
        text,
        replaced,
        unmatched,
    }
}
