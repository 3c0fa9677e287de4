use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::mapping::{LEGACY_CS_HOST, LEGACY_HOST};

/// Characters left alone when quoting a search query.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

const NOT_FOUND_HEADER: &str = "URLs not found in backup data - manual lookup needed:";
const SEARCH_HEADER: &str = "Papers with Code to arXiv search links";

/// A ready-to-open search for one missing paper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLink {
    pub name: &'static str,
    pub url: String,
}

/// Guess a paper title from the slug of a legacy URL.
///
/// `https://paperswithcode.com/paper/bert-pre-training?x#y` becomes `Bert Pre Training`.
pub fn slug_title(url: &str) -> String {
    let slug = url.rsplit_once("/paper/").map_or_else(
        || url.rsplit('/').next().unwrap_or_default(),
        |(_, slug)| slug,
    );
    let slug = slug.split(['?', '#']).next().unwrap_or_default();
    slug.split(['-', '/'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn quote(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).to_string()
}

/// Plain arXiv search for `title`, as written into not-found reports.
pub fn arxiv_search_url(title: &str) -> String {
    format!("https://arxiv.org/search/?query={}", quote(title))
}

/// Search strategies for a paper title, most specific first.
pub fn search_links(title: &str) -> Vec<SearchLink> {
    let q = quote(title);
    vec![
        SearchLink {
            name: "Title Search",
            url: format!("https://arxiv.org/search/?query={q}&searchtype=title"),
        },
        SearchLink {
            name: "All Fields Search",
            url: format!("https://arxiv.org/search/?query={q}&searchtype=all"),
        },
        SearchLink {
            name: "Google Scholar",
            url: format!(
                "https://scholar.google.com/scholar?q={}",
                quote(&format!("\"{title}\" site:arxiv.org"))
            ),
        },
    ]
}

/// Where the not-found report for `output` goes: `<stem>_not_found.txt` beside it.
pub fn not_found_path(output: &Path) -> PathBuf {
    sibling_with_suffix(output, "_not_found.txt")
}

/// Where search results for a URL list go: `<stem>_search_results.txt` beside it.
pub fn search_results_path(list: &Path) -> PathBuf {
    sibling_with_suffix(list, "_search_results.txt")
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}"))
}

/// Manual lookup report for URLs the backup data could not resolve.
pub fn render_not_found(urls: &[String]) -> String {
    let mut out = format!("{NOT_FOUND_HEADER}\n\n");
    for url in urls {
        let title = slug_title(url);
        // Writing to a String never fails.
        let _ = writeln!(out, "{url}");
        let _ = writeln!(out, "  Search term: {title}");
        let _ = writeln!(out, "  arXiv search: {}\n", arxiv_search_url(&title));
    }
    out
}

/// Search strategies for every URL, one block per paper.
pub fn render_search_results(urls: &[String]) -> String {
    let mut out = format!("{SEARCH_HEADER}\n{}\n\n", "=".repeat(SEARCH_HEADER.len()));
    for url in urls {
        let title = slug_title(url);
        let _ = writeln!(out, "Papers with Code URL: {url}");
        let _ = writeln!(out, "Extracted Title: {title}");
        let _ = writeln!(out, "Search strategies:");
        for link in search_links(&title) {
            let _ = writeln!(out, "  - {}: {}", link.name, link.url);
        }
        let _ = writeln!(out, "\n{}\n", "-".repeat(40));
    }
    out
}

/// Pull legacy index URLs out of a not-found report or a plain list, one per line.
///
/// Only lines that are themselves a URL on one of the legacy hosts count, surrounding whitespace
/// aside; headers and the search hints of a report are skipped.
pub fn read_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .filter(|line| {
            Url::parse(line)
                .ok()
                .and_then(|u| u.host_str().map(|h| h == LEGACY_HOST || h == LEGACY_CS_HOST))
                .unwrap_or(false)
        })
        .map(str::to_string)
        .collect()
}
