use log::debug;
use url::Url;

// @module: M3U8 playlist parsing and reference resolution

/// Extract ordered `.vtt` segment references from playlist text.
///
/// Lines are split strictly on line-feed boundaries and trimmed before
/// classification. Comment lines (leading `#`) and blank lines are never
/// references, even when they happen to end in `.vtt`. References are not
/// deduplicated: a segment listed twice is fetched twice, mirroring what the
/// upstream player would load. Output order matches source order - the
/// transcript assembly downstream relies on it.
pub fn parse_vtt_references(playlist: &str) -> Vec<String> {
    let mut references = Vec::new();
    for line in playlist.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.to_lowercase().ends_with(".vtt") {
            references.push(trimmed.to_string());
        }
    }
    debug!("Parsed {} VTT reference(s) from playlist", references.len());
    references
}

/// Resolve a segment reference against the playlist's own URL.
///
/// Absolute, path-relative, and scheme-relative references all resolve with
/// standard URL semantics. A reference that fails resolution is returned
/// unmodified - the fetcher will fail on it and skip the segment.
pub fn resolve_reference(base: &str, reference: &str) -> String {
    match Url::parse(base).and_then(|base_url| base_url.join(reference)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}
