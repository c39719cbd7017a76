use once_cell::sync::Lazy;
use regex::Regex;

// @module: Cue-to-text reduction for WebVTT and SRT documents

// @const: WebVTT cue timing prefix, e.g. "00:00:01.000 --> 00:00:04.000 line:90%"
static VTT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}\s+-->\s+\d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

// @const: SRT cue timing prefix, comma or dot milliseconds, 1-3 digit hours
static SRT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}:\d{2}:\d{2}[,.]\d{3}\s+-->\s+\d{1,3}:\d{2}:\d{2}[,.]\d{3}").unwrap()
});

/// State threaded through one reduction pass.
///
/// Kept as an explicit value rather than module-level globals so that
/// reductions stay independently testable and concurrent extraction runs
/// cannot observe each other's dedup state.
#[derive(Debug, Default)]
pub struct ReducerState {
    /// Last dialogue line that survived reduction, for consecutive dedup
    pub last_kept: Option<String>,
    /// Whether we are inside a NOTE/STYLE block being discarded
    pub skip_block: bool,
}

impl ReducerState {
    /// Record a kept dialogue line, returning false when it repeats the
    /// previous kept line and must be dropped
    fn keep(&mut self, text: &str) -> bool {
        if self.last_kept.as_deref() == Some(text) {
            return false;
        }
        self.last_kept = Some(text.to_string());
        true
    }
}

fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

fn is_cue_index(trimmed: &str) -> bool {
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Reduce one WebVTT document to plain dialogue text.
///
/// Strips the WEBVTT header line, NOTE/STYLE blocks, cue timing lines
/// (settings after the timing are tolerated), and numeric cue indices.
/// Consecutive duplicate dialogue lines collapse to one, which absorbs the
/// overlap live-caption segmenters produce at segment boundaries. The result
/// is newline-joined and trimmed.
pub fn vtt_to_plain_text(vtt: &str) -> String {
    let mut state = ReducerState::default();
    let mut kept: Vec<&str> = Vec::new();

    for (index, raw_line) in vtt.split('\n').enumerate() {
        let line = strip_bom(raw_line);
        let trimmed = line.trim();

        // Header line only counts on the very first line of the document
        if index == 0 && trimmed.to_uppercase().starts_with("WEBVTT") {
            continue;
        }

        if state.skip_block {
            if trimmed.is_empty() {
                state.skip_block = false;
            }
            continue;
        }

        if trimmed.starts_with("NOTE") || trimmed.starts_with("STYLE") {
            state.skip_block = true;
            continue;
        }

        if VTT_TIMING_REGEX.is_match(trimmed) {
            continue;
        }

        if is_cue_index(trimmed) {
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        if state.keep(trimmed) {
            kept.push(trimmed);
        }
    }

    kept.join("\n").trim().to_string()
}

/// Reduce one SRT document to plain dialogue text.
///
/// Same reduction as [`vtt_to_plain_text`] minus the header and block
/// handling SRT does not have. Output carries a single trailing newline.
pub fn srt_to_plain_text(srt: &str) -> String {
    let mut state = ReducerState::default();
    let mut kept: Vec<&str> = Vec::new();

    for raw_line in srt.split('\n') {
        let trimmed = strip_bom(raw_line).trim();

        if trimmed.is_empty() {
            continue;
        }

        if is_cue_index(trimmed) {
            continue;
        }

        if SRT_TIMING_REGEX.is_match(trimmed) {
            continue;
        }

        if state.keep(trimmed) {
            kept.push(trimmed);
        }
    }

    format!("{}\n", kept.join("\n").trim())
}
