use serde::{Deserialize, Serialize};

// @module: Subtitle source classification

/// Subtitle source format recognized by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// M3U8 playlist referencing WebVTT segments
    Vtt,
    /// Standalone SubRip document
    Srt,
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vtt => write!(f, "vtt"),
            Self::Srt => write!(f, "srt"),
        }
    }
}

/// Check whether a URL looks like an M3U8 playlist worth probing.
///
/// URL shape is only the cheap first gate; the content check below is the
/// authoritative one before any segment downloads are committed.
pub fn is_extractable_playlist_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".m3u8") || lower.contains(".m3u8?") || lower.contains(".m3u8#")
}

/// Check whether a URL looks like a standalone SRT file
pub fn is_srt_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".srt") || lower.contains(".srt?")
}

/// Check whether fetched playlist content qualifies for VTT extraction.
///
/// The content must start with the `#EXTM3U` magic marker (case-sensitive)
/// and reference at least one `.vtt` path anywhere in the body. Failing
/// either condition is a negative classification, not an error.
pub fn is_extractable_playlist_content(content: &str) -> bool {
    if !content.trim_start().starts_with("#EXTM3U") {
        return false;
    }
    content.to_lowercase().contains(".vtt")
}

/// Classify a URL into a candidate subtitle format, playlist shape first
pub fn candidate_format(url: &str) -> Option<SubtitleFormat> {
    if is_extractable_playlist_url(url) {
        Some(SubtitleFormat::Vtt)
    } else if is_srt_url(url) {
        Some(SubtitleFormat::Srt)
    } else {
        None
    }
}
