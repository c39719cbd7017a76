use chrono::{DateTime, Utc};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio_util::sync::CancellationToken;

use crate::cue_reducer::{srt_to_plain_text, vtt_to_plain_text};
use crate::errors::ExtractionError;
use crate::fetch::TextFetcher;
use crate::format_detector::is_extractable_playlist_content;
use crate::playlist_parser::{parse_vtt_references, resolve_reference};

// @module: Segment fetching and merging

// @const: Leading WEBVTT header line, optional BOM, trailing metadata tolerated
static VTT_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\x{FEFF}?WEBVTT[^\n]*\n").unwrap());

/// Raw fetched text of one subtitle segment
#[derive(Debug, Clone)]
pub struct SegmentDocument {
    /// Resolved URL the segment was fetched from
    pub url: String,
    /// Raw segment body as fetched
    pub content: String,
    /// When the fetch completed - kept for library consumers
    #[allow(dead_code)]
    pub fetched_at: DateTime<Utc>,
}

/// Outcome of a playlist extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// All segment bodies merged under a single synthetic WEBVTT header
    pub raw_merged: String,
    /// Deduplicated plain-text transcript across all segments
    pub transcript: String,
    /// Number of segments successfully fetched
    pub segment_count: usize,
}

/// Outcome of a standalone SRT extraction
#[derive(Debug, Clone, PartialEq)]
pub struct SrtExtraction {
    /// SRT document as fetched
    pub raw: String,
    /// Deduplicated plain-text transcript
    pub transcript: String,
}

/// Subtitle extraction pipeline over a text fetcher.
///
/// Segments download one at a time in strict playlist order; the transcript
/// dedup is only sound under sequential assembly, so sibling segments are
/// never fetched concurrently. Each extraction run owns its accumulators -
/// runs over different playlists are fully isolated.
#[derive(Debug)]
pub struct SubtitleExtractor<F: TextFetcher> {
    fetcher: F,
}

/// Extractor entry points - some are API surface for library consumers
#[allow(dead_code)]
impl<F: TextFetcher> SubtitleExtractor<F> {
    /// Create an extractor over the given fetcher
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Access the underlying fetcher, e.g. for the top-level playlist fetch
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch a playlist URL and extract its referenced VTT segments
    pub async fn extract_transcript(
        &self,
        playlist_url: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        let content = self.fetcher.fetch_text(playlist_url).await?;
        self.extract_from_playlist_content(playlist_url, &content)
            .await
    }

    /// Extract from playlist content that has already been fetched
    ///
    /// Some integrations intercept the playlist body before deciding to
    /// extract; this entry point skips the redundant refetch.
    pub async fn extract_from_playlist_content(
        &self,
        playlist_url: &str,
        content: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        self.extract_with_options(playlist_url, content, &CancellationToken::new(), |_, _| {})
            .await
    }

    /// Extract with cancellation and per-segment progress reporting.
    ///
    /// The progress callback receives `(completed, total)` after each segment
    /// attempt, successful or not. Cancelling the token aborts the batch
    /// before the next fetch and surfaces [`ExtractionError::Cancelled`]
    /// rather than a partial result.
    pub async fn extract_with_options(
        &self,
        playlist_url: &str,
        content: &str,
        cancel: &CancellationToken,
        progress_callback: impl Fn(usize, usize),
    ) -> Result<ExtractionResult, ExtractionError> {
        if !is_extractable_playlist_content(content) {
            return Err(ExtractionError::NotExtractable);
        }

        let references = parse_vtt_references(content);
        if references.is_empty() {
            return Err(ExtractionError::NoReferencesFound);
        }

        let urls: Vec<String> = references
            .iter()
            .map(|reference| resolve_reference(playlist_url, reference))
            .collect();

        let segments = self.fetch_segments(&urls, cancel, progress_callback).await?;
        if segments.is_empty() {
            return Err(ExtractionError::AllSegmentsFailed);
        }

        Ok(merge_segments(&segments))
    }

    /// Fetch segment documents in order, skipping individual failures.
    ///
    /// A failed segment fetch is logged and dropped; it never aborts the
    /// batch. Cancellation is observed between fetches and while a fetch is
    /// in flight.
    pub async fn fetch_segments(
        &self,
        urls: &[String],
        cancel: &CancellationToken,
        progress_callback: impl Fn(usize, usize),
    ) -> Result<Vec<SegmentDocument>, ExtractionError> {
        let total = urls.len();
        let mut segments = Vec::with_capacity(total);

        for (index, url) in urls.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(ExtractionError::Cancelled);
            }

            let fetched = tokio::select! {
                result = self.fetcher.fetch_text(url) => result,
                _ = cancel.cancelled() => return Err(ExtractionError::Cancelled),
            };

            match fetched {
                Ok(content) => {
                    segments.push(SegmentDocument {
                        url: url.clone(),
                        content,
                        fetched_at: Utc::now(),
                    });
                }
                Err(e) => {
                    warn!("Skipping segment {}: {}", url, e);
                }
            }

            progress_callback(index + 1, total);
        }

        debug!("Fetched {}/{} segment(s)", segments.len(), total);
        Ok(segments)
    }

    /// Fetch a standalone SRT document and reduce it to a transcript
    pub async fn extract_srt(&self, srt_url: &str) -> Result<SrtExtraction, ExtractionError> {
        let raw = self.fetcher.fetch_text(srt_url).await?;
        let transcript = srt_to_plain_text(&raw);
        Ok(SrtExtraction { raw, transcript })
    }
}

/// Merge fetched segments into the raw document and the transcript.
///
/// Raw merge strips each segment's own header and joins the trimmed bodies
/// with a blank line under one synthetic `WEBVTT` header. Text merge reduces
/// each segment independently - dedup state never crosses a segment
/// boundary - then drops segments whose reduction came out empty.
fn merge_segments(segments: &[SegmentDocument]) -> ExtractionResult {
    let mut raw_parts = Vec::with_capacity(segments.len());
    let mut text_parts = Vec::new();

    for segment in segments {
        let body = VTT_HEADER_REGEX.replace(&segment.content, "");
        raw_parts.push(body.trim().to_string());

        let reduced = vtt_to_plain_text(&segment.content);
        if !reduced.trim().is_empty() {
            text_parts.push(reduced);
        }
    }

    ExtractionResult {
        raw_merged: format!("WEBVTT\n\n{}\n", raw_parts.join("\n\n")),
        transcript: text_parts.join("\n"),
        segment_count: segments.len(),
    }
}
