/*!
 * Typed request/response contract for collaborators.
 *
 * Callers that used to drive extraction through loosely-typed messages (the
 * original browser-extension worker protocol) get a tagged union of operation
 * kinds instead, decoupled from any particular transport. Both sides
 * round-trip through serde, so the contract works as well over JSON as it
 * does in-process.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ExtractionError;
use crate::extractor::SubtitleExtractor;
use crate::fetch::TextFetcher;
use crate::format_detector::{SubtitleFormat, candidate_format};

/// Operations a collaborator can request from the pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ExtractRequest {
    /// Classify a URL without committing any network resources
    Classify {
        /// URL to classify
        url: String,
    },
    /// Extract a transcript from an M3U8 playlist of VTT segments
    ExtractPlaylist {
        /// Playlist URL
        url: String,
        /// Playlist body, when the caller already fetched or intercepted it
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Extract a transcript from a standalone SRT file
    ExtractSrt {
        /// SRT file URL
        url: String,
    },
}

/// Results the pipeline reports back
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ExtractResponse {
    /// Outcome of a classification request
    Classification {
        /// Candidate format, absent when the URL matches neither detector
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<SubtitleFormat>,
    },
    /// Completed playlist extraction
    Playlist {
        /// Identifier for this extraction
        id: Uuid,
        /// Source playlist URL
        url: String,
        /// Merged raw VTT document
        raw_merged: String,
        /// Plain-text transcript
        transcript: String,
        /// Number of segments successfully fetched
        segment_count: usize,
        /// Always [`SubtitleFormat::Vtt`]
        format: SubtitleFormat,
    },
    /// Completed SRT extraction
    Srt {
        /// Identifier for this extraction
        id: Uuid,
        /// Source SRT URL
        url: String,
        /// SRT document as fetched
        raw: String,
        /// Plain-text transcript
        transcript: String,
        /// Always [`SubtitleFormat::Srt`]
        format: SubtitleFormat,
    },
    /// Fatal extraction failure, message passed through verbatim
    Error {
        /// Human-readable failure description
        message: String,
    },
}

impl ExtractResponse {
    fn from_error(error: ExtractionError) -> Self {
        Self::Error {
            message: error.to_string(),
        }
    }
}

/// Execute one request against an extractor and produce its response.
///
/// Fatal pipeline errors become [`ExtractResponse::Error`]; partial segment
/// failures stay silent apart from the reduced `segment_count`.
pub async fn dispatch<F: TextFetcher>(
    extractor: &SubtitleExtractor<F>,
    request: ExtractRequest,
) -> ExtractResponse {
    match request {
        ExtractRequest::Classify { url } => ExtractResponse::Classification {
            format: candidate_format(&url),
        },
        ExtractRequest::ExtractPlaylist { url, content } => {
            let outcome = match content {
                Some(body) => extractor.extract_from_playlist_content(&url, &body).await,
                None => extractor.extract_transcript(&url).await,
            };
            match outcome {
                Ok(result) => ExtractResponse::Playlist {
                    id: Uuid::new_v4(),
                    url,
                    raw_merged: result.raw_merged,
                    transcript: result.transcript,
                    segment_count: result.segment_count,
                    format: SubtitleFormat::Vtt,
                },
                Err(e) => ExtractResponse::from_error(e),
            }
        }
        ExtractRequest::ExtractSrt { url } => match extractor.extract_srt(&url).await {
            Ok(result) => ExtractResponse::Srt {
                id: Uuid::new_v4(),
                url,
                raw: result.raw,
                transcript: result.transcript,
                format: SubtitleFormat::Srt,
            },
            Err(e) => ExtractResponse::from_error(e),
        },
    }
}
