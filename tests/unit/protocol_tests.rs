/*!
 * Tests for the typed request/response contract
 */

use crate::common::mock_fetcher::MockFetcher;
use crate::common::{sample_playlist, sample_vtt_segment};
use subgrab::extractor::SubtitleExtractor;
use subgrab::format_detector::SubtitleFormat;
use subgrab::protocol::{ExtractRequest, ExtractResponse, dispatch};

/// Requests serialize with an `op` tag in snake_case
#[test]
fn test_request_serialization_shouldCarryOpTag() {
    let request = ExtractRequest::Classify {
        url: "https://example.com/index.m3u8".to_string(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["op"], "classify");
    assert_eq!(json["url"], "https://example.com/index.m3u8");
}

#[test]
fn test_request_withoutContent_shouldOmitContentField() {
    let request = ExtractRequest::ExtractPlaylist {
        url: "https://example.com/index.m3u8".to_string(),
        content: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["op"], "extract_playlist");
    assert!(json.get("content").is_none());
}

#[test]
fn test_request_deserialization_shouldRoundTrip() {
    let request = ExtractRequest::ExtractSrt {
        url: "https://example.com/movie.srt".to_string(),
    };
    let json = serde_json::to_string(&request).unwrap();
    let parsed: ExtractRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, request);
}

#[tokio::test]
async fn test_dispatch_classify_withPlaylistUrl_shouldReturnVtt() {
    let extractor = SubtitleExtractor::new(MockFetcher::new());
    let response = dispatch(
        &extractor,
        ExtractRequest::Classify {
            url: "https://example.com/index.m3u8".to_string(),
        },
    )
    .await;

    assert_eq!(
        response,
        ExtractResponse::Classification {
            format: Some(SubtitleFormat::Vtt)
        }
    );
}

#[tokio::test]
async fn test_dispatch_classify_withUnknownUrl_shouldReturnNoFormat() {
    let extractor = SubtitleExtractor::new(MockFetcher::new());
    let response = dispatch(
        &extractor,
        ExtractRequest::Classify {
            url: "https://example.com/video.mp4".to_string(),
        },
    )
    .await;

    assert_eq!(response, ExtractResponse::Classification { format: None });
}

#[tokio::test]
async fn test_dispatch_extractPlaylist_withProvidedContent_shouldNotRefetchPlaylist() {
    let playlist_url = "https://cdn.example.com/captions/index.m3u8";
    let segment = "https://cdn.example.com/captions/a.vtt";
    let fetcher = MockFetcher::new().with_response(
        segment,
        &sample_vtt_segment("00:00:00.000", "00:00:02.000", "alpha"),
    );
    let tracker = fetcher.tracker();
    let extractor = SubtitleExtractor::new(fetcher);

    let response = dispatch(
        &extractor,
        ExtractRequest::ExtractPlaylist {
            url: playlist_url.to_string(),
            content: Some(sample_playlist(&["a.vtt"])),
        },
    )
    .await;

    match response {
        ExtractResponse::Playlist {
            transcript,
            segment_count,
            format,
            ..
        } => {
            assert_eq!(transcript, "alpha");
            assert_eq!(segment_count, 1);
            assert_eq!(format, SubtitleFormat::Vtt);
        }
        other => panic!("Unexpected response: {:?}", other),
    }

    // Only the segment was fetched
    assert_eq!(tracker.lock().unwrap().calls, vec![segment.to_string()]);
}

#[tokio::test]
async fn test_dispatch_extractSrt_withValidDocument_shouldReturnSrtResponse() {
    let srt_url = "https://example.com/movie.srt";
    let fetcher =
        MockFetcher::new().with_response(srt_url, "1\n00:00:00,000 --> 00:00:01,000\nHi\n");
    let extractor = SubtitleExtractor::new(fetcher);

    let response = dispatch(
        &extractor,
        ExtractRequest::ExtractSrt {
            url: srt_url.to_string(),
        },
    )
    .await;

    match response {
        ExtractResponse::Srt {
            transcript, format, ..
        } => {
            assert_eq!(transcript, "Hi\n");
            assert_eq!(format, SubtitleFormat::Srt);
        }
        other => panic!("Unexpected response: {:?}", other),
    }
}

/// Fatal errors surface with their message passed through verbatim
#[tokio::test]
async fn test_dispatch_withNoReferences_shouldReturnErrorMessage() {
    let extractor = SubtitleExtractor::new(MockFetcher::new());

    let response = dispatch(
        &extractor,
        ExtractRequest::ExtractPlaylist {
            url: "https://example.com/index.m3u8".to_string(),
            content: Some("#EXTM3U\n# backup copy in old.vtt\n".to_string()),
        },
    )
    .await;

    assert_eq!(
        response,
        ExtractResponse::Error {
            message: "No segments found in playlist".to_string()
        }
    );
}

/// Responses serialize with a `result` tag
#[test]
fn test_response_serialization_shouldCarryResultTag() {
    let response = ExtractResponse::Error {
        message: "No VTT segments could be retrieved".to_string(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"], "error");
    assert_eq!(json["message"], "No VTT segments could be retrieved");
}
