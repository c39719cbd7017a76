/*!
 * Tests for URL and content format detection
 */

use subgrab::format_detector::{
    SubtitleFormat, candidate_format, is_extractable_playlist_content, is_extractable_playlist_url,
    is_srt_url,
};

/// Test playlist URL detection across suffix placements
#[test]
fn test_playlistUrl_withM3u8Suffix_shouldMatch() {
    assert!(is_extractable_playlist_url("https://cdn.example.com/captions/index.m3u8"));
    assert!(is_extractable_playlist_url("https://cdn.example.com/captions/INDEX.M3U8"));
    assert!(is_extractable_playlist_url("https://cdn.example.com/index.m3u8?token=abc"));
    assert!(is_extractable_playlist_url("https://cdn.example.com/index.m3u8#fragment"));
}

#[test]
fn test_playlistUrl_withoutM3u8_shouldNotMatch() {
    assert!(!is_extractable_playlist_url("https://cdn.example.com/video.mp4"));
    assert!(!is_extractable_playlist_url("https://cdn.example.com/index.m3u"));
    assert!(!is_extractable_playlist_url("https://cdn.example.com/m3u8/other.ts"));
}

#[test]
fn test_srtUrl_withSrtSuffix_shouldMatch() {
    assert!(is_srt_url("https://example.com/subs/movie.srt"));
    assert!(is_srt_url("https://example.com/subs/MOVIE.SRT"));
    assert!(is_srt_url("https://example.com/subs/movie.srt?lang=en"));
}

#[test]
fn test_srtUrl_withoutSrtSuffix_shouldNotMatch() {
    assert!(!is_srt_url("https://example.com/subs/movie.vtt"));
    assert!(!is_srt_url("https://example.com/srt/listing.html"));
}

/// Test the authoritative content gate
#[test]
fn test_playlistContent_withMarkerAndVttReference_shouldBeExtractable() {
    let content = "#EXTM3U\n#EXTINF:6.0,\nseg1.vtt\n";
    assert!(is_extractable_playlist_content(content));
}

#[test]
fn test_playlistContent_withLeadingWhitespace_shouldBeExtractable() {
    let content = "\n  #EXTM3U\n#EXTINF:6.0,\nseg1.vtt\n";
    assert!(is_extractable_playlist_content(content));
}

#[test]
fn test_playlistContent_withUppercaseVttReference_shouldBeExtractable() {
    let content = "#EXTM3U\nSEG1.VTT\n";
    assert!(is_extractable_playlist_content(content));
}

#[test]
fn test_playlistContent_withoutMagicMarker_shouldNotBeExtractable() {
    let content = "#EXT-X-VERSION:3\nseg1.vtt\n";
    assert!(!is_extractable_playlist_content(content));
}

/// The magic marker comparison is case-sensitive
#[test]
fn test_playlistContent_withLowercaseMarker_shouldNotBeExtractable() {
    let content = "#extm3u\nseg1.vtt\n";
    assert!(!is_extractable_playlist_content(content));
}

/// A playlist of media segments with no VTT references is a valid negative
#[test]
fn test_playlistContent_withoutVttReference_shouldNotBeExtractable() {
    let content = "#EXTM3U\n#EXTINF:6.0,\nseg1.ts\nseg2.ts\n";
    assert!(!is_extractable_playlist_content(content));
}

#[test]
fn test_candidateFormat_withPlaylistUrl_shouldReturnVtt() {
    assert_eq!(
        candidate_format("https://cdn.example.com/index.m3u8"),
        Some(SubtitleFormat::Vtt)
    );
}

#[test]
fn test_candidateFormat_withSrtUrl_shouldReturnSrt() {
    assert_eq!(
        candidate_format("https://example.com/movie.srt"),
        Some(SubtitleFormat::Srt)
    );
}

#[test]
fn test_candidateFormat_withOtherUrl_shouldReturnNone() {
    assert_eq!(candidate_format("https://example.com/movie.mp4"), None);
}

/// The wire form of the format tag is lowercase
#[test]
fn test_subtitleFormat_serialization_shouldBeLowercase() {
    assert_eq!(
        serde_json::to_string(&SubtitleFormat::Vtt).unwrap(),
        "\"vtt\""
    );
    assert_eq!(
        serde_json::to_string(&SubtitleFormat::Srt).unwrap(),
        "\"srt\""
    );
}

#[test]
fn test_subtitleFormat_display_shouldMatchWireForm() {
    assert_eq!(SubtitleFormat::Vtt.to_string(), "vtt");
    assert_eq!(SubtitleFormat::Srt.to_string(), "srt");
}
