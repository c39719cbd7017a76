use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::app_config::Config;
use crate::extractor::SubtitleExtractor;
use crate::fetch::{HttpFetcher, TextFetcher};
use crate::file_utils::FileManager;
use crate::format_detector::{SubtitleFormat, candidate_format, is_extractable_playlist_content};
use crate::playlist_parser::parse_vtt_references;

// @module: Application controller for subtitle extraction

/// Main application controller for transcript extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Extraction pipeline over the HTTP fetcher
    extractor: SubtitleExtractor<HttpFetcher>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let extractor = SubtitleExtractor::new(HttpFetcher::new(&config.request));
        Ok(Self { config, extractor })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Classify a URL into a candidate subtitle format
    pub fn classify(&self, url: &str) -> Option<SubtitleFormat> {
        candidate_format(url)
    }

    /// Run one extraction: classify the URL, download, and write the raw
    /// document plus the transcript under the configured output directory.
    pub async fn run(&self, url: &str, name: &str, force_overwrite: bool) -> Result<()> {
        let format = self.classify(url).ok_or_else(|| {
            anyhow!("URL does not look like an M3U8 playlist or SRT file: {}", url)
        })?;

        let output_dir = PathBuf::from(&self.config.output_dir);
        FileManager::ensure_dir(&output_dir)?;

        let raw_extension = match format {
            SubtitleFormat::Vtt => "vtt",
            SubtitleFormat::Srt => "srt",
        };
        let raw_path = FileManager::generate_output_path(&output_dir, name, "raw", raw_extension);
        let transcript_path =
            FileManager::generate_output_path(&output_dir, name, "transcript", "txt");

        if (raw_path.exists() || transcript_path.exists()) && !force_overwrite {
            warn!(
                "Output already exists for '{}' (use -f to force overwrite)",
                name
            );
            return Ok(());
        }

        let (raw, transcript) = match format {
            SubtitleFormat::Vtt => self.run_playlist(url).await?,
            SubtitleFormat::Srt => self.run_srt(url).await?,
        };

        FileManager::write_to_file(&raw_path, &raw)?;
        FileManager::write_to_file(&transcript_path, &ensure_trailing_newline(transcript))?;

        info!("Raw subtitle: {:?}", raw_path);
        info!("Transcript:   {:?}", transcript_path);
        Ok(())
    }

    async fn run_playlist(&self, url: &str) -> Result<(String, String)> {
        info!("Fetching playlist: {}", url);
        let content = self
            .extractor
            .fetcher()
            .fetch_text(url)
            .await
            .context("Failed to fetch playlist")?;

        if !is_extractable_playlist_content(&content) {
            return Err(anyhow!(
                "Document is not an extractable subtitle playlist: {}",
                url
            ));
        }

        let total = parse_vtt_references(&content).len();
        info!("Found {} VTT segment(s)", total);

        let progress_bar = ProgressBar::new(total as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} segments ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Downloading");

        let result = self
            .extractor
            .extract_with_options(url, &content, &CancellationToken::new(), |completed, _| {
                progress_bar.set_position(completed as u64);
            })
            .await?;

        progress_bar.finish_with_message("Done");

        if result.segment_count < total {
            warn!(
                "Retrieved {}/{} segments; the rest were skipped",
                result.segment_count, total
            );
        }

        Ok((result.raw_merged, result.transcript))
    }

    async fn run_srt(&self, url: &str) -> Result<(String, String)> {
        info!("Fetching SRT file: {}", url);
        let result = self.extractor.extract_srt(url).await?;
        Ok((result.raw, result.transcript))
    }
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
