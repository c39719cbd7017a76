/*!
 * Text fetching over HTTP.
 *
 * The [`TextFetcher`] trait is the seam between the extraction pipeline and
 * the network: production code uses the reqwest-backed [`http::HttpFetcher`],
 * tests substitute scripted fetchers.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FetchError;

/// Common trait for anything that can fetch a text document by URL
#[async_trait]
pub trait TextFetcher: Send + Sync + Debug {
    /// Fetch the document at `url` as text
    ///
    /// # Returns
    /// * `Result<String, FetchError>` - The document body, or a distinguishable
    ///   error for transport failures and non-success HTTP statuses
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

pub mod http;

pub use http::HttpFetcher;
