//! Remote acquisition and local caching of topograph graph artifacts.
//!
//! Not a dependency of `topograph-graph` — a convenience layer, grounded in
//! the teacher's `core::downloader`/`core::source` pattern (global pooled
//! `reqwest::Client`, retry-with-backoff on network errors) but trimmed
//! down to the one thing this spec needs: "is the artifact on disk? if not,
//! stream it down." No parallel chunked downloads, no progress UI, no
//! resumable ranges — those solve a different problem (planet-scale OSM
//! PBF files) than a pair of graph artifacts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use topograph_common::{Error, Result};

const MAX_RETRY_ATTEMPTS: u32 = 3;
const BASE_RETRY_DELAY_MS: u64 = 500;

static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .tcp_keepalive(Duration::from_secs(60))
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(300))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("topograph-fetch/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
});

/// Where the two graph artifacts live, remotely and locally.
#[derive(Debug, Clone)]
pub struct Source {
    /// Base URL hosting `index_name` and `adjacency_name`.
    pub base_url: String,
    /// Directory artifacts are cached in, and read from if already present.
    pub cache_dir: PathBuf,
    pub index_name: String,
    pub adjacency_name: String,
}

impl Source {
    pub fn new(base_url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            cache_dir: cache_dir.into(),
            index_name: "topics.tgidx".to_string(),
            adjacency_name: "graph.tgcsr".to_string(),
        }
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.index_name)
    }

    fn adjacency_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.adjacency_name
        )
    }

    fn index_path(&self) -> PathBuf {
        self.cache_dir.join(&self.index_name)
    }

    fn adjacency_path(&self) -> PathBuf {
        self.cache_dir.join(&self.adjacency_name)
    }
}

/// Local paths of the two graph artifacts, ready to pass to
/// `topograph_graph::Engine::load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifacts {
    pub index_path: PathBuf,
    pub adjacency_path: PathBuf,
}

/// Ensures both artifacts named by `source` exist under its cache
/// directory, downloading whichever are missing, and returns their local
/// paths.
pub async fn ensure_local(source: &Source) -> Result<LocalArtifacts> {
    tokio::fs::create_dir_all(&source.cache_dir)
        .await
        .map_err(Error::Io)?;

    let index_path = source.index_path();
    if !index_path.exists() {
        log::info!("fetching topic index from {}", source.index_url());
        download_to_file(&source.index_url(), &index_path).await?;
    }

    let adjacency_path = source.adjacency_path();
    if !adjacency_path.exists() {
        log::info!("fetching adjacency store from {}", source.adjacency_url());
        download_to_file(&source.adjacency_url(), &adjacency_path).await?;
    }

    Ok(LocalArtifacts {
        index_path,
        adjacency_path,
    })
}

async fn download_to_file(url: &str, dest: &Path) -> Result<()> {
    retry_on_network_error(|| async { try_download_to_file(url, dest).await }).await
}

async fn try_download_to_file(url: &str, dest: &Path) -> Result<()> {
    let response = GLOBAL_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!(
            "{url} returned HTTP {}",
            response.status()
        )));
    }

    let tmp_path = dest.with_extension("part");
    let mut file = tokio::fs::File::create(&tmp_path).await.map_err(Error::Io)?;

    let mut stream = response.bytes_stream();
    use futures_util::StreamExt;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Fetch(e.to_string()))?;
        file.write_all(&chunk).await.map_err(Error::Io)?;
    }
    file.flush().await.map_err(Error::Io)?;
    drop(file);

    tokio::fs::rename(&tmp_path, dest).await.map_err(Error::Io)?;
    Ok(())
}

async fn retry_on_network_error<F, Fut, T>(operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(Error::Fetch(msg)) if attempt < MAX_RETRY_ATTEMPTS => {
                attempt += 1;
                let delay = BASE_RETRY_DELAY_MS * (1 << (attempt - 1));
                log::warn!("fetch attempt {attempt} failed ({msg}), retrying in {delay}ms");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
