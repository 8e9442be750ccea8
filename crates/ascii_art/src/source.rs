use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use ascii_render::AsciiError;
use image::DynamicImage;
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Where an image is read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Url(String),
    Path(PathBuf),
}

impl ImageSource {
    /// `http(s)://` locations are fetched, anything else is a local path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lowercase = location.to_ascii_lowercase();
        if lowercase.starts_with("http://") || lowercase.starts_with("https://") {
            ImageSource::Url(location.to_string())
        } else if let Some(path) = location.strip_prefix("file://") {
            ImageSource::Path(PathBuf::from(path))
        } else {
            ImageSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => f.write_str(url),
            ImageSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reasons an image could not be obtained. Users see all of them as the same
/// message; the variant only matters for logs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Decode(#[from] AsciiError),
}

pub trait ImageLoader {
    fn load(&self, source: &ImageSource) -> Result<DynamicImage, LoadError>;
}

/// Loads images over blocking HTTP or from the local filesystem.
pub struct SourceLoader {
    client: Client,
}

impl SourceLoader {
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let bytes = response.bytes()?;
        debug!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

impl ImageLoader for SourceLoader {
    fn load(&self, source: &ImageSource) -> Result<DynamicImage, LoadError> {
        let image = match source {
            ImageSource::Url(url) => ascii_render::decode_bytes(&self.fetch(url)?)?,
            ImageSource::Path(path) => ascii_render::open_path(path)?,
        };
        debug!("loaded {}x{} image from {source}", image.width(), image.height());
        Ok(image)
    }
}
