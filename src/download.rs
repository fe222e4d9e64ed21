//! Saving a generated result to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::data_url::{DataUrl, DataUrlError};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Nothing to download yet")]
    NoResult,

    #[error("Generated image is unreadable: {0}")]
    Decode(#[from] DataUrlError),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `cartoon-<unix millis>.png`
pub fn download_filename(now: SystemTime) -> String {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("cartoon-{}.png", millis)
}

/// Decode `image` and write it into `dir`, returning the file path.
pub fn save_result(dir: &Path, image: &DataUrl, now: SystemTime) -> Result<PathBuf, DownloadError> {
    let bytes = image.decode()?;
    let path = dir.join(download_filename(now));

    fs::create_dir_all(dir).map_err(|e| DownloadError::Write {
        path: dir.to_path_buf(),
        source: e,
    })?;
    fs::write(&path, &bytes).map_err(|e| DownloadError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "Result downloaded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn is_cartoon_name(name: &str) -> bool {
        name.strip_prefix("cartoon-")
            .and_then(|rest| rest.strip_suffix(".png"))
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn filename_is_prefix_timestamp_png() {
        let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(download_filename(now), "cartoon-1700000000123.png");
        assert!(is_cartoon_name(&download_filename(SystemTime::now())));
    }

    #[test]
    fn save_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let image = DataUrl::from_bytes("image/png", &[1, 2, 3, 4]);
        let now = UNIX_EPOCH + Duration::from_millis(42);

        let path = save_result(dir.path(), &image, now).unwrap();
        assert_eq!(path.file_name().unwrap(), "cartoon-42.png");
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("cartoons");
        let image = DataUrl::from_bytes("image/png", b"png");

        let path = save_result(&nested, &image, SystemTime::now()).unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn save_rejects_corrupt_payload() {
        let dir = tempfile::tempdir().unwrap();
        let image = DataUrl::from_base64("image/png", "!!!");
        assert!(matches!(
            save_result(dir.path(), &image, SystemTime::now()),
            Err(DownloadError::Decode(_))
        ));
    }
}
