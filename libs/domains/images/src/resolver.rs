use std::path::PathBuf;
use tokio::fs;

use crate::error::{ImageError, ImageResult};

/// Placeholder served when a requested image does not exist on disk.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Maps requested image filenames to existing files under a fixed
/// directory.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    image_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }

    /// Resolve a requested filename to a path that exists on disk.
    ///
    /// Only `.jpg` names are served; anything else is rejected before the
    /// filesystem is consulted. A missing candidate falls back to the
    /// placeholder as an explicit branch, silent to the caller and logged
    /// at debug level. A missing placeholder is a deployment error and is
    /// reported, not masked.
    pub async fn resolve(&self, requested: &str) -> ImageResult<PathBuf> {
        if !requested.ends_with(".jpg") {
            return Err(ImageError::NotJpeg(requested.to_string()));
        }

        let candidate = self.image_dir.join(requested);
        if fs::try_exists(&candidate).await.unwrap_or(false) {
            return Ok(candidate);
        }

        tracing::debug!("Image not found: {}", candidate.display());

        let fallback = self.image_dir.join(DEFAULT_IMAGE);
        if fs::try_exists(&fallback).await.unwrap_or(false) {
            Ok(fallback)
        } else {
            Err(ImageError::PlaceholderMissing(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn image_dir_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            std::fs::write(dir.path().join(name), b"\xff\xd8\xff").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn resolves_existing_image() {
        let dir = image_dir_with(&["mug.jpg", "default.jpg"]);
        let resolver = ImageResolver::new(dir.path());

        let path = resolver.resolve("mug.jpg").await.unwrap();
        assert_eq!(path, dir.path().join("mug.jpg"));
    }

    #[tokio::test]
    async fn missing_image_falls_back_to_placeholder() {
        let dir = image_dir_with(&["default.jpg"]);
        let resolver = ImageResolver::new(dir.path());

        let path = resolver.resolve("missing.jpg").await.unwrap();
        assert_eq!(path, dir.path().join("default.jpg"));
    }

    #[tokio::test]
    async fn non_jpg_names_are_rejected() {
        let dir = image_dir_with(&["default.jpg"]);
        let resolver = ImageResolver::new(dir.path());

        let err = resolver.resolve("x.png").await.unwrap_err();
        assert!(matches!(err, ImageError::NotJpeg(_)));
    }

    #[tokio::test]
    async fn missing_placeholder_is_an_error() {
        let dir = image_dir_with(&[]);
        let resolver = ImageResolver::new(dir.path());

        let err = resolver.resolve("missing.jpg").await.unwrap_err();
        assert!(matches!(err, ImageError::PlaceholderMissing(_)));
    }
}
