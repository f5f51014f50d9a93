use tokio::fs;

use crate::error::{ImageError, ImageResult};
use crate::resolver::ImageResolver;

/// Service layer for serving image bytes.
#[derive(Debug, Clone)]
pub struct ImageService {
    resolver: ImageResolver,
}

impl ImageService {
    pub fn new(resolver: ImageResolver) -> Self {
        Self { resolver }
    }

    /// Resolve the requested filename and read the file's bytes.
    pub async fn fetch_image(&self, requested: &str) -> ImageResult<Vec<u8>> {
        let path = self.resolver.resolve(requested).await?;

        fs::read(&path)
            .await
            .map_err(|e| ImageError::Unreadable(format!("{}: {}", path.display(), e)))
    }
}
