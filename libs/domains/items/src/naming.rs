//! Content-addressed naming for stored images.

use sha2::{Digest, Sha256};
use std::path::Path;

/// Derive the canonical stored filename for an uploaded image reference.
///
/// Takes the final path segment of `original_reference`, strips its
/// extension, and hashes the UTF-8 bytes of that stem with SHA-256. The
/// result is `<hex-digest>.jpg`, independent of the directory and extension
/// of the input. Pure and total: an empty or malformed reference hashes
/// whatever stem remains.
pub fn stored_image_name(original_reference: &str) -> String {
    let stem = Path::new(original_reference)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let digest = Sha256::digest(stem.as_bytes());
    format!("{}.jpg", hex::encode(digest))
}
