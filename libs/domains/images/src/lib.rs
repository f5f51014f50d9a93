//! Images Domain
//!
//! Serves stored catalog images from a fixed directory. The resolver maps
//! requested filenames to files on disk and substitutes a placeholder when
//! the requested image is missing; only `.jpg` names are served.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_images::{ImageResolver, ImageService, handlers};
//!
//! let service = ImageService::new(ImageResolver::new("images"));
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod resolver;
pub mod service;

// Re-export commonly used types
pub use error::{ImageError, ImageResult};
pub use resolver::{DEFAULT_IMAGE, ImageResolver};
pub use service::ImageService;
