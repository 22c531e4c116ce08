pub mod media_types;

pub use media_types::{DEFAULT_VIDEO_EXTENSIONS, MediaExtensions, file_extension};
