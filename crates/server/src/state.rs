use std::path::PathBuf;
use std::sync::Arc;

use mediashelf_config::Settings;
use mediashelf_core::MediaInspector;
use mediashelf_utils::MediaExtensions;

pub type SharedState = Arc<AppState>;

/// The configured library exposed by the listing endpoint.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    pub root: PathBuf,
    pub extensions: MediaExtensions,
}

/// Read-only application context, constructed once at startup and shared by
/// every request. `library` is `None` only while startup configuration has
/// not completed.
#[derive(Debug, Clone)]
pub struct AppState {
    pub library: Option<MediaLibrary>,
    pub inspector: MediaInspector,
}

impl AppState {
    #[must_use]
    pub fn new(settings: &Settings, root: PathBuf) -> Self {
        Self {
            library: Some(MediaLibrary {
                root,
                extensions: MediaExtensions::new(&settings.video_extensions),
            }),
            inspector: MediaInspector::from_settings(settings),
        }
    }

    /// Context for a process that has not completed startup configuration.
    #[must_use]
    pub fn uninitialized(settings: &Settings) -> Self {
        Self {
            library: None,
            inspector: MediaInspector::from_settings(settings),
        }
    }
}
