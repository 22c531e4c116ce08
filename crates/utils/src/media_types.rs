use ahash::AHashSet;

pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv"];

/// Returns the text after the final `'.'` in `name`, lowercased.
///
/// A name with no `'.'` has no extension and yields an empty string.
#[must_use]
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => name[dot + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// The immutable set of filename extensions recognized as video files.
///
/// Built once from configuration and read-only thereafter; membership is
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct MediaExtensions {
    extensions: AHashSet<String>,
}

impl MediaExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether `filename` carries a recognized video extension.
    #[must_use]
    pub fn classifies(&self, filename: &str) -> bool {
        let ext = file_extension(filename);
        !ext.is_empty() && self.extensions.contains(&ext)
    }
}

impl Default for MediaExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_EXTENSIONS.iter().copied())
    }
}
