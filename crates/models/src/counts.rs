use std::fmt;

/// Per-directory totals computed bottom-up during a single render pass.
///
/// Every immediate child of a directory counts as one file unit; a
/// subdirectory additionally contributes its own recursive totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCounts {
    pub files: usize,
    pub videos: usize,
}

impl AggregateCounts {
    pub fn add_file(&mut self) {
        self.files += 1;
    }

    pub fn add_video(&mut self) {
        self.videos += 1;
    }

    /// Folds a subdirectory's totals into this directory's totals.
    pub fn absorb(&mut self, other: Self) {
        self.files += other.files;
        self.videos += other.videos;
    }
}

impl fmt::Display for AggregateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} files, {} videos)", self.files, self.videos)
    }
}
