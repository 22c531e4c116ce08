use std::path::PathBuf;

/// One filesystem child as seen during a single render pass.
///
/// Built fresh on every traversal and never persisted; non-UTF-8 names are
/// carried lossily.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}
