use ahash::AHashSet;
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use mediashelf_models::{AggregateCounts, ListingEntry};
use mediashelf_utils::MediaExtensions;

/// Renders `root` as a nested `<ul>` fragment and returns it together with
/// the recursive totals seen beneath `root`.
///
/// Children are visited depth-first in the order the OS returns them; no
/// sorting is applied. Every immediate child counts as one file unit in the
/// parent's totals, and a subdirectory additionally contributes its own
/// recursive totals. The output is a pure function of filesystem state at
/// call time.
#[must_use]
pub fn render_tree(root: &Path, extensions: &MediaExtensions) -> (Markup, AggregateCounts) {
    let mut visited = AHashSet::new();
    render_dir(root, extensions, &mut visited)
}

/// Renders one directory level, guarding against symlink cycles by tracking
/// the canonical paths currently on the visit path.
fn render_dir(
    dir: &Path,
    extensions: &MediaExtensions,
    visited: &mut AHashSet<PathBuf>,
) -> (Markup, AggregateCounts) {
    let canonical = match fs::canonicalize(dir) {
        Ok(canonical) => canonical,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "cannot resolve directory, rendering it empty");
            return empty_listing();
        }
    };

    if !visited.insert(canonical.clone()) {
        warn!(path = %dir.display(), "symlink cycle detected, skipping directory");
        return empty_listing();
    }

    let rendered = render_entries(dir, extensions, visited);
    visited.remove(&canonical);
    rendered
}

fn render_entries(
    dir: &Path,
    extensions: &MediaExtensions,
    visited: &mut AHashSet<PathBuf>,
) -> (Markup, AggregateCounts) {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "failed to read directory, rendering it empty");
            return empty_listing();
        }
    };

    let mut counts = AggregateCounts::default();
    let mut items: Vec<Markup> = Vec::new();

    for entry in reader {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        let entry = listing_entry(&entry);
        counts.add_file();

        if entry.is_dir {
            let (child_markup, child_counts) = render_dir(&entry.path, extensions, visited);
            counts.absorb(child_counts);
            items.push(html! {
                li {
                    span class="folder" data-path=(entry.path.display().to_string()) {
                        (entry.name) " "
                        span class="num-files" { (child_counts.to_string()) }
                    }
                    (child_markup)
                }
            });
        } else {
            let class = if extensions.classifies(&entry.name) {
                counts.add_video();
                "file type-video"
            } else {
                "file"
            };
            items.push(html! {
                li {
                    span class=(class) data-path=(entry.path.display().to_string()) { (entry.name) }
                }
            });
        }
    }

    let markup = html! {
        ul {
            @for item in &items { (item) }
        }
    };
    (markup, counts)
}

fn listing_entry(entry: &fs::DirEntry) -> ListingEntry {
    let path = entry.path();
    // Follows symlinks so a linked directory still renders as a folder;
    // unresolvable entries degrade to file leaves.
    let is_dir = fs::metadata(&path).map(|meta| meta.is_dir()).unwrap_or(false);

    ListingEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
        is_dir,
    }
}

fn empty_listing() -> (Markup, AggregateCounts) {
    (html! { ul {} }, AggregateCounts::default())
}
