use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

use mediashelf_core::render_tree;
use mediashelf_models::AggregateCounts;
use mediashelf_utils::MediaExtensions;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap();
}

#[test]
fn test_library_wide_totals() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    touch(&root.join("inbox.txt"));
    touch(&root.join("movies/heat.mkv"));
    touch(&root.join("movies/notes.md"));
    touch(&root.join("shows/s01/e01.mp4"));
    touch(&root.join("shows/s01/e02.mp4"));
    touch(&root.join("shows/artwork.png"));

    let (markup, counts) = render_tree(root, &MediaExtensions::default());
    let html = markup.into_string();

    // movies: 2 children -> (2, 1); shows/s01: (2, 2);
    // shows: artwork + s01 unit + s01 totals -> (4, 2);
    // root: inbox + movies unit + shows unit + their totals -> (9, 3).
    assert_eq!(counts, AggregateCounts { files: 9, videos: 3 });
    assert!(html.contains("(2 files, 1 videos)"));
    assert!(html.contains("(4 files, 2 videos)"));
    assert!(html.contains("(2 files, 2 videos)"));
}

#[test]
fn test_markup_nests_sublists_inside_folder_items() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("movies/heat.mkv"));

    let (markup, _) = render_tree(root, &MediaExtensions::default());
    let html = markup.into_string();

    // The folder span and its sublist live inside the same <li>.
    let li_start = html.find("<li>").unwrap();
    let folder = html.find("class=\"folder\"").unwrap();
    let sublist = html.rfind("<ul>").unwrap();
    assert!(li_start < folder);
    assert!(folder < sublist);
    assert!(html.contains("data-path="));
}

#[test]
fn test_custom_extension_set_drives_classification() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("clip.webm"));
    touch(&root.join("movie.mp4"));

    let extensions = MediaExtensions::new(["webm"]);
    let (markup, counts) = render_tree(root, &extensions);
    let html = markup.into_string();

    assert_eq!(counts, AggregateCounts { files: 2, videos: 1 });
    assert!(html.contains("clip.webm"));
    // mp4 is not in the configured set, so it renders as a plain file.
    assert!(html.contains("<span class=\"file\" data-path="));
}

#[test]
fn test_renderer_reflects_current_filesystem_state() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("first.mkv"));

    let (_, before) = render_tree(root, &MediaExtensions::default());
    touch(&root.join("second.mkv"));
    let (_, after) = render_tree(root, &MediaExtensions::default());

    // No caching: each render sees the filesystem as it is now.
    assert_eq!(before, AggregateCounts { files: 1, videos: 1 });
    assert_eq!(after, AggregateCounts { files: 2, videos: 2 });
}
