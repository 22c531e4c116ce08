pub mod mediainfo;
pub mod render;

pub use mediainfo::{InspectError, MediaInspector};
pub use render::render_tree;
