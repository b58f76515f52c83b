pub mod collapse;
pub mod entries;
pub mod layout;
pub mod select;
pub mod tree;

pub use collapse::is_hidden;
pub use entries::{DrawerRow, Entry, drawer_rows, visible_entries};
pub use layout::{
    DrawerLayout, column_lines, drawer_layout, list_height, rows_per_page, title_lines,
    wrap_title,
};
pub use select::ListState;
pub use tree::{Tree, build_tree};
