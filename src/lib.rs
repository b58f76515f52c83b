pub mod cli;
pub mod data;
pub mod model;
pub mod nav;
pub mod tui;
pub mod util;
