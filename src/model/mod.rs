pub mod config;
pub mod issue;
pub mod summary;

pub use config::*;
pub use issue::*;
pub use summary::*;
