pub mod bd;
pub mod columns;
pub mod provider;

pub use bd::BdProvider;
pub use columns::split_columns;
pub use provider::{DataError, DataProvider, Snapshot};
