pub mod error;
pub mod export;
pub mod loader;

pub use error::DataAccessError;
pub use loader::{initialize_loader, loader, TableLoader};
