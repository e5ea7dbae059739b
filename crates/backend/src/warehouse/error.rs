use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// Single failure category of the warehouse reader.
///
/// Connection problems, absent tables and scan failures all collapse into
/// one descriptive message that names the underlying cause and the file
/// the caller should check. Callers render it as a warning; nothing here
/// is fatal to the process.
#[derive(Debug, Clone, Error)]
#[error("warehouse read failed: {cause}. Check that the warehouse file '{db_path}' is in place")]
pub struct DataAccessError {
    pub cause: String,
    pub db_path: String,
}

impl DataAccessError {
    pub fn new(cause: impl Display, db_path: &Path) -> Self {
        Self {
            cause: cause.to_string(),
            db_path: db_path.display().to_string(),
        }
    }
}
