use std::path::PathBuf;

/// Load a local `.env`, if there is one
///
/// Runs before the logger is set up, so the loaded path is handed back for
/// the caller to report.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
