pub const LOG_LEVEL: &str = "info";
pub const SOURCE_DIR: &str = ".";

/// Generated API sources live under `<source-dir>/plugin/api`
pub const API_SUBDIR: [&str; 2] = ["plugin", "api"];
