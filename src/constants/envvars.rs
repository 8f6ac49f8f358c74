pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const PREFIX: &str = "SRGEN_PREFIX";
pub const SOURCE_DIR: &str = "SRGEN_SOURCE_DIR";
