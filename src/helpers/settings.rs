//! Defaults for command-line options that may also come from the environment

use std::{env, path::PathBuf};

use crate::constants::{defaults, envvars};

/// Naming prefix from `SRGEN_PREFIX`, if set and non-empty
pub fn prefix() -> Option<String> {
    env::var(envvars::PREFIX).ok().filter(|p| !p.is_empty())
}

pub fn source_dir() -> PathBuf {
    env::var(envvars::SOURCE_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::SOURCE_DIR))
}
