mod api;
mod rpc;
mod types;

pub use api::api;
pub use rpc::rpc;
pub use types::types;

use schema_tree::Module;
use srgen::helpers::{settings, to_c_variable};

/// Command-line prefix, then `SRGEN_PREFIX`, then the module name
fn resolve_prefix(flag: Option<String>, module: &Module) -> String {
    flag.or_else(settings::prefix)
        .unwrap_or_else(|| to_c_variable(module.name()))
}
