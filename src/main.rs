mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;
use srgen::constants::{defaults, envvars};
use srgen::helpers::load_dotenv;

const CMD_API: &str = "api";
const CMD_RPC: &str = "rpc";
const CMD_TYPES: &str = "types";

const OPT_PREFIX: &str = "--prefix";
const OPT_SOURCE_DIR: &str = "--source-dir";

fn main() -> Result<()> {
    let dotenv_path = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    let result = match args.subcommand()?.as_deref() {
        Some(CMD_API) => command::api(argsets::ApiArgs {
            prefix: args.opt_value_from_str(OPT_PREFIX)?,
            source_dir: args.opt_value_from_str(OPT_SOURCE_DIR)?,
            schema: args.free_from_str()?,
        }),
        Some(CMD_RPC) => command::rpc(argsets::RpcArgs {
            prefix: args.opt_value_from_str(OPT_PREFIX)?,
            schema: args.free_from_str()?,
        }),
        Some(CMD_TYPES) => command::types(),
        _ => Err(anyhow!("Subcommand must be one of 'api', 'rpc', 'types'")),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        log::warn!("Ignoring unused arguments: {:?}", unused);
    }
    result
}
