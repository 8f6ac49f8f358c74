use anyhow::Result;
use srgen::report::RpcReport;
use srgen::walkers::rpc::rpc_signatures;

use super::resolve_prefix;
use crate::argsets::RpcArgs;

pub fn rpc(args: RpcArgs) -> Result<()> {
    let module = schema_tree::from_path(&args.schema)?;
    let prefix = resolve_prefix(args.prefix, &module);

    let signatures = rpc_signatures(module.nodes());
    if signatures.callbacks().is_empty() {
        log::warn!("Module '{}' declares no RPCs", module.name());
    } else {
        log::info!(
            "Module '{}': {} RPC callbacks",
            module.name(),
            signatures.callbacks().len()
        );
    }

    let report = RpcReport::from_signatures(&signatures, &prefix);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
