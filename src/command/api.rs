use anyhow::Result;
use srgen::helpers::settings;
use srgen::report::ApiReport;
use srgen::walkers::api::api_surface;

use super::resolve_prefix;
use crate::argsets::ApiArgs;

pub fn api(args: ApiArgs) -> Result<()> {
    let module = schema_tree::from_path(&args.schema)?;
    let prefix = resolve_prefix(args.prefix, &module);
    let source_dir = args.source_dir.unwrap_or_else(settings::source_dir);

    let surface = api_surface(&prefix, &source_dir, module.nodes());
    log::info!(
        "Module '{}': {} API directories, {} notification groups",
        module.name(),
        surface.directories().len(),
        surface.notifications().len()
    );

    let report = ApiReport::from_surface(&surface);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
