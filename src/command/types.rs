use anyhow::Result;
use srgen::report::TypesReport;

pub fn types() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&TypesReport::default())?);
    Ok(())
}
