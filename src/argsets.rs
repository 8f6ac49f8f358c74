use std::path::PathBuf;

pub struct ApiArgs {
    pub schema: PathBuf,
    pub prefix: Option<String>,
    pub source_dir: Option<PathBuf>,
}

pub struct RpcArgs {
    pub schema: PathBuf,
    pub prefix: Option<String>,
}
