use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::kind::{NodeKind, ScalarType};
use crate::node::{Module, Node};

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("could not parse schema JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("could not read schema file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Deserialize)]
struct RawModule {
    module: String,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    kind: NodeKind,
    name: String,
    #[serde(default = "default_config")]
    config: bool,
    #[serde(rename = "type")]
    scalar_type: Option<ScalarType>,
    #[serde(default)]
    children: Vec<RawNode>,
    #[serde(default)]
    input: Vec<RawNode>,
    #[serde(default)]
    output: Vec<RawNode>,
}

fn default_config() -> bool {
    true
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            kind,
            name,
            config,
            scalar_type,
            children,
            input,
            output,
        } = raw;
        let convert = |nodes: Vec<RawNode>| -> Vec<Node> { nodes.into_iter().map(Node::from).collect() };
        let scalar_type = scalar_type.unwrap_or(ScalarType::Unknown);

        let node = match kind {
            NodeKind::Container => Node::container(name, convert(children)),
            NodeKind::List => Node::list(name, convert(children)),
            NodeKind::Leaf => Node::leaf(name, scalar_type),
            NodeKind::LeafList => Node::leaf_list(name, scalar_type),
            NodeKind::Notification => Node::notification(name, convert(children)),
            NodeKind::Rpc => Node::rpc(name, convert(input), convert(output)),
            NodeKind::Other => Node::other(name, convert(children)),
        };
        if config {
            node
        } else {
            node.config_false()
        }
    }
}

/// Parse a module from its JSON schema document
pub fn from_str(schema_raw: &str) -> Result<Module, SchemaError> {
    let raw = serde_json::from_str::<RawModule>(schema_raw)?;
    log::debug!(
        "Parsed module '{}' with {} top-level nodes",
        raw.module,
        raw.nodes.len()
    );
    Ok(Module::new(
        raw.module,
        raw.nodes.into_iter().map(Node::from).collect(),
    ))
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Module, SchemaError> {
    let path = path.as_ref();
    let schema_raw = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&schema_raw)
}
