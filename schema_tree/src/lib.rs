//! In-memory YANG schema trees
//!
//! This crate holds the read-only representation the walkers in `srgen`
//! operate on:
//! - `SchemaNode`: the capability interface a schema node has to offer
//! - `Node` / `Module`: an owned, acyclic tree implementing it
//! - `from_str` / `from_path`: loading a module from a JSON schema document
//!
//! Loading resolves effective data paths and inherited `config false` flags,
//! so consumers never need to look at a node's ancestors.

mod kind;
mod loader;
mod node;

pub use kind::{NodeKind, ScalarType};
pub use loader::{from_path, from_str, SchemaError};
pub use node::{Module, Node, SchemaNode};
