//! Derive the layout of a generated sysrepo plugin from a YANG schema tree
//!
//! Two independent walks run over a module's top-level nodes:
//! - `walkers::api` lays out one API directory per configuration container
//!   and list, with the fields and notifications each one handles
//! - `walkers::rpc` flattens every RPC into a callback with its input and
//!   output leaves
//!
//! Nothing here writes generated sources; the results are read by whatever
//! renders the templates.

pub mod constants;
pub mod helpers;
pub mod report;
pub mod type_map;
pub mod walkers;
