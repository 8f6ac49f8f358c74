use schema_tree::{NodeKind, SchemaNode};

use super::callback::Callback;
use super::{flatten, walk, WalkPolicy};
use crate::helpers::to_c_variable;
use crate::type_map::{TypeMap, STRUCT_MEMBERS, WIRE_TYPES};

/// An RPC callback together with the leaves it receives and returns
#[derive(Debug)]
pub struct CallbackDescriptor<'a, N> {
    callback: Callback,
    input: Vec<&'a N>,
    output: Vec<&'a N>,
}

impl<'a, N> CallbackDescriptor<'a, N> {
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    pub fn input(&self) -> &[&'a N] {
        &self.input
    }

    pub fn output(&self) -> &[&'a N] {
        &self.output
    }
}

/// Single-pass builder of `RpcSignatures`
pub struct RpcWalker<'a, N> {
    callbacks: Vec<CallbackDescriptor<'a, N>>,
}

impl<'a, N: SchemaNode> RpcWalker<'a, N> {
    pub fn new() -> Self {
        RpcWalker {
            callbacks: Vec::new(),
        }
    }

    pub fn run(mut self, roots: &'a [N]) -> RpcSignatures<'a, N> {
        walk(roots, &mut self);
        log::debug!("RPC walk found {} callbacks", self.callbacks.len());
        RpcSignatures {
            callbacks: self.callbacks,
        }
    }
}

impl<'a, N: SchemaNode> Default for RpcWalker<'a, N> {
    fn default() -> Self {
        RpcWalker::new()
    }
}

impl<'a, N: SchemaNode> WalkPolicy<'a, N> for RpcWalker<'a, N> {
    fn accept(&self, node: &N) -> bool {
        node.kind() == NodeKind::Rpc
    }

    fn visit(&mut self, node: &'a N, _depth: usize) -> bool {
        let input = node.input().map(|io| flatten(io.children())).unwrap_or_default();
        let output = node.output().map(|io| flatten(io.children())).unwrap_or_default();

        log::debug!(
            "RPC '{}': {} input fields, {} output fields",
            node.data_path(),
            input.len(),
            output.len()
        );

        self.callbacks.push(CallbackDescriptor {
            callback: Callback::new(node.data_path(), to_c_variable(node.name())),
            input,
            output,
        });

        // input/output have been consumed above
        true
    }
}

#[derive(Debug)]
pub struct RpcSignatures<'a, N> {
    callbacks: Vec<CallbackDescriptor<'a, N>>,
}

impl<'a, N> RpcSignatures<'a, N> {
    /// Callbacks in RPC declaration order
    pub fn callbacks(&self) -> &[CallbackDescriptor<'a, N>] {
        &self.callbacks
    }

    /// sysrepo value type tag per YANG type
    pub fn types(&self) -> &'static TypeMap {
        &WIRE_TYPES
    }

    /// `sr_val_data_t` member per YANG type
    pub fn struct_types(&self) -> &'static TypeMap {
        &STRUCT_MEMBERS
    }
}

pub fn rpc_signatures<N: SchemaNode>(roots: &[N]) -> RpcSignatures<'_, N> {
    RpcWalker::new().run(roots)
}
