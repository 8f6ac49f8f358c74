//! Schema tree traversal
//!
//! `walk` performs a depth-first, pre-order pass over a forest of schema
//! nodes. What happens at each node is decided by a `WalkPolicy`:
//! - `accept` filters out a node together with its whole subtree
//! - `visit` handles an accepted node and reports whether descent stops there
//!
//! The walker itself keeps no state. Policies that derive per-branch state
//! (paths, naming prefixes) keep it in a `DepthStack`; this relies on the walk
//! finishing one branch before starting its next sibling.

mod context;
mod flatten;

pub mod api;
pub mod callback;
pub mod rpc;

pub use context::DepthStack;
pub use flatten::flatten;

use schema_tree::SchemaNode;

pub trait WalkPolicy<'a, N: SchemaNode> {
    fn accept(&self, node: &N) -> bool;

    /// Handle an accepted node found at `depth` (roots are at depth 0).
    ///
    /// Returning `true` marks the node as terminal: its children are not
    /// walked.
    fn visit(&mut self, node: &'a N, depth: usize) -> bool;
}

pub fn walk<'a, N, P>(roots: &'a [N], policy: &mut P)
where
    N: SchemaNode,
    P: WalkPolicy<'a, N>,
{
    for root in roots {
        walk_node(root, 0, policy);
    }
}

fn walk_node<'a, N, P>(node: &'a N, depth: usize, policy: &mut P)
where
    N: SchemaNode,
    P: WalkPolicy<'a, N>,
{
    if !policy.accept(node) {
        return;
    }
    if policy.visit(node, depth) {
        return;
    }
    for child in node.children() {
        walk_node(child, depth + 1, policy);
    }
}
