use crate::kind::{NodeKind, ScalarType};

/// Read-only view of a compiled schema node
///
/// Children are returned in declaration order. `input()` and `output()` are
/// only meaningful for RPC nodes and return `None` for every other kind.
pub trait SchemaNode: Sized {
    fn kind(&self) -> NodeKind;
    fn name(&self) -> &str;
    fn children(&self) -> &[Self];
    /// True if the node holds operational state only (effective value,
    /// inherited from ancestors)
    fn is_config_false(&self) -> bool;
    fn data_path(&self) -> &str;
    fn input(&self) -> Option<&Self>;
    fn output(&self) -> Option<&Self>;
    /// Resolved base type; `None` unless the node is a leaf or leaf-list
    fn scalar_type(&self) -> Option<ScalarType>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    name: String,
    data_path: String,
    config_false: bool,
    scalar_type: Option<ScalarType>,
    children: Vec<Node>,
    input: Option<Box<Node>>,
    output: Option<Box<Node>>,
}

impl Node {
    fn new(kind: NodeKind, name: impl Into<String>, children: Vec<Node>) -> Self {
        Node {
            kind,
            name: name.into(),
            data_path: String::new(),
            config_false: false,
            scalar_type: None,
            children,
            input: None,
            output: None,
        }
    }

    pub fn container(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeKind::Container, name, children)
    }

    pub fn list(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeKind::List, name, children)
    }

    pub fn leaf(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Node {
            scalar_type: Some(scalar_type),
            ..Node::new(NodeKind::Leaf, name, Vec::new())
        }
    }

    pub fn leaf_list(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Node {
            scalar_type: Some(scalar_type),
            ..Node::new(NodeKind::LeafList, name, Vec::new())
        }
    }

    pub fn notification(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeKind::Notification, name, children)
    }

    /// RPC with its `input` and `output` statements.
    ///
    /// Both subtree roots always exist, even when the statement is missing
    /// from the schema.
    pub fn rpc(name: impl Into<String>, input: Vec<Node>, output: Vec<Node>) -> Self {
        Node {
            input: Some(Box::new(Node::other("input", input))),
            output: Some(Box::new(Node::other("output", output))),
            ..Node::new(NodeKind::Rpc, name, Vec::new())
        }
    }

    pub fn other(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(NodeKind::Other, name, children)
    }

    /// Mark the node as holding operational state only
    pub fn config_false(mut self) -> Self {
        self.config_false = true;
        self
    }

    /// Fill in data paths and inherited config flags for this subtree
    fn resolve(&mut self, data_path: String, parent_config_false: bool) {
        self.data_path = data_path;
        self.config_false |= parent_config_false;

        for child in self.children.iter_mut() {
            let path = format!("{}/{}", self.data_path, child.name);
            child.resolve(path, self.config_false);
        }

        // input/output are schema-only statements; their children live
        // directly under the RPC in data paths
        let rpc_path = &self.data_path;
        for io in [self.input.as_deref_mut(), self.output.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            io.data_path = rpc_path.clone();
            for child in io.children.iter_mut() {
                let path = format!("{rpc_path}/{}", child.name);
                child.resolve(path, false);
            }
        }
    }
}

impl SchemaNode for Node {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_config_false(&self) -> bool {
        self.config_false
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn input(&self) -> Option<&Self> {
        self.input.as_deref()
    }

    fn output(&self) -> Option<&Self> {
        self.output.as_deref()
    }

    fn scalar_type(&self) -> Option<ScalarType> {
        self.scalar_type
    }
}

/// A compiled module: the forest of its top-level data nodes
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    name: String,
    nodes: Vec<Node>,
}

impl Module {
    pub fn new(name: impl Into<String>, mut nodes: Vec<Node>) -> Self {
        let name = name.into();
        for node in nodes.iter_mut() {
            // top-level nodes are qualified with the module name
            let path = format!("/{name}:{}", node.name);
            node.resolve(path, false);
        }
        Module { name, nodes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
