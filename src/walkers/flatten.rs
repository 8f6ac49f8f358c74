use schema_tree::{NodeKind, SchemaNode};

/// Collect the leaves and leaf-lists below `nodes`, looking through any
/// container, list or pass-through level in between.
///
/// Fields come out in declaration order. Notifications and RPCs cannot occur
/// inside RPC input/output or notification bodies and are skipped.
pub fn flatten<N: SchemaNode>(nodes: &[N]) -> Vec<&N> {
    let mut fields = Vec::new();
    // reversed so the first declared node is popped first
    let mut pending: Vec<&N> = nodes.iter().rev().collect();

    while let Some(node) = pending.pop() {
        match node.kind() {
            NodeKind::Leaf | NodeKind::LeafList => fields.push(node),
            NodeKind::Container | NodeKind::List | NodeKind::Other => {
                pending.extend(node.children().iter().rev())
            }
            NodeKind::Notification | NodeKind::Rpc => {
                log::warn!("Skipping {:?} '{}' while flattening", node.kind(), node.data_path())
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use schema_tree::{Module, Node, ScalarType};

    use super::*;

    fn names<'a>(fields: &[&'a Node]) -> Vec<&'a str> {
        fields.iter().map(|f| f.name()).collect()
    }

    #[test]
    fn nested_levels_keep_declaration_order() {
        let module = Module::new(
            "m",
            vec![
                Node::leaf("first", ScalarType::String),
                Node::container(
                    "outer",
                    vec![
                        Node::list(
                            "inner",
                            vec![
                                Node::leaf("second", ScalarType::Uint8),
                                Node::leaf_list("third", ScalarType::String),
                            ],
                        ),
                        Node::leaf("fourth", ScalarType::Boolean),
                    ],
                ),
                Node::other("choice", vec![Node::leaf("fifth", ScalarType::Int64)]),
                Node::leaf("sixth", ScalarType::Empty),
            ],
        );

        assert_eq!(
            names(&flatten(module.nodes())),
            vec!["first", "second", "third", "fourth", "fifth", "sixth"]
        );
    }

    #[test]
    fn empty_groupings_contribute_nothing() {
        let module = Module::new(
            "m",
            vec![Node::container("a", vec![Node::list("b", Vec::new())])],
        );
        assert!(flatten(module.nodes()).is_empty());
    }
}
