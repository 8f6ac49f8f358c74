#![allow(dead_code)]
// Each test binary only uses some of these fixtures

use once_cell::sync::Lazy;
use schema_tree::{Module, Node, NodeKind, ScalarType, SchemaNode};

pub const PREFIX: &str = "system";
pub const SOURCE_DIR: &str = "/src";
pub const API_DIR: &str = "/src/plugin/api";

pub const SYSTEM_SCHEMA: &str = r#"
{
    "module": "ietf-system",
    "nodes": [
        {
            "kind": "container",
            "name": "system",
            "children": [
                { "kind": "leaf", "name": "contact", "type": "string" },
                { "kind": "leaf", "name": "hostname", "type": "string" },
                {
                    "kind": "container",
                    "name": "clock",
                    "children": [
                        {
                            "kind": "choice",
                            "name": "timezone",
                            "children": [
                                { "kind": "leaf", "name": "timezone-name", "type": "string" },
                                { "kind": "leaf", "name": "timezone-utc-offset", "type": "int16" }
                            ]
                        }
                    ]
                },
                {
                    "kind": "container",
                    "name": "ntp",
                    "children": [
                        { "kind": "leaf", "name": "enabled", "type": "boolean" },
                        {
                            "kind": "list",
                            "name": "server",
                            "children": [
                                { "kind": "leaf", "name": "name", "type": "string" },
                                { "kind": "leaf", "name": "address", "type": "union" }
                            ]
                        }
                    ]
                },
                {
                    "kind": "container",
                    "name": "dns-resolver",
                    "children": [
                        { "kind": "leaf-list", "name": "search", "type": "string" },
                        {
                            "kind": "list",
                            "name": "server",
                            "children": [
                                { "kind": "leaf", "name": "name", "type": "string" }
                            ]
                        },
                        {
                            "kind": "container",
                            "name": "options",
                            "children": [
                                { "kind": "leaf", "name": "timeout", "type": "uint8" },
                                { "kind": "leaf", "name": "attempts", "type": "uint8" }
                            ]
                        }
                    ]
                },
                {
                    "kind": "container",
                    "name": "authentication",
                    "children": [
                        {
                            "kind": "list",
                            "name": "user",
                            "children": [
                                { "kind": "leaf", "name": "name", "type": "string" },
                                { "kind": "leaf", "name": "password", "type": "string" }
                            ]
                        }
                    ]
                }
            ]
        },
        {
            "kind": "container",
            "name": "system-state",
            "config": false,
            "children": [
                {
                    "kind": "container",
                    "name": "platform",
                    "children": [
                        { "kind": "leaf", "name": "os-name", "type": "string" },
                        {
                            "kind": "notification",
                            "name": "platform-changed",
                            "children": [
                                { "kind": "leaf", "name": "os-release", "type": "string" }
                            ]
                        }
                    ]
                },
                {
                    "kind": "container",
                    "name": "clock",
                    "children": [
                        { "kind": "leaf", "name": "current-datetime", "type": "string" }
                    ]
                }
            ]
        },
        {
            "kind": "container",
            "name": "alarms",
            "children": [
                {
                    "kind": "notification",
                    "name": "alarm-raised",
                    "children": [
                        { "kind": "leaf", "name": "severity", "type": "enumeration" },
                        {
                            "kind": "container",
                            "name": "source",
                            "children": [
                                { "kind": "leaf", "name": "resource", "type": "string" }
                            ]
                        }
                    ]
                }
            ]
        },
        {
            "kind": "notification",
            "name": "system-event",
            "children": [
                { "kind": "leaf", "name": "event-kind", "type": "enumeration" }
            ]
        },
        {
            "kind": "rpc",
            "name": "set-current-datetime",
            "input": [
                { "kind": "leaf", "name": "current-datetime", "type": "string" }
            ]
        },
        { "kind": "rpc", "name": "system-restart" },
        { "kind": "rpc", "name": "system-shutdown" },
        {
            "kind": "rpc",
            "name": "get-status",
            "input": [
                { "kind": "leaf", "name": "verbose", "type": "boolean" }
            ],
            "output": [
                {
                    "kind": "container",
                    "name": "status",
                    "children": [
                        {
                            "kind": "list",
                            "name": "interface",
                            "children": [
                                { "kind": "leaf", "name": "name", "type": "string" },
                                { "kind": "leaf", "name": "up", "type": "boolean" }
                            ]
                        },
                        { "kind": "leaf", "name": "uptime", "type": "uint64" }
                    ]
                }
            ]
        }
    ]
}
"#;

pub static SYSTEM: Lazy<Module> = Lazy::new(|| schema_tree::from_str(SYSTEM_SCHEMA).unwrap());

/// device > port > speed
pub fn device_module() -> Module {
    Module::new(
        "device-mgmt",
        vec![Node::container(
            "device",
            vec![Node::list(
                "port",
                vec![Node::leaf("speed", ScalarType::Uint32)],
            )],
        )],
    )
}

/// `configure-ntp` takes a choice between a server address and a pool name
pub fn ntp_rpc_module() -> Module {
    Module::new(
        "ntp-ops",
        vec![Node::rpc(
            "configure-ntp",
            vec![
                Node::other(
                    "source",
                    vec![
                        Node::other("server", vec![Node::leaf("address", ScalarType::String)]),
                        Node::other(
                            "pool",
                            vec![
                                Node::leaf("pool-name", ScalarType::String),
                                Node::leaf("max-servers", ScalarType::Uint8),
                            ],
                        ),
                    ],
                ),
                Node::leaf("prefer", ScalarType::Boolean),
            ],
            vec![Node::other(
                "result",
                vec![Node::other("applied", vec![Node::leaf("ok", ScalarType::Empty)])],
            )],
        )],
    )
}

/// Leaves reachable from `nodes` through containers, lists and
/// pass-through levels (choice, case), counted recursively
pub fn scalar_count(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node.kind() {
            NodeKind::Leaf | NodeKind::LeafList => 1,
            NodeKind::Container | NodeKind::List | NodeKind::Other => {
                scalar_count(node.children())
            }
            NodeKind::Notification | NodeKind::Rpc => 0,
        })
        .sum()
}

pub fn names<'a>(fields: &[&'a Node]) -> Vec<&'a str> {
    fields.iter().map(|f| f.name()).collect()
}
