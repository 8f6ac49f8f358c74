//! Serializable views of walk results, as printed by the command line

use indexmap::IndexMap;
use schema_tree::{NodeKind, ScalarType, SchemaNode};
use serde::Serialize;

use crate::type_map::{TypeMap, STORAGE_TYPES, STRUCT_MEMBERS, WIRE_TYPES};
use crate::walkers::api::ApiSurface;
use crate::walkers::rpc::RpcSignatures;

#[derive(Debug, Serialize)]
pub struct ApiField {
    pub name: String,
    pub kind: NodeKind,
    pub path: String,
    #[serde(rename = "type")]
    pub scalar_type: Option<ScalarType>,
    pub c_type: Option<&'static str>,
}

impl ApiField {
    fn from_node<N: SchemaNode>(node: &N) -> Self {
        let scalar_type = node.scalar_type();
        ApiField {
            name: node.name().to_string(),
            kind: node.kind(),
            path: node.data_path().to_string(),
            scalar_type,
            c_type: scalar_type.and_then(|t| STORAGE_TYPES.get(t)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiGroup {
    pub prefix: String,
    pub fields: Vec<ApiField>,
}

#[derive(Debug, Serialize)]
pub struct NotificationReport {
    pub name: String,
    pub path: String,
    pub fields: Vec<ApiField>,
}

#[derive(Debug, Serialize)]
pub struct NotificationGroupReport {
    pub prefix: String,
    pub notifications: Vec<NotificationReport>,
}

#[derive(Debug, Serialize)]
pub struct ApiReport {
    pub directories: Vec<String>,
    pub notif_directories: Vec<String>,
    pub field_groups: IndexMap<String, ApiGroup>,
    pub notifications: IndexMap<String, NotificationGroupReport>,
    pub api_filenames: Vec<String>,
    pub notif_filenames: Vec<String>,
}

impl ApiReport {
    pub fn from_surface<N: SchemaNode>(surface: &ApiSurface<'_, N>) -> Self {
        let display = |path: &std::path::Path| path.display().to_string();

        ApiReport {
            directories: surface
                .directories()
                .iter()
                .map(|p| display(p.as_path()))
                .collect(),
            notif_directories: surface
                .notif_directories()
                .into_iter()
                .map(display)
                .collect(),
            field_groups: surface
                .field_groups()
                .iter()
                .map(|(path, group)| {
                    let report = ApiGroup {
                        prefix: group.prefix().to_string(),
                        fields: group.fields().iter().map(|f| ApiField::from_node(*f)).collect(),
                    };
                    (display(path.as_path()), report)
                })
                .collect(),
            notifications: surface
                .notifications()
                .iter()
                .map(|(path, group)| {
                    let report = NotificationGroupReport {
                        prefix: group.prefix().to_string(),
                        notifications: group
                            .notifications()
                            .iter()
                            .map(|n| NotificationReport {
                                name: n.node().name().to_string(),
                                path: n.node().data_path().to_string(),
                                fields: n.fields().iter().map(|f| ApiField::from_node(*f)).collect(),
                            })
                            .collect(),
                    };
                    (display(path.as_path()), report)
                })
                .collect(),
            api_filenames: surface.api_filenames(),
            notif_filenames: surface.notif_filenames(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RpcField {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub scalar_type: Option<ScalarType>,
    pub sr_type: Option<&'static str>,
    pub struct_member: Option<&'static str>,
}

impl RpcField {
    fn from_node<N: SchemaNode>(node: &N) -> Self {
        let scalar_type = node.scalar_type();
        RpcField {
            name: node.name().to_string(),
            path: node.data_path().to_string(),
            scalar_type,
            sr_type: scalar_type.and_then(|t| WIRE_TYPES.get(t)),
            struct_member: scalar_type.and_then(|t| STRUCT_MEMBERS.get(t)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CallbackReport {
    pub name: String,
    pub path: String,
    pub callback: String,
    pub path_constant: String,
    pub input: Vec<RpcField>,
    pub output: Vec<RpcField>,
}

#[derive(Debug, Serialize)]
pub struct RpcReport {
    pub callbacks: Vec<CallbackReport>,
}

impl RpcReport {
    pub fn from_signatures<N: SchemaNode>(signatures: &RpcSignatures<'_, N>, prefix: &str) -> Self {
        RpcReport {
            callbacks: signatures
                .callbacks()
                .iter()
                .map(|descriptor| {
                    let callback = descriptor.callback();
                    CallbackReport {
                        name: callback.name().to_string(),
                        path: callback.path().to_string(),
                        callback: callback.callback_name(prefix),
                        path_constant: callback.path_constant(prefix),
                        input: descriptor.input().iter().map(|f| RpcField::from_node(*f)).collect(),
                        output: descriptor.output().iter().map(|f| RpcField::from_node(*f)).collect(),
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypesReport {
    pub storage: &'static TypeMap,
    pub wire: &'static TypeMap,
    pub struct_members: &'static TypeMap,
}

impl Default for TypesReport {
    fn default() -> Self {
        TypesReport {
            storage: &STORAGE_TYPES,
            wire: &WIRE_TYPES,
            struct_members: &STRUCT_MEMBERS,
        }
    }
}
