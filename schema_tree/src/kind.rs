use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Container,
    List,
    Leaf,
    LeafList,
    Notification,
    Rpc,
    /// Any statement without dedicated handling (choice, case, anydata,
    /// RPC input/output roots, ...).
    ///
    /// Walkers pass through these nodes: nothing is recorded for them, but
    /// their children are still visited with the surrounding context.
    #[serde(other)]
    Other,
}

/// Built-in YANG base types a leaf can resolve to
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum ScalarType {
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "uint8")]
    Uint8,
    #[serde(rename = "uint16")]
    Uint16,
    #[serde(rename = "uint32")]
    Uint32,
    #[serde(rename = "uint64")]
    Uint64,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "bits")]
    Bits,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "decimal64")]
    Decimal64,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "enumeration")]
    Enumeration,
    #[serde(rename = "identityref")]
    Identityref,
    #[serde(rename = "instance-id")]
    InstanceId,
    #[serde(rename = "leafref")]
    Leafref,
    #[serde(rename = "union")]
    Union,
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    /// Anything that is not a built-in base type (typedefs, `inet:*`, ...)
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl ScalarType {
    pub const ALL: [ScalarType; 20] = [
        ScalarType::Unknown,
        ScalarType::Binary,
        ScalarType::Uint8,
        ScalarType::Uint16,
        ScalarType::Uint32,
        ScalarType::Uint64,
        ScalarType::String,
        ScalarType::Bits,
        ScalarType::Boolean,
        ScalarType::Decimal64,
        ScalarType::Empty,
        ScalarType::Enumeration,
        ScalarType::Identityref,
        ScalarType::InstanceId,
        ScalarType::Leafref,
        ScalarType::Union,
        ScalarType::Int8,
        ScalarType::Int16,
        ScalarType::Int32,
        ScalarType::Int64,
    ];

    /// YANG keyword for the type
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::Unknown => "unknown",
            ScalarType::Binary => "binary",
            ScalarType::Uint8 => "uint8",
            ScalarType::Uint16 => "uint16",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::String => "string",
            ScalarType::Bits => "bits",
            ScalarType::Boolean => "boolean",
            ScalarType::Decimal64 => "decimal64",
            ScalarType::Empty => "empty",
            ScalarType::Enumeration => "enumeration",
            ScalarType::Identityref => "identityref",
            ScalarType::InstanceId => "instance-id",
            ScalarType::Leafref => "leafref",
            ScalarType::Union => "union",
            ScalarType::Int8 => "int8",
            ScalarType::Int16 => "int16",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
