//! Constant lookup tables from YANG base types to the names used in
//! generated C sources
//!
//! A `None` entry means the type has no representation in that table; the
//! emission stage decides whether to template around it or give up.

use schema_tree::ScalarType;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug)]
pub struct TypeMap(&'static [(ScalarType, Option<&'static str>)]);

impl TypeMap {
    pub fn get(&self, scalar_type: ScalarType) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(t, _)| *t == scalar_type)
            .and_then(|(_, name)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScalarType, Option<&'static str>)> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for TypeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (scalar_type, name) in self.iter() {
            map.serialize_entry(scalar_type.as_str(), &name)?;
        }
        map.end()
    }
}

/// In-memory storage types for API structs
pub static STORAGE_TYPES: TypeMap = TypeMap(&[
    (ScalarType::Unknown, Some("void *")),
    (ScalarType::Binary, Some("void *")),
    (ScalarType::Uint8, Some("uint8_t")),
    (ScalarType::Uint16, Some("uint16_t")),
    (ScalarType::Uint32, Some("uint32_t")),
    (ScalarType::Uint64, Some("uint64_t")),
    (ScalarType::String, Some("char *")),
    (ScalarType::Bits, None),
    (ScalarType::Boolean, Some("uint8_t")),
    (ScalarType::Decimal64, Some("double")),
    (ScalarType::Empty, Some("void")),
    (ScalarType::Enumeration, Some("char *")),
    (ScalarType::Identityref, Some("char *")),
    (ScalarType::InstanceId, None),
    (ScalarType::Leafref, None),
    (ScalarType::Union, Some("void *")),
    (ScalarType::Int8, Some("int8_t")),
    (ScalarType::Int16, Some("int16_t")),
    (ScalarType::Int32, Some("int32_t")),
    (ScalarType::Int64, Some("int64_t")),
]);

/// sysrepo value type tags (`sr_val_type_t`)
pub static WIRE_TYPES: TypeMap = TypeMap(&[
    (ScalarType::Unknown, Some("SR_UNKNOWN_T")),
    (ScalarType::Binary, Some("SR_BINARY_T")),
    (ScalarType::Uint8, Some("SR_UINT8_T")),
    (ScalarType::Uint16, Some("SR_UINT16_T")),
    (ScalarType::Uint32, Some("SR_UINT32_T")),
    (ScalarType::Uint64, Some("SR_UINT64_T")),
    (ScalarType::String, Some("SR_STRING_T")),
    (ScalarType::Bits, Some("SR_BITS_T")),
    (ScalarType::Boolean, Some("SR_BOOL_T")),
    (ScalarType::Decimal64, Some("SR_DECIMAL64_T")),
    (ScalarType::Empty, Some("SR_LEAF_EMPTY_T")),
    (ScalarType::Enumeration, Some("SR_ENUM_T")),
    (ScalarType::Identityref, Some("SR_IDENTITY_REF_T")),
    (ScalarType::InstanceId, Some("SR_INSTANCEID_T")),
    (ScalarType::Leafref, Some("SR_UNKNOWN_T")),
    (ScalarType::Union, Some("SR_UNKNOWN_T")),
    (ScalarType::Int8, Some("SR_INT8_T")),
    (ScalarType::Int16, Some("SR_INT16_T")),
    (ScalarType::Int32, Some("SR_INT32_T")),
    (ScalarType::Int64, Some("SR_INT64_T")),
]);

/// Member of the `sr_val_data_t` union holding a value of the type
pub static STRUCT_MEMBERS: TypeMap = TypeMap(&[
    (ScalarType::Unknown, None),
    (ScalarType::Binary, Some("binary_val")),
    (ScalarType::Uint8, Some("uint8_val")),
    (ScalarType::Uint16, Some("uint16_val")),
    (ScalarType::Uint32, Some("uint32_val")),
    (ScalarType::Uint64, Some("uint64_val")),
    (ScalarType::String, Some("string_val")),
    (ScalarType::Bits, Some("bits_val")),
    (ScalarType::Boolean, Some("bool_val")),
    (ScalarType::Decimal64, Some("decimal64_val")),
    (ScalarType::Empty, None),
    (ScalarType::Enumeration, Some("enum_val")),
    (ScalarType::Identityref, Some("identityref_val")),
    (ScalarType::InstanceId, Some("instanceid_val")),
    (ScalarType::Leafref, None),
    (ScalarType::Union, None),
    (ScalarType::Int8, Some("int8_val")),
    (ScalarType::Int16, Some("int16_val")),
    (ScalarType::Int32, Some("int32_val")),
    (ScalarType::Int64, Some("int64_val")),
]);
