//! Stream document types for streamdex.
//!
//! A [`StoredDocument`] is a stream record exactly as the store holds it,
//! including the storage-internal `_id`. A [`PublicDocument`] is its public
//! projection: the same object with every storage-internal identifier removed.
//! Only public projections are compared, deduplicated and serialized.

use crate::config::{
    METADATA_FIELD, PATH_FIELD, SOURCE_NAME_FIELD, STORE_ID_FIELD, UUID_FIELD,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A stream record as held by the document store.
///
/// Carries `Path`, `uuid`, a `Metadata` sub-object with `SourceName`, and any
/// number of additional opaque fields. The store owns the `_id` field.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    fields: Map<String, Value>,
}

impl StoredDocument {
    /// Wraps a JSON value. Fails unless the value is a JSON object.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(format!(
                "stream document must be a JSON object, got {}",
                json_kind(&other)
            )),
        }
    }

    /// Hierarchical `/`-delimited path, if present and a string.
    pub fn path(&self) -> Option<&str> {
        self.fields.get(PATH_FIELD).and_then(Value::as_str)
    }

    /// Stable stream identifier, if present and a string.
    pub fn uuid(&self) -> Option<&str> {
        self.fields.get(UUID_FIELD).and_then(Value::as_str)
    }

    /// `Metadata.SourceName`, if present and a string.
    pub fn source_name(&self) -> Option<&str> {
        self.fields
            .get(METADATA_FIELD)
            .and_then(|m| m.get(SOURCE_NAME_FIELD))
            .and_then(Value::as_str)
    }

    /// Storage-internal identifier, if the store assigned one.
    pub fn storage_id(&self) -> Option<&Value> {
        self.fields.get(STORE_ID_FIELD)
    }

    /// Sets the storage-internal identifier.
    pub fn set_storage_id(&mut self, id: Value) {
        self.fields.insert(STORE_ID_FIELD.to_string(), id);
    }

    /// Returns the public projection of this document.
    pub fn public_projection(&self) -> PublicDocument {
        let mut fields = self.fields.clone();
        fields.remove(STORE_ID_FIELD);
        PublicDocument { fields }
    }
}

/// A stream document stripped of storage-internal identifiers.
///
/// Equality is JSON value equality over all remaining fields, so two stored
/// records that differ only by `_id` project to equal public documents.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicDocument {
    fields: Map<String, Value>,
}

impl PublicDocument {
    pub fn path(&self) -> Option<&str> {
        self.fields.get(PATH_FIELD).and_then(Value::as_str)
    }

    pub fn uuid(&self) -> Option<&str> {
        self.fields.get(UUID_FIELD).and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Serialize for PublicDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
