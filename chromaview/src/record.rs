//! Raw and normalized record sets.
//!
//! A collection reply carries four parallel arrays (ids, documents, metadatas,
//! embeddings). The store does not guarantee that any of them is present, that
//! each is an array, or that the arrays agree in length. [`normalize`] turns
//! whatever arrived into a [`NormalizedRecordSet`] that is safe to index.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::{BridgeError, Result};

/// One field of a store reply, as it was received.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// The field was a JSON array.
    List(Vec<JsonValue>),
    /// The field was present but held something other than an array.
    WrongType(JsonValue),
    /// The field was missing or `null`.
    #[default]
    Absent,
}

impl FieldValue {
    fn from_json(value: Option<JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => FieldValue::Absent,
            Some(JsonValue::Array(items)) => FieldValue::List(items),
            Some(other) => FieldValue::WrongType(other),
        }
    }

    /// Collapse to a list, discarding anything that was not one.
    pub fn into_list(self) -> Vec<JsonValue> {
        match self {
            FieldValue::List(items) => items,
            FieldValue::WrongType(_) | FieldValue::Absent => Vec::new(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

impl From<Vec<JsonValue>> for FieldValue {
    fn from(items: Vec<JsonValue>) -> Self {
        FieldValue::List(items)
    }
}

/// Record set exactly as the store returned it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecordSet {
    pub ids: FieldValue,
    pub documents: FieldValue,
    pub metadatas: FieldValue,
    pub embeddings: FieldValue,
}

impl RawRecordSet {
    /// Split a store reply into its four fields.
    ///
    /// Fails only when the reply is not a JSON object; individual fields are
    /// never validated here.
    pub fn from_json(reply: JsonValue) -> Result<Self> {
        match reply {
            JsonValue::Object(map) => Ok(Self::from_map(map)),
            other => Err(BridgeError::data_shape(format!(
                "Invalid data format from ChromaDB: expected an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    fn from_map(mut map: Map<String, JsonValue>) -> Self {
        Self {
            ids: FieldValue::from_json(map.remove("ids")),
            documents: FieldValue::from_json(map.remove("documents")),
            metadatas: FieldValue::from_json(map.remove("metadatas")),
            embeddings: FieldValue::from_json(map.remove("embeddings")),
        }
    }
}

/// Record set whose core fields all describe the same records.
///
/// `ids`, `documents` and `metadatas` always have the same length; `embeddings`
/// is never longer than that but may be shorter.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedRecordSet {
    pub ids: Vec<JsonValue>,
    pub documents: Vec<JsonValue>,
    pub metadatas: Vec<JsonValue>,
    pub embeddings: Vec<JsonValue>,
}

impl NormalizedRecordSet {
    /// Number of aligned records.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Align the core fields of a raw record set and bound its embeddings.
///
/// Returns the normalized set together with its core length, the shortest of
/// the three core field lengths. Trailing entries beyond that length are
/// dropped; nothing is ever padded.
pub fn normalize(raw: RawRecordSet) -> (NormalizedRecordSet, usize) {
    let mut ids = raw.ids.into_list();
    let mut documents = raw.documents.into_list();
    let mut metadatas = raw.metadatas.into_list();
    let mut embeddings = raw.embeddings.into_list();

    let core_len = ids.len().min(documents.len()).min(metadatas.len());
    let widest = ids.len().max(documents.len()).max(metadatas.len());

    if core_len != widest {
        tracing::warn!(
            ids = ids.len(),
            documents = documents.len(),
            metadatas = metadatas.len(),
            core_len,
            "Core field lengths disagree, truncating to the shortest"
        );
        ids.truncate(core_len);
        documents.truncate(core_len);
        metadatas.truncate(core_len);
    }

    if embeddings.len() > core_len {
        embeddings.truncate(core_len);
    } else if embeddings.len() < core_len {
        tracing::info!(
            embeddings = embeddings.len(),
            core_len,
            "Embeddings shorter than core data, passing through"
        );
    }

    (
        NormalizedRecordSet {
            ids,
            documents,
            metadatas,
            embeddings,
        },
        core_len,
    )
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
