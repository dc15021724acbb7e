//! Mapping between todo domain values and BSON documents.
//!
//! Stored documents look like
//! `{ _id: ObjectId, description: String, completed: Bool, created_at: Date }`.
//! Documents written by other clients may omit fields; reads fall back to an
//! empty description, `completed = false`, and no timestamp. The `_id` field
//! is the only one that must be present; keys other than ObjectIds are kept
//! in string form so such documents still list.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};

use crate::domain::ports::TodoRepositoryError;
use crate::domain::{Todo, TodoDraft, TodoId};

pub(crate) const ID_FIELD: &str = "_id";
pub(crate) const DESCRIPTION_FIELD: &str = "description";
pub(crate) const COMPLETED_FIELD: &str = "completed";
pub(crate) const CREATED_AT_FIELD: &str = "created_at";

/// Convert a store identifier into a domain identifier.
pub(crate) fn todo_id_from_bson(value: &Bson) -> Result<TodoId, TodoRepositoryError> {
    match value {
        Bson::ObjectId(oid) => Ok(TodoId::from_bytes(oid.bytes())),
        other => Err(TodoRepositoryError::corrupt(format!(
            "expected ObjectId identifier, found {:?}",
            other.element_type()
        ))),
    }
}

/// String form of a stored key as it appears in API responses.
fn stored_id_to_string(value: &Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(key) => key.clone(),
        other => other.to_string(),
    }
}

/// Filter selecting the document with `id`.
pub(crate) fn id_filter(id: &TodoId) -> Document {
    doc! { ID_FIELD: ObjectId::from_bytes(id.bytes()) }
}

/// Build the document inserted for a new todo.
pub(crate) fn draft_to_document(draft: &TodoDraft) -> Document {
    doc! {
        DESCRIPTION_FIELD: draft.description().as_str(),
        COMPLETED_FIELD: draft.completed(),
        CREATED_AT_FIELD: bson::DateTime::from_millis(draft.created_at().timestamp_millis()),
    }
}

/// Read a stored document back into a [`Todo`].
pub(crate) fn todo_from_document(document: &Document) -> Result<Todo, TodoRepositoryError> {
    let id = document
        .get(ID_FIELD)
        .map(stored_id_to_string)
        .ok_or_else(|| TodoRepositoryError::corrupt("stored todo has no _id"))?;

    let description = document
        .get_str(DESCRIPTION_FIELD)
        .map(str::to_owned)
        .unwrap_or_default();
    let completed = document.get_bool(COMPLETED_FIELD).unwrap_or(false);
    let created_at = document
        .get_datetime(CREATED_AT_FIELD)
        .ok()
        .and_then(|at| DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis()));

    Ok(Todo {
        id,
        description,
        completed,
        created_at,
    })
}
