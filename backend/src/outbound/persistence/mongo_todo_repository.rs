//! MongoDB-backed [`TodoRepository`] adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use tracing::debug;

use super::connector::MongoConnector;
use super::mongo_error_mapping::map_mongo_error;
use super::todo_document::{
    COMPLETED_FIELD, CREATED_AT_FIELD, draft_to_document, id_filter, todo_from_document,
    todo_id_from_bson,
};
use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDraft, TodoId};

/// Repository storing todos in the `todos` collection.
#[derive(Clone, Debug)]
pub struct MongoTodoRepository {
    connector: MongoConnector,
}

impl MongoTodoRepository {
    /// Create a repository over an established connector.
    pub fn new(connector: MongoConnector) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn list_newest_first(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let documents: Vec<Document> = self
            .connector
            .collection()
            .find(doc! {})
            .sort(doc! { CREATED_AT_FIELD: -1 })
            .await
            .map_err(|err| map_mongo_error(&err))?
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        debug!(count = documents.len(), "loaded todo documents");
        documents.iter().map(todo_from_document).collect()
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError> {
        let result = self
            .connector
            .collection()
            .insert_one(draft_to_document(draft))
            .await
            .map_err(|err| map_mongo_error(&err))?;
        todo_id_from_bson(&result.inserted_id)
    }

    async fn set_completed(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<bool, TodoRepositoryError> {
        let result = self
            .connector
            .collection()
            .update_one(id_filter(id), doc! { "$set": { COMPLETED_FIELD: completed } })
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError> {
        let result = self
            .connector
            .collection()
            .delete_one(id_filter(id))
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(result.deleted_count > 0)
    }
}
