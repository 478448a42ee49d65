use std::sync::Arc;

use crate::error::{RecordError, RecordResult};
use crate::models::{FieldMap, PageQuery, Record, Resource};
use crate::repository::RecordRepository;

/// Service layer for record business logic
///
/// Carries the [`Resource`] descriptor so every message names the
/// collection it belongs to.
#[derive(Clone)]
pub struct RecordService<R: RecordRepository> {
    repository: Arc<R>,
    resource: Resource,
}

// Clients may echo records back at us; the id lives in the primary key
// column, never inside the JSONB payload.
fn strip_id(mut fields: FieldMap) -> FieldMap {
    fields.remove("id");
    fields
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(repository: R, resource: Resource) -> Self {
        Self {
            repository: Arc::new(repository),
            resource,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Save a new record and return the whole collection alongside it.
    pub async fn create(&self, fields: FieldMap) -> RecordResult<(String, Vec<Record>)> {
        self.repository.insert(strip_id(fields)).await?;
        let records = self.repository.find_all().await?;

        tracing::info!(
            resource = self.resource.slug,
            total = records.len(),
            "Record created"
        );
        Ok((self.resource.created_msg(), records))
    }

    /// List one page of records; an empty page is reported as not found.
    pub async fn list(&self, page: PageQuery) -> RecordResult<Vec<Record>> {
        let records = self.repository.find_page(page).await?;

        if records.is_empty() {
            return Err(RecordError::NotFound(self.resource.none_found_msg()));
        }
        Ok(records)
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: i32) -> RecordResult<Record> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RecordError::NotFound(self.resource.missing_msg(id)))
    }

    /// Merge the given fields over an existing record.
    pub async fn update(&self, id: i32, fields: FieldMap) -> RecordResult<(String, Record)> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RecordError::NotFound(self.resource.update_missing_msg(id)))?;

        let mut merged = existing.fields;
        for (key, value) in strip_id(fields) {
            merged.insert(key, value);
        }

        let record = self.repository.save_fields(id, merged).await?;

        tracing::info!(resource = self.resource.slug, record_id = id, "Record updated");
        Ok((self.resource.updated_msg(id), record))
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: i32) -> RecordResult<String> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RecordError::NotFound(self.resource.missing_msg(id)))?;

        let removed = self.repository.delete(id).await?;
        if !removed {
            // Lost a race with a concurrent delete.
            return Err(RecordError::NotFound(self.resource.missing_msg(id)));
        }

        tracing::info!(resource = self.resource.slug, record_id = id, "Record deleted");
        Ok(self.resource.deleted_msg(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRecordRepository, MockRecordRepository};
    use serde_json::json;

    fn fields(value: serde_json::Value) -> FieldMap {
        value.as_object().unwrap().clone()
    }

    fn service() -> RecordService<InMemoryRecordRepository> {
        RecordService::new(InMemoryRecordRepository::new(), Resource::ALERTS)
    }

    #[tokio::test]
    async fn test_create_returns_full_collection() {
        let service = service();
        service.create(fields(json!({"magnitude": 2.4}))).await.unwrap();

        let (msg, records) = service
            .create(fields(json!({"magnitude": 5.1})))
            .await
            .unwrap();

        assert_eq!(msg, "Alert successfully saved");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fields["magnitude"], json!(5.1));
    }

    #[tokio::test]
    async fn test_create_strips_client_supplied_id() {
        let service = service();
        let (_, records) = service
            .create(fields(json!({"id": 42, "station": "A1"})))
            .await
            .unwrap();

        assert_eq!(records[0].id, 1);
        assert!(!records[0].fields.contains_key("id"));
    }

    #[tokio::test]
    async fn test_list_empty_collection_is_not_found() {
        let service = service();
        let err = service.list(PageQuery::default()).await.unwrap_err();

        assert_eq!(err.to_string(), "No alerts found");
        assert!(matches!(err, RecordError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let service = service();
        let err = service.get(7).await.unwrap_err();

        assert_eq!(err.to_string(), "No alert with the id: 7 found");
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let service = service();
        service
            .create(fields(json!({"station": "A1", "magnitude": 2.0})))
            .await
            .unwrap();

        let (msg, record) = service
            .update(1, fields(json!({"magnitude": 3.5})))
            .await
            .unwrap();

        assert_eq!(msg, "Alert with the id: 1 successfully updated");
        assert_eq!(record.fields["station"], json!("A1"));
        assert_eq!(record.fields["magnitude"], json!(3.5));
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let service = service();
        let err = service.update(3, fields(json!({"x": 1}))).await.unwrap_err();

        assert_eq!(err.to_string(), "Alert with id: 3 not found");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        service.create(fields(json!({"x": 1}))).await.unwrap();

        let msg = service.delete(1).await.unwrap();
        assert_eq!(msg, "Alert with the id: 1 successfully deleted");

        let err = service.get(1).await.unwrap_err();
        assert_eq!(err.to_string(), "No alert with the id: 1 found");
    }

    #[tokio::test]
    async fn test_delete_race_reports_not_found() {
        let mut repo = MockRecordRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Record {
                id,
                fields: FieldMap::new(),
            }))
        });
        repo.expect_delete().returning(|_| Ok(false));

        let service = RecordService::new(repo, Resource::ALERTS);
        let err = service.delete(5).await.unwrap_err();

        assert_eq!(err.to_string(), "No alert with the id: 5 found");
    }
}
