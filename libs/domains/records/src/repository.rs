use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::RecordResult;
use crate::models::{FieldMap, PageQuery, Record, SortOrder};

/// Repository trait for record persistence
///
/// One implementor per backing store; the controller never sees anything
/// below this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a new record; the store assigns the id.
    async fn insert(&self, fields: FieldMap) -> RecordResult<Record>;

    /// Fetch the entire collection in natural order.
    async fn find_all(&self) -> RecordResult<Vec<Record>>;

    /// Fetch one page, ordered per the query when it asks for ordering.
    async fn find_page(&self, page: PageQuery) -> RecordResult<Vec<Record>>;

    /// Fetch a record by primary key.
    async fn find_by_id(&self, id: i32) -> RecordResult<Option<Record>>;

    /// Replace the fields of an existing record, id unchanged.
    async fn save_fields(&self, id: i32, fields: FieldMap) -> RecordResult<Record>;

    /// Delete by primary key; false if no row existed.
    async fn delete(&self, id: i32) -> RecordResult<bool>;
}

#[derive(Debug, Default)]
struct Rows {
    next_id: i32,
    by_id: BTreeMap<i32, FieldMap>,
}

/// In-memory implementation of RecordRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordRepository {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// Postgres orders JSONB lookups via `->>`, which yields text; render values
// the same way here so both repositories sort identically.
fn sort_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_by_field(a: &Record, b: &Record, field: &str, order: SortOrder) -> Ordering {
    if field == "id" {
        let cmp = a.id.cmp(&b.id);
        return match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        };
    }

    let a_key = a.fields.get(field).map(sort_text);
    let b_key = b.fields.get(field).map(sort_text);

    // Missing values behave like SQL NULLs: last ascending, first descending.
    match (a_key, b_key) {
        (Some(a_key), Some(b_key)) => match order {
            SortOrder::Asc => a_key.cmp(&b_key),
            SortOrder::Desc => b_key.cmp(&a_key),
        },
        (Some(_), None) => match order {
            SortOrder::Asc => Ordering::Less,
            SortOrder::Desc => Ordering::Greater,
        },
        (None, Some(_)) => match order {
            SortOrder::Asc => Ordering::Greater,
            SortOrder::Desc => Ordering::Less,
        },
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert(&self, fields: FieldMap) -> RecordResult<Record> {
        let mut rows = self.rows.write().await;
        rows.next_id += 1;
        let id = rows.next_id;
        rows.by_id.insert(id, fields.clone());

        tracing::debug!(record_id = id, "Inserted record");
        Ok(Record { id, fields })
    }

    async fn find_all(&self) -> RecordResult<Vec<Record>> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .iter()
            .map(|(id, fields)| Record {
                id: *id,
                fields: fields.clone(),
            })
            .collect())
    }

    async fn find_page(&self, page: PageQuery) -> RecordResult<Vec<Record>> {
        let mut records = self.find_all().await?;

        if let Some((field, order)) = page.order() {
            records.sort_by(|a, b| compare_by_field(a, b, field, order));
        }

        Ok(records
            .into_iter()
            .skip(page.skip() as usize)
            .take(page.take() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RecordResult<Option<Record>> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.get(&id).map(|fields| Record {
            id,
            fields: fields.clone(),
        }))
    }

    async fn save_fields(&self, id: i32, fields: FieldMap) -> RecordResult<Record> {
        let mut rows = self.rows.write().await;
        rows.by_id.insert(id, fields.clone());

        tracing::debug!(record_id = id, "Updated record");
        Ok(Record { id, fields })
    }

    async fn delete(&self, id: i32) -> RecordResult<bool> {
        let mut rows = self.rows.write().await;
        let removed = rows.by_id.remove(&id).is_some();

        if removed {
            tracing::debug!(record_id = id, "Deleted record");
        }
        Ok(removed)
    }
}
