use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The caller-supplied portion of a record: arbitrary top-level JSON fields.
///
/// No field names or value types are enforced at this layer; the store is
/// the implicit schema authority.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// A stored record: server-assigned integer primary key plus opaque fields.
///
/// Serializes flat, `{"id": 7, "station": "A1", ...}`, so the wire shape
/// matches what the caller submitted with the id added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    pub id: i32,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: FieldMap,
}

/// Display strings for one resource kind.
///
/// The controller logic is identical for both kinds; every user-visible
/// difference between them is captured here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// URL segment the resource is mounted under
    pub slug: &'static str,
    /// Noun used in the create confirmation ("Alert", "Raw data")
    created: &'static str,
    /// Lowercase noun used in lookup misses ("alert", "data")
    singular: &'static str,
    /// Capitalized noun used in update/delete confirmations
    titled: &'static str,
    /// Plural noun used when a listing comes back empty
    empty: &'static str,
}

impl Resource {
    pub const ALERTS: Resource = Resource {
        slug: "earthquake-alerts",
        created: "Alert",
        singular: "alert",
        titled: "Alert",
        empty: "alerts",
    };

    pub const RAW_DATA: Resource = Resource {
        slug: "raw-data",
        created: "Raw data",
        singular: "data",
        titled: "Data",
        empty: "data",
    };

    pub fn created_msg(&self) -> String {
        format!("{} successfully saved", self.created)
    }

    pub fn none_found_msg(&self) -> String {
        format!("No {} found", self.empty)
    }

    pub fn missing_msg(&self, id: i32) -> String {
        format!("No {} with the id: {} found", self.singular, id)
    }

    pub fn update_missing_msg(&self, id: i32) -> String {
        format!("{} with id: {} not found", self.titled, id)
    }

    pub fn updated_msg(&self, id: i32) -> String {
        format!("{} with the id: {} successfully updated", self.titled, id)
    }

    pub fn deleted_msg(&self, id: i32) -> String {
        format!("{} with the id: {} successfully deleted", self.titled, id)
    }
}

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Pagination and sorting parameters for bulk listings.
///
/// `amount` is the page size, `page` is 1-based. Ordering applies only when
/// both `sortBy` and `sortOrder` are supplied; otherwise the store's natural
/// order is used.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(rename_all = "camelCase")]
pub struct PageQuery {
    pub amount: u64,
    pub page: u64,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            amount: 25,
            page: 1,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl PageQuery {
    pub fn take(&self) -> u64 {
        self.amount
    }

    /// `(page - 1) * amount`; a page of 0 is clamped to the first page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1) * self.amount
    }

    /// The ordering to apply, when both parameters were supplied.
    pub fn order(&self) -> Option<(&str, SortOrder)> {
        match (self.sort_by.as_deref(), self.sort_order) {
            (Some(field), Some(order)) => Some((field, order)),
            _ => None,
        }
    }
}
