//! SeaORM entities for the two record tables.
//!
//! Both tables have the same two columns: an auto-increment integer primary
//! key and a JSONB column holding the caller-supplied fields as-is. The
//! [`JsonRecordEntity`] trait is the seam that lets one Postgres repository
//! serve both.

use sea_orm::entity::prelude::*;

use crate::models::{FieldMap, Record};

/// Bridge between a concrete two-column entity and the generic repository.
pub trait JsonRecordEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn fields_column() -> Self::Column;
    /// Active model for an insert; the id is left to the database.
    fn new_row(fields: Json) -> Self::ActiveModel;
    /// Active model replacing the fields of an existing row.
    fn replace_row(id: i32, fields: Json) -> Self::ActiveModel;
    fn into_record(model: Self::Model) -> Record;
}

fn object_fields(value: Json) -> FieldMap {
    match value {
        Json::Object(map) => map,
        // The fields column only ever stores objects; anything else would
        // come from manual writes outside the API.
        _ => FieldMap::new(),
    }
}

pub mod alerts {
    use super::*;
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "earthquake_alerts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "JsonBinary")]
        pub fields: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl JsonRecordEntity for Entity {
        fn id_column() -> Column {
            Column::Id
        }

        fn fields_column() -> Column {
            Column::Fields
        }

        fn new_row(fields: Json) -> ActiveModel {
            ActiveModel {
                id: NotSet,
                fields: Set(fields),
            }
        }

        fn replace_row(id: i32, fields: Json) -> ActiveModel {
            ActiveModel {
                id: Unchanged(id),
                fields: Set(fields),
            }
        }

        fn into_record(model: Model) -> Record {
            Record {
                id: model.id,
                fields: super::object_fields(model.fields),
            }
        }
    }
}

pub mod raw_data {
    use super::*;
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "raw_data")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "JsonBinary")]
        pub fields: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl JsonRecordEntity for Entity {
        fn id_column() -> Column {
            Column::Id
        }

        fn fields_column() -> Column {
            Column::Fields
        }

        fn new_row(fields: Json) -> ActiveModel {
            ActiveModel {
                id: NotSet,
                fields: Set(fields),
            }
        }

        fn replace_row(id: i32, fields: Json) -> ActiveModel {
            ActiveModel {
                id: Unchanged(id),
                fields: Set(fields),
            }
        }

        fn into_record(model: Model) -> Record {
            Record {
                id: model.id,
                fields: super::object_fields(model.fields),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_converts_to_flat_record() {
        let model = alerts::Model {
            id: 4,
            fields: json!({"magnitude": 5.1}),
        };

        let record = <alerts::Entity as JsonRecordEntity>::into_record(model);
        assert_eq!(record.id, 4);
        assert_eq!(record.fields["magnitude"], 5.1);
    }

    #[test]
    fn test_non_object_fields_collapse_to_empty() {
        let model = raw_data::Model {
            id: 1,
            fields: json!([1, 2, 3]),
        };

        let record = <raw_data::Entity as JsonRecordEntity>::into_record(model);
        assert!(record.fields.is_empty());
    }
}
