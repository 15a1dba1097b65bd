// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, indexmap::IndexMap};
use async_trait::async_trait;
use core_model::{
    primitive_type::mongo_id,
    type_composer::ObjectTypeComposer,
    types::{FieldConfig, ObjectType, TypeRef},
};
use document_model::{DocumentId, ID_FIELD, ModelError, Query, QueryOp, Record, RecordModel};
use tokio::sync::RwLock;
use tracing::debug;

use crate::SchemaField;

/// A named set of records sharing a schema.
#[derive(Debug)]
pub struct Collection {
    name: String,
    schema: Vec<SchemaField>,
    records: RwLock<IndexMap<DocumentId, Record>>,
}

impl Collection {
    pub fn new(name: impl Into<String>, schema: Vec<SchemaField>) -> Self {
        Self {
            name: name.into(),
            schema,
            records: RwLock::new(IndexMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &[SchemaField] {
        &self.schema
    }

    /// Validate and store a new record under a freshly generated id.
    ///
    /// Fields not in the schema are dropped.
    pub async fn insert(
        &self,
        mut fields: IndexMap<String, ConstValue>,
    ) -> Result<Record, ModelError> {
        let mut stored = IndexMap::with_capacity(self.schema.len());

        for field in &self.schema {
            let value = fields.shift_remove(&field.name);
            field.validate(value.as_ref())?;
            if let Some(value) = value {
                stored.insert(field.name.clone(), value);
            }
        }

        let record = Record::new(&self.name, DocumentId::new(), stored);
        debug!(collection = %self.name, id = %record.id(), "Inserted record");
        self.records
            .write()
            .await
            .insert(record.id(), record.clone());
        Ok(record)
    }

    pub async fn find_by_id(&self, id: DocumentId) -> Option<Record> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Remove every record.
    pub async fn drop_all(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl RecordModel for Collection {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, query: Query) -> Result<Option<Record>, ModelError> {
        if query.model_name() != self.name {
            return Err(ModelError::Generic(format!(
                "Query for model `{}` executed against collection `{}`",
                query.model_name(),
                self.name
            )));
        }

        match query.op() {
            QueryOp::FindOne => {
                let records = self.records.read().await;
                Ok(records
                    .values()
                    .find(|record| query.matches(record))
                    .map(|record| query.shape(record.clone())))
            }
            QueryOp::FindOneAndRemove => {
                // Find and remove under one write lock, so a record is removed at most once
                let mut records = self.records.write().await;
                let Some(id) = records
                    .values()
                    .find(|record| query.matches(record))
                    .map(Record::id)
                else {
                    return Ok(None);
                };

                let removed = records.shift_remove(&id);
                debug!(collection = %self.name, %id, "Removed record");
                Ok(removed.map(|record| query.shape(record)))
            }
        }
    }
}

/// An object type for the collection's records: `_id: MongoID!` followed by the schema fields.
pub fn compose_with_collection(collection: &Collection) -> ObjectTypeComposer {
    let typ = collection.schema.iter().fold(
        ObjectType::new(&collection.name)
            .with_field(ID_FIELD, FieldConfig::new(TypeRef::from(mongo_id()).non_null())),
        |typ, field| typ.with_field(&field.name, FieldConfig::new(field.type_ref())),
    );

    ObjectTypeComposer::new(typ)
}

#[cfg(test)]
mod tests {
    use core_model::{primitive_type::PrimitiveType, type_composer::TypeComposer};
    use test_log::test;

    use crate::FieldKind;

    use super::*;

    fn books() -> Collection {
        Collection::new(
            "Book",
            vec![
                SchemaField::new("title", FieldKind::Scalar(PrimitiveType::String)).required(),
                SchemaField::new("pages", FieldKind::Scalar(PrimitiveType::Int)),
                SchemaField::new("tags", FieldKind::List(PrimitiveType::String)),
            ],
        )
    }

    fn book(title: &str, pages: i32) -> IndexMap<String, ConstValue> {
        IndexMap::from_iter([
            ("title".to_string(), ConstValue::from(title)),
            ("pages".to_string(), ConstValue::Number(pages.into())),
        ])
    }

    #[test(tokio::test)]
    async fn insert_and_find() {
        let books = books();

        let inserted = books.insert(book("Dune", 412)).await.unwrap();

        assert_eq!(inserted.model_name(), "Book");
        assert_eq!(books.len().await, 1);
        assert_eq!(books.find_by_id(inserted.id()).await, Some(inserted));
        assert_eq!(books.find_by_id(DocumentId::new()).await, None);
    }

    #[test(tokio::test)]
    async fn insert_validates_against_schema() {
        let books = books();

        let mut missing_title = book("", 10);
        missing_title.shift_remove("title");
        assert!(books.insert(missing_title).await.is_err());

        let mut bad_pages = book("Dune", 0);
        bad_pages.insert("pages".to_string(), ConstValue::from("many"));
        let err = books.insert(bad_pages).await.unwrap_err();
        assert!(matches!(
            err,
            ModelError::Cast { kind: "Int", ref path, .. } if path == "pages"
        ));

        assert!(books.is_empty().await);
    }

    #[test(tokio::test)]
    async fn insert_drops_unknown_fields() {
        let books = books();
        let mut fields = book("Dune", 412);
        fields.insert("publisher".to_string(), ConstValue::from("Chilton"));

        let inserted = books.insert(fields).await.unwrap();

        assert_eq!(inserted.get("publisher"), None);
        assert_eq!(inserted.fields().len(), 2);
    }

    #[test(tokio::test)]
    async fn find_one_keeps_record() {
        let books = books();
        let dune = books.insert(book("Dune", 412)).await.unwrap();

        let found = books
            .find_by_id_query(&dune.id().into())
            .unwrap()
            .exec(&books)
            .await
            .unwrap();

        assert_eq!(found, Some(dune));
        assert_eq!(books.len().await, 1);
    }

    #[test(tokio::test)]
    async fn find_one_and_remove_removes_first_match() {
        let books = books();
        let dune = books.insert(book("Dune", 412)).await.unwrap();
        books.insert(book("Emma", 474)).await.unwrap();

        let removed = Query::find_one_and_remove("Book")
            .where_ne("title", "Emma")
            .exec(&books)
            .await
            .unwrap();

        assert_eq!(removed, Some(dune.clone()));
        assert_eq!(books.len().await, 1);
        assert_eq!(books.find_by_id(dune.id()).await, None);
    }

    #[test(tokio::test)]
    async fn removal_applies_projection() {
        let books = books();
        let dune = books.insert(book("Dune", 412)).await.unwrap();

        let removed = books
            .delete_by_id_query(&dune.id().into())
            .unwrap()
            .select(["pages"])
            .exec(&books)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(removed.id(), dune.id());
        assert_eq!(removed.get("title"), None);
        assert_eq!(removed.get("pages"), Some(ConstValue::Number(412.into())));
    }

    #[test(tokio::test)]
    async fn where_in_matches_any_value() {
        let books = books();
        books.insert(book("Dune", 412)).await.unwrap();
        let emma = books.insert(book("Emma", 474)).await.unwrap();

        let removed = Query::find_one_and_remove("Book")
            .where_in("title", [ConstValue::from("Emma"), ConstValue::from("Ulysses")])
            .exec(&books)
            .await
            .unwrap();

        assert_eq!(removed.map(|record| record.id()), Some(emma.id()));
    }

    #[test(tokio::test)]
    async fn rejects_queries_for_other_models() {
        let books = books();
        books.insert(book("Dune", 412)).await.unwrap();

        let result = Query::find_one_and_remove("User").exec(&books).await;

        assert!(matches!(result, Err(ModelError::Generic(_))));
        assert_eq!(books.len().await, 1);
    }

    #[test(tokio::test)]
    async fn drop_all() {
        let books = books();
        books.insert(book("Dune", 412)).await.unwrap();
        books.insert(book("Emma", 474)).await.unwrap();

        books.drop_all().await;

        assert!(books.is_empty().await);
    }

    #[test]
    fn composed_type() {
        let composer = compose_with_collection(&books());

        assert_eq!(composer.type_name(), "Book");
        assert_eq!(
            composer
                .typ()
                .fields
                .iter()
                .map(|(name, field)| format!("{name}: {}", field.typ))
                .collect::<Vec<_>>(),
            vec!["_id: MongoID!", "title: String!", "pages: Int", "tags: [String]"]
        );
        assert!(composer.has_field("tags"));
    }
}
