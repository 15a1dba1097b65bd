// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, Name, indexmap::IndexMap};
use serde::Serialize;

use crate::{DocumentId, ID_FIELD};

/// A document read from (or removed from) a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(skip)]
    model_name: String,
    #[serde(rename = "_id")]
    id: DocumentId,
    #[serde(flatten)]
    fields: IndexMap<String, ConstValue>,
}

impl Record {
    pub fn new(
        model_name: impl Into<String>,
        id: DocumentId,
        fields: IndexMap<String, ConstValue>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            id,
            fields,
        }
    }

    /// Name of the model (collection) this record belongs to.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Value of a field; `_id` is reported in its hex form.
    pub fn get(&self, field: &str) -> Option<ConstValue> {
        if field == ID_FIELD {
            Some(self.id.into())
        } else {
            self.fields.get(field).cloned()
        }
    }

    pub fn fields(&self) -> &IndexMap<String, ConstValue> {
        &self.fields
    }

    /// A copy restricted to the given fields. The id is always kept.
    pub fn project(&self, fields: &[String]) -> Record {
        Record {
            model_name: self.model_name.clone(),
            id: self.id,
            fields: self
                .fields
                .iter()
                .filter(|(name, _)| fields.contains(name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }

    /// The record as a GraphQL object value, `_id` first.
    pub fn to_value(&self) -> ConstValue {
        let mut object = IndexMap::with_capacity(self.fields.len() + 1);
        object.insert(Name::new(ID_FIELD), self.id.into());
        for (name, value) in &self.fields {
            object.insert(Name::new(name), value.clone());
        }
        ConstValue::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Record {
        let fields = IndexMap::from_iter([
            ("name".to_string(), ConstValue::String("userName1".into())),
            ("relocation".to_string(), ConstValue::Boolean(true)),
        ]);
        Record::new(
            "User",
            "5a0000000000000000000001".parse().unwrap(),
            fields,
        )
    }

    #[test]
    fn id_is_a_field() {
        let user = user();

        assert_eq!(
            user.get("_id"),
            Some(ConstValue::String("5a0000000000000000000001".into()))
        );
        assert_eq!(user.get("relocation"), Some(ConstValue::Boolean(true)));
        assert_eq!(user.get("missing"), None);
    }

    #[test]
    fn projection_keeps_id() {
        let projected = user().project(&["name".to_string()]);

        assert_eq!(projected.fields().len(), 1);
        assert_eq!(projected.id(), user().id());
        assert_eq!(projected.model_name(), "User");
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(user()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "_id": "5a0000000000000000000001",
                "name": "userName1",
                "relocation": true,
            })
        );
    }
}
