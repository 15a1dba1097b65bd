// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, Name, indexmap::IndexMap};
use core_model::{
    primitive_type::mongo_id,
    type_composer::TypeComposer,
    type_storage::TypeStorage,
    types::{FieldConfig, NamedType, ObjectType},
};
use document_model::Record;
use serde::Serialize;

/// `RemoveById<TypeName>Payload`
pub fn remove_by_id_payload_name(type_composer: &dyn TypeComposer) -> String {
    format!("RemoveById{}Payload", type_composer.type_name())
}

/// The output type of `removeById` for the composer's record type.
///
/// Built on first use and kept in `type_storage`; whatever is already stored under the payload name
/// is returned as is.
pub fn remove_by_id_payload_type(
    type_composer: &dyn TypeComposer,
    type_storage: &TypeStorage,
) -> NamedType {
    let name = remove_by_id_payload_name(type_composer);

    type_storage.get_or_set(&name, || {
        ObjectType::new(&name)
            .with_field(
                "recordId",
                FieldConfig::new(mongo_id()).with_description("Removed document ID"),
            )
            .with_field(
                "record",
                FieldConfig::new(type_composer.typ()).with_description("Removed document"),
            )
            .into()
    })
}

/// Result of `removeById`. Removing an id that doesn't exist is not an error: `record` is `None`
/// and `record_id` still echoes the requested id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveByIdPayload {
    pub record_id: ConstValue,
    pub record: Option<Record>,
}

impl RemoveByIdPayload {
    pub fn to_value(&self) -> ConstValue {
        let record = self
            .record
            .as_ref()
            .map(Record::to_value)
            .unwrap_or(ConstValue::Null);

        ConstValue::Object(IndexMap::from_iter([
            (Name::new("recordId"), self.record_id.clone()),
            (Name::new("record"), record),
        ]))
    }
}
