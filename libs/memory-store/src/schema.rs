// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::ConstValue;
use core_model::{primitive_type::PrimitiveType, types::TypeRef};
use document_model::{DocumentId, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(PrimitiveType),
    List(PrimitiveType),
}

impl FieldKind {
    fn accepts(&self, value: &ConstValue) -> bool {
        match (self, value) {
            (FieldKind::Scalar(primitive), value) => primitive_accepts(*primitive, value),
            (FieldKind::List(primitive), ConstValue::List(values)) => values
                .iter()
                .all(|value| primitive_accepts(*primitive, value)),
            (FieldKind::List(_), _) => false,
        }
    }
}

fn primitive_accepts(primitive: PrimitiveType, value: &ConstValue) -> bool {
    match (primitive, value) {
        (PrimitiveType::Int, ConstValue::Number(n)) => n.is_i64() || n.is_u64(),
        (PrimitiveType::Float, ConstValue::Number(_)) => true,
        (PrimitiveType::String, ConstValue::String(_)) => true,
        (PrimitiveType::Boolean, ConstValue::Boolean(_)) => true,
        (PrimitiveType::MongoId, value) => DocumentId::from_value(value).is_ok(),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The GraphQL type of the field as exposed on the collection's object type.
    pub fn type_ref(&self) -> TypeRef {
        let typ = match self.kind {
            FieldKind::Scalar(primitive) => TypeRef::from(primitive.scalar()),
            FieldKind::List(primitive) => TypeRef::from(primitive.scalar()).list(),
        };

        if self.required { typ.non_null() } else { typ }
    }

    /// Check a (possibly absent) value against this field.
    pub(crate) fn validate(&self, value: Option<&ConstValue>) -> Result<(), ModelError> {
        match value {
            None | Some(ConstValue::Null) if self.required => Err(ModelError::Generic(format!(
                "Path `{}` is required.",
                self.name
            ))),
            None | Some(ConstValue::Null) => Ok(()),
            Some(value) if self.kind.accepts(value) => Ok(()),
            Some(value) => Err(ModelError::Cast {
                kind: match self.kind {
                    FieldKind::Scalar(primitive) | FieldKind::List(primitive) => primitive.name(),
                },
                value: value.to_string(),
                path: self.name.clone(),
            }),
        }
    }
}
