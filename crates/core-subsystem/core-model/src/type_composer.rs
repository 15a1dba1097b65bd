// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crate::types::{FieldConfig, ObjectType};

/// Names and shapes the GraphQL object type derived from one record schema.
///
/// Resolver factories use the composer to name their payload types (`RemoveById<TypeName>Payload`)
/// and to reference the record type from them.
pub trait TypeComposer: Send + Sync {
    fn type_name(&self) -> &str;
    fn typ(&self) -> Arc<ObjectType>;
}

/// A composer over an already built object type.
#[derive(Debug, Clone)]
pub struct ObjectTypeComposer {
    typ: Arc<ObjectType>,
}

impl ObjectTypeComposer {
    pub fn new(typ: ObjectType) -> Self {
        Self { typ: Arc::new(typ) }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.typ.has_field(name)
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldConfig> {
        self.typ.get_field(name)
    }
}

impl From<Arc<ObjectType>> for ObjectTypeComposer {
    fn from(typ: Arc<ObjectType>) -> Self {
        Self { typ }
    }
}

impl TypeComposer for ObjectTypeComposer {
    fn type_name(&self) -> &str {
        &self.typ.name
    }

    fn typ(&self) -> Arc<ObjectType> {
        self.typ.clone()
    }
}
