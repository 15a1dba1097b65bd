// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fmt::{Display, Formatter},
    sync::{Arc, LazyLock},
};

use crate::types::ScalarType;

pub const MONGO_ID_TYPE_NAME: &str = "MongoID";

static INT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| Arc::new(ScalarType::new("Int")));
static FLOAT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| Arc::new(ScalarType::new("Float")));
static STRING: LazyLock<Arc<ScalarType>> = LazyLock::new(|| Arc::new(ScalarType::new("String")));
static BOOLEAN: LazyLock<Arc<ScalarType>> =
    LazyLock::new(|| Arc::new(ScalarType::new("Boolean")));
static MONGO_ID: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(ScalarType::new(MONGO_ID_TYPE_NAME).with_description(
        "The `ID` scalar type represents a unique identifier of a document in a collection. \
         Identifiers are 12-byte ObjectId values, serialized as 24 hexadecimal characters.",
    ))
});

/// Scalars known to every schema. Each maps to a single shared `ScalarType` definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Int,
    Float,
    String,
    Boolean,
    /// The backing store's native identifier
    MongoId,
}

impl PrimitiveType {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "Int",
            PrimitiveType::Float => "Float",
            PrimitiveType::String => "String",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::MongoId => MONGO_ID_TYPE_NAME,
        }
    }

    pub fn scalar(&self) -> Arc<ScalarType> {
        match self {
            PrimitiveType::Int => INT.clone(),
            PrimitiveType::Float => FLOAT.clone(),
            PrimitiveType::String => STRING.clone(),
            PrimitiveType::Boolean => BOOLEAN.clone(),
            PrimitiveType::MongoId => MONGO_ID.clone(),
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The identifier scalar (`MongoID`).
pub fn mongo_id() -> Arc<ScalarType> {
    PrimitiveType::MongoId.scalar()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_shared() {
        assert!(Arc::ptr_eq(&mongo_id(), &mongo_id()));
        assert_eq!(mongo_id().name, "MongoID");
        assert_eq!(PrimitiveType::Boolean.scalar().name, "Boolean");
    }
}
