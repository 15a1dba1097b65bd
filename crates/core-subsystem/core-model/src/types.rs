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
    sync::Arc,
};

use async_graphql_value::indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An output object type such as `User` or `RemoveByIdUserPayload`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    /// Fields in declaration order
    pub fields: IndexMap<String, FieldConfig>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, field: FieldConfig) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub typ: TypeRef,
    pub description: Option<String>,
}

impl FieldConfig {
    pub fn new(typ: impl Into<TypeRef>) -> Self {
        Self {
            typ: typ.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A type that can be referred to by name in a schema.
///
/// Types are shared through `Arc`s, so that the same definition can be referenced from many
/// places (and compared by identity where that matters).
#[derive(Debug, Clone)]
pub enum NamedType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(scalar) => &scalar.name,
            NamedType::Object(object) => &object.name,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            NamedType::Object(object) => Some(object),
            NamedType::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        match self {
            NamedType::Scalar(scalar) => Some(scalar),
            NamedType::Object(_) => None,
        }
    }

    /// Is this the very same definition (not just an equal one)?
    pub fn ptr_eq(&self, other: &NamedType) -> bool {
        match (self, other) {
            (NamedType::Scalar(a), NamedType::Scalar(b)) => Arc::ptr_eq(a, b),
            (NamedType::Object(a), NamedType::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for NamedType {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        match (self, other) {
            (NamedType::Scalar(a), NamedType::Scalar(b)) => a == b,
            (NamedType::Object(a), NamedType::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Arc<ScalarType>> for NamedType {
    fn from(scalar: Arc<ScalarType>) -> Self {
        NamedType::Scalar(scalar)
    }
}

impl From<Arc<ObjectType>> for NamedType {
    fn from(object: Arc<ObjectType>) -> Self {
        NamedType::Object(object)
    }
}

impl From<ObjectType> for NamedType {
    fn from(object: ObjectType) -> Self {
        NamedType::Object(Arc::new(object))
    }
}

/// A reference to a named type, possibly wrapped in list and non-null modifiers.
///
/// As in GraphQL, a plain reference is nullable; `NonNull` removes the nullability of the type it
/// wraps.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Named(NamedType),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Wrap in `NonNull` unless already non-null.
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            _ => TypeRef::NonNull(Box::new(self)),
        }
    }

    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// The wrapped type, if this is a wrapper (`NonNull` or `List`).
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::NonNull(underlying) | TypeRef::List(underlying) => Some(underlying),
            TypeRef::Named(_) => None,
        }
    }

    /// The named type at the core of all the wrappers.
    pub fn named_type(&self) -> &NamedType {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::NonNull(underlying) | TypeRef::List(underlying) => underlying.named_type(),
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(named) => f.write_str(named.name()),
            TypeRef::NonNull(underlying) => write!(f, "{underlying}!"),
            TypeRef::List(underlying) => write!(f, "[{underlying}]"),
        }
    }
}

impl From<NamedType> for TypeRef {
    fn from(named: NamedType) -> Self {
        TypeRef::Named(named)
    }
}

impl From<Arc<ScalarType>> for TypeRef {
    fn from(scalar: Arc<ScalarType>) -> Self {
        TypeRef::Named(scalar.into())
    }
}

impl From<Arc<ObjectType>> for TypeRef {
    fn from(object: Arc<ObjectType>) -> Self {
        TypeRef::Named(object.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_type() -> Arc<ScalarType> {
        Arc::new(ScalarType::new("String"))
    }

    #[test]
    fn wrapped_types_display_like_graphql() {
        let typ = TypeRef::from(string_type()).non_null().list().non_null();

        assert_eq!(typ.to_string(), "[String!]!");
        assert_eq!(typ.named_type().name(), "String");
    }

    #[test]
    fn non_null_is_idempotent() {
        let typ = TypeRef::from(string_type()).non_null().non_null();

        assert_eq!(typ.to_string(), "String!");
        assert!(typ.is_non_null());
        assert!(!typ.of_type().unwrap().is_non_null());
    }

    #[test]
    fn equal_but_distinct_definitions() {
        let a = NamedType::from(ObjectType::new("User"));
        let b = NamedType::from(ObjectType::new("User"));

        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
        assert_ne!(a, NamedType::Scalar(Arc::new(ScalarType::new("User"))));
    }
}
