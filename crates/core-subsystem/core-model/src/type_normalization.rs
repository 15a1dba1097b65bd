// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Conversion of generated types into `async_graphql_parser` definitions and SDL text, for code
//! that assembles the final schema document.

use async_graphql_parser::{
    Pos, Positioned,
    types::{BaseType, FieldDefinition, ObjectType as ObjectTypeKind, Type, TypeDefinition, TypeKind},
};
use async_graphql_value::Name;

use crate::types::{FieldConfig, NamedType, ObjectType, ScalarType, TypeRef};

pub fn default_positioned<T>(value: T) -> Positioned<T> {
    Positioned::new(value, Pos::default())
}

pub fn default_positioned_name(value: &str) -> Positioned<Name> {
    default_positioned(Name::new(value))
}

pub trait TypeDefinitionProvider {
    fn type_definition(&self) -> TypeDefinition;
}

impl TypeRef {
    pub fn to_graphql_type(&self) -> Type {
        match self {
            TypeRef::Named(named) => Type {
                base: BaseType::Named(Name::new(named.name())),
                nullable: true,
            },
            TypeRef::NonNull(underlying) => Type {
                nullable: false,
                ..underlying.to_graphql_type()
            },
            TypeRef::List(underlying) => Type {
                base: BaseType::List(Box::new(underlying.to_graphql_type())),
                nullable: true,
            },
        }
    }
}

fn field_definition(name: &str, field: &FieldConfig) -> FieldDefinition {
    FieldDefinition {
        description: field.description.clone().map(default_positioned),
        name: default_positioned_name(name),
        arguments: vec![],
        ty: default_positioned(field.typ.to_graphql_type()),
        directives: vec![],
    }
}

impl TypeDefinitionProvider for ObjectType {
    fn type_definition(&self) -> TypeDefinition {
        let fields = self
            .fields
            .iter()
            .map(|(name, field)| default_positioned(field_definition(name, field)))
            .collect();

        TypeDefinition {
            extend: false,
            description: self.description.clone().map(default_positioned),
            name: default_positioned_name(&self.name),
            directives: vec![],
            kind: TypeKind::Object(ObjectTypeKind {
                implements: vec![],
                fields,
            }),
        }
    }
}

impl TypeDefinitionProvider for ScalarType {
    fn type_definition(&self) -> TypeDefinition {
        TypeDefinition {
            extend: false,
            description: self.description.clone().map(default_positioned),
            name: default_positioned_name(&self.name),
            directives: vec![],
            kind: TypeKind::Scalar,
        }
    }
}

impl TypeDefinitionProvider for NamedType {
    fn type_definition(&self) -> TypeDefinition {
        match self {
            NamedType::Scalar(scalar) => scalar.type_definition(),
            NamedType::Object(object) => object.type_definition(),
        }
    }
}

fn push_description(sdl: &mut String, description: &Option<String>, indent: &str) {
    if let Some(description) = description {
        sdl.push_str(indent);
        sdl.push_str("\"\"\"");
        // A block string ends at the first unescaped `"""`
        sdl.push_str(&description.replace("\"\"\"", "\\\"\"\""));
        sdl.push_str("\"\"\"\n");
    }
}

impl ObjectType {
    /// Render as an SDL type definition.
    pub fn to_sdl(&self) -> String {
        let mut sdl = String::new();
        push_description(&mut sdl, &self.description, "");

        if self.fields.is_empty() {
            sdl.push_str(&format!("type {}", self.name));
            return sdl;
        }

        sdl.push_str(&format!("type {} {{\n", self.name));
        for (name, field) in &self.fields {
            push_description(&mut sdl, &field.description, "  ");
            sdl.push_str(&format!("  {name}: {}\n", field.typ));
        }
        sdl.push('}');
        sdl
    }
}

impl ScalarType {
    pub fn to_sdl(&self) -> String {
        let mut sdl = String::new();
        push_description(&mut sdl, &self.description, "");
        sdl.push_str(&format!("scalar {}", self.name));
        sdl
    }
}

impl NamedType {
    pub fn to_sdl(&self) -> String {
        match self {
            NamedType::Scalar(scalar) => scalar.to_sdl(),
            NamedType::Object(object) => object.to_sdl(),
        }
    }
}
