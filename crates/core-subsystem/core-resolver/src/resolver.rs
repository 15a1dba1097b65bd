// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fmt::{Debug, Formatter},
    sync::OnceLock,
};

use async_graphql_parser::types::{FieldDefinition, InputValueDefinition};
use async_graphql_value::{ConstValue, indexmap::IndexMap};
use async_trait::async_trait;
use core_model::{
    type_normalization::{default_positioned, default_positioned_name},
    types::{NamedType, TypeRef},
};
use tracing::instrument;

use crate::{ResolveParams, ResolverError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Query,
    Mutation,
    Subscription,
}

/// Declaration of one resolver argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgConfig {
    pub typ: TypeRef,
    pub description: Option<String>,
    pub default_value: Option<ConstValue>,
}

impl ArgConfig {
    pub fn new(typ: impl Into<TypeRef>) -> Self {
        Self {
            typ: typ.into(),
            description: None,
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Required arguments have a non-null type.
    pub fn is_required(&self) -> bool {
        self.typ.is_non_null()
    }
}

/// The function that fulfills a resolver producing `T` through queries of type `Q`.
#[async_trait]
pub trait ResolveFn<T, Q>: Send + Sync {
    async fn resolve(&self, params: ResolveParams<Q>) -> Result<T, ResolverError>;
}

type OutputTypeThunk = Box<dyn Fn() -> NamedType + Send + Sync>;

/// An executable operation descriptor: name, arguments, output type and the function resolving it.
///
/// The output type is computed by a thunk the first time it is asked for, and the same type is
/// returned for the rest of the resolver's life.
pub struct Resolver<T, Q> {
    name: String,
    kind: ResolverKind,
    description: Option<String>,
    args: IndexMap<String, ArgConfig>,
    output_type: OnceLock<NamedType>,
    output_type_thunk: OutputTypeThunk,
    resolve_fn: Box<dyn ResolveFn<T, Q>>,
}

impl<T, Q> Resolver<T, Q> {
    pub fn new(
        name: impl Into<String>,
        kind: ResolverKind,
        output_type: impl Fn() -> NamedType + Send + Sync + 'static,
        resolve_fn: impl ResolveFn<T, Q> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            args: IndexMap::new(),
            output_type: OnceLock::new(),
            output_type_thunk: Box::new(output_type),
            resolve_fn: Box::new(resolve_fn),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, arg: ArgConfig) -> Self {
        self.args.insert(name.into(), arg);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ResolverKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn args(&self) -> &IndexMap<String, ArgConfig> {
        &self.args
    }

    pub fn has_arg(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    pub fn get_arg(&self, name: &str) -> Option<&ArgConfig> {
        self.args.get(name)
    }

    pub fn get_output_type(&self) -> NamedType {
        self.output_type
            .get_or_init(|| (self.output_type_thunk)())
            .clone()
    }

    #[instrument(name = "Resolver::resolve", skip_all, fields(resolver = %self.name))]
    pub async fn resolve(&self, params: ResolveParams<Q>) -> Result<T, ResolverError> {
        self.resolve_fn.resolve(params).await
    }

    /// The resolver as a field of the root operation type.
    pub fn field_definition(&self) -> FieldDefinition {
        let arguments = self
            .args
            .iter()
            .map(|(name, arg)| {
                default_positioned(InputValueDefinition {
                    description: arg.description.clone().map(default_positioned),
                    name: default_positioned_name(name),
                    ty: default_positioned(arg.typ.to_graphql_type()),
                    default_value: arg.default_value.clone().map(default_positioned),
                    directives: vec![],
                })
            })
            .collect();

        FieldDefinition {
            description: self.description.clone().map(default_positioned),
            name: default_positioned_name(&self.name),
            arguments,
            ty: default_positioned(TypeRef::from(self.get_output_type()).to_graphql_type()),
            directives: vec![],
        }
    }

    /// The field definition in SDL form, such as `removeById(_id: MongoID!): RemoveByIdUserPayload`.
    pub fn field_sdl(&self) -> String {
        let output_type = self.get_output_type();

        if self.args.is_empty() {
            return format!("{}: {}", self.name, output_type.name());
        }

        let args = self
            .args
            .iter()
            .map(|(name, arg)| match &arg.default_value {
                Some(default_value) => format!("{name}: {} = {default_value}", arg.typ),
                None => format!("{name}: {}", arg.typ),
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}({args}): {}", self.name, output_type.name())
    }
}

impl<T, Q> Debug for Resolver<T, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("args", &self.args)
            .field("output_type", &self.output_type.get().map(NamedType::name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use core_model::{
        primitive_type::{PrimitiveType, mongo_id},
        types::ObjectType,
    };
    use test_log::test;

    use super::*;

    struct Echo;

    #[async_trait]
    impl ResolveFn<String, ()> for Echo {
        async fn resolve(&self, params: ResolveParams<()>) -> Result<String, ResolverError> {
            match params.arg("message") {
                Some(ConstValue::String(message)) => Ok(message.clone()),
                _ => Err(ResolverError::MissingArgument {
                    resolver: "echo".into(),
                    arg: "message".into(),
                }),
            }
        }
    }

    fn echo_resolver(builds: Arc<AtomicUsize>) -> Resolver<String, ()> {
        Resolver::new(
            "echo",
            ResolverKind::Query,
            move || {
                builds.fetch_add(1, Ordering::SeqCst);
                ObjectType::new("EchoPayload").into()
            },
            Echo,
        )
        .with_arg(
            "message",
            ArgConfig::new(TypeRef::from(PrimitiveType::String.scalar()).non_null()),
        )
        .with_arg("id", ArgConfig::new(mongo_id()))
    }

    #[test]
    fn output_type_is_computed_lazily_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let resolver = echo_resolver(builds.clone());
        assert_eq!(builds.load(Ordering::SeqCst), 0);

        let first = resolver.get_output_type();
        let second = resolver.get_output_type();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(first.ptr_eq(&second));
        assert_eq!(first.name(), "EchoPayload");
    }

    #[test]
    fn argument_introspection() {
        let resolver = echo_resolver(Arc::default());

        assert!(resolver.has_arg("message"));
        assert!(!resolver.has_arg("other"));
        assert!(resolver.get_arg("message").unwrap().is_required());
        assert!(!resolver.get_arg("id").unwrap().is_required());
        assert_eq!(resolver.kind(), ResolverKind::Query);
    }

    #[test]
    fn sdl_and_definition() {
        let resolver = echo_resolver(Arc::default());

        assert_eq!(
            resolver.field_sdl(),
            "echo(message: String!, id: MongoID): EchoPayload"
        );

        let definition = resolver.field_definition();
        assert_eq!(definition.arguments.len(), 2);
        assert_eq!(definition.arguments[0].node.ty.node.to_string(), "String!");
        assert_eq!(definition.ty.node.to_string(), "EchoPayload");
    }

    #[test(tokio::test)]
    async fn resolve_delegates() {
        let resolver = echo_resolver(Arc::default());

        let echoed = resolver
            .resolve(ResolveParams::new().with_arg("message", "hello"))
            .await
            .unwrap();
        assert_eq!(echoed, "hello");

        let err = resolver.resolve(ResolveParams::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "echo resolver requires args.message value");
    }
}
