// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, indexmap::IndexMap};

use crate::BeforeQuery;

/// Input to one execution of a resolver whose queries are of type `Q`. Built fresh for every call.
#[derive(Debug)]
pub struct ResolveParams<Q> {
    /// Field arguments, as validated by the GraphQL layer. `None` if no arguments were supplied.
    pub args: Option<IndexMap<String, ConstValue>>,
    /// Hook to inspect or modify the query before it is executed
    pub before_query: Option<BeforeQuery<Q>>,
    /// Record fields selected by the operation; `None` to return whole records.
    pub projection: Option<Vec<String>>,
}

impl<Q> Default for ResolveParams<Q> {
    fn default() -> Self {
        Self {
            args: None,
            before_query: None,
            projection: None,
        }
    }
}

impl<Q> ResolveParams<Q> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_args(mut self, args: IndexMap<String, ConstValue>) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.args
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_before_query(mut self, before_query: BeforeQuery<Q>) -> Self {
        self.before_query = Some(before_query);
        self
    }

    pub fn with_projection(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.projection = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn arg(&self, name: &str) -> Option<&ConstValue> {
        self.args.as_ref().and_then(|args| args.get(name))
    }
}
