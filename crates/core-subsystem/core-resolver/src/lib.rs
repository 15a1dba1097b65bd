// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Self-describing, executable GraphQL operations.
//!
//! A [`Resolver`] bundles what schema-assembly code needs to expose one field (its arguments and
//! output type) with the asynchronous function that fulfills it.

mod interception;
mod resolve_params;
mod resolver;
mod resolver_error;

pub use interception::{BeforeQuery, InterceptorError};
pub use resolve_params::ResolveParams;
pub use resolver::{ArgConfig, ResolveFn, Resolver, ResolverKind};
pub use resolver_error::ResolverError;
