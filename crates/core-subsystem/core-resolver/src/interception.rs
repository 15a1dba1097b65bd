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
    future::Future,
};

use futures::{FutureExt, future::BoxFuture};

pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

type BeforeQueryFn<Q> = Box<dyn FnOnce(Q) -> BoxFuture<'static, Result<Q, InterceptorError>> + Send>;

/// Caller-supplied hook that receives a resolver's query of type `Q` before it is executed and
/// returns the query to execute instead (the same one, a modified one, or an entirely new one).
///
/// ```ignore
/// let params = ResolveParams::new()
///     .with_arg("_id", id)
///     .with_before_query(BeforeQuery::sync(|query: Query| Ok(query.where_eq("owner", user))));
/// ```
pub struct BeforeQuery<Q>(BeforeQueryFn<Q>);

impl<Q: Send + 'static> BeforeQuery<Q> {
    /// An asynchronous hook.
    pub fn new<F, Fut>(hook: F) -> Self
    where
        F: FnOnce(Q) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Q, InterceptorError>> + Send + 'static,
    {
        Self(Box::new(move |query| hook(query).boxed()))
    }

    /// A hook that completes without awaiting anything.
    pub fn sync<F>(hook: F) -> Self
    where
        F: FnOnce(Q) -> Result<Q, InterceptorError> + Send + 'static,
    {
        Self::new(move |query| futures::future::ready(hook(query)))
    }

    pub async fn intercept(self, query: Q) -> Result<Q, InterceptorError> {
        (self.0)(query).await
    }
}

impl<Q> Debug for BeforeQuery<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("BeforeQuery")
    }
}
