// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::InterceptorError;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("{resolver} resolver requires args.{arg} value")]
    MissingArgument { resolver: String, arg: String },

    /// Failure reported by the subsystem executing the operation (such as its backing store)
    #[error("{0}")]
    Delegate(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Failure raised by a caller-supplied `before_query` hook
    #[error("{0}")]
    Interceptor(#[source] InterceptorError),
}

impl ResolverError {
    pub fn delegate(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        ResolverError::Delegate(Box::new(error))
    }

    /// The subsystem error behind a `Delegate`, if it is of type `E`.
    pub fn delegate_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            ResolverError::Delegate(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Display, Formatter};

    use super::*;

    #[derive(Debug)]
    struct StoreDown;

    impl Display for StoreDown {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str("store unavailable")
        }
    }

    impl std::error::Error for StoreDown {}

    #[test]
    fn delegated_errors_keep_message_and_type() {
        let err = ResolverError::delegate(StoreDown);

        assert_eq!(err.to_string(), "store unavailable");
        assert!(err.delegate_error::<StoreDown>().is_some());
        assert!(err.delegate_error::<std::fmt::Error>().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_argument_message() {
        let err = ResolverError::MissingArgument {
            resolver: "removeById".into(),
            arg: "_id".into(),
        };

        assert_eq!(err.to_string(), "removeById resolver requires args._id value");
        assert!(err.delegate_error::<StoreDown>().is_none());
    }
}
