// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The contract between generated resolvers and a document store.
//!
//! A store exposes its collections as [`RecordModel`]s. Resolvers never talk to the store
//! directly: they ask the model for a declarative [`Query`], optionally hand it to caller code for
//! modification, and then [`Query::exec`] it against the model.

mod document_id;
mod error;
mod query;
mod record;
mod record_model;

pub use document_id::DocumentId;
pub use error::ModelError;
pub use query::{Condition, ConditionOp, Query, QueryOp};
pub use record::Record;
pub use record_model::RecordModel;

/// Name of the identifier field of every document.
pub const ID_FIELD: &str = "_id";
