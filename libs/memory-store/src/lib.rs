// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! An in-process document collection implementing [`RecordModel`](document_model::RecordModel).
//!
//! Records live in memory only. Useful for tests and for embedding the resolvers without a
//! database.

mod collection;
mod schema;

pub use collection::{Collection, compose_with_collection};
pub use schema::{FieldKind, SchemaField};
