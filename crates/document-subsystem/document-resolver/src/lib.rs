// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolvers generated for document models.

mod payload;
mod remove_by_id;

pub use payload::{RemoveByIdPayload, remove_by_id_payload_name, remove_by_id_payload_type};
pub use remove_by_id::{REMOVE_BY_ID, RemoveByIdResolver, remove_by_id};
