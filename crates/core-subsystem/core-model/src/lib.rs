// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The GraphQL type layer shared by all generated resolvers.

pub mod primitive_type;
pub mod type_composer;
pub mod type_normalization;
pub mod type_storage;
pub mod types;
