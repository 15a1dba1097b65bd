// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Log filter directives, in the same syntax as `RUST_LOG` (for example `document_resolver=debug`).
pub const COMPOSE_LOG: &str = "COMPOSE_LOG";
