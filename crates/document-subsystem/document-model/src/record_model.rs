// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::ConstValue;
use async_trait::async_trait;

use crate::{DocumentId, ID_FIELD, ModelError, Query, Record};

/// A collection of documents that generated resolvers can operate on.
///
/// Any store adapter implements this; resolvers only build queries through it and run them with
/// [`Query::exec`].
#[async_trait]
pub trait RecordModel: Send + Sync {
    /// Name of the model, such as `User`.
    fn model_name(&self) -> &str;

    /// An unexecuted query removing the record with the given id.
    ///
    /// Fails if the value can't be cast to the store's identifier type.
    fn delete_by_id_query(&self, id: &ConstValue) -> Result<Query, ModelError> {
        let id = DocumentId::from_value(id)?;
        Ok(Query::find_one_and_remove(self.model_name()).where_eq(ID_FIELD, id))
    }

    /// An unexecuted query finding the record with the given id.
    fn find_by_id_query(&self, id: &ConstValue) -> Result<Query, ModelError> {
        let id = DocumentId::from_value(id)?;
        Ok(Query::find_one(self.model_name()).where_eq(ID_FIELD, id))
    }

    /// Run a query, returning the (first) matching record if there is one.
    async fn execute(&self, query: Query) -> Result<Option<Record>, ModelError>;
}
