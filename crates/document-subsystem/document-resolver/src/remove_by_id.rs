// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_graphql_value::ConstValue;
use async_trait::async_trait;
use core_model::{
    primitive_type::mongo_id, type_composer::TypeComposer, type_storage::TypeStorage,
    types::TypeRef,
};
use core_resolver::{ArgConfig, ResolveFn, ResolveParams, Resolver, ResolverError, ResolverKind};
use document_model::{ID_FIELD, Query, RecordModel};
use tracing::{debug, instrument};

use crate::payload::{RemoveByIdPayload, remove_by_id_payload_type};

pub const REMOVE_BY_ID: &str = "removeById";

pub type RemoveByIdResolver = Resolver<RemoveByIdPayload, Query>;

/// Build the `removeById` mutation for a model.
///
/// The resolver takes a required `_id: MongoID!` argument, removes the matching record (if any)
/// and resolves to a [`RemoveByIdPayload`]. Its output type (`RemoveById<TypeName>Payload`) is
/// taken from `type_storage` when first requested.
pub fn remove_by_id(
    model: Arc<dyn RecordModel>,
    type_composer: Arc<dyn TypeComposer>,
    type_storage: Arc<TypeStorage>,
) -> RemoveByIdResolver {
    Resolver::new(
        REMOVE_BY_ID,
        ResolverKind::Mutation,
        move || remove_by_id_payload_type(type_composer.as_ref(), &type_storage),
        RemoveById { model },
    )
    .with_description(
        "Remove one document: 1) Retrieve one document and remove with hooks via \
         findByIdAndRemove. 2) Return removed document.",
    )
    .with_arg(ID_FIELD, ArgConfig::new(TypeRef::from(mongo_id()).non_null()))
}

struct RemoveById {
    model: Arc<dyn RecordModel>,
}

#[async_trait]
impl ResolveFn<RemoveByIdPayload, Query> for RemoveById {
    #[instrument(
        name = "RemoveById::resolve",
        skip_all,
        fields(model = self.model.model_name())
    )]
    async fn resolve(
        &self,
        params: ResolveParams<Query>,
    ) -> Result<RemoveByIdPayload, ResolverError> {
        let record_id = match params.arg(ID_FIELD) {
            Some(id) if !is_falsy(id) => id.clone(),
            _ => {
                return Err(ResolverError::MissingArgument {
                    resolver: REMOVE_BY_ID.to_string(),
                    arg: ID_FIELD.to_string(),
                });
            }
        };

        let ResolveParams {
            before_query,
            projection,
            ..
        } = params;

        let mut query = self
            .model
            .delete_by_id_query(&record_id)
            .map_err(ResolverError::delegate)?;
        if let Some(projection) = projection {
            query = query.select(projection);
        }
        if let Some(before_query) = before_query {
            query = before_query
                .intercept(query)
                .await
                .map_err(ResolverError::Interceptor)?;
        }

        let record = query
            .exec(self.model.as_ref())
            .await
            .map_err(ResolverError::delegate)?;
        debug!(removed = record.is_some(), "removeById completed");

        Ok(RemoveByIdPayload { record_id, record })
    }
}

/// `null`, `""`, `false` and zero don't name a record.
fn is_falsy(value: &ConstValue) -> bool {
    match value {
        ConstValue::Null => true,
        ConstValue::String(s) => s.is_empty(),
        ConstValue::Boolean(b) => !b,
        ConstValue::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
