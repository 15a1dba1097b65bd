// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Declarative queries.
//!
//! A [`Query`] only describes what to do; it carries no results and touches no store until
//! [`Query::exec`] is called. This lets resolvers hand a freshly built query to caller code (for
//! example to add authorization filters) before running it.

use async_graphql_value::ConstValue;
use tracing::trace;

use crate::{DocumentId, ID_FIELD, ModelError, Record, RecordModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOp {
    /// Return the first matching record.
    FindOne,
    /// Remove the first matching record and return it.
    FindOneAndRemove,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConditionOp {
    Eq,
    Ne,
    /// The value is a list; the field must equal one of its elements.
    In,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub path: String,
    pub op: ConditionOp,
    pub value: ConstValue,
}

impl Condition {
    pub fn matches(&self, record: &Record) -> bool {
        let actual = record.get(&self.path);
        let equals = |expected: &ConstValue| values_equal(&self.path, actual.as_ref(), expected);

        match self.op {
            ConditionOp::Eq => equals(&self.value),
            ConditionOp::Ne => !equals(&self.value),
            ConditionOp::In => match &self.value {
                ConstValue::List(values) => values.iter().any(equals),
                other => equals(other),
            },
        }
    }
}

fn values_equal(path: &str, actual: Option<&ConstValue>, expected: &ConstValue) -> bool {
    match (actual, expected) {
        // Ids compare by value, regardless of the case of their hex form
        (Some(ConstValue::String(actual)), ConstValue::String(expected)) if path == ID_FIELD => {
            match (actual.parse::<DocumentId>(), expected.parse::<DocumentId>()) {
                (Ok(actual), Ok(expected)) => actual == expected,
                _ => false,
            }
        }
        (None, ConstValue::Null) => true,
        (Some(actual), expected) => actual == expected,
        (None, _) => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    model_name: String,
    op: QueryOp,
    conditions: Vec<Condition>,
    projection: Option<Vec<String>>,
}

impl Query {
    pub fn new(model_name: impl Into<String>, op: QueryOp) -> Self {
        Self {
            model_name: model_name.into(),
            op,
            conditions: vec![],
            projection: None,
        }
    }

    pub fn find_one(model_name: impl Into<String>) -> Self {
        Self::new(model_name, QueryOp::FindOne)
    }

    pub fn find_one_and_remove(model_name: impl Into<String>) -> Self {
        Self::new(model_name, QueryOp::FindOneAndRemove)
    }

    pub fn where_eq(self, path: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.with_condition(path, ConditionOp::Eq, value.into())
    }

    pub fn where_ne(self, path: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.with_condition(path, ConditionOp::Ne, value.into())
    }

    pub fn where_in(
        self,
        path: impl Into<String>,
        values: impl IntoIterator<Item = ConstValue>,
    ) -> Self {
        let values = ConstValue::List(values.into_iter().collect());
        self.with_condition(path, ConditionOp::In, values)
    }

    /// Restrict the fields of the returned record. The id is always returned.
    pub fn select(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.projection = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    fn with_condition(
        mut self,
        path: impl Into<String>,
        op: ConditionOp,
        value: ConstValue,
    ) -> Self {
        self.conditions.push(Condition {
            path: path.into(),
            op,
            value,
        });
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn op(&self) -> QueryOp {
        self.op
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn projection(&self) -> Option<&[String]> {
        self.projection.as_deref()
    }

    /// Does the record satisfy every condition?
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(record))
    }

    /// Apply the projection (if any) to a matched record.
    pub fn shape(&self, record: Record) -> Record {
        match &self.projection {
            Some(fields) => record.project(fields),
            None => record,
        }
    }

    /// Run the query against a model.
    pub async fn exec(self, model: &dyn RecordModel) -> Result<Option<Record>, ModelError> {
        trace!(query = ?self, "Executing query");
        model.execute(self).await
    }
}
