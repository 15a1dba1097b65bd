// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
    sync::{
        LazyLock,
        atomic::{AtomicU32, Ordering},
    },
};

use async_graphql_value::ConstValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{ID_FIELD, ModelError};

const OBJECT_ID_KIND: &str = "ObjectId";

/// Random bytes identifying this process, shared by all ids it generates.
static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let bytes = rand::random::<u64>().to_be_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]
});

static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::random::<u32>()));

/// A 12-byte document identifier in the ObjectId layout: a 4-byte big-endian timestamp (seconds),
/// 5 bytes unique to the generating process, and a 3-byte big-endian counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        let timestamp = (Utc::now().timestamp() as u32).to_be_bytes();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst).to_be_bytes();

        let mut bytes = [0; 12];
        bytes[0..4].copy_from_slice(&timestamp);
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..12].copy_from_slice(&counter[1..4]);
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The creation time encoded in the id.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let seconds = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        DateTime::from_timestamp(seconds as i64, 0)
    }

    /// Cast a GraphQL value to an id. Only 24-character hex strings are accepted.
    pub fn from_value(value: &ConstValue) -> Result<Self, ModelError> {
        match value {
            ConstValue::String(s) => s.parse(),
            other => Err(cast_error(&other.to_string())),
        }
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

fn cast_error(value: &str) -> ModelError {
    ModelError::Cast {
        kind: OBJECT_ID_KIND,
        value: value.to_string(),
        path: ID_FIELD.to_string(),
    }
}

impl FromStr for DocumentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| cast_error(s))?;
        Ok(Self(bytes))
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DocumentId({})", self.to_hex())
    }
}

impl From<DocumentId> for ConstValue {
    fn from(id: DocumentId) -> Self {
        ConstValue::String(id.to_hex())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_form() {
        let id: DocumentId = "500000000000000000000000".parse().unwrap();

        assert_eq!(id.bytes()[0], 0x50);
        assert_eq!(id.to_string(), "500000000000000000000000");
        assert_eq!(
            "5A000000000000000000000B".parse::<DocumentId>().unwrap().to_hex(),
            "5a000000000000000000000b"
        );
    }

    #[test]
    fn malformed_ids_fail_to_cast() {
        for input in ["", "123", "zz0000000000000000000000", "5000000000000000000000000"] {
            let err = input.parse::<DocumentId>().unwrap_err();
            assert!(matches!(err, ModelError::Cast { .. }), "{input}");
        }

        let err = DocumentId::from_value(&ConstValue::Boolean(true)).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Cast to ObjectId failed for value "true" at path "_id""#
        );
    }

    #[test]
    fn generated_ids_are_unique_and_timestamped() {
        let a = DocumentId::new();
        let b = DocumentId::new();

        assert_ne!(a, b);
        assert_eq!(a.bytes()[4..9], b.bytes()[4..9]);

        let age = Utc::now() - a.timestamp().unwrap();
        assert!(age.num_seconds() < 60);
    }

    #[test]
    fn serializes_as_hex_string() {
        let id: DocumentId = "0123456789abcdef01234567".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, r#""0123456789abcdef01234567""#);
        assert_eq!(serde_json::from_str::<DocumentId>(&json).unwrap(), id);
    }
}
