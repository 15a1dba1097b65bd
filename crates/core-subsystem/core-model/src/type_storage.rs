// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Registry of generated types, keyed by type name.
//!
//! Resolver factories generate output types (such as `RemoveByIdUserPayload`) on demand. Building
//! the same family of resolvers twice must not produce two different types with the same name, so
//! every generated type goes through a `TypeStorage` owned by the schema-build context. Whatever
//! is stored under a name is returned as is, even if the factory would have generated a different
//! shape.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::types::NamedType;

#[derive(Debug, Default)]
pub struct TypeStorage {
    types: Mutex<HashMap<String, NamedType>>,
}

impl TypeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<NamedType> {
        self.types().get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.types().contains_key(name)
    }

    /// Store `typ` under `name`, replacing any earlier entry.
    pub fn set(&self, name: impl Into<String>, typ: impl Into<NamedType>) {
        self.types().insert(name.into(), typ.into());
    }

    /// Return the type stored under `name`, building and storing it first if there is none.
    ///
    /// The lookup and the insertion happen under one lock, so concurrent callers for the same name
    /// all get the instance built by whoever got there first. `build` must not call back into this
    /// storage.
    pub fn get_or_set(&self, name: &str, build: impl FnOnce() -> NamedType) -> NamedType {
        let mut types = self.types();

        if let Some(existing) = types.get(name) {
            return existing.clone();
        }

        debug!(type_name = name, "Registering generated type");
        let typ = build();
        types.insert(name.to_string(), typ.clone());
        typ
    }

    /// Forget all stored types. Intended for isolating independent schema builds (such as tests).
    pub fn clear(&self) {
        self.types().clear();
    }

    pub fn len(&self) -> usize {
        self.types().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types().is_empty()
    }

    fn types(&self) -> MutexGuard<'_, HashMap<String, NamedType>> {
        // Entries are only ever inserted whole, so a panic while holding the lock can't leave a
        // partially written map behind.
        self.types.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::types::ObjectType;

    use super::*;

    #[test]
    fn get_set_clear() {
        let storage = TypeStorage::new();
        assert!(storage.get("Payload").is_none());

        storage.set("Payload", ObjectType::new("Payload"));
        assert!(storage.has("Payload"));
        assert_eq!(storage.get("Payload").unwrap().name(), "Payload");
        assert_eq!(storage.len(), 1);

        storage.clear();
        assert!(storage.is_empty());
        assert!(storage.get("Payload").is_none());
    }

    #[test]
    fn get_or_set_prefers_existing_entry() {
        let storage = TypeStorage::new();
        let existing = NamedType::from(ObjectType::new("Payload"));
        storage.set("Payload", existing.clone());

        let returned = storage.get_or_set("Payload", || {
            ObjectType::new("Payload")
                .with_description("never built")
                .into()
        });

        assert!(returned.ptr_eq(&existing));
    }

    #[test]
    fn get_or_set_builds_once() {
        let storage = TypeStorage::new();
        let builds = AtomicUsize::new(0);
        let build = || {
            builds.fetch_add(1, Ordering::SeqCst);
            NamedType::from(ObjectType::new("Payload"))
        };

        let first = storage.get_or_set("Payload", build);
        let second = storage.get_or_set("Payload", build);

        assert!(first.ptr_eq(&second));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_builders_converge() {
        let storage = Arc::new(TypeStorage::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let storage = storage.clone();
                std::thread::spawn(move || {
                    storage.get_or_set("Payload", || ObjectType::new("Payload").into())
                })
            })
            .collect();

        let types: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(types.iter().all(|typ| typ.ptr_eq(&types[0])));
        assert_eq!(storage.len(), 1);
    }
}
