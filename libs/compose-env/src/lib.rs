// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Where configuration values come from.

use std::collections::HashMap;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of values, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self(
            values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_values() {
        let env = MapEnvironment::from([("COMPOSE_LOG", "debug")]);

        assert_eq!(env.get("COMPOSE_LOG").as_deref(), Some("debug"));
        assert_eq!(env.get("MISSING"), None);
        assert_eq!(MapEnvironment::new().get("COMPOSE_LOG"), None);
    }

    #[test]
    fn system_values() {
        assert_eq!(SystemEnvironment.get("PATH"), std::env::var("PATH").ok());
        assert_eq!(
            SystemEnvironment.get("COMPOSE_ENV_SURELY_UNSET_VARIABLE"),
            None
        );
    }
}
