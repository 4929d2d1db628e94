//! Helpers shared by the workspace's test suites.
//!
//! - [`TestDatabase`] (feature `postgres`, on by default): containerised,
//!   migrated PostgreSQL
//! - [`TestDataBuilder`]: names that are stable per test but distinct across tests
//! - [`assertions`]: assertion shorthands

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Derives test data from a seed so reruns produce the same values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the test's name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_item");
    /// let b = TestDataBuilder::from_test_name("test_create_item");
    /// assert_eq!(a.name("item", "x"), b.name("item", "x"));
    /// ```
    pub fn from_test_name(test_name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        test_name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<kind>-<seed>-<label>`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// assert_eq!(TestDataBuilder::new(7).name("item", "main"), "test-item-7-main");
    /// ```
    pub fn name(&self, kind: &str, label: &str) -> String {
        format!("test-{}-{}-{}", kind, self.seed, label)
    }
}

pub mod assertions {
    /// Unwraps `value`, panicking with `context` when it is `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        match value {
            Some(inner) => inner,
            None => panic!("{}: expected Some, got None", context),
        }
    }
}
