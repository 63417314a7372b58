#![allow(dead_code, unused_imports)]
//! # Common Test Utilities
//!
//! Canned CSV sources for driving the loader without a network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use stockyard::{CatalogError, CsvSource};

pub use stockyard_test_utils::{setup_tracing, CATALOG_CSV};

/// A source returning fixed CSV text and counting how often it was asked.
pub struct StaticSource {
    csv: String,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(csv: &str) -> Self {
        Self {
            csv: csv.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CsvSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch_csv(&self) -> Result<String, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.csv.clone())
    }
}

/// A source whose fetch always fails, like an unreachable sheet.
pub struct FailingSource;

#[async_trait]
impl CsvSource for FailingSource {
    fn describe(&self) -> String {
        "unreachable".to_string()
    }

    async fn fetch_csv(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Fetch("connection refused".to_string()))
    }
}
