// src/core/storage/data_types.rs

//! Defines the core data structures for storing values in the database,
//! such as `StoredValue` and the `DataValue` enum.

use crate::core::storage::slist::SortedList;
use bytes::Bytes;

/// A wrapper for all values stored in the database, containing the data and metadata.
#[derive(Debug, Clone)]
pub struct StoredValue {
    pub data: DataValue,
    /// The calculated size of the `data` field in bytes.
    pub size: usize,
}

impl StoredValue {
    /// Creates a new `StoredValue` with its size computed from the data.
    pub fn new(data: DataValue) -> Self {
        let size = data.memory_usage();
        Self { data, size }
    }

    /// Recomputes the tracked size after an in-place mutation of `data`.
    pub fn refresh_size(&mut self) {
        self.size = self.data.memory_usage();
    }
}

/// An enum representing the different data types that can be stored.
#[derive(Debug, Clone)]
pub enum DataValue {
    String(Bytes),
    SortedList(SortedList),
}

impl DataValue {
    /// Calculates the memory usage of the data payload.
    pub fn memory_usage(&self) -> usize {
        match self {
            DataValue::String(b) => b.len(),
            DataValue::SortedList(l) => l.memory_usage(),
        }
    }
}
