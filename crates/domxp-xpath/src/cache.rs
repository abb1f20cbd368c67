//! Compiled expression cache
//!
//! The facade rebuilds the same handful of expression shapes on every
//! lookup, so compiled expressions are memoized by their source text.

use std::collections::{HashMap, VecDeque};

/// Bounded cache keyed by expression text, evicting the oldest insert
#[derive(Debug)]
pub struct ExpressionCache<T> {
    entries: HashMap<String, T>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl<T: Clone> ExpressionCache<T> {
    /// Create a cache holding at most `max_entries` expressions. Zero
    /// disables caching.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Get a cached value
    pub fn get(&mut self, expression: &str) -> Option<T> {
        match self.entries.get(expression) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a value, evicting the oldest entry when at capacity
    pub fn insert(&mut self, expression: String, value: T) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.contains_key(&expression) {
            self.entries.insert(expression, value);
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }
        self.order.push_back(expression.clone());
        self.entries.insert(expression, value);
    }

    /// Clear all cached expressions
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.entries.remove(&oldest);
        }
    }

    /// Stats
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
