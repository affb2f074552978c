//! Depth-first pruning of a JSON value tree.
//!
//! The filter builds a pruned copy bottom-up instead of removing properties
//! from the input while iterating it. The input is never modified.
use crate::predicate::FieldPredicate;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Joins a parent path and a property name with `/`.
pub fn combine_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", path, name)
    }
}

/// Counters for the most recent [`TreeFilter::apply`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Times the predicate was actually invoked.
    pub evaluated: usize,
    /// Verdicts served from the path cache.
    pub cache_hits: usize,
}

/// Prunes value trees with a [`FieldPredicate`].
///
/// Each call to [`apply`](TreeFilter::apply) starts with an empty path cache,
/// so the predicate runs at most once per distinct path per call no matter how
/// many array elements share that path. The cache never outlives the call and
/// a `TreeFilter` is not meant to be shared between threads.
pub struct TreeFilter<'p, P: FieldPredicate + ?Sized> {
    predicate: &'p P,
    cache: Option<HashMap<String, bool>>,
    stats: FilterStats,
}

impl<'p, P: FieldPredicate + ?Sized> TreeFilter<'p, P> {
    pub fn new(predicate: &'p P) -> Self {
        Self {
            predicate,
            cache: Some(HashMap::new()),
            stats: FilterStats::default(),
        }
    }

    /// Disables the path cache. Output is identical, only slower.
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Returns the pruned copy of `value`.
    ///
    /// A scalar root is returned unchanged. An object or array root is kept
    /// even when nothing inside it survives.
    pub fn apply(&mut self, value: &Value) -> Value {
        self.stats = FilterStats::default();
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }

        let filtered = match value {
            Value::Object(map) => Value::Object(self.filter_object(map, "")),
            Value::Array(items) => Value::Array(self.filter_array(items, "")),
            scalar => scalar.clone(),
        };

        log::debug!(
            "Filtered value tree: {} path(s) evaluated, {} cache hit(s)",
            self.stats.evaluated,
            self.stats.cache_hits
        );
        filtered
    }

    fn should_keep(&mut self, path: &str) -> bool {
        let Some(cache) = self.cache.as_mut() else {
            self.stats.evaluated += 1;
            return self.predicate.should_keep(path);
        };

        if let Some(&verdict) = cache.get(path) {
            self.stats.cache_hits += 1;
            return verdict;
        }

        self.stats.evaluated += 1;
        let verdict = self.predicate.should_keep(path);
        cache.insert(path.to_string(), verdict);
        verdict
    }

    fn filter_object(&mut self, map: &Map<String, Value>, path: &str) -> Map<String, Value> {
        // Decide on every property before descending into any survivor.
        let survivors: Vec<(&String, &Value, String)> = map
            .iter()
            .filter_map(|(name, value)| {
                let child_path = combine_path(path, name);
                if self.should_keep(&child_path) {
                    Some((name, value, child_path))
                } else {
                    log::trace!("Pruning property '{}'", child_path);
                    None
                }
            })
            .collect();

        // Containers that pruning emptied are dropped; ones empty on input stay.
        let mut filtered = Map::new();
        for (name, value, child_path) in survivors {
            let kept = match value {
                Value::Object(inner) => {
                    let pruned = self.filter_object(inner, &child_path);
                    (!pruned.is_empty() || inner.is_empty()).then_some(Value::Object(pruned))
                }
                Value::Array(items) => {
                    let pruned = self.filter_array(items, &child_path);
                    (!pruned.is_empty() || items.is_empty()).then_some(Value::Array(pruned))
                }
                scalar => Some(scalar.clone()),
            };
            match kept {
                Some(value) => {
                    filtered.insert(name.clone(), value);
                }
                None => log::trace!("Dropping emptied container '{}'", child_path),
            }
        }
        filtered
    }

    /// Arrays add no path segment; elements are filtered at the array's own path.
    fn filter_array(&mut self, items: &[Value], path: &str) -> Vec<Value> {
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => {
                    let pruned = self.filter_object(map, path);
                    (!pruned.is_empty() || map.is_empty()).then_some(Value::Object(pruned))
                }
                Value::Array(inner) => {
                    let pruned = self.filter_array(inner, path);
                    (!pruned.is_empty() || inner.is_empty()).then_some(Value::Array(pruned))
                }
                scalar => Some(scalar.clone()),
            })
            .collect()
    }
}

/// Prunes `value` with a fresh [`TreeFilter`].
pub fn filter<P: FieldPredicate + ?Sized>(value: &Value, predicate: &P) -> Value {
    TreeFilter::new(predicate).apply(value)
}
