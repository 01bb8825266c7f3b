//! Measurement results and the per-pass measurement cache.

use msgcell_ui_graphics::Size;

use crate::collections::map::{Entry, HashMap};
use crate::StackMeasurement;

/// Stable identity of a measured stack within one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeasurementKey(pub &'static str);

impl MeasurementKey {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Cache of stack measurements keyed by (stack identity, max width).
///
/// Lives for one layout pass. Entries are never overwritten: a new message
/// state means a new pass and a fresh cache.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    entries: HashMap<(MeasurementKey, u32), StackMeasurement>,
    hits: usize,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached measurement for `key` at `max_width`, or runs
    /// `measure` and caches its result.
    pub fn get_or_measure<F>(&mut self, key: MeasurementKey, max_width: f32, measure: F) -> StackMeasurement
    where
        F: FnOnce() -> StackMeasurement,
    {
        match self.entries.entry((key, max_width.to_bits())) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(measure()).clone(),
        }
    }

    pub fn get(&self, key: MeasurementKey, max_width: f32) -> Option<&StackMeasurement> {
        self.entries.get(&(key, max_width.to_bits()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// Everything measurement produced for one cell: the total size the list
/// reserves, plus each stack's measurement for placement at render time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellMeasurement {
    pub cell_size: Size,
    stacks: HashMap<MeasurementKey, StackMeasurement>,
}

impl CellMeasurement {
    pub fn builder() -> CellMeasurementBuilder {
        CellMeasurementBuilder::default()
    }

    pub fn stack(&self, key: MeasurementKey) -> Option<&StackMeasurement> {
        self.stacks.get(&key)
    }

    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }
}

#[derive(Debug, Default)]
pub struct CellMeasurementBuilder {
    stacks: HashMap<MeasurementKey, StackMeasurement>,
}

impl CellMeasurementBuilder {
    pub fn record(&mut self, key: MeasurementKey, measurement: StackMeasurement) {
        if self.stacks.insert(key, measurement).is_some() {
            log::warn!("stack {} measured twice in one pass", key.name());
        }
    }

    pub fn build(self, cell_size: Size) -> CellMeasurement {
        CellMeasurement {
            cell_size,
            stacks: self.stacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{measure_stack, StackConfig};
    use msgcell_ui_graphics::EdgeInsets;

    const KEY: MeasurementKey = MeasurementKey("test.stack");

    #[test]
    fn cache_measures_once_per_width() {
        let mut cache = MeasurementCache::new();
        let config = StackConfig::vertical(0.0, EdgeInsets::ZERO);
        let mut calls = 0;

        for _ in 0..3 {
            cache.get_or_measure(KEY, 300.0, || {
                calls += 1;
                measure_stack(&config, &[Size::new(10.0, 10.0)])
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.hits(), 2);

        cache.get_or_measure(KEY, 200.0, || measure_stack(&config, &[]));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(KEY, 200.0).is_some_and(StackMeasurement::is_empty));
    }

    #[test]
    fn cell_measurement_exposes_recorded_stacks() {
        let config = StackConfig::vertical(0.0, EdgeInsets::ZERO);
        let mut builder = CellMeasurement::builder();
        builder.record(KEY, measure_stack(&config, &[Size::new(4.0, 5.0)]));
        let measurement = builder.build(Size::new(40.0, 50.0));

        assert_eq!(measurement.cell_size, Size::new(40.0, 50.0));
        assert_eq!(measurement.stack_count(), 1);
        assert_eq!(
            measurement.stack(KEY).map(|stack| stack.measured_size),
            Some(Size::new(4.0, 5.0))
        );
        assert!(measurement.stack(MeasurementKey("missing")).is_none());
    }
}
