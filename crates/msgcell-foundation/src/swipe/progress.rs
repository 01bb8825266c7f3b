use std::fmt;

use msgcell_ui_layout::collections::map::HashMap;

/// Stable identity of the message a cell renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionId(String);

impl InteractionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InteractionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Leading-relative horizontal offset of an in-flight swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeProgress {
    pub x_offset: f32,
}

impl SwipeProgress {
    pub const ZERO: SwipeProgress = SwipeProgress { x_offset: 0.0 };

    pub fn new(x_offset: f32) -> Self {
        Self { x_offset }
    }
}

/// Swipe offsets keyed by interaction, shared by every cell of one
/// conversation so that a recycled cell can resume an in-flight gesture.
///
/// Only touched from the UI thread; owners pass it explicitly to the
/// controller instead of reaching for global state.
#[derive(Debug, Default)]
pub struct SwipeProgressStore {
    progress: HashMap<InteractionId, SwipeProgress>,
}

impl SwipeProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self, interaction_id: &InteractionId) -> Option<SwipeProgress> {
        self.progress.get(interaction_id).copied()
    }

    /// Stored offset, zero when no gesture is in flight.
    pub fn offset(&self, interaction_id: &InteractionId) -> f32 {
        self.progress(interaction_id)
            .map_or(0.0, |progress| progress.x_offset)
    }

    pub fn set_progress(&mut self, interaction_id: &InteractionId, progress: SwipeProgress) {
        self.progress.insert(interaction_id.clone(), progress);
    }

    pub fn reset_progress(&mut self, interaction_id: &InteractionId) {
        self.progress.remove(interaction_id);
    }

    pub fn len(&self) -> usize {
        self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_reads_writes_and_resets() {
        let mut store = SwipeProgressStore::new();
        let id = InteractionId::from("message-1");
        assert_eq!(store.progress(&id), None);
        assert_eq!(store.offset(&id), 0.0);

        store.set_progress(&id, SwipeProgress::new(-30.0));
        store.set_progress(&id, SwipeProgress::new(42.0));
        assert_eq!(store.progress(&id), Some(SwipeProgress::new(42.0)));
        assert_eq!(store.len(), 1);

        store.reset_progress(&id);
        assert_eq!(store.offset(&id), 0.0);
        assert!(store.is_empty());
    }

    #[test]
    fn interactions_are_independent() {
        let mut store = SwipeProgressStore::new();
        let first = InteractionId::from("a");
        let second = InteractionId::from("b");
        store.set_progress(&first, SwipeProgress::new(10.0));
        store.set_progress(&second, SwipeProgress::new(20.0));
        store.reset_progress(&first);

        assert_eq!(store.offset(&first), 0.0);
        assert_eq!(store.offset(&second), 20.0);
    }
}
