use std::collections::HashMap;

use crate::errors::{GenerationError, Result};

/// Captured group text, scoped to one generation call.
#[derive(Debug, Default, Clone)]
pub struct GroupCache {
    groups: HashMap<u32, String>,
}

impl GroupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, id: u32, value: impl Into<String>) {
        self.groups.insert(id, value.into());
    }

    pub fn get(&self, id: u32) -> Result<&str> {
        self.groups
            .get(&id)
            .map(String::as_str)
            .ok_or(GenerationError::UnresolvedReference(id))
    }

    pub fn reset(&mut self) {
        self.groups.clear();
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_previous_capture() {
        let mut cache = GroupCache::new();
        cache.put(1, "first");
        cache.put(1, "second");
        assert_eq!(cache.get(1).ok(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn missing_group_is_unresolved() {
        let cache = GroupCache::new();
        assert!(matches!(
            cache.get(4),
            Err(GenerationError::UnresolvedReference(4))
        ));
    }

    #[test]
    fn reset_forgets_captures() {
        let mut cache = GroupCache::new();
        cache.put(2, "ab");
        cache.reset();
        assert!(cache.is_empty());
        assert!(cache.get(2).is_err());
    }
}
