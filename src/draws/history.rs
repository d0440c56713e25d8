use crate::draws::types::DrawResult;
use std::collections::VecDeque;

/// Past draws, newest first. Lives only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<DrawResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a draw as the most recent entry
    pub fn record(&mut self, result: DrawResult) {
        self.entries.push_front(result);
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&DrawResult> {
        self.entries.front()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &DrawResult> {
        self.entries.iter()
    }

    /// History lines from newest to oldest
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.history_text.clone()).collect()
    }
}
