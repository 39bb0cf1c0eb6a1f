//! Record of subject change notifications received by the host

use chrono::{DateTime, Local};

/// Entries kept before the oldest are dropped
const MAX_ENTRIES: usize = 200;

/// A single change notification
#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub timestamp: DateTime<Local>,
    pub subject: String,
}

impl ChangeEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[derive(Debug, Default)]
pub struct ChangeLog {
    entries: Vec<ChangeEntry>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, subject: &str) {
        self.push(ChangeEntry {
            timestamp: Local::now(),
            subject: subject.to_string(),
        });
    }

    fn push(&mut self, entry: ChangeEntry) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// Entries, newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &ChangeEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
