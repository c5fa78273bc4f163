//! Identifier generation for teams and matches

use uuid::Uuid;

/// Source of fresh, unique identifiers.
///
/// Production code uses [`UuidGenerator`]; tests pass [`SequentialIds`] so that
/// generated schedules can be compared by id.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs rendered in hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids of the form `<prefix>-<n>`, counting from 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
