//! Record id generation.

use chrono::Utc;

/// Issues ids from the creation timestamp in milliseconds.
///
/// Ids are strictly increasing within one generator, so two records created
/// in the same millisecond still get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id that is not already `taken`.
    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let first: i64 = ids.next_id(|_| false).parse().unwrap();
        let second: i64 = ids.next_id(|_| false).parse().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_skips_taken_ids() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id(|_| false);
        let blocked: i64 = first.parse::<i64>().unwrap() + 1;
        let blocked = blocked.to_string();
        let next = ids.next_id(|c| c == blocked);
        assert_ne!(next, blocked);
        assert_ne!(next, first);
    }
}
