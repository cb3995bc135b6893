use chrono::Utc;
use uuid::Uuid;

/// Generates ids of the form `{prefix}_{millis}_{counter}_{rand8}`.
///
/// The counter makes ids unique within one pass. The random suffix separates
/// concurrent passes started in the same millisecond.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    millis: i64,
    counter: u64,
}

impl IdGenerator {
    pub(crate) fn new() -> Self {
        Self {
            millis: Utc::now().timestamp_millis(),
            counter: 0,
        }
    }

    pub(crate) fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "{prefix}_{}_{}_{}",
            self.millis,
            self.counter,
            &suffix[..8]
        )
    }

    pub(crate) fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_within_a_pass() {
        let mut ids = IdGenerator::new();
        let issued: HashSet<String> = (0..500).map(|_| ids.next("comp")).collect();
        assert_eq!(issued.len(), 500);
        assert_eq!(ids.issued(), 500);
    }

    #[test]
    fn ids_carry_prefix() {
        let mut ids = IdGenerator::new();
        let id = ids.next("page");
        assert!(id.starts_with("page_"));
        assert_eq!(id.split('_').count(), 4);
        assert_eq!(id.rsplit('_').next().map(str::len), Some(8));
    }
}
