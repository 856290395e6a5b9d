use std::collections::BTreeMap;

/// Per-invocation accumulator of failure descriptions, keyed by region.
/// Consulted once at the end of a run to decide whether to notify.
#[derive(Debug, Default)]
pub struct FailureRecord {
    entries: BTreeMap<String, Vec<String>>,
}

impl FailureRecord {
    pub fn new() -> Self {
        FailureRecord::default()
    }

    pub fn record(&mut self, region: &str, message: impl Into<String>) {
        self.entries
            .entry(region.to_string())
            .or_insert_with(Vec::new)
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// All failure messages, regions in lexical order, messages in the order
    /// they were recorded.
    pub fn lines(&self) -> Vec<&str> {
        self.entries
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::failure::FailureRecord;

    #[test]
    fn test_starts_empty() {
        let failures = FailureRecord::new();
        assert!(failures.is_empty());
        assert_eq!(failures.len(), 0);
        assert!(failures.lines().is_empty());
    }

    #[test]
    fn test_record_keeps_order_within_region() {
        let mut failures = FailureRecord::new();
        failures.record("us-east-1", "EC2 in us-east-1: boom");
        failures.record("us-east-1", "RDS in us-east-1: boom");
        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures.lines(),
            vec!["EC2 in us-east-1: boom", "RDS in us-east-1: boom"]
        );
    }

    #[test]
    fn test_lines_group_by_region() {
        let mut failures = FailureRecord::new();
        failures.record("us-west-2", "EKS in us-west-2: boom");
        failures.record("us-east-1", "EC2 in us-east-1: boom");
        assert_eq!(
            failures.lines(),
            vec!["EC2 in us-east-1: boom", "EKS in us-west-2: boom"]
        );
    }
}
