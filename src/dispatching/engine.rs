//! Rule engine for multi-key dispatching.
//!
//! Applies rules in sequence: the next rule is consulted only when every
//! earlier rule ties. Whatever still ties goes to the lower input index.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Candidate, SelectionRule};

/// A composable rule engine for ready-queue selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityRule)
///     .with_tie_breaker(rules::Fcfs);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Shortest burst first, then earliest arrival.
    pub fn shortest_job_first() -> Self {
        Self::new().with_rule(rules::Spt).with_tie_breaker(rules::Fcfs)
    }

    /// Shortest remaining time first, then earliest arrival.
    pub fn shortest_remaining_first() -> Self {
        Self::new().with_rule(rules::Srt).with_tie_breaker(rules::Fcfs)
    }

    /// Lowest priority value first, then earliest arrival.
    pub fn priority_first() -> Self {
        Self::new()
            .with_rule(rules::PriorityRule)
            .with_tie_breaker(rules::Fcfs)
    }

    /// Earliest arrival first, then shortest burst.
    pub fn arrival_then_burst() -> Self {
        Self::new().with_rule(rules::Fcfs).with_tie_breaker(rules::Spt)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two candidates. `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.index.cmp(&b.index)
    }

    /// Returns positions into `candidates`, best first.
    pub fn sort_indices(&self, candidates: &[Candidate]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| self.compare(&candidates[a], &candidates[b]));
        order
    }

    /// Returns the candidate to dispatch next.
    ///
    /// Candidates tied on every rule go to the lower input index.
    pub fn select_best<I>(&self, candidates: I) -> Option<Candidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        candidates.into_iter().reduce(|best, c| {
            if self.compare(&c, &best) == Ordering::Less {
                c
            } else {
                best
            }
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(index: usize, arrival: i64, burst: i64, priority: Option<i32>) -> Candidate {
        Candidate {
            index,
            arrival_time: arrival,
            burst_time: burst,
            remaining_time: burst,
            priority,
        }
    }

    #[test]
    fn test_spt_ordering() {
        let ready = vec![
            candidate(0, 0, 5, None),
            candidate(1, 0, 1, None),
            candidate(2, 0, 3, None),
        ];
        let order = RuleEngine::shortest_job_first().sort_indices(&ready);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_tie_broken_by_arrival() {
        let ready = vec![candidate(0, 3, 2, None), candidate(1, 1, 2, None)];
        let best = RuleEngine::shortest_job_first().select_best(ready).unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn test_full_tie_broken_by_input_order() {
        let ready = vec![candidate(4, 0, 2, Some(1)), candidate(2, 0, 2, Some(1))];
        let best = RuleEngine::priority_first().select_best(ready).unwrap();
        assert_eq!(best.index, 2);
    }

    #[test]
    fn test_full_tie_sorted_by_input_order() {
        let ready = vec![candidate(4, 0, 2, None), candidate(2, 0, 2, None)];
        let order = RuleEngine::shortest_job_first().sort_indices(&ready);
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_priority_beats_arrival() {
        let ready = vec![candidate(0, 0, 5, Some(2)), candidate(1, 0, 3, Some(1))];
        let best = RuleEngine::priority_first().select_best(ready).unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn test_arrival_then_burst() {
        let ready = vec![
            candidate(0, 2, 4, None),
            candidate(1, 0, 7, None),
            candidate(2, 2, 1, None),
        ];
        let order = RuleEngine::arrival_then_burst().sort_indices(&ready);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::shortest_remaining_first();
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.select_best(Vec::new()).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let s = format!("{:?}", RuleEngine::shortest_remaining_first());
        assert!(s.contains("SRT"));
        assert!(s.contains("FCFS"));
    }
}
