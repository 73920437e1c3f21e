/// Decision ledger and the comparison resolver built on it.
///
/// The ledger is the only source of truth for comparisons. It only grows, and
/// it is scanned oldest-first: when two entries disagree about a pair, the
/// older one wins. Contradictions are not detected.
use crate::types::{Decision, Verdict};

/// A comparison that has no recorded decision yet.
///
/// Returned by [`DecisionLedger::resolve`] and by `Sorter::rank`. It is the
/// normal "needs input" signal: ask whoever judges the items about `a` vs `b`,
/// record the answer with `Sorter::add_decision`, and rank again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no decision recorded between {a:?} and {b:?}")]
pub struct UndecidedPair<T> {
    pub a: T,
    pub b: T,
}

impl<T> UndecidedPair<T> {
    pub fn pair(&self) -> (&T, &T) {
        (&self.a, &self.b)
    }

    pub fn into_pair(self) -> (T, T) {
        (self.a, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DecisionLedger<T> {
    decisions: Vec<Decision<T>>,
}

impl<T> Default for DecisionLedger<T> {
    fn default() -> Self {
        DecisionLedger { decisions: Vec::new() }
    }
}

impl<T> DecisionLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision. Nothing is validated.
    pub fn push(&mut self, decision: Decision<T>) {
        self.decisions.push(decision);
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Decisions in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Decision<T>> {
        self.decisions.iter()
    }
}

impl<T: Clone + PartialEq> DecisionLedger<T> {
    /// Resolve `a` against `b` using the first matching decision.
    pub fn resolve(&self, a: &T, b: &T) -> Result<Verdict, UndecidedPair<T>> {
        for decision in &self.decisions {
            if decision.ranks_above(a, b) {
                return Ok(Verdict::Win);
            } else if decision.ranks_above(b, a) {
                return Ok(Verdict::Lose);
            } else if decision.ties(a, b) {
                return Ok(Verdict::Tie);
            }
        }

        Err(UndecidedPair { a: a.clone(), b: b.clone() })
    }
}

impl<T> From<Vec<Decision<T>>> for DecisionLedger<T> {
    fn from(decisions: Vec<Decision<T>>) -> Self {
        DecisionLedger { decisions }
    }
}

impl<'a, T> IntoIterator for &'a DecisionLedger<T> {
    type Item = &'a Decision<T>;
    type IntoIter = std::slice::Iter<'a, Decision<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.decisions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_win_lose_tie() {
        let mut ledger = DecisionLedger::new();
        ledger.push(Decision::beats('a', 'b'));
        ledger.push(Decision::tie('c', 'd'));

        assert_eq!(ledger.resolve(&'a', &'b'), Ok(Verdict::Win));
        assert_eq!(ledger.resolve(&'b', &'a'), Ok(Verdict::Lose));
        assert_eq!(ledger.resolve(&'d', &'c'), Ok(Verdict::Tie));
    }

    #[test]
    fn test_resolve_unknown_pair_carries_both_items() {
        let mut ledger = DecisionLedger::new();
        ledger.push(Decision::beats(1, 2));

        let err = ledger.resolve(&1, &3).unwrap_err();
        assert_eq!(err.pair(), (&1, &3));
        assert_eq!(err.to_string(), "no decision recorded between 1 and 3");
        assert_eq!(err.into_pair(), (1, 3));
    }

    #[test]
    fn test_oldest_decision_takes_priority() {
        let mut ledger = DecisionLedger::new();
        ledger.push(Decision::beats("x", "y"));
        ledger.push(Decision::beats("y", "x"));
        ledger.push(Decision::tie("x", "y"));

        assert_eq!(ledger.resolve(&"x", &"y"), Ok(Verdict::Win));
        assert_eq!(ledger.resolve(&"y", &"x"), Ok(Verdict::Lose));
    }

    #[test]
    fn test_batched_decision_resolves_each_member() {
        let ledger = DecisionLedger::from(vec![
            Decision::batch(vec![1, 2], vec![3]),
            Decision::tied(vec![4, 5, 6]),
        ]);

        assert_eq!(ledger.resolve(&2, &3), Ok(Verdict::Win));
        assert_eq!(ledger.resolve(&3, &1), Ok(Verdict::Lose));
        assert_eq!(ledger.resolve(&6, &4), Ok(Verdict::Tie));
        assert!(ledger.resolve(&1, &2).is_err());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_item_never_matches_itself_without_a_decision() {
        let ledger: DecisionLedger<u8> = DecisionLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.resolve(&7, &7).is_err());
    }
}
