use crate::ledger::DecisionLedger;

/// One recorded judgment.
///
/// Every member of `win` ranks above every member of `lose`, and every member
/// of `tie` shares one rank. Typical callers fill exactly two slots (one
/// winner and one loser, or two tied items), but batches are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Decision<T> {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub win: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub lose: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub tie: Vec<T>,
}

impl<T> Decision<T> {
    /// `winner` ranks above `loser`.
    pub fn beats(winner: T, loser: T) -> Self {
        Decision { win: vec![winner], lose: vec![loser], tie: Vec::new() }
    }

    /// `a` and `b` share a rank.
    pub fn tie(a: T, b: T) -> Self {
        Decision { win: Vec::new(), lose: Vec::new(), tie: vec![a, b] }
    }

    /// Every item in `win` ranks above every item in `lose`.
    pub fn batch(win: Vec<T>, lose: Vec<T>) -> Self {
        Decision { win, lose, tie: Vec::new() }
    }

    /// Every item in `group` shares a rank.
    pub fn tied(group: Vec<T>) -> Self {
        Decision { win: Vec::new(), lose: Vec::new(), tie: group }
    }
}

impl<T: PartialEq> Decision<T> {
    /// True if this decision places `a` above `b`.
    pub fn ranks_above(&self, a: &T, b: &T) -> bool {
        self.win.contains(a) && self.lose.contains(b)
    }

    /// True if this decision places `a` and `b` in the same rank.
    pub fn ties(&self, a: &T, b: &T) -> bool {
        self.tie.contains(a) && self.tie.contains(b)
    }
}

/// Outcome of a resolved comparison, from the first item's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

/// Serializable snapshot of a sorting session.
///
/// `prior_order` is the shuffled processing order, fixed when the session was
/// created. Capturing this and handing it back to `Sorter::from_state` yields
/// an equivalent engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState<T> {
    pub prior_order: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ledger: DecisionLedger<T>,
}

impl<T> EngineState<T> {
    pub fn new(prior_order: Vec<T>) -> Self {
        EngineState { prior_order, ledger: DecisionLedger::new() }
    }
}

/// Mutually tied items sharing one rank. Never empty.
pub type RankedGroup<T> = Vec<T>;

/// Groups ordered from highest to lowest rank.
pub type RankedResult<T> = Vec<RankedGroup<T>>;
