//! Binary-insertion ranking engine.
//!
//! `Sorter` never asks anyone anything itself. When the walk reaches a pair
//! with no decision it hands the pair back, and the caller records a verdict
//! before ranking again.
//!
//! Every call to `rank` replays the full insertion walk over the fixed prior
//! order. Pairs already in the ledger resolve the same way each time, so only
//! comparisons past the previous stopping point cost a new decision.
use tracing::{debug, trace};

use crate::ledger::{DecisionLedger, UndecidedPair};
use crate::progress::estimate_progress;
use crate::shuffle::{shuffle, shuffle_seeded};
use crate::types::{Decision, EngineState, RankedResult, Verdict};

#[derive(Debug, Clone)]
pub struct Sorter<T> {
    state: EngineState<T>,

    /// Items fully inserted during the most recent `rank` attempt.
    inserted: usize,

    progress: u8,
    finished: bool,
}

impl<T: Clone + PartialEq> Sorter<T> {
    /// Start a session over `items` in a freshly shuffled order.
    pub fn new(items: Vec<T>) -> Self {
        Self::from_state(EngineState::new(shuffle(items)))
    }

    /// Like `new`, but the shuffle is reproducible from `seed`.
    pub fn with_seed(items: Vec<T>, seed: u64) -> Self {
        Self::from_state(EngineState::new(shuffle_seeded(items, seed)))
    }

    /// Resume from a snapshot. The prior order and ledger are adopted as-is.
    pub fn from_state(state: EngineState<T>) -> Self {
        Sorter {
            state,
            inserted: 0,
            progress: 0,
            finished: false,
        }
    }

    /// Rank the items, resolving the top `limit` of them (`None` = all).
    ///
    /// Returns groups of tied items from highest to lowest rank. Items beyond
    /// the limit are not distinguished and are dropped from the result, and a
    /// tied group that would cross the limit is dropped whole.
    ///
    /// Fails with the first comparison that has no decision yet. Nothing is
    /// kept from a failed attempt except the progress position; record the
    /// missing decision and call again.
    pub fn rank(&mut self, limit: Option<usize>) -> Result<RankedResult<T>, UndecidedPair<T>> {
        self.progress = self.estimate_progress(limit);

        let mut groups: RankedResult<T> = Vec::new();
        for (index, challenger) in self.state.prior_order.iter().enumerate() {
            self.inserted = index;
            if let Err(pair) = insert(&self.state.ledger, &mut groups, challenger, limit) {
                trace!(inserted = index, round = self.state.ledger.len(), "comparison undecided");
                return Err(pair);
            }
        }

        self.inserted = self.state.prior_order.len();
        self.progress = 100;
        self.finished = true;

        truncate_to_limit(&mut groups, limit);
        debug!(groups = groups.len(), round = self.state.ledger.len(), "ranking complete");
        Ok(groups)
    }

    /// Rank to completion, asking `oracle` for every missing comparison.
    ///
    /// The oracle receives the two items in the order `rank` reported them. If
    /// it answers with a decision that does not cover that pair, the pair is
    /// handed back as the error and nothing is recorded.
    pub fn rank_with<F>(&mut self, limit: Option<usize>, mut oracle: F) -> Result<RankedResult<T>, UndecidedPair<T>>
    where
        F: FnMut(&T, &T) -> Decision<T>,
    {
        loop {
            let pair = match self.rank(limit) {
                Ok(result) => return Ok(result),
                Err(pair) => pair,
            };

            let decision = oracle(&pair.a, &pair.b);
            let covers = decision.ranks_above(&pair.a, &pair.b)
                || decision.ranks_above(&pair.b, &pair.a)
                || decision.ties(&pair.a, &pair.b);
            if !covers {
                return Err(pair);
            }
            self.add_decision(decision);
        }
    }

    /// Progress estimate for `limit`, based on where the latest attempt stopped.
    pub fn estimate_progress(&self, limit: Option<usize>) -> u8 {
        estimate_progress(self.state.prior_order.len(), self.inserted, limit)
    }
}

impl<T> Sorter<T> {
    /// Record a decision. Contradictions with earlier decisions are not
    /// checked; the earliest matching decision keeps winning.
    pub fn add_decision(&mut self, decision: Decision<T>) {
        self.state.ledger.push(decision);
        debug!(round = self.state.ledger.len(), "decision recorded");
    }

    /// Percentage complete as of the latest `rank` call.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Number of decisions recorded so far.
    pub fn round(&self) -> usize {
        self.state.ledger.len()
    }

    /// True once any `rank` call has completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn ledger(&self) -> &DecisionLedger<T> {
        &self.state.ledger
    }

    pub fn state(&self) -> &EngineState<T> {
        &self.state
    }

    pub fn into_state(self) -> EngineState<T> {
        self.state
    }

    /// Number of items being ranked.
    pub fn len(&self) -> usize {
        self.state.prior_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.prior_order.is_empty()
    }
}

/// Binary-search `challenger` into `groups`, which are already sorted.
fn insert<T: Clone + PartialEq>(
    ledger: &DecisionLedger<T>,
    groups: &mut RankedResult<T>,
    challenger: &T,
    limit: Option<usize>,
) -> Result<(), UndecidedPair<T>> {
    let mut left = 0;
    let mut right = search_bound(groups, limit);

    while left < right {
        let mid = (left + right) / 2;
        match ledger.resolve(challenger, &groups[mid][0])? {
            Verdict::Win => right = mid,
            Verdict::Lose => left = mid + 1,
            Verdict::Tie => {
                groups[mid].push(challenger.clone());
                return Ok(());
            }
        }
    }

    groups.insert(left, vec![challenger.clone()]);
    Ok(())
}

/// Number of leading groups that must be searched to keep the top `limit`
/// items exact. Groups past that point are never compared against.
fn search_bound<T>(groups: &RankedResult<T>, limit: Option<usize>) -> usize {
    let Some(limit) = limit else {
        return groups.len();
    };

    let mut covered = 0;
    for (index, group) in groups.iter().enumerate() {
        if covered >= limit {
            return index;
        }
        covered += group.len();
    }
    groups.len()
}

/// Keep leading groups while their combined size stays within `limit`.
fn truncate_to_limit<T>(groups: &mut RankedResult<T>, limit: Option<usize>) {
    let Some(limit) = limit else {
        return;
    };

    let mut covered = 0;
    let keep = groups
        .iter()
        .take_while(|group| {
            covered += group.len();
            covered <= limit
        })
        .count();
    groups.truncate(keep);
}
