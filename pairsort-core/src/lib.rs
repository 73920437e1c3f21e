//! pairsort-core: Interactive ranking by pairwise decisions.
//!
//! Binary insertion over a shuffled, fixed item order, where every comparison
//! is answered by someone outside the crate (a person, a script, a model).
//! The crate does no IO; persisting `EngineState` is up to the caller.
//!
//! When the walk needs a comparison it has no answer for, `rank` returns the
//! pair as an `UndecidedPair`. Record the answer and call `rank` again; the
//! walk replays from the start and resolves every earlier pair from the ledger.
//!
//! # Quick start
//!
//! ```rust
//! use pairsort_core::{Decision, Sorter};
//!
//! let mut sorter = Sorter::with_seed(vec![3, 1, 2], 0);
//!
//! let ranking = loop {
//!     match sorter.rank(None) {
//!         Ok(ranking) => break ranking,
//!         Err(pair) => {
//!             // Ask your judge here. This one prefers larger numbers.
//!             let (a, b) = pair.into_pair();
//!             let decision = if a > b { Decision::beats(a, b) } else { Decision::beats(b, a) };
//!             sorter.add_decision(decision);
//!         }
//!     }
//! };
//!
//! assert_eq!(ranking, vec![vec![3], vec![2], vec![1]]);
//! assert_eq!(sorter.progress(), 100);
//! ```

pub mod engine;
pub mod ledger;
pub mod progress;
pub mod shuffle;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::Sorter;
pub use ledger::{DecisionLedger, UndecidedPair};
pub use progress::{estimate_progress, insertion_cost};
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with};
pub use types::{Decision, EngineState, RankedGroup, RankedResult, Verdict};
