//! Word ladder search
//!
//! Words are vertices of an implicit graph; two words are joined when their
//! edit distance is at most one. Neighbors are never materialized:
//! - `edit_distance`: the adjacency test
//! - `dictionary`: the word set and its length index used for pruning
//! - `bfs`: breadth-first ladder construction
//! - `verify`: built-in ladder checks against a dictionary

pub mod bfs;
pub mod dictionary;
pub mod edit_distance;
pub mod verify;

pub use bfs::{
    generate_word_ladder, generate_word_ladder_with_interrupt, LadderRejection, LadderResult,
    RejectionReason,
};
pub use dictionary::{Dictionary, LengthBuckets};
pub use edit_distance::{edit_distance, edit_distance_within, is_adjacent};
pub use verify::{run_cases, verify_word_ladders, VerifyCase, VerifyOutcome, DEFAULT_VERIFY_CASES};
