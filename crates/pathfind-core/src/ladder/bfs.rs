use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{PathfindError, Result};
use crate::ladder::dictionary::{Dictionary, LengthBuckets};
use crate::ladder::edit_distance::{at_most_one_mismatch, is_adjacent};

/// Why a ladder request produced no ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Start and end normalize to the same word
    SameWord,
    /// The end word is not in the dictionary
    EndNotInDictionary,
    /// The search ran out of words without reaching the end word
    NoLadder,
}

impl RejectionReason {
    /// Stable identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::SameWord => "same_word",
            RejectionReason::EndNotInDictionary => "end_not_in_dictionary",
            RejectionReason::NoLadder => "no_ladder",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RejectionReason::SameWord => "Start and end words are the same",
            RejectionReason::EndNotInDictionary => "End word not in dictionary",
            RejectionReason::NoLadder => "No word ladder exists",
        };
        f.write_str(msg)
    }
}

/// A ladder request that ended without a ladder. Not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderRejection {
    /// Start word as supplied by the caller
    pub start: String,
    /// End word as supplied by the caller
    pub end: String,
    pub reason: RejectionReason,
}

impl fmt::Display for LadderRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot create word ladder from '{}' to '{}': {}",
            self.start, self.end, self.reason
        )
    }
}

/// Outcome of a ladder search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderResult {
    /// Normalized start word
    pub start: String,
    /// Normalized end word
    pub end: String,
    pub found: bool,
    /// Start to end inclusive; empty when no ladder was found
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<LadderRejection>,
}

impl LadderResult {
    fn found(start: String, end: String, words: Vec<String>) -> Self {
        Self {
            start,
            end,
            found: true,
            words,
            rejection: None,
        }
    }

    fn rejected(
        raw_start: &str,
        raw_end: &str,
        start: String,
        end: String,
        reason: RejectionReason,
    ) -> Self {
        let rejection = LadderRejection {
            start: raw_start.to_string(),
            end: raw_end.to_string(),
            reason,
        };
        tracing::debug!(%rejection, "no word ladder");

        Self {
            start,
            end,
            found: false,
            words: Vec::new(),
            rejection: Some(rejection),
        }
    }

    /// Number of words in the ladder (0 when not found)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A discovered word and the index of the word it was reached from
struct LadderNode<'a> {
    word: &'a str,
    parent: Option<usize>,
}

enum BfsOutcome {
    Found(Vec<String>),
    Exhausted,
}

/// Lengths a neighbor of a `len`-character word can have, in probe order
fn candidate_lengths(len: usize) -> impl Iterator<Item = usize> {
    [Some(len), len.checked_sub(1), Some(len + 1)]
        .into_iter()
        .flatten()
}

/// Follow parent links from `index` back to the start word
fn backtrack(arena: &[LadderNode<'_>], index: usize) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = Some(index);
    while let Some(i) = current {
        words.push(arena[i].word.to_string());
        current = arena[i].parent;
    }
    words.reverse();
    words
}

/// Breadth-first search from `start`. `checkpoint` runs once per dequeued
/// word with the visited count; an `Err` from it aborts the search.
fn bfs<'a, E>(
    start: &'a str,
    end: &str,
    buckets: &LengthBuckets<'a>,
    mut checkpoint: impl FnMut(usize) -> std::result::Result<(), E>,
) -> std::result::Result<BfsOutcome, E> {
    let mut arena = vec![LadderNode {
        word: start,
        parent: None,
    }];
    let mut visited: HashSet<&'a str> = HashSet::from([start]);
    let mut queue: VecDeque<usize> = VecDeque::from([0]);

    while let Some(index) = queue.pop_front() {
        checkpoint(visited.len())?;

        let current = arena[index].word;
        let len = current.chars().count();

        for candidate_len in candidate_lengths(len) {
            for &candidate in buckets.get(candidate_len) {
                if visited.contains(candidate) {
                    continue;
                }

                let adjacent = if candidate_len == len {
                    at_most_one_mismatch(current.chars(), candidate.chars())
                } else {
                    is_adjacent(current, candidate)
                };
                if !adjacent {
                    continue;
                }

                visited.insert(candidate);
                arena.push(LadderNode {
                    word: candidate,
                    parent: Some(index),
                });
                let discovered = arena.len() - 1;

                if candidate == end {
                    tracing::debug!(visited = visited.len(), "word ladder found");
                    return Ok(BfsOutcome::Found(backtrack(&arena, discovered)));
                }
                queue.push_back(discovered);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "word ladder search exhausted");
    Ok(BfsOutcome::Exhausted)
}

fn search<E>(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    checkpoint: impl FnMut(usize) -> std::result::Result<(), E>,
) -> std::result::Result<LadderResult, E> {
    let start_lower = start.to_lowercase();
    let end_lower = end.to_lowercase();

    if start_lower == end_lower {
        return Ok(LadderResult::rejected(
            start,
            end,
            start_lower,
            end_lower,
            RejectionReason::SameWord,
        ));
    }

    if !dictionary.contains(&end_lower) {
        return Ok(LadderResult::rejected(
            start,
            end,
            start_lower,
            end_lower,
            RejectionReason::EndNotInDictionary,
        ));
    }

    let buckets = dictionary.length_buckets();
    let result = match bfs(&start_lower, &end_lower, &buckets, checkpoint)? {
        BfsOutcome::Found(words) => LadderResult::found(start_lower, end_lower, words),
        BfsOutcome::Exhausted => LadderResult::rejected(
            start,
            end,
            start_lower,
            end_lower,
            RejectionReason::NoLadder,
        ),
    };
    Ok(result)
}

/// Find a shortest word ladder from `start` to `end`.
///
/// Both words are lowercased first. `start` need not be in the dictionary;
/// `end` must be. Requests that cannot produce a ladder come back with
/// `found == false` and a [`LadderRejection`] rather than an error.
///
/// Among equally short ladders, the first one discovered wins: neighbors are
/// probed by length (same, shorter, longer), alphabetically within a length.
#[tracing::instrument(skip(dictionary), fields(words = dictionary.len()))]
pub fn generate_word_ladder(start: &str, end: &str, dictionary: &Dictionary) -> LadderResult {
    match search(start, end, dictionary, |_| Ok::<(), Infallible>(())) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Like [`generate_word_ladder`], but stops with
/// [`PathfindError::Interrupted`] once `interrupt` is set. The flag is checked
/// once per dequeued word.
#[tracing::instrument(skip(dictionary, interrupt), fields(words = dictionary.len()))]
pub fn generate_word_ladder_with_interrupt(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    interrupt: &AtomicBool,
) -> Result<LadderResult> {
    search(start, end, dictionary, |visited| {
        if interrupt.load(Ordering::SeqCst) {
            tracing::info!(visited, "word ladder search interrupted");
            return Err(PathfindError::Interrupted);
        }
        Ok(())
    })
}
