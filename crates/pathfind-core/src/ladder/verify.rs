//! Built-in word ladder checks
//!
//! Each case names two words and the ladder length (in words, both ends
//! included) a complete English dictionary should produce.

use serde::Serialize;

use crate::ladder::bfs::generate_word_ladder;
use crate::ladder::dictionary::Dictionary;

/// A ladder request and its expected length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerifyCase {
    pub start: &'static str,
    pub end: &'static str,
    pub expected_len: usize,
}

impl VerifyCase {
    pub const fn new(start: &'static str, end: &'static str, expected_len: usize) -> Self {
        Self {
            start,
            end,
            expected_len,
        }
    }
}

pub const DEFAULT_VERIFY_CASES: &[VerifyCase] = &[
    VerifyCase::new("cat", "dog", 4),
    VerifyCase::new("marty", "curls", 6),
    VerifyCase::new("code", "data", 6),
    VerifyCase::new("work", "play", 6),
    VerifyCase::new("sleep", "awake", 8),
    VerifyCase::new("car", "cheat", 4),
];

/// Result of running one [`VerifyCase`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyOutcome {
    #[serde(flatten)]
    pub case: VerifyCase,
    /// Ladder length found (0 when none)
    pub actual_len: usize,
    pub passed: bool,
    pub words: Vec<String>,
}

/// Run `cases` against `dictionary`, in order
pub fn run_cases(cases: &[VerifyCase], dictionary: &Dictionary) -> Vec<VerifyOutcome> {
    cases
        .iter()
        .map(|case| {
            let result = generate_word_ladder(case.start, case.end, dictionary);
            let actual_len = result.len();
            let passed = actual_len == case.expected_len;
            if !passed {
                tracing::debug!(
                    start = case.start,
                    end = case.end,
                    expected = case.expected_len,
                    actual = actual_len,
                    "verify case failed"
                );
            }

            VerifyOutcome {
                case: *case,
                actual_len,
                passed,
                words: result.words,
            }
        })
        .collect()
}

/// Run the built-in cases against `dictionary`
#[tracing::instrument(skip(dictionary), fields(words = dictionary.len()))]
pub fn verify_word_ladders(dictionary: &Dictionary) -> Vec<VerifyOutcome> {
    run_cases(DEFAULT_VERIFY_CASES, dictionary)
}
