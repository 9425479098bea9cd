//! Typing-test engine
//!
//! The countdown is driven by the shell: one [`TypingTest::tick`] call per
//! elapsed second. The engine only validates submissions and keeps score.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Words offered by the test, sampled without replacement per round
pub const WORD_BANK: [&str; 25] = [
    "react", "component", "javascript", "function", "state", "props", "array", "object",
    "variable", "random", "timer", "score", "hooks", "context", "redux", "node", "express",
    "html", "css", "typing", "speed", "test", "keyboard", "code", "syntax",
];

/// Default test duration in seconds
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// Timed word-typing test state
#[derive(Debug, Clone)]
pub struct TypingTest {
    words: Vec<&'static str>,
    current: usize,
    correct: usize,
    time_left: u32,
    finished: bool,
}

impl TypingTest {
    /// Create a test over a shuffled sample of the word bank with an
    /// OS-derived random seed.
    ///
    /// At most `WORD_BANK.len()` words are offered; asking for more simply
    /// yields the whole shuffled bank.
    pub fn new(word_count: usize, duration_secs: u32) -> Self {
        Self::with_seed(word_count, duration_secs, rand::random::<u64>())
    }

    /// Create a test with an explicit seed
    pub fn with_seed(word_count: usize, duration_secs: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bank = WORD_BANK.to_vec();
        bank.shuffle(&mut rng);
        bank.truncate(word_count.min(WORD_BANK.len()));

        TypingTest {
            words: bank,
            current: 0,
            correct: 0,
            time_left: duration_secs,
            finished: false,
        }
    }

    /// Submit one typed word against the current target word.
    ///
    /// Input is trimmed before comparison, so space-terminated entry from a
    /// text field works unchanged. The cursor always advances; the return
    /// value reports whether the submission matched. Running out of words
    /// ends the test.
    ///
    /// # Errors
    ///
    /// Returns error if the test has already ended.
    pub fn submit(&mut self, typed: &str) -> crate::Result<bool> {
        if self.finished {
            return Err(crate::Error::GameOver);
        }
        let Some(target) = self.words.get(self.current) else {
            return Err(crate::Error::GameOver);
        };

        let matched = typed.trim() == *target;
        if matched {
            self.correct += 1;
        }
        self.current += 1;
        if self.current == self.words.len() {
            self.finished = true;
        }
        Ok(matched)
    }

    /// Advance the countdown by one second; at zero the test ends
    pub fn tick(&mut self) -> u32 {
        if self.time_left > 0 {
            self.time_left -= 1;
            if self.time_left == 0 {
                self.finished = true;
            }
        }
        self.time_left
    }

    /// The words offered this round, in presentation order
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// The word the player should type next, if any
    pub fn current_word(&self) -> Option<&'static str> {
        self.words.get(self.current).copied()
    }

    /// Number of words submitted so far
    pub fn words_typed(&self) -> usize {
        self.current
    }

    /// Number of correct submissions so far
    pub fn correct_words(&self) -> usize {
        self.correct
    }

    /// Seconds remaining
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Whether the countdown has expired or the words ran out
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Percentage of submissions that were correct, rounded to the nearest
    /// whole percent; 0 when nothing has been submitted yet
    pub fn accuracy(&self) -> u32 {
        if self.current == 0 {
            0
        } else {
            ((self.correct as f64 / self.current as f64) * 100.0).round() as u32
        }
    }
}
