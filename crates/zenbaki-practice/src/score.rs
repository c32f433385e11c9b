//! Score keeping for the practice mode.

/// The progress counter a practice page reports to.
///
/// How counts are stored or persisted is up to the implementor; the
/// practice flow only records outcomes and reads the aggregates.
pub trait ScoreKeeper {
    /// Records a correct answer.
    fn record_correct(&mut self);

    /// Records an incorrect answer.
    fn record_incorrect(&mut self);

    /// Number of correct answers.
    fn score(&self) -> u32;

    /// Number of graded answers.
    fn attempts(&self) -> u32;

    /// Share of correct answers, `None` before the first attempt.
    fn accuracy(&self) -> Option<f64> {
        let attempts = self.attempts();
        (attempts > 0).then(|| f64::from(self.score()) / f64::from(attempts))
    }
}

/// In-memory counter, reset when dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    correct: u32,
    attempts: u32,
    streak: u32,
    best_streak: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive correct answers up to now.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest run of correct answers.
    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl ScoreKeeper for Tally {
    fn record_correct(&mut self) {
        self.correct += 1;
        self.attempts += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    fn record_incorrect(&mut self) {
        self.attempts += 1;
        self.streak = 0;
    }

    fn score(&self) -> u32 {
        self.correct
    }

    fn attempts(&self) -> u32 {
        self.attempts
    }
}
