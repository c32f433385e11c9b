//! A practice session: one problem at a time, scored as it is answered.

use rand::Rng;

use crate::generators::generate;
use crate::problem::{Problem, Topic, Verdict};
use crate::score::ScoreKeeper;

/// Drives the generate, show, check, discard cycle.
pub struct Session<R, S> {
    rng: R,
    topics: Vec<Topic>,
    scores: S,
    current: Problem,
}

impl<R: Rng, S: ScoreKeeper> Session<R, S> {
    /// Starts a session drawing problems from `topics` (all topics if
    /// empty) and generates the first problem.
    pub fn new(mut rng: R, topics: Vec<Topic>, scores: S) -> Self {
        let topics = if topics.is_empty() {
            Topic::ALL.to_vec()
        } else {
            topics
        };
        let current = Self::draw(&mut rng, &topics);
        Self {
            rng,
            topics,
            scores,
            current,
        }
    }

    fn draw(rng: &mut R, topics: &[Topic]) -> Problem {
        let topic = topics[rng.gen_range(0..topics.len())];
        generate(topic, rng)
    }

    /// The problem being shown.
    pub fn problem(&self) -> &Problem {
        &self.current
    }

    /// The score keeper.
    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Checks an answer to the current problem.
    ///
    /// Correct and incorrect answers are recorded and the problem is
    /// replaced; the answered problem is returned so its hint can be
    /// shown. Invalid input is not recorded and keeps the problem.
    pub fn submit(&mut self, fields: &[&str]) -> (Verdict, Option<Problem>) {
        let verdict = self.current.check(fields);
        match verdict {
            Verdict::Correct => self.scores.record_correct(),
            Verdict::Incorrect => self.scores.record_incorrect(),
            Verdict::Invalid => return (verdict, None),
        }
        let answered = std::mem::replace(&mut self.current, Self::draw(&mut self.rng, &self.topics));
        (verdict, Some(answered))
    }

    /// Discards the current problem without scoring it.
    pub fn skip(&mut self) -> &Problem {
        self.current = Self::draw(&mut self.rng, &self.topics);
        &self.current
    }

    /// Ends the session, returning the score keeper.
    pub fn finish(self) -> S {
        self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Tally;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn own_answer(problem: &Problem) -> Vec<String> {
        problem.solution.answer_fields()
    }

    #[test]
    fn test_correct_answer_advances_and_scores() {
        let mut session = Session::new(ChaCha8Rng::seed_from_u64(1), vec![], Tally::new());
        let answer = own_answer(session.problem());
        let fields: Vec<&str> = answer.iter().map(String::as_str).collect();

        let (verdict, answered) = session.submit(&fields);
        assert_eq!(verdict, Verdict::Correct);
        assert!(answered.is_some());
        assert_eq!(session.scores().score(), 1);
        assert_eq!(session.scores().attempts(), 1);
    }

    #[test]
    fn test_invalid_answer_keeps_problem() {
        let mut session = Session::new(
            ChaCha8Rng::seed_from_u64(2),
            vec![Topic::Units],
            Tally::new(),
        );
        let before = session.problem().clone();

        let (verdict, answered) = session.submit(&["ez dakit"]);
        assert_eq!(verdict, Verdict::Invalid);
        assert!(answered.is_none());
        assert_eq!(session.problem(), &before);
        assert_eq!(session.scores().attempts(), 0);
    }

    #[test]
    fn test_topics_are_respected() {
        let mut session = Session::new(
            ChaCha8Rng::seed_from_u64(3),
            vec![Topic::Sexagesimal, Topic::Sequences],
            Tally::new(),
        );
        for _ in 0..20 {
            let topic = session.problem().topic();
            assert!(matches!(topic, Topic::Sexagesimal | Topic::Sequences));
            session.skip();
        }
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let a = Session::new(ChaCha8Rng::seed_from_u64(9), vec![], Tally::new());
        let b = Session::new(ChaCha8Rng::seed_from_u64(9), vec![], Tally::new());
        assert_eq!(a.problem(), b.problem());
    }

    #[test]
    fn test_wrong_answer_recorded() {
        let mut session = Session::new(
            ChaCha8Rng::seed_from_u64(4),
            vec![Topic::Proportionality],
            Tally::new(),
        );
        let (verdict, _) = session.submit(&["-99999"]);
        assert_eq!(verdict, Verdict::Incorrect);
        let tally = session.finish();
        assert_eq!(tally.attempts(), 1);
        assert_eq!(tally.score(), 0);
    }
}
