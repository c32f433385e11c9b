//! # zenbaki-practice
//!
//! The practice mode of every topic page.
//!
//! A [`Problem`] is generated from an explicit random source, shown to the
//! learner, checked against their input with a per-problem tolerance and
//! then discarded. [`Session`] drives that cycle and reports results to a
//! [`ScoreKeeper`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use zenbaki_practice::{generate, Topic, Verdict};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let problem = generate(Topic::Sequences, &mut rng);
//! let answer = problem.solution.answer_fields();
//! let fields: Vec<&str> = answer.iter().map(String::as_str).collect();
//! assert_eq!(problem.check(&fields), Verdict::Correct);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod answer;
pub mod generators;
pub mod problem;
pub mod score;
pub mod session;

#[cfg(test)]
mod proptests;

pub use answer::parse_number;
pub use generators::{generate, generate_kind};
pub use problem::{Problem, ProblemKind, Solution, Topic, UnknownTopic, Verdict};
pub use score::{ScoreKeeper, Tally};
pub use session::Session;
