//! Interactive practice quiz on a line-oriented terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;
use zenbaki::practice::{Problem, ScoreKeeper, Session, Solution, Verdict};

const QUIT: &str = "q";
const SKIP: &str = "s";

fn input_help(problem: &Problem) -> String {
    match &problem.solution {
        Solution::Scalar(_) => "zenbaki bat".into(),
        Solution::Pair(..) => "bi zenbaki, hutsunez bereizita".into(),
        Solution::Dms(_) => "graduak minutuak segundoak".into(),
        Solution::Choice { options, .. } => options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {o}", i + 1))
            .collect::<Vec<_>>()
            .join("  "),
    }
}

/// Splits a line into answer fields on whitespace and semicolons.
///
/// Commas are decimal separators, not field separators.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|f| !f.is_empty())
        .collect()
}

/// Runs the quiz until `rounds` problems are answered, the learner quits,
/// or input ends. Returns the score keeper.
pub fn run<R, S, I, W>(mut session: Session<R, S>, rounds: u32, input: I, out: &mut W) -> Result<S>
where
    R: Rng,
    S: ScoreKeeper,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut answered = 0;

    'quiz: while answered < rounds {
        let problem = session.problem();
        writeln!(out, "\n[{}/{}] {}", answered + 1, rounds, problem.topic().title())?;
        writeln!(out, "{}", problem.prompt)?;
        writeln!(out, "({}; `{SKIP}` saltatzeko, `{QUIT}` irteteko)", input_help(problem))?;

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break 'quiz;
            };
            let line = line.context("reading answer")?;
            let trimmed = line.trim();

            if trimmed.eq_ignore_ascii_case(QUIT) {
                break 'quiz;
            }
            if trimmed.eq_ignore_ascii_case(SKIP) {
                session.skip();
                continue 'quiz;
            }

            let (verdict, answered_problem) = session.submit(&split_fields(trimmed));
            match (verdict, answered_problem) {
                (Verdict::Invalid, _) | (_, None) => {
                    writeln!(out, "Ezin da erantzuna irakurri. Saiatu berriro.")?;
                }
                (Verdict::Correct, Some(_)) => {
                    writeln!(out, "Zuzena!")?;
                    answered += 1;
                    continue 'quiz;
                }
                (Verdict::Incorrect, Some(p)) => {
                    writeln!(out, "Okerra. {}", p.hint)?;
                    answered += 1;
                    continue 'quiz;
                }
            }
        }
    }

    let scores = session.finish();
    match scores.accuracy() {
        Some(accuracy) => writeln!(
            out,
            "\nPuntuazioa: {}/{} ({:.0}%)",
            scores.score(),
            scores.attempts(),
            accuracy * 100.0
        )?,
        None => writeln!(out, "\nEz da ariketarik erantzun.")?,
    }
    Ok(scores)
}
