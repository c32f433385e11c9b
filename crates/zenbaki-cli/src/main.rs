mod config;
mod quiz;

use std::io;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use zenbaki::calculus::{compare, Function, RiemannRule};
use zenbaki::core::format_number;
use zenbaki::poly::{factor_integer_roots, Polynomial};
use zenbaki::practice::{parse_number, ScoreKeeper, Session, Tally, Topic};
use zenbaki::series::{classify, Arithmetic, Geometric, Progression};
use zenbaki::sexagesimal::{try_decimal_to_dms, Dms};
use zenbaki::units::{convert, format_quantity, Category};

#[derive(Parser)]
#[command(
    name = "zenbaki",
    version,
    about = "Math practice quiz and calculator"
)]
struct Cli {
    /// Decimal places for printed results (overrides [display] decimals)
    #[arg(long, global = true)]
    decimals: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer randomly generated exercises
    Practice {
        /// Problems to answer (overrides [quiz] rounds)
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Topics to draw from, comma-separated (overrides [quiz] topics)
        #[arg(short, long, value_delimiter = ',')]
        topics: Vec<Topic>,

        /// Seed for a reproducible quiz (overrides [quiz] seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Convert a quantity between units of one category
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit symbol
        from: String,

        /// Target unit symbol
        to: String,

        /// Category; inferred from the source unit when omitted
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Divide a polynomial by (x - root) with Ruffini's rule
    Ruffini {
        /// Root `r` of the divisor `x - r`
        #[arg(short, long, allow_negative_numbers = true)]
        root: Option<f64>,

        /// Also factor out every integer root
        #[arg(short, long)]
        factor: bool,

        /// Coefficients, highest power first
        #[arg(required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,
    },

    /// Degree-minute-second arithmetic
    Dms {
        #[command(subcommand)]
        command: DmsCommands,
    },

    /// Classify a list of terms and continue it
    Sequence {
        /// Terms in order
        #[arg(required = true, allow_negative_numbers = true)]
        terms: Vec<f64>,

        /// Extra terms to print after the given ones
        #[arg(short, long, default_value = "3")]
        next: u32,
    },

    /// Integrate a catalog function exactly and with rectangles
    Integrate {
        /// Function to integrate
        function: CliFunction,

        /// Lower bound
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Upper bound
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Number of rectangles
        #[arg(short = 'n', long, default_value = "10")]
        rectangles: usize,

        /// Sample point inside each rectangle
        #[arg(long, default_value = "midpoint")]
        rule: CliRule,
    },

    /// Show the configuration file path
    Config,
}

#[derive(Subcommand)]
enum DmsCommands {
    /// Add two angles
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Subtract the second angle from the first
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Decimal degrees to degrees, minutes and seconds
    ToDms {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Degrees, minutes and seconds to decimal degrees
    ToDecimal {
        #[arg(allow_hyphen_values = true)]
        angle: String,
    },
}

#[derive(Clone, ValueEnum)]
enum CliFunction {
    Square,
    Cube,
    Sin,
    Cos,
    Exp,
    Ln,
    Sqrt,
}

impl From<CliFunction> for Function {
    fn from(val: CliFunction) -> Self {
        match val {
            CliFunction::Square => Function::Square,
            CliFunction::Cube => Function::Cube,
            CliFunction::Sin => Function::Sin,
            CliFunction::Cos => Function::Cos,
            CliFunction::Exp => Function::Exp,
            CliFunction::Ln => Function::Ln,
            CliFunction::Sqrt => Function::Sqrt,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum CliRule {
    Left,
    Right,
    Midpoint,
}

impl From<CliRule> for RiemannRule {
    fn from(val: CliRule) -> Self {
        match val {
            CliRule::Left => RiemannRule::Left,
            CliRule::Right => RiemannRule::Right,
            CliRule::Midpoint => RiemannRule::Midpoint,
        }
    }
}

/// Builds the log filter from `RUST_LOG`-style directives, `warn` when empty.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();

    let cli = Cli::parse();
    let config = config::load_config()?;
    let decimals = cli.decimals.unwrap_or(config.display.decimals);

    match cli.command {
        Commands::Practice {
            rounds,
            topics,
            seed,
        } => {
            let topics = if topics.is_empty() {
                config.quiz.parsed_topics()?
            } else {
                topics
            };
            cmd_practice(
                rounds.unwrap_or(config.quiz.rounds),
                topics,
                seed.or(config.quiz.seed),
            )
        }
        Commands::Convert {
            value,
            from,
            to,
            category,
        } => cmd_convert(value, &from, &to, category),
        Commands::Ruffini {
            root,
            factor,
            coeffs,
        } => cmd_ruffini(coeffs, root, factor, decimals),
        Commands::Dms { command } => cmd_dms(command, decimals),
        Commands::Sequence { terms, next } => cmd_sequence(&terms, next, decimals),
        Commands::Integrate {
            function,
            a,
            b,
            rectangles,
            rule,
        } => cmd_integrate(function.into(), a, b, rectangles, rule.into(), decimals),
        Commands::Config => {
            println!("{}", config::show_config_path());
            Ok(())
        }
    }
}

fn cmd_practice(rounds: u32, topics: Vec<Topic>, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, rounds, "starting quiz");

    let session = Session::new(ChaCha8Rng::seed_from_u64(seed), topics, Tally::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let tally = quiz::run(session, rounds, stdin.lock(), &mut stdout)?;
    if tally.attempts() > 0 {
        println!("Bolada onena: {}", tally.best_streak());
    }
    Ok(())
}

fn cmd_convert(value: f64, from: &str, to: &str, category: Option<Category>) -> Result<()> {
    let category = match category {
        Some(c) => c,
        None => Category::ALL
            .into_iter()
            .find(|c| c.unit(from).is_ok())
            .with_context(|| format!("no category has a unit `{from}`"))?,
    };
    let result = convert(value, from, to, category)?;
    let from_unit = category.unit(from)?;
    let to_unit = category.unit(to)?;
    println!(
        "{} = {}",
        format_quantity(value, from_unit),
        format_quantity(result, to_unit)
    );
    Ok(())
}

fn cmd_ruffini(coeffs: Vec<f64>, root: Option<f64>, factor: bool, decimals: usize) -> Result<()> {
    let p = Polynomial::new(coeffs);
    println!("P(x) = {p}");

    if let Some(root) = root {
        let division = p.synthetic_division(root)?;
        println!("\n{}\n", division.tableau(&p));
        println!("Q(x) = {}", division.quotient);
        println!("R = {}", format_number(division.remainder, decimals));
    }

    if factor {
        let factorization = factor_integer_roots(&p)?;
        if factorization.roots.is_empty() {
            println!("No integer roots");
        } else {
            let roots: Vec<String> = factorization.roots.iter().map(i64::to_string).collect();
            println!("Integer roots: {}", roots.join(", "));
        }
        println!("Residual: {}", factorization.residual);
    }

    if root.is_none() && !factor {
        bail!("nothing to do: pass --root and/or --factor");
    }
    Ok(())
}

/// Parses `45°30'12"`, `45:30:12` or `45 30 12`. Missing trailing fields
/// are zero; a leading `-` negates the whole angle.
fn parse_dms(text: &str) -> Result<Dms> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let fields: Vec<&str> = body
        .split(|c: char| matches!(c, '°' | '\'' | '"' | ':') || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    if fields.is_empty() || fields.len() > 3 {
        bail!("expected degrees, minutes and seconds in `{text}`");
    }

    let degrees: u32 = fields[0]
        .parse()
        .with_context(|| format!("invalid degrees in `{text}`"))?;
    let minutes: u32 = match fields.get(1) {
        Some(m) => m
            .parse()
            .with_context(|| format!("invalid minutes in `{text}`"))?,
        None => 0,
    };
    let seconds = match fields.get(2) {
        Some(s) => parse_number(s).with_context(|| format!("invalid seconds in `{text}`"))?,
        None => 0.0,
    };

    let magnitude = Dms::new(i64::from(degrees), minutes, seconds);
    Ok(if negative {
        Dms::from_total_seconds(-magnitude.total_seconds())
    } else {
        magnitude
    })
}

fn cmd_dms(command: DmsCommands, decimals: usize) -> Result<()> {
    match command {
        DmsCommands::Add { a, b } => {
            let (a, b) = (parse_dms(&a)?, parse_dms(&b)?);
            println!("{a} + {b} = {}", a + b);
        }
        DmsCommands::Sub { a, b } => {
            let (a, b) = (parse_dms(&a)?, parse_dms(&b)?);
            println!("{a} - {b} = {}", a - b);
        }
        DmsCommands::ToDms { value } => {
            let dms = try_decimal_to_dms(value)?;
            println!("{}° = {dms}", format_number(value, decimals));
        }
        DmsCommands::ToDecimal { angle } => {
            let dms = parse_dms(&angle)?;
            println!("{dms} = {}°", format_number(dms.to_decimal(), decimals));
        }
    }
    Ok(())
}

/// Most terms `sequence --next` prints.
const MAX_CONTINUATION: u32 = 1000;

/// Terms `given + 1 ..= given + count`, comma-separated.
fn continuation(p: &dyn Progression, given: u32, count: u32, decimals: usize) -> Result<String> {
    if count > MAX_CONTINUATION {
        bail!("--next is limited to {MAX_CONTINUATION} terms, got {count}");
    }
    let last = given
        .checked_add(count)
        .context("term index out of range")?;
    Ok((given..last)
        .map(|n| format_number(p.nth_term(n + 1), decimals))
        .collect::<Vec<_>>()
        .join(", "))
}

fn cmd_sequence(terms: &[f64], next: u32, decimals: usize) -> Result<()> {
    let classification = classify(terms, zenbaki::core::DEFAULT_EPSILON)?;
    let first = terms[0];
    let given = u32::try_from(terms.len()).context("too many terms")?;

    if classification.is_ambiguous() {
        println!("Constant sequence: arithmetic (d = 0) and geometric (r = 1)");
    }
    if let Some(d) = classification.difference {
        let progression = Arithmetic::new(first, d);
        println!("Arithmetic: {progression}");
        println!("  d = {}", format_number(d, decimals));
        println!("  next: {}", continuation(&progression, given, next, decimals)?);
    }
    if let Some(r) = classification.ratio {
        let progression = Geometric::new(first, r);
        println!("Geometric: {progression}");
        println!("  r = {}", format_number(r, decimals));
        println!("  next: {}", continuation(&progression, given, next, decimals)?);
        if let Some(limit) = progression.infinite_sum() {
            println!("  sum to infinity: {}", format_number(limit, decimals));
        }
    }
    if !classification.is_arithmetic() && !classification.is_geometric() {
        println!("Neither arithmetic nor geometric");
    }
    Ok(())
}

fn cmd_integrate(
    function: Function,
    a: f64,
    b: f64,
    n: usize,
    rule: RiemannRule,
    decimals: usize,
) -> Result<()> {
    let Some(comparison) = compare(function, a, b, n, rule)? else {
        bail!(
            "{} cannot be integrated on [{}, {}]",
            function,
            format_number(a, decimals),
            format_number(b, decimals)
        );
    };
    println!(
        "∫ {} dx on [{}, {}], F(x) = {}",
        function,
        format_number(a, decimals),
        format_number(b, decimals),
        function.antiderivative_label()
    );
    println!("  exact:        {}", format_number(comparison.exact, decimals));
    println!(
        "  {} rectangles: {}",
        comparison.subintervals,
        format_number(comparison.approximation, decimals)
    );
    println!("  error:        {}", format_number(comparison.error, decimals));
    Ok(())
}
