//! # Zenbaki
//!
//! The computational core of a secondary-school math site: vectors,
//! polynomials, calculus, sequences, sexagesimal angles, unit conversion
//! and the practice problems built on top of them.
//!
//! ## Features
//!
//! - **Polynomials**: arithmetic, calculus and Ruffini division with a printable tableau
//! - **Calculus**: a catalog of named functions, Riemann sums and exact integrals
//! - **Sequences**: arithmetic and geometric progressions and classification
//! - **Angles**: degree-minute-second arithmetic with carry normalization
//! - **Practice**: seeded problem generators, answer checking and scores
//!
//! ## Quick Start
//!
//! ```rust
//! use zenbaki::prelude::*;
//!
//! let p = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]);
//! let division = p.synthetic_division(1.0).unwrap();
//! assert_eq!(division.quotient, Polynomial::new(vec![1.0, -5.0, 6.0]));
//! assert_eq!(division.remainder, 0.0);
//!
//! let sum = Dms::new(45, 30, 50.0) + Dms::new(35, 51, 33.0);
//! assert_eq!(sum.to_string(), "81°22'23\"");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use zenbaki_calculus as calculus;
pub use zenbaki_core as core;
pub use zenbaki_poly as poly;
pub use zenbaki_practice as practice;
pub use zenbaki_ratio as ratio;
pub use zenbaki_series as series;
pub use zenbaki_sexagesimal as sexagesimal;
pub use zenbaki_units as units;
pub use zenbaki_vector as vector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zenbaki_calculus::{riemann_sum, Function, RiemannRule};
    pub use zenbaki_core::{format_number, MathError, MathResult};
    pub use zenbaki_poly::{Division, Polynomial};
    pub use zenbaki_practice::{generate, Problem, ScoreKeeper, Session, Tally, Topic, Verdict};
    pub use zenbaki_series::{classify, Arithmetic, Geometric, Progression};
    pub use zenbaki_sexagesimal::Dms;
    pub use zenbaki_units::{convert, Category};
    pub use zenbaki_vector::Vector2;
}
