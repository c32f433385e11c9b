//! Conversion and arithmetic for degree-minute-second values.

use std::fmt;
use std::ops::{Add, Sub};

use zenbaki_core::{format_number, round_to, MathError, MathResult};

/// Seconds are rounded to this many decimals to hide floating noise.
pub const SECONDS_DECIMALS: i32 = 2;

/// Largest whole-degree magnitude a [`Dms`] holds.
pub const MAX_DEGREES: u32 = u32::MAX;

/// A normalized sexagesimal angle.
///
/// The sign applies to the whole value. It is stored apart from
/// `degrees` so that angles in `(-1°, 0°)` keep it.
///
/// Angles must stay within ±[`MAX_DEGREES`]. Constructors check this with
/// debug assertions; use [`try_decimal_to_dms`] for unvalidated input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dms {
    /// True for angles below zero.
    pub negative: bool,
    /// Whole degrees, magnitude.
    pub degrees: u32,
    /// Whole minutes, `0..60`.
    pub minutes: u32,
    /// Seconds, `[0, 60)`, rounded to [`SECONDS_DECIMALS`].
    pub seconds: f64,
}

/// Raw degree, minute and second fields that may be out of range.
///
/// The value is `degrees + minutes/60 + seconds/3600`, each field signed
/// on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Unnormalized {
    /// Degrees.
    pub degrees: i64,
    /// Minutes.
    pub minutes: i64,
    /// Seconds.
    pub seconds: f64,
}

impl Dms {
    /// Builds an angle from fields, taking the sign from `degrees`, and
    /// normalizes it.
    ///
    /// `Dms::new(52, 34, 48.0)` is 52°34'48"; `Dms::new(-3, 10, 0.0)` is
    /// -3°10'.
    #[must_use]
    pub fn new(degrees: i64, minutes: u32, seconds: f64) -> Self {
        let (sign, sign_f) = if degrees < 0 { (-1, -1.0) } else { (1, 1.0) };
        Unnormalized {
            degrees,
            minutes: sign * i64::from(minutes),
            seconds: sign_f * seconds,
        }
        .normalize()
    }

    /// Builds an angle from a signed number of seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_total_seconds(total: f64) -> Self {
        let negative = total < 0.0;
        let mut magnitude = round_to(total.abs(), SECONDS_DECIMALS);

        let degrees = (magnitude / 3600.0).floor();
        magnitude -= degrees * 3600.0;
        let minutes = (magnitude / 60.0).floor();
        let seconds = round_to(magnitude - minutes * 60.0, SECONDS_DECIMALS);
        debug_assert!(
            degrees <= f64::from(MAX_DEGREES),
            "{degrees}° exceeds MAX_DEGREES"
        );

        Self {
            negative: negative && (degrees > 0.0 || minutes > 0.0 || seconds > 0.0),
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        }
    }

    /// Degrees with the sign applied.
    #[must_use]
    pub fn signed_degrees(&self) -> i64 {
        let d = i64::from(self.degrees);
        if self.negative {
            -d
        } else {
            d
        }
    }

    fn sign(&self) -> f64 {
        if self.negative {
            -1.0
        } else {
            1.0
        }
    }

    /// Converts to decimal degrees.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        self.sign()
            * (f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0)
    }

    /// Converts to signed seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.sign()
            * (f64::from(self.degrees) * 3600.0 + f64::from(self.minutes) * 60.0 + self.seconds)
    }

    /// Splits into signed raw fields, the inverse of [`Unnormalized::normalize`].
    #[must_use]
    pub fn unnormalized(&self) -> Unnormalized {
        let sign: i64 = if self.negative { -1 } else { 1 };
        Unnormalized {
            degrees: sign * i64::from(self.degrees),
            minutes: sign * i64::from(self.minutes),
            seconds: self.sign() * self.seconds,
        }
    }

    /// Sums field by field, then carries into minutes and degrees.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        self.unnormalized().plus(other.unnormalized()).normalize()
    }

    /// Subtracts through total seconds, so borrows across all fields at once.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::from_total_seconds(self.total_seconds() - other.total_seconds())
    }
}

impl Unnormalized {
    /// Field-wise sum without carrying.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self {
            degrees: self.degrees + other.degrees,
            minutes: self.minutes + other.minutes,
            seconds: self.seconds + other.seconds,
        }
    }

    /// Applies base-60 carry and borrow from seconds to minutes and from
    /// minutes to degrees.
    ///
    /// A borrow in seconds can cascade into a borrow from degrees in the
    /// same call. Negative totals are re-split from their magnitude so the
    /// sign ends up on the whole angle.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn normalize(self) -> Dms {
        let seconds = round_to(self.seconds, SECONDS_DECIMALS);
        let seconds_carry = (seconds / 60.0).floor();
        let seconds = round_to(seconds - seconds_carry * 60.0, SECONDS_DECIMALS);

        let minutes = self.minutes + seconds_carry as i64;
        let minutes_carry = minutes.div_euclid(60);
        let minutes = minutes.rem_euclid(60);
        let degrees = self.degrees + minutes_carry;

        if seconds_carry != 0.0 || minutes_carry != 0 {
            tracing::debug!(seconds_carry, minutes_carry, "sexagesimal carry");
        }

        if degrees < 0 {
            let total = degrees as f64 * 3600.0 + minutes as f64 * 60.0 + seconds;
            return Dms::from_total_seconds(total);
        }

        debug_assert!(
            degrees <= i64::from(MAX_DEGREES),
            "{degrees}° exceeds MAX_DEGREES"
        );
        Dms {
            negative: false,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        }
    }
}

impl Add for Dms {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Dms::add(self, rhs)
    }
}

impl Sub for Dms {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_sign_loss)]
        let decimals = SECONDS_DECIMALS as usize;
        write!(
            f,
            "{}{}°{}'{}\"",
            if self.negative { "-" } else { "" },
            self.degrees,
            self.minutes,
            format_number(self.seconds, decimals)
        )
    }
}

impl fmt::Display for Unnormalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_sign_loss)]
        let decimals = SECONDS_DECIMALS as usize;
        write!(
            f,
            "{}°{}'{}\"",
            self.degrees,
            self.minutes,
            format_number(self.seconds, decimals)
        )
    }
}

/// Converts decimal degrees to a normalized [`Dms`].
///
/// Seconds are rounded to [`SECONDS_DECIMALS`]; a rounding that reaches
/// 60 carries into the minutes.
#[must_use]
pub fn decimal_to_dms(value: f64) -> Dms {
    Dms::from_total_seconds(value * 3600.0)
}

/// Like [`decimal_to_dms`], but rejects values that do not fit a [`Dms`].
///
/// # Errors
///
/// Returns [`MathError::NonFinite`] for NaN or infinite input and
/// [`MathError::AngleOutOfRange`] when `|value|` reaches [`MAX_DEGREES`].
pub fn try_decimal_to_dms(value: f64) -> MathResult<Dms> {
    if !value.is_finite() {
        return Err(MathError::NonFinite(value));
    }
    if value.abs() >= f64::from(MAX_DEGREES) {
        return Err(MathError::AngleOutOfRange {
            value,
            limit: MAX_DEGREES,
        });
    }
    Ok(decimal_to_dms(value))
}

/// Converts fields to decimal degrees, `sign(d)·(|d| + m/60 + s/3600)`.
#[must_use]
pub fn dms_to_decimal(degrees: i64, minutes: u32, seconds: f64) -> f64 {
    Dms::new(degrees, minutes, seconds).to_decimal()
}
