//! Unit tables and conversion.

use std::fmt;
use std::str::FromStr;

use zenbaki_core::{format_number, MathError, MathResult};

/// Decimal places kept when displaying a converted quantity.
pub const RESULT_DECIMALS: usize = 6;

/// A unit within a category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    /// Display name (Basque).
    pub name: &'static str,
    /// Abbreviation used as the lookup key.
    pub symbol: &'static str,
    /// How many base units one of this unit is.
    pub factor: f64,
}

const fn unit(name: &'static str, symbol: &'static str, factor: f64) -> Unit {
    Unit {
        name,
        symbol,
        factor,
    }
}

static LENGTH: [Unit; 7] = [
    unit("kilometro", "km", 1000.0),
    unit("hektometro", "hm", 100.0),
    unit("dekametro", "dam", 10.0),
    unit("metro", "m", 1.0),
    unit("dezimetro", "dm", 0.1),
    unit("zentimetro", "cm", 0.01),
    unit("milimetro", "mm", 0.001),
];

static MASS: [Unit; 7] = [
    unit("kilogramo", "kg", 1000.0),
    unit("hektogramo", "hg", 100.0),
    unit("dekagramo", "dag", 10.0),
    unit("gramo", "g", 1.0),
    unit("dezigramo", "dg", 0.1),
    unit("zentigramo", "cg", 0.01),
    unit("miligramo", "mg", 0.001),
];

static VOLUME: [Unit; 7] = [
    unit("kilolitro", "kl", 1000.0),
    unit("hektolitro", "hl", 100.0),
    unit("dekalitro", "dal", 10.0),
    unit("litro", "l", 1.0),
    unit("dezilitro", "dl", 0.1),
    unit("zentilitro", "cl", 0.01),
    unit("mililitro", "ml", 0.001),
];

static TIME: [Unit; 5] = [
    unit("astea", "ast", 604_800.0),
    unit("eguna", "eg", 86_400.0),
    unit("ordua", "h", 3600.0),
    unit("minutua", "min", 60.0),
    unit("segundoa", "s", 1.0),
];

/// A family of mutually convertible units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Base unit: metre.
    Length,
    /// Base unit: gram.
    Mass,
    /// Base unit: litre.
    Volume,
    /// Base unit: second.
    Time,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Time,
    ];

    /// The category's units, largest first.
    #[must_use]
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Length => &LENGTH,
            Category::Mass => &MASS,
            Category::Volume => &VOLUME,
            Category::Time => &TIME,
        }
    }

    /// The unit with factor 1.
    #[must_use]
    pub fn base(self) -> &'static Unit {
        match self {
            Category::Length => &LENGTH[3],
            Category::Mass => &MASS[3],
            Category::Volume => &VOLUME[3],
            Category::Time => &TIME[4],
        }
    }

    /// Looks up a unit by symbol.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::UnknownUnit`] if the symbol is not in this
    /// category's table.
    pub fn unit(self, symbol: &str) -> MathResult<&'static Unit> {
        self.units()
            .iter()
            .find(|u| u.symbol == symbol)
            .ok_or_else(|| MathError::UnknownUnit {
                unit: symbol.to_string(),
                category: self.to_string(),
            })
    }

    /// Category name used in config files and the CLI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Volume => "volume",
            Category::Time => "time",
        }
    }

    /// Basque label for prompts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "luzera",
            Category::Mass => "masa",
            Category::Volume => "bolumena",
            Category::Time => "denbora",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s || c.label() == s)
            .ok_or_else(|| MathError::UnknownCategory(s.to_string()))
    }
}

/// Converts `value` from one unit to another within `category`:
/// `value · factor(from) / factor(to)`.
///
/// # Errors
///
/// Returns [`MathError::UnknownUnit`] if either symbol is missing from the
/// category's table.
pub fn convert(value: f64, from: &str, to: &str, category: Category) -> MathResult<f64> {
    let from = category.unit(from)?;
    let to = category.unit(to)?;
    Ok(value * (from.factor / to.factor))
}

/// Formats a converted quantity with its symbol, rounding away float
/// noise such as `0.30000000000000004`.
#[must_use]
pub fn format_quantity(value: f64, unit: &Unit) -> String {
    format!("{} {}", format_number(value, RESULT_DECIMALS), unit.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(convert(1.0, "km", "m", Category::Length).unwrap(), 1000.0);
        assert_eq!(convert(2500.0, "g", "kg", Category::Mass).unwrap(), 2.5);
        assert_eq!(convert(3.0, "h", "min", Category::Time).unwrap(), 180.0);
        assert_eq!(convert(2.0, "ast", "eg", Category::Time).unwrap(), 14.0);
    }

    #[test]
    fn test_small_units() {
        let ml = convert(0.25, "l", "ml", Category::Volume).unwrap();
        assert!((ml - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert(1.0, "km", "kg", Category::Length),
            Err(MathError::UnknownUnit {
                unit: "kg".into(),
                category: "length".into()
            })
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("mass".parse::<Category>(), Ok(Category::Mass));
        assert_eq!("denbora".parse::<Category>(), Ok(Category::Time));
        assert_eq!(
            "energy".parse::<Category>(),
            Err(MathError::UnknownCategory("energy".into()))
        );
    }

    #[test]
    fn test_base_units() {
        for category in Category::ALL {
            assert_eq!(category.base().factor, 1.0);
        }
        assert_eq!(Category::Time.base().symbol, "s");
    }

    #[test]
    fn test_format_quantity() {
        let value = convert(3.0, "dl", "l", Category::Volume).unwrap();
        let litre = Category::Volume.unit("l").unwrap();
        assert_eq!(format_quantity(value, litre), "0.3 l");
    }
}
