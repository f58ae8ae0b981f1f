use crate::engine::number::NumberFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Aed,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
        }
    }

    /// Converts a USD magnitude into this currency.
    pub fn from_usd(self, value: f64, usd_to_aed_rate: f64) -> f64 {
        match self {
            Currency::Usd => value,
            Currency::Aed => convert(value, usd_to_aed_rate),
        }
    }

    /// Prefix placed before an amount (`$` for USD, nothing for AED).
    pub fn prefix(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Aed => "",
        }
    }

    /// Suffix placed after an amount and its unit (` AED` for AED).
    pub fn suffix(self) -> &'static str {
        match self {
            Currency::Usd => "",
            Currency::Aed => " AED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    None,
    Thousands,
    Millions,
    Billions,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Thousands => "K",
            Unit::Millions => "M",
            Unit::Billions => "B",
        }
    }
}

pub fn convert(value: f64, rate: f64) -> f64 {
    value * rate
}

/// `$2M`, `7.3M AED`, `$50K`: one fraction digit at most, grouped.
pub fn format_currency(
    value: f64,
    unit: Unit,
    currency: Currency,
    usd_to_aed_rate: f64,
    fmt: &NumberFormat,
) -> String {
    format_converted(currency.from_usd(value, usd_to_aed_rate), unit, currency, fmt)
}

/// Like [`format_currency`] for a value already in `currency`.
pub fn format_converted(value: f64, unit: Unit, currency: Currency, fmt: &NumberFormat) -> String {
    format!(
        "{}{}{}{}",
        currency.prefix(),
        fmt.format(value, 1),
        unit.symbol(),
        currency.suffix()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 3.67;

    #[test]
    fn usd_is_unchanged() {
        assert_eq!(Currency::Usd.from_usd(12.0, RATE), 12.0);
        assert_eq!(
            format_currency(2.0, Unit::Millions, Currency::Usd, RATE, &NumberFormat::DEFAULT),
            "$2M"
        );
        assert_eq!(
            format_currency(50.0, Unit::Thousands, Currency::Usd, RATE, &NumberFormat::DEFAULT),
            "$50K"
        );
    }

    #[test]
    fn aed_multiplies_by_rate() {
        assert!((convert(4.8, RATE) - 17.616).abs() < 1e-9);
        assert_eq!(
            format_currency(2.0, Unit::Millions, Currency::Aed, RATE, &NumberFormat::DEFAULT),
            "7.3M AED"
        );
        assert_eq!(
            format_currency(50.0, Unit::Thousands, Currency::Aed, RATE, &NumberFormat::DEFAULT),
            "183.5K AED"
        );
        assert_eq!(
            format_currency(1000.0, Unit::None, Currency::Aed, RATE, &NumberFormat::DEFAULT),
            "3,670 AED"
        );
    }

    #[test]
    fn converted_values_keep_their_currency_marks() {
        let arabic = NumberFormat::for_locale("ar-AE");
        assert_eq!(
            format_converted(22.0, Unit::Millions, Currency::Aed, &arabic),
            "22M AED"
        );
        assert_eq!(
            format_converted(-0.1, Unit::Millions, Currency::Usd, &NumberFormat::DEFAULT),
            "$-0.1M"
        );
    }
}
