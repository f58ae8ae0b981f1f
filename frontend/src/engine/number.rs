//! Locale-aware number rendering with thousands grouping.
//!
//! In the browser the digits, grouping and decimal marks come from the host's
//! `Intl.NumberFormat` for the visitor's language. Native builds have no host
//! formatter and render with en-US marks.

use std::rc::Rc;

/// Number renderer bound to a BCP 47 locale tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberFormat {
    locale: Option<Rc<str>>,
}

impl NumberFormat {
    /// The host's default locale.
    pub const DEFAULT: Self = Self { locale: None };

    /// Binds to a tag such as `en-US` or `ar-AE`. Malformed tags fall back to
    /// the host default so the host formatter never sees them.
    pub fn for_locale(tag: &str) -> Self {
        let well_formed = !tag.is_empty()
            && tag.len() <= 35
            && tag.split('-').all(|part| {
                (1..=8).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_alphanumeric())
            });
        if well_formed {
            Self { locale: Some(Rc::from(tag)) }
        } else {
            Self::DEFAULT
        }
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Renders `value` with at most `max_fraction_digits` decimals, trailing
    /// zeros dropped. Non-finite input renders as `0`.
    pub fn format(&self, value: f64, max_fraction_digits: usize) -> String {
        let Some(value) = round_to(value, max_fraction_digits) else {
            return "0".to_string();
        };

        #[cfg(target_arch = "wasm32")]
        if let Some(text) = host::format(self.locale(), value, max_fraction_digits) {
            return text;
        }

        format_plain(value, max_fraction_digits)
    }
}

/// Half-away-from-zero rounding, with `-0` folded into `0`.
fn round_to(value: f64, digits: usize) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let scale = 10f64.powi(digits.min(15) as i32);
    let rounded = (value * scale).round() / scale;
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// en-US rendering used when no host formatter is available.
fn format_plain(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(target_arch = "wasm32")]
mod host {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;
    use web_sys::js_sys::{Array, Function, Intl, Object, Reflect};

    struct Formatter {
        locale: Option<String>,
        fraction_digits: usize,
        format: Function,
    }

    thread_local! {
        // Counters format every frame; building an Intl.NumberFormat is not free.
        static FORMATTERS: RefCell<Vec<Formatter>> = RefCell::new(Vec::new());
    }

    pub(super) fn format(locale: Option<&str>, value: f64, fraction_digits: usize) -> Option<String> {
        FORMATTERS.with(|cache| {
            let mut cache = cache.borrow_mut();
            let index = match cache
                .iter()
                .position(|f| f.locale.as_deref() == locale && f.fraction_digits == fraction_digits)
            {
                Some(index) => index,
                None => {
                    cache.push(build(locale, fraction_digits)?);
                    cache.len() - 1
                }
            };
            cache[index]
                .format
                .call1(&JsValue::NULL, &JsValue::from_f64(value))
                .ok()?
                .as_string()
        })
    }

    fn build(locale: Option<&str>, fraction_digits: usize) -> Option<Formatter> {
        let locales = Array::new();
        if let Some(tag) = locale {
            locales.push(&JsValue::from_str(tag));
        }
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("maximumFractionDigits"),
            &JsValue::from_f64(fraction_digits.min(20) as f64),
        )
        .ok()?;

        Some(Formatter {
            locale: locale.map(str::to_string),
            fraction_digits,
            format: Intl::NumberFormat::new(&locales, &options).format(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let fmt = NumberFormat::DEFAULT;
        assert_eq!(fmt.format(0.0, 3), "0");
        assert_eq!(fmt.format(999.0, 3), "999");
        assert_eq!(fmt.format(1000.0, 3), "1,000");
        assert_eq!(fmt.format(2_000_000.0, 3), "2,000,000");
        assert_eq!(fmt.format(-350_000.0, 3), "-350,000");
    }

    #[test]
    fn trims_fraction_and_rounds() {
        let fmt = NumberFormat::DEFAULT;
        assert_eq!(fmt.format(6.2, 3), "6.2");
        assert_eq!(fmt.format(7.34, 1), "7.3");
        assert_eq!(fmt.format(44.0, 1), "44");
        assert_eq!(fmt.format(-0.04, 1), "0");
        assert_eq!(fmt.format(1234.5, 1), "1,234.5");
        assert_eq!(fmt.format(972.5, 0), "973");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(NumberFormat::DEFAULT.format(f64::NAN, 3), "0");
        assert_eq!(NumberFormat::DEFAULT.format(f64::INFINITY, 3), "0");
    }

    #[test]
    fn keeps_well_formed_locale_tags() {
        assert_eq!(NumberFormat::for_locale("en-IN").locale(), Some("en-IN"));
        assert_eq!(NumberFormat::for_locale("de-CH").locale(), Some("de-CH"));
        assert_eq!(NumberFormat::for_locale("zh-Hant-TW").locale(), Some("zh-Hant-TW"));
    }

    #[test]
    fn malformed_tags_use_host_default() {
        for tag in ["", "ar_AE", "en--US", "en US", "x-verylongsubtag"] {
            assert_eq!(NumberFormat::for_locale(tag), NumberFormat::DEFAULT, "tag {tag:?}");
        }
    }

    #[test]
    fn native_rendering_ignores_locale() {
        // Locale-specific marks come from the host formatter only.
        assert_eq!(NumberFormat::for_locale("de-DE").format(1234.5, 1), "1,234.5");
    }
}
