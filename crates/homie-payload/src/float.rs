use crate::datatype::Datatype;
use crate::grammar::is_float_literal;
use crate::macros::scalar_payload;
use crate::payload::Payload;

// Decimal exponents rendered in fixed notation. Values outside this band are
// rendered in exponential notation.
const FIXED_NOTATION_EXPONENTS: core::ops::RangeInclusive<i32> = -4..=5;

// Minimum number of exponent digits in exponential notation.
const EXPONENT_WIDTH: usize = 2;

scalar_payload! {
    /// A `float` payload.
    ///
    /// The payload is an optional `-`, a mantissa made of decimal digits
    /// with at most one `.`, and an optional exponent introduced by `e` or
    /// `E`. `NaN` and infinities are never valid payloads, so the stored
    /// value is always finite.
    ///
    /// The canonical payload uses the shortest digits which parse back to
    /// the same value. Values whose decimal exponent lies in `-4..=5` are
    /// rendered in fixed notation, for example `0.456` or `123`.
    /// The others are rendered in exponential notation with a lowercase `e`
    /// and an exponent of at least two digits, for example `2e08` or
    /// `-1.5e-07`.
    #[derive(Copy)]
    pub struct Float(f64);
}

impl core::fmt::Display for Float {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Also catches `-0.0`.
        if self.value == 0. {
            return f.write_str("0");
        }

        let scientific = alloc::format!("{:e}", self.value);
        if let Some((mantissa, exponent)) = scientific.split_once('e')
            && let Ok(exponent) = exponent.parse::<i32>()
            && !FIXED_NOTATION_EXPONENTS.contains(&exponent)
        {
            let sign = if exponent < 0 { "-" } else { "" };
            return write!(
                f,
                "{mantissa}e{sign}{:0width$}",
                exponent.unsigned_abs(),
                width = EXPONENT_WIDTH
            );
        }

        write!(f, "{}", self.value)
    }
}

impl Payload for Float {
    type Value = f64;

    const DATATYPE: Datatype = Datatype::Float;

    fn parse(&self, candidate: &str) -> Option<f64> {
        // `f64::from_str` also accepts `inf`, `NaN` and a leading `+`.
        if !is_float_literal(candidate) {
            return None;
        }
        candidate.parse().ok().filter(|value: &f64| value.is_finite())
    }

    fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.value = value;
        true
    }

    fn value(&self) -> &f64 {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::payload::Payload;

    use super::Float;

    #[test]
    fn validate_float() {
        let value = Float::default();

        assert!(value.validate("123"));
        assert!(value.validate("-123"));
        assert!(value.validate("123.456"));
        assert!(value.validate("-123.456"));
        assert!(value.validate(".456"));
        assert!(value.validate("-.456"));
        assert!(value.validate("2e8"));
        assert!(value.validate("2E8"));
        assert!(value.validate("2E+008"));
        assert!(value.validate("2e-8"));

        assert!(!value.validate("123.456.789"));
        assert!(!value.validate("-123.456.789"));
        assert!(!value.validate(".456.789"));
        assert!(!value.validate("-.456.789"));
        assert!(!value.validate("E8"));
        assert!(!value.validate("-E8"));
        assert!(!value.validate("2f8"));
        assert!(!value.validate("NaN"));
        assert!(!value.validate("nan"));
        assert!(!value.validate("Infinity"));
        assert!(!value.validate("infinity"));
        assert!(!value.validate("Inf"));
        assert!(!value.validate("inf"));
        assert!(!value.validate("-inf"));
        assert!(!value.validate("-"));
        assert!(!value.validate("."));
        assert!(!value.validate(""));
        assert!(!value.validate(" "));
        assert!(!value.validate("+1.5"));
        assert!(!value.validate(" 1.5"));

        // Overflows to infinity.
        assert!(!value.validate("1e400"));
    }

    #[test]
    fn compare_float() {
        assert_eq!(Float::from_payload("123"), Float::new(123.));
        assert_eq!(Float::from_payload("123.456"), Float::new(123.456));
        assert_eq!(Float::from_payload("-123"), Float::new(-123.));
        assert_eq!(Float::from_payload("-123.456"), Float::new(-123.456));
        assert_eq!(Float::from_payload(".456"), Float::new(0.456));
        assert_eq!(Float::from_payload("-.456"), Float::new(-0.456));

        assert_eq!(Float::from_payload("2e8"), Float::new(2e8));
        assert_eq!(Float::from_payload("2E8"), Float::new(2E8));
        assert_eq!(Float::from_payload("2E8"), Float::new(2E+8));
        assert_eq!(Float::from_payload("2E8"), Float::from_payload("2E+008"));
        assert_eq!(Float::from_payload("-2E8"), Float::new(-2E8));
        assert_eq!(Float::from_payload("2E-8"), Float::new(2E-8));
        assert_eq!(Float::from_payload("2E-8"), Float::from_payload("2E-008"));
        assert_eq!(Float::from_payload("-2E-8"), Float::new(-2E-8));
        assert_ne!(Float::from_payload("123"), Float::new(456.789));
    }

    #[test]
    fn render_float() {
        assert_eq!(Float::new(123.).render(), "123");
        assert_eq!(Float::new(123.456).render(), "123.456");
        assert_eq!(Float::new(-123.).render(), "-123");
        assert_eq!(Float::new(0.456).render(), "0.456");
        assert_eq!(Float::new(-123.456).render(), "-123.456");
        assert_eq!(Float::new(-0.456).render(), "-0.456");
        assert_eq!(Float::new(2E8).render(), "2e08");
        assert_eq!(Float::from_payload("2E+008").render(), "2e08");
        assert_eq!(Float::new(-2E8).render(), "-2e08");
        assert_eq!(Float::new(2E-8).render(), "2e-08");
        assert_eq!(Float::from_payload("2E-008").render(), "2e-08");
        assert_eq!(Float::new(-2E-8).render(), "-2e-08");
        assert_eq!(Float::new(0.).render(), "0");
        assert_eq!(Float::new(-0.).render(), "0");
    }

    #[test]
    fn render_threshold() {
        assert_eq!(Float::new(123_456.).to_string(), "123456");
        assert_eq!(Float::new(999_999.5).to_string(), "999999.5");
        assert_eq!(Float::new(1_000_000.).to_string(), "1e06");
        assert_eq!(Float::new(1_234_567.).to_string(), "1.234567e06");
        assert_eq!(Float::new(0.0001).to_string(), "0.0001");
        assert_eq!(Float::new(0.00012).to_string(), "0.00012");
        assert_eq!(Float::new(0.00001).to_string(), "1e-05");
        assert_eq!(Float::new(1.5e300).to_string(), "1.5e300");
        assert_eq!(Float::new(-1.5e-7).to_string(), "-1.5e-07");
    }

    #[test]
    fn rendered_payloads_round_trip() {
        let samples = [
            0.1,
            -0.1,
            1. / 3.,
            123_456.789,
            6.022_140_76e23,
            -1.602_176_634e-19,
            f64::MAX,
            f64::MIN_POSITIVE,
            5e-324,
        ];

        for sample in samples {
            let value = Float::new(sample);
            assert!(value.is_valid(), "{value}");
            assert_eq!(Float::from_payload(&value.render()), value);
        }
    }

    #[test]
    fn set_float() {
        let mut value = Float::default();
        assert!(value.is_valid());

        assert!(value.set("123"));
        assert_eq!(*value.value(), 123.);
        assert_eq!(value.render(), "123");
        assert!(value.is_valid());

        // Still the old value.
        assert!(!value.set("456.789.123"));
        assert_eq!(*value.value(), 123.);
        assert_eq!(value.render(), "123");
        assert!(value.is_valid());

        assert!(value.set(".567"));
        assert!(value.set(".567"));
        assert_eq!(*value.value(), 0.567);
        assert_eq!(value.render(), "0.567");
        assert!(value.is_valid());

        assert!(!value.set_value(f64::NAN));
        assert!(!value.set_value(f64::NEG_INFINITY));
        assert_eq!(value.render(), "0.567");

        assert_eq!(Float::new(f64::INFINITY), Float::default());
    }
}
