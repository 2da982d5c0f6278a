//! Answer normalization and comparison.
//!
//! Canonical answers are rendered by the question generator in whatever
//! string form fits the category (integer, decimal, or `n/d` fraction), and
//! players type answers in whatever form they like. Both sides are parsed
//! into a small closed set of numeric representations and compared under an
//! ordered policy chain with a guaranteed terminal fallback, so the
//! comparator always produces a boolean and never fails the round.

use crate::error::EngineError;

/// Absolute tolerance for any comparison involving a decimal value.
///
/// Wide enough to absorb the 2-3 decimal rounding the generators apply to
/// irrational or truncated answers, narrow enough that genuinely different
/// fractions never collide.
pub const ANSWER_TOLERANCE: f64 = 1e-3;

/// A raw answer string parsed into one of the supported numeric forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedNumber {
    Integer(i64),
    /// A simple fraction. Not necessarily reduced; `den` is never zero.
    Rational { num: i64, den: i64 },
    Decimal(f64),
}

impl NormalizedNumber {
    /// Value as a float, for tolerant comparisons.
    pub fn as_f64(self) -> f64 {
        match self {
            NormalizedNumber::Integer(n) => n as f64,
            NormalizedNumber::Rational { num, den } => num as f64 / den as f64,
            NormalizedNumber::Decimal(d) => d,
        }
    }
}

/// Parse a raw answer string into a [`NormalizedNumber`].
///
/// Ordered attempts, first success wins:
/// 1. exactly one `/` with two integer halves → `Rational` (a zero
///    denominator is [`EngineError::DivisionByZeroInAnswer`], not a
///    fall-through),
/// 2. integer parse → `Integer`,
/// 3. finite decimal parse → `Decimal`,
/// 4. otherwise [`EngineError::UnparsableAnswer`].
pub fn normalize(raw: &str) -> Result<NormalizedNumber, EngineError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(EngineError::UnparsableAnswer);
    }

    if let Some((num_part, den_part)) = s.split_once('/') {
        if let (Ok(num), Ok(den)) = (
            num_part.trim().parse::<i64>(),
            den_part.trim().parse::<i64>(),
        ) {
            if den == 0 {
                return Err(EngineError::DivisionByZeroInAnswer);
            }
            return Ok(NormalizedNumber::Rational { num, den });
        }
        // Halves that are not plain integers (including a second '/') fall
        // through to the remaining attempts, which cannot match a string
        // containing '/'.
    }

    if let Ok(n) = s.parse::<i64>() {
        return Ok(NormalizedNumber::Integer(n));
    }

    if let Ok(d) = s.parse::<f64>() {
        if d.is_finite() {
            return Ok(NormalizedNumber::Decimal(d));
        }
    }

    Err(EngineError::UnparsableAnswer)
}

/// Decide whether a submitted answer matches the canonical one.
///
/// Policy, in order:
/// 1. exact string equality after trimming,
/// 2. both sides look like fractions → exact cross-multiplied equality
///    (never floats, so `2/4` equals `1/2` without precision loss),
/// 3. normalize both sides and compare numerically: exact for
///    integer/rational pairs, within [`ANSWER_TOLERANCE`] once a decimal
///    is involved,
/// 4. if normalization fails on either side, fall back to the string
///    equality already computed in step 1.
///
/// Malformed input is simply "not equal"; this function cannot fail.
pub fn answers_match(user_raw: &str, correct_raw: &str) -> bool {
    let user = user_raw.trim();
    let correct = correct_raw.trim();

    let exact = user == correct;
    if exact {
        return true;
    }

    if user.contains('/') && correct.contains('/') {
        if let (
            Ok(NormalizedNumber::Rational { num: a, den: b }),
            Ok(NormalizedNumber::Rational { num: c, den: d }),
        ) = (normalize(user), normalize(correct))
        {
            return cross_eq(a, b, c, d);
        }
        return exact;
    }

    match (normalize(user), normalize(correct)) {
        (Ok(a), Ok(b)) => numerically_equal(a, b),
        _ => exact,
    }
}

/// a/b == c/d by cross-multiplication, widened to i128 so extreme
/// numerators cannot overflow.
fn cross_eq(a: i64, b: i64, c: i64, d: i64) -> bool {
    i128::from(a) * i128::from(d) == i128::from(c) * i128::from(b)
}

fn numerically_equal(a: NormalizedNumber, b: NormalizedNumber) -> bool {
    use NormalizedNumber::*;
    match (a, b) {
        (Integer(x), Integer(y)) => x == y,
        (Rational { num: p, den: q }, Rational { num: r, den: s }) => cross_eq(p, q, r, s),
        (Integer(x), Rational { num, den }) | (Rational { num, den }, Integer(x)) => {
            cross_eq(x, 1, num, den)
        }
        _ => (a.as_f64() - b.as_f64()).abs() < ANSWER_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_integer() {
        assert_eq!(normalize("42"), Ok(NormalizedNumber::Integer(42)));
        assert_eq!(normalize("  -7 "), Ok(NormalizedNumber::Integer(-7)));
    }

    #[test]
    fn normalize_rational() {
        assert_eq!(
            normalize("3/4"),
            Ok(NormalizedNumber::Rational { num: 3, den: 4 })
        );
        assert_eq!(
            normalize(" -5 / 8 "),
            Ok(NormalizedNumber::Rational { num: -5, den: 8 })
        );
    }

    #[test]
    fn normalize_decimal() {
        assert_eq!(normalize("0.5"), Ok(NormalizedNumber::Decimal(0.5)));
        assert_eq!(normalize("-12.25"), Ok(NormalizedNumber::Decimal(-12.25)));
    }

    #[test]
    fn normalize_zero_denominator_is_its_own_error() {
        assert_eq!(normalize("3/0"), Err(EngineError::DivisionByZeroInAnswer));
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert_eq!(normalize(""), Err(EngineError::UnparsableAnswer));
        assert_eq!(normalize("abc"), Err(EngineError::UnparsableAnswer));
        assert_eq!(normalize("1/2/3"), Err(EngineError::UnparsableAnswer));
        assert_eq!(normalize("1.5/2"), Err(EngineError::UnparsableAnswer));
        assert_eq!(normalize("nan"), Err(EngineError::UnparsableAnswer));
    }

    #[test]
    fn exact_strings_match() {
        assert!(answers_match("3/4", "3/4"));
        assert!(answers_match(" 17", "17 "));
    }

    #[test]
    fn integers_compare_exactly() {
        assert!(answers_match("12", "12"));
        assert!(!answers_match("12", "13"));
    }

    #[test]
    fn fractions_are_scale_invariant() {
        assert!(answers_match("2/4", "1/2"));
        assert!(answers_match("-3/6", "1/-2"));
        assert!(!answers_match("2/4", "2/5"));
    }

    #[test]
    fn decimal_matches_fraction_within_tolerance() {
        assert!(answers_match("0.5", "1/2"));
        assert!(answers_match("0.5001", "1/2"));
        assert!(!answers_match("0.51", "1/2"));
    }

    #[test]
    fn integer_matches_unreduced_fraction_exactly() {
        assert!(answers_match("2", "4/2"));
        assert!(!answers_match("2", "5/2"));
    }

    #[test]
    fn decimal_matches_integer_within_tolerance() {
        assert!(answers_match("3.0", "3"));
        assert!(answers_match("2.9995", "3"));
        assert!(!answers_match("3.1", "3"));
    }

    #[test]
    fn malformed_input_is_just_incorrect() {
        assert!(!answers_match("hello", "42"));
        assert!(!answers_match("1/0", "42"));
        assert!(!answers_match("", "42"));
        // identical malformed strings still short-circuit on step 1
        assert!(answers_match("hello", "hello"));
    }

    #[test]
    fn huge_fractions_do_not_overflow() {
        // Different strings, so cross-multiplication actually runs.
        let a = format!("{0}/{0}", i64::MAX);
        assert!(answers_match(&a, "1/1"));
        let b = format!("{}/2", i64::MAX);
        let c = format!("{}/3", i64::MAX);
        assert!(!answers_match(&b, &c));
    }
}
