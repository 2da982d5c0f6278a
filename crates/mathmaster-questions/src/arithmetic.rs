//! Whole-number arithmetic questions: addition, subtraction,
//! multiplication, and division.

use rand::Rng;

use mathmaster_core::model::Difficulty;
use mathmaster_core::traits::Question;

use crate::format::format_decimal;

pub(crate) fn addition<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (a, b) = match difficulty {
        Difficulty::Easy => (rng.random_range(1..=20), rng.random_range(1..=20)),
        Difficulty::Medium => (rng.random_range(10..=100), rng.random_range(10..=100)),
        Difficulty::Hard => (rng.random_range(50..=500), rng.random_range(50..=500)),
    };
    Question::new(format!("{a} + {b}"), (a + b).to_string())
}

/// Subtraction with the minuend drawn at or above the subtrahend, so
/// results never go negative.
pub(crate) fn subtraction<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (b, a) = match difficulty {
        Difficulty::Easy => {
            let b = rng.random_range(1..=10);
            (b, rng.random_range(b..=20))
        }
        Difficulty::Medium => {
            let b = rng.random_range(10..=50);
            (b, rng.random_range(b..=100))
        }
        Difficulty::Hard => {
            let b = rng.random_range(50..=200);
            (b, rng.random_range(b..=500))
        }
    };
    Question::new(format!("{a} - {b}"), (a - b).to_string())
}

pub(crate) fn multiplication<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (a, b) = match difficulty {
        Difficulty::Easy => (rng.random_range(1..=10), rng.random_range(1..=10)),
        Difficulty::Medium => (rng.random_range(2..=12), rng.random_range(11..=30)),
        Difficulty::Hard => (rng.random_range(11..=30), rng.random_range(11..=30)),
    };
    Question::new(format!("{a} × {b}"), (a * b).to_string())
}

/// Division. Easy constructs the dividend from a whole quotient; Medium
/// sometimes snaps the dividend to a multiple of the divisor; Hard allows
/// decimal quotients, rounded to two places.
pub(crate) fn division<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (dividend, divisor): (i64, i64) = match difficulty {
        Difficulty::Easy => {
            let divisor = rng.random_range(1..=10);
            let quotient = rng.random_range(1..=10);
            (divisor * quotient, divisor)
        }
        Difficulty::Medium => {
            let divisor = rng.random_range(2..=15);
            let mut dividend = rng.random_range(20..=150);
            if dividend % divisor != 0 && rng.random_bool(0.5) {
                dividend = (dividend / divisor) * divisor;
            }
            (dividend, divisor)
        }
        Difficulty::Hard => (rng.random_range(100..=500), rng.random_range(5..=25)),
    };

    let answer = if dividend % divisor == 0 {
        (dividend / divisor).to_string()
    } else {
        format_decimal(dividend as f64 / divisor as f64, 2)
    };

    Question::new(format!("{dividend} ÷ {divisor}"), answer)
}
