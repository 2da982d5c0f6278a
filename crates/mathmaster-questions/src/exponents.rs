//! Exponent and root questions.

use rand::Rng;

use mathmaster_core::model::Difficulty;
use mathmaster_core::traits::Question;

use crate::format::format_decimal;
use crate::pick;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Square,
    Cube,
    Power,
    PowerFraction,
    SquareRootPerfect,
    SquareRoot,
    Root,
    Combined,
}

pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let kind = match difficulty {
        Difficulty::Easy => pick(rng, &[Kind::Square, Kind::Cube, Kind::SquareRootPerfect]),
        Difficulty::Medium => pick(
            rng,
            &[Kind::Square, Kind::Cube, Kind::Power, Kind::SquareRoot],
        ),
        Difficulty::Hard => pick(
            rng,
            &[Kind::Power, Kind::PowerFraction, Kind::Root, Kind::Combined],
        ),
    };

    match kind {
        Kind::Square => {
            let cap = if difficulty == Difficulty::Easy { 15 } else { 25 };
            let base: i64 = rng.random_range(2..=cap);
            Question::new(format!("{base}²"), (base * base).to_string())
        }
        Kind::Cube => {
            let cap = if difficulty == Difficulty::Easy { 10 } else { 15 };
            let base: i64 = rng.random_range(2..=cap);
            Question::new(format!("{base}³"), base.pow(3).to_string())
        }
        Kind::Power => {
            let (base_cap, exp_cap) = if difficulty == Difficulty::Medium {
                (6, 4)
            } else {
                (10, 6)
            };
            let base: i64 = rng.random_range(2..=base_cap);
            let exp: u32 = rng.random_range(2..=exp_cap);
            Question::new(format!("{base}^{exp}"), base.pow(exp).to_string())
        }
        Kind::PowerFraction => {
            // A perfect square raised to the 1/2 keeps the answer whole.
            let root: i64 = rng.random_range(2..=10);
            Question::new(format!("{}^(1/2)", root * root), root.to_string())
        }
        Kind::SquareRootPerfect => {
            let root: i64 = rng.random_range(2..=10);
            Question::new(format!("√{}", root * root), root.to_string())
        }
        Kind::SquareRoot => {
            let number: i64 = rng.random_range(2..=100);
            Question::new(
                format!("√{number}"),
                format_decimal((number as f64).sqrt(), 3),
            )
        }
        Kind::Root => {
            let degree: u32 = rng.random_range(2..=3);
            let result: i64 = rng.random_range(2..=5);
            let number = result.pow(degree);
            let text = if degree == 2 {
                format!("√{number}")
            } else {
                format!("∛{number}")
            };
            Question::new(text, result.to_string())
        }
        Kind::Combined => {
            let base: i64 = rng.random_range(2..=5);
            let e1: u32 = rng.random_range(2..=3);
            let e2: u32 = rng.random_range(2..=3);
            Question::new(
                format!("{base}^{e1} × {base}^{e2}"),
                base.pow(e1 + e2).to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_answers_are_always_whole() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..500 {
            let q = generate(&mut rng, Difficulty::Easy);
            assert!(
                q.answer.parse::<i64>().is_ok(),
                "non-integral easy answer {:?} for {:?}",
                q.answer,
                q.text
            );
        }
    }

    #[test]
    fn square_roots_round_to_three_decimals() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let q = generate(&mut rng, Difficulty::Medium);
            if let Some((_, frac)) = q.answer.split_once('.') {
                assert!(q.text.starts_with('√'));
                assert!(frac.len() <= 3, "too many decimals in {:?}", q.answer);
            }
        }
    }

    #[test]
    fn combined_powers_share_a_base() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..200 {
            let q = generate(&mut rng, Difficulty::Hard);
            if let Some((lhs, rhs)) = q.text.split_once(" × ") {
                let base_l = lhs.split('^').next().unwrap();
                let base_r = rhs.split('^').next().unwrap();
                assert_eq!(base_l, base_r);
            }
        }
    }
}
