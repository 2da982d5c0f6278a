//! Percentage questions in three phrasings: "X% of Y", "X is what percent
//! of Y", and "Y ± X%".

use rand::Rng;

use mathmaster_core::model::Difficulty;
use mathmaster_core::traits::Question;

use crate::format::format_decimal;
use crate::pick;

pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let shape = rng.random_range(1..=3);

    let (text, answer) = match difficulty {
        Difficulty::Easy => match shape {
            1 => {
                let pct = pick(rng, &[10, 25, 50, 75, 100]);
                // Multiples of 4 keep the mental math clean.
                let number = rng.random_range(1..=100) * 4;
                (
                    format!("What is {pct}% of {number}?"),
                    pct as f64 / 100.0 * number as f64,
                )
            }
            2 => {
                let y = rng.random_range(5..=10) * 10;
                let pct = pick(rng, &[10, 20, 25, 50, 75]);
                let x = pct * y / 100;
                (format!("{x} is what percent of {y}?"), pct as f64)
            }
            _ => {
                let number = rng.random_range(10..=100) * 10;
                let pct = pick(rng, &[5, 10, 25, 50, 100]);
                (
                    format!("{number} + {pct}%"),
                    number as f64 * (1.0 + pct as f64 / 100.0),
                )
            }
        },
        Difficulty::Medium => match shape {
            1 => {
                let pct = rng.random_range(1..=99);
                let number = rng.random_range(1..=200);
                (
                    format!("What is {pct}% of {number}?"),
                    pct as f64 / 100.0 * number as f64,
                )
            }
            2 => {
                let y = rng.random_range(50..=200);
                let x = rng.random_range(5..=y);
                let pct = (x as f64 / y as f64 * 1000.0).round() / 10.0;
                (format!("{x} is what percent of {y}?"), pct)
            }
            _ => {
                let number = rng.random_range(100..=500);
                let pct = rng.random_range(1..=40);
                (
                    format!("{number} + {pct}%"),
                    number as f64 * (1.0 + pct as f64 / 100.0),
                )
            }
        },
        Difficulty::Hard => match shape {
            1 => {
                let pct = rng.random_range(1..=999) as f64 / 10.0;
                let number = rng.random_range(100..=500);
                (
                    format!("What is {}% of {number}?", format_decimal(pct, 1)),
                    pct / 100.0 * number as f64,
                )
            }
            2 => {
                let y = rng.random_range(50..=500);
                let x = rng.random_range(1..=y);
                let pct = (x as f64 / y as f64 * 10000.0).round() / 100.0;
                (format!("{x} is what percent of {y}?"), pct)
            }
            _ => {
                let number = rng.random_range(500..=1000);
                let pct = rng.random_range(1..=75);
                (
                    format!("{number} - {pct}%"),
                    number as f64 * (1.0 - pct as f64 / 100.0),
                )
            }
        },
    };

    Question::new(text, format_decimal(answer, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn answers_have_at_most_two_decimals() {
        let mut rng = StdRng::seed_from_u64(8);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..500 {
                let q = generate(&mut rng, difficulty);
                if let Some((_, frac)) = q.answer.split_once('.') {
                    assert!(frac.len() <= 2, "too many decimals in {:?}", q.answer);
                }
            }
        }
    }

    #[test]
    fn percent_of_questions_are_phrased_as_questions() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut saw_question_phrasing = false;
        for _ in 0..100 {
            let q = generate(&mut rng, Difficulty::Easy);
            if q.text.starts_with("What is") {
                assert!(q.text.ends_with('?'));
                saw_question_phrasing = true;
            }
        }
        assert!(saw_question_phrasing);
    }

    #[test]
    fn easy_percent_of_answers_are_never_negative() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..500 {
            let q = generate(&mut rng, Difficulty::Easy);
            assert!(!q.answer.starts_with('-'));
        }
    }
}
