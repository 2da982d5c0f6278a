//! Questions over small integer arrays: sums, extrema, averages, medians,
//! and partial products.

use rand::Rng;

use mathmaster_core::model::Difficulty;
use mathmaster_core::traits::Question;

use crate::format::format_decimal;
use crate::pick;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sum,
    Max,
    Min,
    Mean,
    Median,
    ProductFirstN,
    SumEven,
    SumOdd,
}

pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (size, low, high, tasks): (usize, i64, i64, &[Task]) = match difficulty {
        Difficulty::Easy => (
            rng.random_range(3..=5),
            1,
            10,
            &[Task::Sum, Task::Max, Task::Min, Task::Mean],
        ),
        Difficulty::Medium => (
            rng.random_range(5..=8),
            1,
            20,
            &[
                Task::Sum,
                Task::Max,
                Task::Min,
                Task::Mean,
                Task::Median,
                Task::ProductFirstN,
            ],
        ),
        Difficulty::Hard => (
            rng.random_range(6..=10),
            -10,
            30,
            &[
                Task::Sum,
                Task::Max,
                Task::Min,
                Task::Mean,
                Task::Median,
                Task::ProductFirstN,
                Task::SumEven,
                Task::SumOdd,
            ],
        ),
    };

    let elements: Vec<i64> = (0..size).map(|_| rng.random_range(low..=high)).collect();
    let listing = format!(
        "[{}]",
        elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let (text, answer) = match pick(rng, tasks) {
        Task::Sum => (
            format!("Sum of {listing}"),
            elements.iter().sum::<i64>().to_string(),
        ),
        Task::Max => (
            format!("Max value in {listing}"),
            elements.iter().copied().max().unwrap_or(0).to_string(),
        ),
        Task::Min => (
            format!("Min value in {listing}"),
            elements.iter().copied().min().unwrap_or(0).to_string(),
        ),
        Task::Mean => {
            let mean = elements.iter().sum::<i64>() as f64 / elements.len() as f64;
            (format!("Mean (average) of {listing}"), format_decimal(mean, 2))
        }
        Task::Median => {
            let mut sorted = elements.clone();
            sorted.sort_unstable();
            let mid = sorted.len() / 2;
            let median = if sorted.len() % 2 == 0 {
                (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
            } else {
                sorted[mid] as f64
            };
            (format!("Median of {listing}"), format_decimal(median, 2))
        }
        Task::ProductFirstN => {
            let n = rng.random_range(2..=4.min(elements.len()));
            let product: i64 = elements.iter().take(n).product();
            (
                format!("Product of first {n} elements in {listing}"),
                product.to_string(),
            )
        }
        Task::SumEven => (
            format!("Sum of even values in {listing}"),
            elements
                .iter()
                .filter(|x| *x % 2 == 0)
                .sum::<i64>()
                .to_string(),
        ),
        Task::SumOdd => (
            format!("Sum of odd values in {listing}"),
            elements
                .iter()
                .filter(|x| *x % 2 != 0)
                .sum::<i64>()
                .to_string(),
        ),
    };

    Question::new(text, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse_listing(text: &str) -> Vec<i64> {
        let start = text.find('[').unwrap();
        let end = text.rfind(']').unwrap();
        text[start + 1..end]
            .split(", ")
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn listings_match_the_declared_sizes() {
        let mut rng = StdRng::seed_from_u64(15);
        for (difficulty, min_size, max_size) in [
            (Difficulty::Easy, 3, 5),
            (Difficulty::Medium, 5, 8),
            (Difficulty::Hard, 6, 10),
        ] {
            for _ in 0..200 {
                let q = generate(&mut rng, difficulty);
                let n = parse_listing(&q.text).len();
                assert!((min_size..=max_size).contains(&n));
            }
        }
    }

    #[test]
    fn sum_questions_check_out() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..300 {
            let q = generate(&mut rng, Difficulty::Easy);
            if q.text.starts_with("Sum of") {
                let expected: i64 = parse_listing(&q.text).iter().sum();
                assert_eq!(q.answer, expected.to_string());
            }
        }
    }

    #[test]
    fn even_length_medians_may_be_halves() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let q = generate(&mut rng, Difficulty::Medium);
            if q.text.starts_with("Median of") {
                if let Some((_, frac)) = q.answer.split_once('.') {
                    assert_eq!(frac, "5", "median fraction can only be .5: {:?}", q.answer);
                }
            }
        }
    }
}
