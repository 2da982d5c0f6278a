//! Fraction arithmetic questions.
//!
//! Operands are displayed as generated (possibly unreduced); canonical
//! answers are always in lowest terms, rendered `n/d` or as a bare integer
//! when the denominator reduces to 1.

use rand::Rng;

use mathmaster_core::model::Difficulty;
use mathmaster_core::traits::Question;

use crate::pick;

/// A fraction in lowest terms, sign carried by the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frac {
    num: i64,
    den: i64,
}

impl Frac {
    fn new(num: i64, den: i64) -> Self {
        let g = gcd(num, den);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: (den / g).abs(),
        }
    }

    fn add(self, other: Frac) -> Frac {
        Frac::new(
            self.num * other.den + other.num * self.den,
            self.den * other.den,
        )
    }

    fn sub(self, other: Frac) -> Frac {
        Frac::new(
            self.num * other.den - other.num * self.den,
            self.den * other.den,
        )
    }

    fn mul(self, other: Frac) -> Frac {
        Frac::new(self.num * other.num, self.den * other.den)
    }

    /// Invert-and-multiply; `other.num` is never zero by construction.
    fn div(self, other: Frac) -> Frac {
        Frac::new(self.num * other.den, self.den * other.num)
    }

    fn greater_than(self, other: Frac) -> bool {
        self.num * other.den > other.num * self.den
    }

    fn render(self) -> String {
        if self.den == 1 {
            self.num.to_string()
        } else {
            format!("{}/{}", self.num, self.den)
        }
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FracOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FracOp {
    fn symbol(self) -> char {
        match self {
            FracOp::Add => '+',
            FracOp::Sub => '-',
            FracOp::Mul => '×',
            FracOp::Div => '÷',
        }
    }
}

pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    let op = pick(rng, &[FracOp::Add, FracOp::Sub, FracOp::Mul, FracOp::Div]);

    let (num1, den1, num2, den2) = match difficulty {
        Difficulty::Easy => {
            let den1 = pick(rng, &[2, 3, 4, 5]);
            let den2 = pick(rng, &[2, 3, 4, 5]);
            (
                rng.random_range(1..den1),
                den1,
                rng.random_range(1..den2),
                den2,
            )
        }
        Difficulty::Medium => {
            let den1 = pick(rng, &[4, 5, 6, 8, 10]);
            let den2 = pick(rng, &[4, 5, 6, 8, 10]);
            (
                rng.random_range(1..=den1),
                den1,
                rng.random_range(1..=den2),
                den2,
            )
        }
        Difficulty::Hard => {
            let den1 = pick(rng, &[6, 8, 9, 12, 15, 16]);
            let den2 = pick(rng, &[6, 8, 9, 12, 15, 16]);
            (
                rng.random_range(1..=den1 * 2),
                den1,
                rng.random_range(1..=den2),
                den2,
            )
        }
    };

    let mut lhs = Frac::new(num1, den1);
    let mut rhs = Frac::new(num2, den2);
    // Operands display unreduced, except after a subtraction swap.
    let mut lhs_display = format!("{num1}/{den1}");
    let mut rhs_display = format!("{num2}/{den2}");

    let answer = match op {
        FracOp::Add => lhs.add(rhs),
        FracOp::Sub => {
            // Below Hard, swap operands so the result stays non-negative.
            if difficulty != Difficulty::Hard && rhs.greater_than(lhs) {
                (lhs, rhs) = (rhs, lhs);
                lhs_display = format!("{}/{}", lhs.num, lhs.den);
                rhs_display = format!("{}/{}", rhs.num, rhs.den);
            }
            lhs.sub(rhs)
        }
        FracOp::Mul => lhs.mul(rhs),
        FracOp::Div => lhs.div(rhs),
    };

    Question::new(
        format!("{lhs_display} {} {rhs_display}", op.symbol()),
        answer.render(),
    )
}
