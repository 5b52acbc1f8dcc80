//! Question generation for the five problem types.
//!
//! Addition, subtraction and comparison draw from the supplied difficulty
//! range; multiplication and division use fixed kid-sized tables regardless of
//! tier. All draws go through the injected `Rng` so tests can seed it.

use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::difficulty::DifficultyRange;

// --- Problem types ------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    #[default]
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Comparison,
}

impl ProblemKind {
    pub fn all() -> [ProblemKind; 5] {
        [
            ProblemKind::Addition,
            ProblemKind::Subtraction,
            ProblemKind::Multiplication,
            ProblemKind::Division,
            ProblemKind::Comparison,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Addition => "addition",
            ProblemKind::Subtraction => "subtraction",
            ProblemKind::Multiplication => "multiplication",
            ProblemKind::Division => "division",
            ProblemKind::Comparison => "comparison",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemKind::all()
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GameError::UnknownProblemKind(s.to_string()))
    }
}

// --- Fixed tables -------------------------------------------------------------

/// Multiplication factors and division divisors: 2..=13.
pub const FACTOR_RANGE: std::ops::Range<i32> = 2..14;
/// Division quotients: 2..=16.
pub const QUOTIENT_RANGE: std::ops::Range<i32> = 2..17;
/// Smallest subtrahend used when the minuend allows it.
pub const SUBTRAHEND_FLOOR: i32 = 10;

/// Comparison answer when the left number is greater.
pub const LEFT_GREATER: i32 = 1;
/// Comparison answer when the right number is greater.
pub const RIGHT_GREATER: i32 = 0;

// --- Question -----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ProblemKind,
    #[serde(rename = "question")]
    pub prompt: String,
    pub answer: i32,
    /// Left and right operands as shown in the prompt.
    pub operands: (i32, i32),
    /// Presentation order is shuffled. Distractors may repeat each other or
    /// the answer; only the answer's presence is guaranteed.
    pub options: Vec<i32>,
}

impl Question {
    pub fn is_correct(&self, answer: i32) -> bool {
        self.answer == answer
    }

    /// Button label for an option. Comparison options read as a side.
    pub fn option_label(&self, option: i32) -> String {
        match (self.kind, option) {
            (ProblemKind::Comparison, LEFT_GREATER) => "Left".to_string(),
            (ProblemKind::Comparison, _) => "Right".to_string(),
            _ => option.to_string(),
        }
    }
}

/// Build a question of `kind`. `range` only affects the range-based types.
pub fn generate<R: Rng + ?Sized>(
    kind: ProblemKind,
    range: DifficultyRange,
    id: u64,
    rng: &mut R,
) -> Question {
    let (a, b, answer, prompt) = match kind {
        ProblemKind::Addition => {
            let a = draw(rng, range.min, range.max);
            // b is offset from min by at most the headroom left above a.
            let b = offset(range.min, span_draw(rng, i64::from(range.max) - i64::from(a)));
            (a, b, a.saturating_add(b), format!("{} + {} = ?", a, b))
        }
        ProblemKind::Subtraction => {
            let a = draw(rng, range.min, range.max);
            // Keep b <= a so the answer is never negative, even for tiny a.
            let lower = SUBTRAHEND_FLOOR.min(a);
            let b = draw(rng, lower, a);
            (a, b, a - b, format!("{} - {} = ?", a, b))
        }
        ProblemKind::Multiplication => {
            let a = rng.gen_range(FACTOR_RANGE);
            let b = rng.gen_range(FACTOR_RANGE);
            (a, b, a * b, format!("{} × {} = ?", a, b))
        }
        ProblemKind::Division => {
            let divisor = rng.gen_range(FACTOR_RANGE);
            let quotient = rng.gen_range(QUOTIENT_RANGE);
            let dividend = divisor * quotient;
            (dividend, divisor, quotient, format!("{} ÷ {} = ?", dividend, divisor))
        }
        ProblemKind::Comparison => {
            let a = draw(rng, range.min, range.max);
            let mut b = draw(rng, range.min, range.max);
            if a == b {
                b = b.checked_add(1).unwrap_or(b - 1);
            }
            let answer = if a > b { LEFT_GREATER } else { RIGHT_GREATER };
            (a, b, answer, format!("Which is greater: {} OR {}", a, b))
        }
    };

    let options = match kind {
        ProblemKind::Comparison => vec![LEFT_GREATER, RIGHT_GREATER],
        _ => distractors(kind, answer, rng),
    };

    trace!(target: "question", "generated {} #{}: {} (answer {}, options {:?})", kind, id, prompt, answer, options);

    Question {
        id,
        kind,
        prompt,
        answer,
        operands: (a, b),
        options,
    }
}

/// Answer plus three jittered candidates, filtered to the type's valid domain
/// and shuffled.
fn distractors<R: Rng + ?Sized>(kind: ProblemKind, answer: i32, rng: &mut R) -> Vec<i32> {
    // (above, below, far-above) as (span, offset) pairs: value = answer ± (r(span) + offset)
    let ((up_span, up_off), (down_span, down_off), (far_span, far_off)) = match kind {
        ProblemKind::Addition => ((10, 1), (10, 1), (20, 5)),
        ProblemKind::Subtraction => ((10, 1), (10, 1), (15, 3)),
        ProblemKind::Multiplication => ((20, 5), (15, 3), (30, 10)),
        ProblemKind::Division => ((5, 1), (3, 1), (8, 3)),
        ProblemKind::Comparison => unreachable!("comparison uses fixed options"),
    };
    let mut options = vec![
        answer,
        answer.saturating_add(rng.gen_range(0..up_span) + up_off),
        answer.saturating_sub(rng.gen_range(0..down_span) + down_off),
        answer.saturating_add(rng.gen_range(0..far_span) + far_off),
    ];
    match kind {
        ProblemKind::Addition => {}
        ProblemKind::Subtraction => options.retain(|&n| n >= 0),
        ProblemKind::Multiplication | ProblemKind::Division => options.retain(|&n| n > 0),
        ProblemKind::Comparison => unreachable!("comparison uses fixed options"),
    }
    options.shuffle(rng);
    options
}

/// Uniform draw from `[lo, hi)`, widened to a single value when the span is empty.
fn draw<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    offset(lo, span_draw(rng, i64::from(hi) - i64::from(lo)))
}

/// Uniform draw from `[0, span)` with a minimum span of 1. Spans are `i64` so
/// the full `i32` range fits.
fn span_draw<R: Rng + ?Sized>(rng: &mut R, span: i64) -> i64 {
    rng.gen_range(0..span.max(1))
}

/// `base + delta`, clamped into `i32`.
fn offset(base: i32, delta: i64) -> i32 {
    (i64::from(base) + delta).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyLabel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn easy() -> DifficultyRange {
        DifficultyLabel::Easy.range()
    }

    #[test]
    fn test_parse_problem_kind() {
        assert_eq!("division".parse::<ProblemKind>().unwrap(), ProblemKind::Division);
        assert!(matches!(
            "modulo".parse::<ProblemKind>(),
            Err(GameError::UnknownProblemKind(s)) if s == "modulo"
        ));
    }

    #[test]
    fn test_addition_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for id in 0..500 {
            let q = generate(ProblemKind::Addition, easy(), id, &mut rng);
            let (a, b) = q.operands;
            assert!((10..30).contains(&a), "a={}", a);
            assert!(b >= 10 && b < 10 + (30 - a), "a={} b={}", a, b);
            assert_eq!(q.answer, a + b);
            assert!(q.answer < 40);
            assert_eq!(q.prompt, format!("{} + {} = ?", a, b));
            assert_eq!(q.options.len(), 4);
            assert!(q.options.contains(&q.answer));
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        for id in 0..500 {
            let q = generate(ProblemKind::Subtraction, easy(), id, &mut rng);
            let (a, b) = q.operands;
            assert!((10..30).contains(&a));
            assert!(b >= 10);
            assert!(b < a || (a == 10 && b == 10), "a={} b={}", a, b);
            assert_eq!(q.answer, a - b);
            assert!(q.answer >= 0);
            assert!(q.options.contains(&q.answer));
            assert!(q.options.iter().all(|&o| o >= 0));
        }
    }

    #[test]
    fn test_subtraction_degenerate_range() {
        // A range entirely below the subtrahend floor still yields a valid question.
        let range = DifficultyRange { min: 3, max: 6, label: DifficultyLabel::Easy };
        let mut rng = StdRng::seed_from_u64(3);
        for id in 0..100 {
            let q = generate(ProblemKind::Subtraction, range, id, &mut rng);
            assert_eq!(q.answer, 0);
            assert_eq!(q.operands.0, q.operands.1);
        }
    }

    #[test]
    fn test_empty_range_does_not_panic() {
        let range = DifficultyRange { min: 20, max: 20, label: DifficultyLabel::Easy };
        let mut rng = StdRng::seed_from_u64(4);
        for kind in ProblemKind::all() {
            let q = generate(kind, range, 0, &mut rng);
            assert!(q.options.contains(&q.answer));
        }
    }

    #[test]
    fn test_extreme_ranges_do_not_overflow() {
        let ranges = [
            DifficultyRange { min: -10, max: i32::MAX, label: DifficultyLabel::Hard },
            DifficultyRange { min: i32::MAX, max: i32::MAX, label: DifficultyLabel::Hard },
            DifficultyRange { min: i32::MIN, max: i32::MAX, label: DifficultyLabel::Hard },
            DifficultyRange { min: i32::MIN, max: i32::MIN, label: DifficultyLabel::Easy },
        ];
        let mut rng = StdRng::seed_from_u64(12);
        for range in ranges {
            for kind in ProblemKind::all() {
                for id in 0..200 {
                    let q = generate(kind, range, id, &mut rng);
                    assert!(q.options.contains(&q.answer), "{:?} {:?}", kind, range);
                    if kind == ProblemKind::Comparison {
                        assert_ne!(q.operands.0, q.operands.1);
                        let (a, b) = q.operands;
                        assert_eq!(q.answer, if a > b { 1 } else { 0 });
                    }
                    if kind == ProblemKind::Subtraction {
                        assert!(q.answer >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_multiplication_ignores_range() {
        let hard = DifficultyLabel::Hard.range();
        let mut rng = StdRng::seed_from_u64(5);
        for id in 0..500 {
            let q = generate(ProblemKind::Multiplication, hard, id, &mut rng);
            let (a, b) = q.operands;
            assert!((2..=13).contains(&a) && (2..=13).contains(&b));
            assert_eq!(q.answer, a * b);
            assert!(q.options.iter().all(|&o| o > 0));
            assert!(q.options.contains(&q.answer));
        }
    }

    #[test]
    fn test_division_is_exact() {
        let mut rng = StdRng::seed_from_u64(6);
        for id in 0..500 {
            let q = generate(ProblemKind::Division, easy(), id, &mut rng);
            let (dividend, divisor) = q.operands;
            assert!((2..=13).contains(&divisor));
            assert!((2..=16).contains(&q.answer));
            assert_eq!(dividend, divisor * q.answer);
            assert_eq!(q.prompt, format!("{} ÷ {} = ?", dividend, divisor));
            assert!(q.options.iter().all(|&o| o > 0));
        }
    }

    #[test]
    fn test_comparison_encodes_greater_side() {
        let mut rng = StdRng::seed_from_u64(7);
        for id in 0..500 {
            let q = generate(ProblemKind::Comparison, easy(), id, &mut rng);
            let (a, b) = q.operands;
            assert_ne!(a, b);
            assert!((10..30).contains(&a));
            assert!((10..=30).contains(&b));
            assert_eq!(q.answer, if a > b { 1 } else { 0 });
            assert_eq!(q.options, vec![1, 0]);
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let q1 = generate(ProblemKind::Addition, easy(), 9, &mut StdRng::seed_from_u64(42));
        let q2 = generate(ProblemKind::Addition, easy(), 9, &mut StdRng::seed_from_u64(42));
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_option_labels() {
        let mut rng = StdRng::seed_from_u64(8);
        let cmp = generate(ProblemKind::Comparison, easy(), 0, &mut rng);
        assert_eq!(cmp.option_label(1), "Left");
        assert_eq!(cmp.option_label(0), "Right");
        let add = generate(ProblemKind::Addition, easy(), 1, &mut rng);
        assert_eq!(add.option_label(17), "17");
    }

    #[test]
    fn test_question_json_uses_original_keys() {
        let mut rng = StdRng::seed_from_u64(10);
        let q = generate(ProblemKind::Division, easy(), 3, &mut rng);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"type\":\"division\""));
        assert!(json.contains("\"question\":"));
        assert!(json.contains("\"id\":3"));
    }
}
