use chrono::{Duration, Utc};
use rand::{Rng, RngCore};
use serde_json::Value;

use datasmith_core::Constraints;

use crate::values::GeneratedValue;

const DEFAULT_TEXT_MAX: usize = 50;
const DEFAULT_INT_MIN: i64 = 1;
const DEFAULT_INT_MAX: i64 = 1_000_000;
const DEFAULT_DECIMAL_MIN: f64 = 0.0;
const DEFAULT_DECIMAL_MAX: f64 = 100_000.0;
const DEFAULT_CHOICES: &[&str] = &["Option1", "Option2"];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim", "veniam",
    "quis", "nostrud",
];

/// Bounded-length pseudo-random text.
pub fn text(constraints: &Constraints, rng: &mut dyn RngCore) -> GeneratedValue {
    let max_length = constraints.max_length.unwrap_or(DEFAULT_TEXT_MAX).max(1);
    let mut out = String::new();
    loop {
        let word = WORDS[rng.random_range(0..WORDS.len())];
        if !out.is_empty() {
            if out.len() + 1 + word.len() > max_length {
                break;
            }
            out.push(' ');
        } else if word.len() > max_length {
            out.push_str(&word[..max_length]);
            break;
        }
        out.push_str(word);
    }
    GeneratedValue::Text(out)
}

/// Uniform integer within the declared range.
pub fn integer(constraints: &Constraints, rng: &mut dyn RngCore) -> GeneratedValue {
    let min = constraints.min.map_or(DEFAULT_INT_MIN, |value| value as i64);
    let max = constraints.max.map_or(DEFAULT_INT_MAX, |value| value as i64);
    GeneratedValue::Int(rng.random_range(min..=max))
}

/// Uniform decimal within the declared range, rounded to `decimals` places.
pub fn decimal(constraints: &Constraints, decimals: u32, rng: &mut dyn RngCore) -> GeneratedValue {
    let min = constraints.min.unwrap_or(DEFAULT_DECIMAL_MIN);
    let max = constraints.max.unwrap_or(DEFAULT_DECIMAL_MAX);
    let raw = if min < max {
        rng.random_range(min..=max)
    } else {
        min
    };
    let factor = 10_f64.powi(decimals as i32);
    GeneratedValue::Float((raw * factor).round() / factor)
}

/// Uniform date within a trailing window ending today.
pub fn date(days_back: i64, rng: &mut dyn RngCore) -> GeneratedValue {
    let today = Utc::now().date_naive();
    let offset = rng.random_range(0..=days_back.max(0));
    GeneratedValue::Date(today - Duration::days(offset))
}

/// Uniform datetime within a trailing window ending now.
pub fn datetime(days_back: i64, rng: &mut dyn RngCore) -> GeneratedValue {
    let now = Utc::now().naive_utc();
    let window_seconds = days_back.max(0).saturating_mul(86_400);
    let offset = rng.random_range(0..=window_seconds);
    GeneratedValue::Timestamp(now - Duration::seconds(offset))
}

pub fn boolean(rng: &mut dyn RngCore) -> GeneratedValue {
    GeneratedValue::Bool(rng.random_bool(0.5))
}

/// Uniform pick from the declared choice set.
pub fn choice(constraints: &Constraints, rng: &mut dyn RngCore) -> GeneratedValue {
    match constraints.choices.as_deref() {
        Some(choices) if !choices.is_empty() => {
            let picked = &choices[rng.random_range(0..choices.len())];
            choice_value(picked)
        }
        _ => {
            let picked = DEFAULT_CHOICES[rng.random_range(0..DEFAULT_CHOICES.len())];
            GeneratedValue::Text(picked.to_string())
        }
    }
}

fn choice_value(value: &Value) -> GeneratedValue {
    match value {
        Value::String(text) => GeneratedValue::Text(text.clone()),
        Value::Bool(flag) => GeneratedValue::Bool(*flag),
        Value::Number(number) => number
            .as_i64()
            .map(GeneratedValue::Int)
            .or_else(|| number.as_f64().map(GeneratedValue::Float))
            .unwrap_or_else(|| GeneratedValue::Text(number.to_string())),
        other => GeneratedValue::Text(other.to_string()),
    }
}
