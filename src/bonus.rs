// src/bonus.rs
//! Expected drops once a party's drop bonuses are known.
//!
//! A bonus of `b` for a resource adds `b` items to every stack of it that
//! drops, so one run yields `initial + b × stacks`. Resources without a bonus
//! yield `initial`.

use indexmap::IndexMap;

use crate::core::sanitize::parse_float_prefix;
use crate::data::{FarmingResult, NodeDrops};
use crate::error::{Error, Result};

/// Resource key → extra items per stack.
pub type Bonus = IndexMap<String, f64>;

/// Resource key → expected items per run.
pub type Yield = IndexMap<String, f64>;

/// `"water=2"` → `("water", 2.0)`.
pub fn parse_bonus(text: &str) -> Result<(String, f64)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| Error::Number { what: "bonus (expected resource=value)", text: s!(text) })?;
    let key = key.trim();
    let n = parse_float_prefix(value)
        .filter(|_| !key.is_empty())
        .ok_or_else(|| Error::Number { what: "bonus", text: s!(text) })?;
    Ok((s!(key), n))
}

/// Collect `resource=value` pairs; a repeated resource adds up.
pub fn bonus_from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Result<Bonus> {
    let mut bonus = Bonus::new();
    for p in pairs {
        let (key, n) = parse_bonus(p)?;
        *bonus.entry(key).or_default() += n;
    }
    Ok(bonus)
}

pub fn drops_with_bonus(node: &NodeDrops, bonus: &Bonus) -> Yield {
    node.iter()
        .map(|(key, d)| (key.clone(), d.with_bonus(bonus.get(key).copied().unwrap_or(0.0))))
        .collect()
}

/// Stack chances only; the yield per extra item of bonus.
pub fn stacks(node: &NodeDrops) -> Yield {
    node.iter().map(|(key, d)| (key.clone(), d.stacks)).collect()
}

/// Node name → expected yield.
pub type Evaluation = IndexMap<String, Yield>;

/// Node name → expected yield, for every node of a farming result.
pub fn evaluate(result: &FarmingResult, bonus: &Bonus) -> Evaluation {
    let out: Evaluation = result
        .iter()
        .map(|(node, drops)| (node.clone(), drops_with_bonus(drops, bonus)))
        .collect();
    logd!("Bonus: evaluated {} nodes with {} bonuses", out.len(), bonus.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_pairs_parse_and_sum() {
        let b = bonus_from_pairs(["water=2", " wood = 1.5", "water=1"]).unwrap();
        assert_eq!(b["water"], 3.0);
        assert_eq!(b["wood"], 1.5);
    }

    #[test]
    fn malformed_bonus_is_a_number_error() {
        for bad in ["water", "water=x", "=2"] {
            assert!(matches!(parse_bonus(bad), Err(Error::Number { .. })), "{bad:?}");
        }
    }
}
