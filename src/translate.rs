// src/translate.rs
//! Source-label → English key translation.
//!
//! A table is an ordered list of rules. Each rule replaces every occurrence of
//! its source text, and rules run one after another on the output of the
//! previous rule. Later rules can therefore see text produced by earlier ones;
//! two spellings of one place collapse to a single key before the tier
//! suffixes are translated. Do not merge the rules into a single alternation,
//! that changes which text each rule sees.

use std::{fs, path::Path, sync::LazyLock};

use regex::{NoExpand, Regex};

use crate::error::Result;

/// Built-in table, in application order.
pub const BUILTIN_TABLE: &[(&str, &str)] = &[
    ("消耗", ""),

    ("水泥", "cement"),
    ("石油", "oil"),
    ("水合金", "blue"),
    ("光合金", "gold"),
    ("星合金", "silver"),

    ("海岸", "coast"),
    ("亡魂", "coast"),
    ("廢墟", "fields"),
    ("寂靜之地", "fields"),
    ("地下工廠", "underworld"),
    ("地下世界", "underworld"),
    ("汙染地帶", "contaminated"),
    ("危險區域", "contaminated"),
    ("洞窟", "hazard"),
    ("古老洞穴", "hazard"),
    ("復興都市", "city"),
    ("烏力寶都市", "city"),

    ("淡水", "water"),
    ("食料", "food"),
    ("木材", "wood"),
    ("石材", "stone"),
    ("鐵材", "iron"),

    ("叢林冒險", "jungle"),
    ("觀景點", "mountains"),
    ("私人沙灘", "beach"),
    ("野餐之地", "fields"),
    ("浪漫洞穴", "cavern"),
    ("神秘區域", "forest"),

    ("初級", "beginner"),
    ("中級", "intermediate"),
    ("上級", "advanced"),
    ("超級", "expert"),
    ("雷級", "thunder"),
    ("嵐級", "storm"),
];

static BUILTIN: LazyLock<Translator> = LazyLock::new(|| {
    Translator::from_pairs(BUILTIN_TABLE.iter().copied())
        .expect("escaped literals are valid patterns")
});

#[derive(Clone, Debug)]
struct Rule {
    source: String,
    pattern: Regex,
    key: String,
}

#[derive(Clone, Debug)]
pub struct Translator {
    rules: Vec<Rule>,
}

impl Translator {
    pub fn builtin() -> &'static Translator {
        &BUILTIN
    }

    /// Sources are matched literally; regex metacharacters in them carry no meaning.
    pub fn from_pairs<S, K>(pairs: impl IntoIterator<Item = (S, K)>) -> Result<Self>
    where
        S: AsRef<str>,
        K: Into<String>,
    {
        let mut rules = Vec::new();
        for (source, key) in pairs {
            let source = source.as_ref();
            // An empty source would match between every character.
            if source.is_empty() { continue; }
            rules.push(Rule {
                source: s!(source),
                pattern: Regex::new(&regex::escape(source))?,
                key: key.into(),
            });
        }
        Ok(Self { rules })
    }

    /// JSON array of `[source, key]` pairs.
    pub fn from_json(text: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> = serde_json::from_str(text)?;
        Self::from_pairs(pairs)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let t = Self::from_json(&text)?;
        logf!("Table: loaded {} rules from {}", t.len(), path.display());
        Ok(t)
    }

    pub fn len(&self) -> usize { self.rules.len() }

    pub fn is_empty(&self) -> bool { self.rules.is_empty() }

    /// `(source, key)` pairs in application order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|r| (r.source.as_str(), r.key.as_str()))
    }

    pub fn translate(&self, text: &str) -> String {
        let mut out = s!(text);
        for rule in &self.rules {
            if rule.pattern.is_match(&out) {
                out = rule.pattern.replace_all(&out, NoExpand(&rule.key)).into_owned();
            }
        }
        out
    }
}

impl Default for Translator {
    fn default() -> Self { Self::builtin().clone() }
}
