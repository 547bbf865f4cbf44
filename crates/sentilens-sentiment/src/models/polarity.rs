//! Lexicon polarity/subjectivity model.
//!
//! Every lexicon word found in the text is an assessment. A preceding
//! intensifier scales the assessment's polarity and subjectivity; a
//! preceding negation flips and halves its polarity. The text's scores are
//! the means over all assessments. Clause punctuation clears any pending
//! intensifier or negation.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::polarity_lexicon::{INTENSIFIERS, LEXICON, NEGATIONS};

const NEGATION_FACTOR: f64 = -0.5;

static WORDS: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    LEXICON
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});
static INTENSITY: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// Model output for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Mean polarity in `[-1.0, 1.0]`; `0.0` when nothing was assessed.
    pub polarity: f64,
    /// Mean subjectivity in `[0.0, 1.0]`; `0.0` when nothing was assessed.
    pub subjectivity: f64,
}

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    Break,
}

/// Score `text` with the polarity lexicon.
#[must_use]
pub fn assess(text: &str) -> Assessment {
    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();
    let mut intensity: Option<f64> = None;
    let mut negated = false;

    for token in tokenize(text) {
        let word = match token {
            Token::Word(word) => word,
            Token::Break => {
                intensity = None;
                negated = false;
                continue;
            }
        };

        if is_negation(&word) {
            negated = true;
            continue;
        }
        if let Some(&multiplier) = INTENSITY.get(word.as_str()) {
            intensity = Some(intensity.unwrap_or(1.0) * multiplier);
            continue;
        }
        let Some(&(polarity, subjectivity)) = WORDS.get(word.as_str()) else {
            continue;
        };

        let scale = intensity.take().unwrap_or(1.0);
        let mut p = polarity * scale;
        if negated {
            p *= NEGATION_FACTOR;
            negated = false;
        }
        polarities.push(p.clamp(-1.0, 1.0));
        subjectivities.push((subjectivity * scale).clamp(0.0, 1.0));
    }

    Assessment {
        polarity: mean(&polarities).clamp(-1.0, 1.0),
        subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
    }
}

fn is_negation(word: &str) -> bool {
    word.ends_with("n't") || NEGATIONS.contains(&word)
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        let ch = if matches!(ch, '\u{2018}' | '\u{2019}') { '\'' } else { ch };
        if ch.is_alphanumeric() || (ch == '\'' && !current.is_empty()) {
            current.extend(ch.to_lowercase());
            continue;
        }
        if !current.is_empty() {
            tokens.push(Token::Word(std::mem::take(&mut current)));
        }
        if matches!(ch, '.' | '!' | '?' | ',' | ';' | ':') {
            tokens.push(Token::Break);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::Word(current));
    }
    tokens
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}
