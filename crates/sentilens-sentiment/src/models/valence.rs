//! Rule-based valence model producing a normalized compound score.
//!
//! Each lexicon word contributes its valence, adjusted by shouting (all-caps
//! words in mixed-case text), by boosters and dampeners in the three words
//! before it, by negations in the same window and by a contrastive "but".
//! Exclamation and repeated question marks push the sum further from zero.
//! The sum is normalized into `[-1.0, 1.0]`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::valence_lexicon::{BOOSTERS, DAMPENERS, LEXICON, NEGATIONS};

const BOOST_INCREMENT: f64 = 0.293;
const DAMPEN_INCREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Distance scaling for modifiers one, two and three words back.
const WINDOW_SCALES: [f64; 3] = [1.0, 0.95, 0.9];

static VALENCES: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());
static BOOSTER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());
static DAMPENER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DAMPENERS.iter().copied().collect());

/// Compound score for `text` in `[-1.0, 1.0]`. Text with no lexicon words
/// scores exactly `0.0`.
#[must_use]
pub fn compound(text: &str) -> f64 {
    let words = words(text);
    if words.is_empty() {
        return 0.0;
    }
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let cap_diff = has_cap_differential(&words);

    let mut valences: Vec<f64> = (0..words.len())
        .map(|i| word_valence(i, &words, &lowered, cap_diff))
        .collect();
    apply_but_shift(&lowered, &mut valences);

    let mut sum: f64 = valences.iter().sum();
    if sum.abs() < f64::EPSILON {
        return 0.0;
    }
    let emphasis = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else {
        sum -= emphasis;
    }
    normalize(sum)
}

fn word_valence(i: usize, words: &[String], lowered: &[String], cap_diff: bool) -> f64 {
    let word = lowered[i].as_str();
    if is_modifier(word) {
        return 0.0;
    }
    let Some(&base) = VALENCES.get(word) else {
        return 0.0;
    };

    let mut valence = base;
    if cap_diff && is_all_caps(&words[i]) {
        valence += CAPS_INCREMENT.copysign(valence);
    }

    for (distance, scale) in WINDOW_SCALES.iter().enumerate() {
        let Some(j) = i.checked_sub(distance + 1) else {
            break;
        };
        let previous = lowered[j].as_str();
        if VALENCES.contains_key(previous) {
            continue;
        }
        valence += modifier_scalar(previous, &words[j], valence, cap_diff) * scale;
        if is_negated(previous) {
            valence *= NEGATION_SCALAR;
        }
    }
    valence
}

fn is_modifier(word: &str) -> bool {
    BOOSTER_SET.contains(word) || DAMPENER_SET.contains(word)
}

fn modifier_scalar(lowered: &str, original: &str, valence: f64, cap_diff: bool) -> f64 {
    let increment = if BOOSTER_SET.contains(lowered) {
        BOOST_INCREMENT
    } else if DAMPENER_SET.contains(lowered) {
        DAMPEN_INCREMENT
    } else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -increment } else { increment };
    if cap_diff && is_all_caps(original) {
        scalar += CAPS_INCREMENT.copysign(valence);
    }
    scalar
}

fn is_negated(word: &str) -> bool {
    if word.ends_with("n't") {
        return true;
    }
    let bare: String = word.chars().filter(|c| *c != '\'').collect();
    NEGATIONS.contains(&bare.as_str())
}

/// Words before a contrastive "but" count half, words after count one and a
/// half times.
fn apply_but_shift(lowered: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let mut emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
    if questions > 1 {
        #[allow(clippy::cast_precision_loss)]
        let question_emphasis = if questions <= 3 {
            questions as f64 * QUESTION_INCREMENT
        } else {
            MAX_QUESTION_EMPHASIS
        };
        emphasis += question_emphasis;
    }
    emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Whitespace tokens with surrounding punctuation removed and typographic
/// apostrophes folded to `'`. Single-character tokens carry no sentiment and
/// are dropped.
fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() > 1)
        .map(|word| word.replace(['\u{2018}', '\u{2019}'], "'"))
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some but not all words are shouted.
fn has_cap_differential(words: &[String]) -> bool {
    let shouted = words.iter().filter(|w| is_all_caps(w)).count();
    shouted > 0 && shouted < words.len()
}
