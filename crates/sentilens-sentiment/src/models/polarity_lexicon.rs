//! Word weights for the polarity model.

/// `(word, polarity, subjectivity)`. Polarity in `[-1.0, 1.0]`,
/// subjectivity in `[0.0, 1.0]`.
pub(super) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("superb", 1.0, 1.0),
    ("outstanding", 0.5, 0.5),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("lovely", 0.5, 0.75),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("loving", 0.6, 0.9),
    ("like", 0.1, 0.2),
    ("liked", 0.6, 0.8),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.5, 0.6),
    ("enjoyable", 0.5, 0.6),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("pleased", 0.5, 1.0),
    ("pleasant", 0.733, 0.967),
    ("delightful", 1.0, 1.0),
    ("delighted", 0.7, 0.9),
    ("beautiful", 0.85, 1.0),
    ("pretty", 0.25, 1.0),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("interesting", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("remarkable", 0.75, 0.75),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("helpful", 0.5, 0.6),
    ("useful", 0.3, 0.0),
    ("friendly", 0.375, 0.5),
    ("kind", 0.6, 0.9),
    ("fresh", 0.3, 0.5),
    ("clean", 0.367, 0.683),
    ("easy", 0.433, 0.833),
    ("fast", 0.2, 0.6),
    ("cool", 0.35, 0.65),
    ("sweet", 0.35, 0.65),
    ("fine", 0.417, 0.5),
    ("positive", 0.227, 0.545),
    ("recommended", 0.4, 0.5),
    ("reliable", 0.5, 0.6),
    ("satisfied", 0.5, 1.0),
    ("smooth", 0.4, 0.6),
    ("solid", 0.3, 0.5),
    ("success", 0.3, 0.0),
    ("successful", 0.75, 0.95),
    ("thankful", 0.5, 0.8),
    ("grateful", 0.6, 0.9),
    ("exciting", 0.3, 0.8),
    ("excited", 0.375, 0.75),
    ("strong", 0.433, 0.733),
    ("top", 0.5, 0.5),
    ("valuable", 0.5, 0.6),
    ("welcome", 0.8, 0.9),
    ("win", 0.8, 0.4),
    ("worth", 0.3, 0.1),
    // Negative
    ("bad", -0.7, 0.667),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("annoyed", -0.4, 0.8),
    ("boring", -1.0, 1.0),
    ("bored", -0.5, 1.0),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("disgusting", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("hateful", -0.8, 0.9),
    ("ugly", -0.7, 1.0),
    ("stupid", -0.8, 1.0),
    ("useless", -0.5, 0.2),
    ("broken", -0.4, 0.4),
    ("slow", -0.3, 0.39),
    ("difficult", -0.5, 1.0),
    ("hard", -0.292, 0.542),
    ("wrong", -0.5, 0.9),
    ("rude", -0.3, 0.6),
    ("nasty", -1.0, 1.0),
    ("pathetic", -1.0, 1.0),
    ("mediocre", -0.4, 0.8),
    ("dirty", -0.6, 0.8),
    ("expensive", -0.5, 0.7),
    ("cheap", 0.4, 0.7),
    ("negative", -0.3, 0.4),
    ("painful", -0.7, 0.9),
    ("sick", -0.714, 0.857),
    ("scary", -0.5, 1.0),
    ("weak", -0.375, 0.625),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.3, 0.3),
    ("problem", -0.1, 0.1),
    ("dangerous", -0.6, 0.9),
    ("harmful", -0.6, 0.8),
    ("frustrating", -0.4, 0.7),
    ("frustrated", -0.7, 0.7),
    ("unacceptable", -0.8, 0.9),
    ("lousy", -0.8, 0.9),
    ("miserable", -1.0, 1.0),
    ("lame", -0.5, 0.75),
    ("mess", -0.2, 0.3),
    ("worthless", -0.8, 0.8),
];

/// `(word, multiplier)` applied to the next sentiment word.
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("totally", 1.3),
    ("truly", 1.2),
    ("highly", 1.3),
    ("super", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
    ("too", 1.1),
    ("most", 1.3),
    ("utterly", 1.5),
    ("completely", 1.4),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("fairly", 0.8),
    ("barely", 0.3),
];

pub(super) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "hardly", "without",
];
