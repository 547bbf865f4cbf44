//! Word valences for the rule-based compound model.

/// `(word, valence)` with valence in `[-4.0, 4.0]`.
pub(super) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lovely", 2.8),
    ("like", 2.0),
    ("liked", 1.8),
    ("likes", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoyable", 1.9),
    ("good", 1.9),
    ("great", 3.1),
    ("greatest", 3.2),
    ("excellent", 2.7),
    ("wonderful", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("fantastic", 2.6),
    ("brilliant", 2.8),
    ("superb", 3.1),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("glad", 2.0),
    ("pleased", 1.9),
    ("pleasant", 2.3),
    ("delighted", 3.1),
    ("delightful", 2.9),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("beautiful", 2.9),
    ("pretty", 2.2),
    ("cute", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("exciting", 2.2),
    ("excited", 1.4),
    ("impressive", 2.3),
    ("impressed", 2.1),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("helpful", 1.8),
    ("useful", 1.9),
    ("friendly", 2.2),
    ("kind", 2.4),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("grateful", 2.0),
    ("satisfied", 1.8),
    ("satisfying", 2.0),
    ("success", 2.7),
    ("successful", 2.8),
    ("win", 2.8),
    ("winning", 2.4),
    ("won", 2.7),
    ("easy", 1.9),
    ("fast", 1.1),
    ("reliable", 1.6),
    ("smooth", 1.1),
    ("clean", 1.7),
    ("fresh", 1.3),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("incredible", 2.6),
    ("positive", 2.6),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("calm", 1.3),
    ("comfortable", 1.5),
    ("cool", 1.3),
    ("super", 2.9),
    ("fabulous", 2.4),
    ("terrific", 2.1),
    ("marvelous", 2.9),
    ("praise", 2.6),
    ("smile", 1.5),
    ("laugh", 2.2),
    ("win-win", 2.5),
    ("yes", 1.7),
    ("benefit", 1.6),
    ("safe", 1.9),
    ("strong", 2.3),
    ("trust", 2.3),
    ("wow", 2.8),
    ("adore", 3.0),
    ("admire", 2.2),
    ("appreciate", 1.9),
    ("appreciated", 2.3),
    ("creative", 1.9),
    ("elegant", 2.1),
    ("generous", 2.3),
    ("gorgeous", 3.0),
    ("honest", 2.3),
    ("ideal", 2.4),
    ("inspiring", 2.3),
    ("intelligent", 2.0),
    ("charming", 2.8),
    ("cheerful", 2.5),
    ("peaceful", 2.2),
    ("proud", 2.1),
    ("remarkable", 2.2),
    ("worth", 0.9),
    // Negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hating", -2.3),
    ("dislike", -1.6),
    ("disliked", -1.7),
    ("sad", -2.1),
    ("sadly", -1.8),
    ("unhappy", -1.8),
    ("angry", -2.3),
    ("anger", -2.7),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("boring", -1.3),
    ("bored", -1.1),
    ("ugly", -2.3),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("useless", -1.8),
    ("broken", -2.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fails", -1.8),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -0.4),
    ("issues", -0.6),
    ("wrong", -2.1),
    ("slow", -0.7),
    ("expensive", -0.8),
    ("difficult", -1.5),
    ("hard", -0.4),
    ("painful", -1.9),
    ("pain", -2.3),
    ("hurt", -2.4),
    ("sick", -2.3),
    ("dirty", -1.9),
    ("rude", -2.0),
    ("nasty", -2.6),
    ("mess", -1.5),
    ("messy", -1.5),
    ("negative", -2.7),
    ("fear", -2.2),
    ("afraid", -2.0),
    ("scared", -2.2),
    ("worried", -1.2),
    ("worry", -1.9),
    ("lonely", -1.5),
    ("cry", -2.1),
    ("crying", -2.1),
    ("died", -2.6),
    ("death", -2.9),
    ("dead", -3.3),
    ("kill", -3.7),
    ("killed", -3.5),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("pathetic", -2.6),
    ("lame", -1.8),
    ("ridiculous", -1.5),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("sucks", -1.5),
    ("regret", -1.8),
    ("sorry", -0.3),
    ("unfortunately", -1.4),
    ("damn", -1.7),
    ("crap", -1.6),
    ("no", -1.2),
    ("lost", -1.3),
    ("lose", -1.7),
    ("loss", -1.3),
    ("weak", -1.9),
    ("unfair", -2.1),
    ("cruel", -2.8),
    ("evil", -3.4),
    ("dangerous", -2.1),
    ("danger", -2.4),
    ("threat", -2.4),
    ("worthless", -1.9),
    ("mediocre", -0.3),
    ("frustrating", -1.9),
    ("frustrated", -2.4),
    ("confusing", -0.9),
    ("confused", -1.3),
    ("miserable", -2.2),
    ("tragic", -3.4),
    ("upset", -1.6),
    ("ashamed", -2.1),
    ("guilty", -1.8),
    ("horrendous", -2.9),
    ("dreadful", -2.7),
    ("terrifying", -2.7),
    ("hopeless", -2.0),
    ("annoy", -1.9),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("unacceptable", -2.0),
    ("fake", -2.1),
    ("cheap", -0.1),
];

/// Words that raise the intensity of the word after them.
pub(super) const BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fabulously",
    "fully",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "truly",
    "unbelievably",
    "utterly",
    "very",
];

/// Words that lower the intensity of the word after them.
pub(super) const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

pub(super) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
    "rarely", "seldom", "despite",
];
