//! Built-in word lexicon: (word, polarity, subjectivity)

pub(crate) static WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("great", 0.8, 0.75),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("awesome", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("perfect", 1.0, 1.0),
    ("good", 0.7, 0.6),
    ("nice", 0.6, 1.0),
    ("fine", 0.4, 0.5),
    ("lovely", 0.5, 0.75),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("beautiful", 0.85, 1.0),
    ("positive", 0.23, 0.55),
    ("cheerful", 0.6, 0.8),
    ("delighted", 0.7, 0.9),
    ("pleased", 0.5, 0.8),
    ("content", 0.3, 0.6),
    ("satisfied", 0.5, 0.7),
    ("optimistic", 0.5, 0.7),
    ("thrilled", 0.6, 0.9),
    ("elated", 0.7, 0.9),
    ("grateful", 0.6, 0.8),
    ("thankful", 0.6, 0.8),
    ("proud", 0.8, 1.0),
    ("fun", 0.3, 0.2),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("calm", 0.3, 0.75),
    ("peaceful", 0.4, 0.6),
    ("relaxed", 0.35, 0.6),
    ("serene", 0.4, 0.7),
    ("tranquil", 0.4, 0.7),
    ("balanced", 0.2, 0.4),
    ("energetic", 0.3, 0.6),
    ("motivated", 0.3, 0.6),
    ("enthusiastic", 0.5, 0.8),
    ("productive", 0.3, 0.5),
    ("focused", 0.2, 0.4),
    ("lively", 0.4, 0.6),
    ("hopeful", 0.5, 0.7),
    ("strong", 0.4, 0.7),
    ("safe", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("easy", 0.43, 0.83),
    ("successful", 0.75, 0.95),
    // negative
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("dreadful", -0.8, 0.9),
    ("miserable", -1.0, 1.0),
    ("depressed", -0.5, 0.8),
    ("depressing", -0.6, 0.8),
    ("gloomy", -0.6, 0.8),
    ("lonely", -0.5, 0.8),
    ("hurt", -0.4, 0.7),
    ("painful", -0.7, 0.9),
    ("heartbroken", -0.8, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("upset", -0.5, 0.8),
    ("hopeless", -0.8, 0.9),
    ("broken", -0.4, 0.4),
    ("cry", -0.3, 0.6),
    ("crying", -0.4, 0.6),
    ("angry", -0.5, 1.0),
    ("mad", -0.6, 1.0),
    ("furious", -0.8, 1.0),
    ("annoyed", -0.4, 0.8),
    ("annoying", -0.8, 0.9),
    ("irritated", -0.4, 0.8),
    ("frustrated", -0.7, 0.8),
    ("frustrating", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("stupid", -0.8, 1.0),
    ("unfair", -0.5, 0.9),
    ("anxious", -0.2, 0.7),
    ("worried", -0.2, 0.6),
    ("nervous", -0.2, 0.6),
    ("overwhelmed", -0.2, 0.6),
    ("tense", -0.2, 0.5),
    ("stressed", -0.25, 0.6),
    ("stressful", -0.3, 0.6),
    ("scared", -0.5, 0.8),
    ("afraid", -0.6, 0.9),
    ("uneasy", -0.3, 0.6),
    ("restless", -0.2, 0.5),
    ("tired", -0.4, 0.7),
    ("exhausted", -0.4, 0.7),
    ("drained", -0.3, 0.6),
    ("weary", -0.3, 0.6),
    ("sleepy", -0.1, 0.5),
    ("sick", -0.7, 0.9),
    ("boring", -1.0, 1.0),
    ("bored", -0.5, 0.8),
    ("difficult", -0.5, 1.0),
    ("hard", -0.3, 0.5),
    ("wrong", -0.5, 0.9),
    ("poor", -0.4, 0.6),
    ("weak", -0.4, 0.6),
];

/// Words that scale the next sentiment word
pub(crate) static INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.4),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("little", 0.6),
];

/// Words that flip the next sentiment word
pub(crate) static NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "hardly"];
