//! The vocabulary of candidate board words.
//!
//! A `Lexicon` is pure data: an ordered sequence of unique uppercase word
//! tokens the board is dealt from. The crate ships the standard pool; a
//! caller may supply its own. Construction rejects duplicates; dealing a
//! board from a pool too small to fill one fails at `GameState::setup`.

use std::borrow::Borrow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// An uppercase word token.
///
/// Opaque to the engine; unique within a single board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a word, trimming and uppercasing the token.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().trim().to_uppercase())
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated pool of candidate board words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from word tokens.
    ///
    /// Tokens are normalized to uppercase. Fails if the same word appears
    /// twice after normalization.
    pub fn new<I, S>(tokens: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for token in tokens {
            let word = Word::new(token);
            if !seen.insert(word.as_str().to_string()) {
                return Err(EngineError::DuplicateWord(word.as_str().to_string()));
            }
            words.push(word);
        }

        Ok(Self { words })
    }

    /// The standard built-in word pool.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            words: WORD_POOL.iter().map(|w| Word::new(w)).collect(),
        }
    }

    /// All words in the pool, in order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard word pool.
pub static WORD_POOL: &[&str] = &[
    "APPLE", "BALL", "BANK", "BEACH", "BEAR", "BED", "BOOK", "BOTTLE", "BRIDGE",
    "BROTHER", "CAT", "CHINA", "CHURCH", "CIRCLE", "CLOUD", "CODE", "COOK", "CROSS",
    "CROWN", "DANCE", "DIAMOND", "DOCTOR", "DRAGON", "DRESS", "DRILL", "DROP", "DUCK",
    "EGG", "EGYPT", "ELEPHANT", "ENGINE", "ENGLAND", "EYE", "FACE", "FAIR", "FALL",
    "FAN", "FENCE", "FIELD", "FIGHTER", "FIGURE", "FILE", "FILM", "FIRE", "FISH",
    "FLUTE", "FLY", "FOOT", "FORCE", "FOREST", "FORK", "FRANCE", "GAME", "GAS",
    "GENIUS", "GERMANY", "GHOST", "GIANT", "GLASS", "GLOVE", "GOLD", "GRACE", "GRASS",
    "GREEN", "GROUND", "HAMMER", "HAND", "HAT", "HAWK", "HEAD", "HEART", "HELICOPTER",
    "HIMALAYAS", "HOLE", "HOLLYWOOD", "HONEY", "HORN", "HORSE", "HOSPITAL", "HOTEL",
    "ICE", "ICON", "IGLOO", "INDIA", "IRON", "IVORY", "JACK", "JAM", "JET",
    "JUPITER", "KANGAROO", "KETCHUP", "KEY", "KING", "KIWI", "KNIFE", "KNIGHT",
    "LAB", "LAP", "LASER", "LAWYER", "LEAD", "LEMON", "LEPRECHAUN", "LIFE", "LIGHT",
    "LIMOUSINE", "LINE", "LINK", "LION", "LITTER", "LOCH", "LOCK", "LOG", "LONDON",
    "LUCK", "MAIL", "MAMMOTH", "MAPLE", "MARCH", "MASS", "MATCH", "MERCURY", "MEXICO",
    "MICROSCOPE", "MILLIONAIRE", "MINE", "MINT", "MISSILE", "MODEL", "MOLE", "MOON",
    "MOSCOW", "MOUNT", "MOUSE", "MOUTH", "MUG", "NAIL", "NEEDLE", "NET", "NEW YORK",
    "NIGHT", "NINJA", "NOTE", "NOVEL", "NURSE", "NUT", "OCTOPUS", "OIL", "OLIVE",
    "OLYMPUS", "OPERA", "ORANGE", "ORGAN", "PALM", "PAN", "PANTS", "PAPER", "PARACHUTE",
    "PARK", "PART", "PASS", "PASTE", "PENGUIN", "PHOENIX", "PIANO", "PIE", "PILOT",
    "PIN", "PIPE", "PIRATE", "PISTOL", "PIT", "PITCH", "PLANE", "PLANT", "PLASTIC",
    "PLATE", "PLAY", "PLOT", "POINT", "POISON", "POLE", "POLICE", "POOL", "PORT",
    "POST", "POUND", "PRESS", "PRINCESS", "PUMPKIN", "PUPIL", "PYRAMID", "QUEEN",
    "QUILL", "RABBIT", "RACKET", "RAY", "REVOLUTION", "RING", "ROBIN", "ROCK", "ROME",
    "ROOT", "ROSE", "ROULETTE", "ROUND", "ROW", "ROYAL", "RUBBER", "RULE", "SATELLITE",
    "SATURN", "SCALE", "SCHOOL", "SCIENTIST", "SCORPION", "SCREEN", "SCUBA", "SEAL",
    "SERVER", "SHADOW", "SHAKESPEARE", "SHARK", "SHIP", "SHOE", "SHOP", "SHOT", "SINK",
    "SKATE", "SKI", "SKULL", "SLIP", "SLUG", "SMUGGLER", "SNOW", "SNOWMAN", "SOCK",
    "SOLDIER", "SOUL", "SPACE", "SPELL", "SPIDER", "SPIKE", "SPINE", "SPOT", "SPRING",
    "SPY", "SQUARE", "STADIUM", "STAFF", "STAMP", "STAR", "STATE", "STICK", "STOCK",
    "STORM", "STOVE", "STRAW", "STREAM", "STRIKE", "STRING", "SUB", "SUIT", "SUPERHERO",
    "SWING", "SWITCH", "TABLE", "TABLET", "TAG", "TAIL", "TAP", "TASTE", "THIEF",
    "THUMB", "TICK", "TIE", "TIGER", "TIME", "TOKYO", "TOOTH", "TORCH", "TOWER",
    "TRACK", "TRAIN", "TRIANGLE", "TRIP", "TRUNK", "TUBE", "TURKEY", "UNDERTAKER",
    "UNICORN", "VACUUM", "VAN", "VET", "WAKE", "WALL", "WAR", "WASHER", "WASHINGTON",
    "WATCH", "WATER", "WAVE", "WEB", "WELL", "WHALE", "WHIP", "WIND", "WITCH",
    "WIZARD", "WOLF", "WOOD", "WOOL", "WORLD", "WORM", "YARD",
];
