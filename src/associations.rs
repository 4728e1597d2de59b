//! Static semantic association table.
//!
//! A small compiled-in mapping from category names to member words, used
//! heuristically by both AI policies in lieu of real language
//! understanding. Read-only data shared by the spymaster (to find clues
//! connecting its words) and the operative (to score guesses against a
//! clue). Member words are stored lowercase; lookups lowercase their
//! input.

/// A named category and its member words (lowercase).
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl Category {
    /// Whether `word` (any case) is a listed member.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let w = word.to_lowercase();
        self.members.iter().any(|m| *m == w)
    }
}

/// The full association table.
pub static CATEGORIES: &[Category] = &[
    Category {
        name: "animal",
        members: &["cat", "dog", "bear", "tiger", "lion", "elephant", "rabbit"],
    },
    Category {
        name: "body",
        members: &["hand", "head", "eye", "foot", "face", "heart"],
    },
    Category {
        name: "nature",
        members: &["tree", "forest", "river", "mountain", "ocean", "beach"],
    },
    Category {
        name: "building",
        members: &["house", "school", "hospital", "bank", "hotel", "church"],
    },
    Category {
        name: "color",
        members: &["red", "blue", "green", "yellow", "black", "white"],
    },
    Category {
        name: "fruit",
        members: &["apple", "banana", "lemon", "orange", "kiwi"],
    },
    Category {
        name: "food",
        members: &["apple", "bread", "cake", "cheese", "meat"],
    },
    Category {
        name: "sport",
        members: &["ball", "game", "player", "team", "field"],
    },
    Category {
        name: "water",
        members: &["water", "ocean", "river", "lake", "beach", "fish"],
    },
    Category {
        name: "royal",
        members: &["king", "queen", "crown", "royal", "prince"],
    },
    Category {
        name: "war",
        members: &["soldier", "war", "gun", "battle", "army"],
    },
    Category {
        name: "space",
        members: &["moon", "star", "planet", "space", "rocket"],
    },
    Category {
        name: "music",
        members: &["song", "music", "piano", "note", "sound"],
    },
    Category {
        name: "time",
        members: &["clock", "time", "hour", "minute", "day"],
    },
    Category {
        name: "round",
        members: &["ball", "circle", "ring", "round", "wheel"],
    },
    Category {
        name: "sharp",
        members: &["knife", "sword", "needle", "point", "blade"],
    },
];

/// All categories listing `word` as a member.
pub fn categories_of(word: &str) -> impl Iterator<Item = &'static Category> {
    let w = word.to_lowercase();
    CATEGORIES
        .iter()
        .filter(move |c| c.members.iter().any(|m| *m == w))
}

/// Look up a category by name (any case).
#[must_use]
pub fn category_named(name: &str) -> Option<&'static Category> {
    let n = name.to_lowercase();
    CATEGORIES.iter().find(|c| c.name == n)
}

/// Whether two words are listed members of at least one common category.
#[must_use]
pub fn share_category(a: &str, b: &str) -> bool {
    categories_of(a).any(|c| c.contains(b))
}
