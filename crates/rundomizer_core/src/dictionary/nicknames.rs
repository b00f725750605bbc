//! Built-in nickname fragments.

/// Leading adjectives.
pub const ADJECTIVES: &[&str] = &[
    "Swift", "Silent", "Brave", "Dark", "Lucky", "Crazy", "Mighty", "Shadow",
    "Iron", "Golden", "Frozen", "Wild", "Cosmic", "Neon", "Rapid", "Clever",
    "Savage", "Mystic", "Atomic", "Lazy", "Sneaky", "Epic", "Turbo", "Pixel",
];

/// Nouns following the adjective.
pub const NOUNS: &[&str] = &[
    "Wolf", "Tiger", "Falcon", "Panda", "Dragon", "Ninja", "Raven", "Fox",
    "Hunter", "Knight", "Wizard", "Ghost", "Rider", "Storm", "Viper", "Bear",
    "Phoenix", "Pirate", "Samurai", "Comet", "Badger", "Owl", "Shark", "Yeti",
];

/// Numeric suffixes.
pub const NUMBERS: &[&str] = &[
    "1", "7", "13", "21", "42", "69", "77", "99", "100", "228", "404", "777",
    "1337", "2000", "2024", "9000",
];
