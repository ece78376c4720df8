//! Static profanity lexicons for the three supported language variants.
//!
//! Lists are lowercase literal words, ordered; redaction walks them in the
//! order english, arabic, arabizi. The arabizi list includes digit
//! substitutions common in Latin-script Arabic ("7" for ح, "3" for ع, etc.).

/// English slang and profanity.
pub const ENGLISH: &[&str] = &[
    "damn", "shit", "fuck", "ass", "bitch", "hell",
    "crap", "bastard", "idiot", "stupid", "moron", "dumb",
    "jerk", "screw", "suck", "piss", "bloody", "bugger",
    "dick", "asshole", "bullshit", "retard", "slut", "whore",
];

/// Formal-script Arabic profanity.
pub const ARABIC: &[&str] = &[
    "كلب", "حمار", "غبي", "خرا", "تفو",
    "لعنة", "احمق", "منيك", "شرموط", "عرص",
    "زفت", "قذر", "واطي", "حقير", "نجس",
    "كس", "طيز", "زق", "متخلف", "ابن الكلب",
    "يلعن", "خول", "عاهرة", "شرموطة",
];

/// Arabizi (Latin-transliterated Arabic) profanity, digit substitutions included.
pub const ARABIZI: &[&str] = &[
    "kelb", "7mar", "5ara", "kos", "a7a", "sharmo6",
    "sharmou6", "3ars", "zeft", "manyak", "manyik", "wes5",
    "a5a", "teez", "6eez", "zo2", "kosomak", "ya7mar",
    "ya kelb", "ibn el kalb", "kharا", "5awal", "mot5alef", "ghabi",
    "8abi",
];

/// All lexicons in redaction order.
pub const ALL: &[&[&str]] = &[ENGLISH, ARABIC, ARABIZI];
