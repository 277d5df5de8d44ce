//! Static vocabularies that ship with the crate.
//!
//! These are values the search API accepts but does not publish as a
//! catalog endpoint.

pub const FORMATS: &[&str] = &[
    "standard",
    "future",
    "historic",
    "timeless",
    "gladiator",
    "pioneer",
    "explorer",
    "modern",
    "legacy",
    "pauper",
    "vintage",
    "penny",
    "commander",
    "oathbreaker",
    "standardbrawl",
    "brawl",
    "alchemy",
    "paupercommander",
    "duel",
    "oldschool",
    "premodern",
    "predh",
];

pub const RARITIES: &[&str] = &["common", "uncommon", "rare", "special", "mythic", "bonus"];

pub const COLORS: &[&str] = &[
    "w", "u", "b", "r", "g", "c", "m", "white", "blue", "black", "red", "green", "colorless",
    "multicolor", "azorius", "dimir", "rakdos", "gruul", "selesnya", "orzhov", "izzet", "golgari",
    "boros", "simic", "bant", "esper", "grixis", "jund", "naya", "abzan", "jeskai", "sultai",
    "mardu", "temur",
];

pub const IS_VALUES: &[&str] = &[
    "split",
    "flip",
    "transform",
    "mdfc",
    "dfc",
    "meld",
    "leveler",
    "commander",
    "companion",
    "spell",
    "permanent",
    "historic",
    "party",
    "modal",
    "vanilla",
    "frenchvanilla",
    "bear",
    "funny",
    "full",
    "foil",
    "nonfoil",
    "etched",
    "glossy",
    "hires",
    "digital",
    "promo",
    "spotlight",
    "reprint",
    "unique",
    "firstprint",
    "booster",
    "reserved",
    "token",
    "fetchland",
    "shockland",
    "dual",
    "fastland",
];

pub const BORDERS: &[&str] = &["black", "white", "silver", "gold", "borderless"];

pub const FRAMES: &[&str] = &[
    "1993",
    "1997",
    "2003",
    "2015",
    "future",
    "legendary",
    "colorshifted",
    "tombstone",
    "enchantment",
    "showcase",
    "extendedart",
    "etched",
    "inverted",
];

pub const STAMPS: &[&str] = &["oval", "acorn", "triangle", "arena"];

pub const GAMES: &[&str] = &["paper", "mtgo", "arena"];

pub const PRODUCTS: &[&str] = &[
    "core",
    "expansion",
    "masters",
    "alchemy",
    "masterpiece",
    "arsenal",
    "from_the_vault",
    "spellbook",
    "premium_deck",
    "duel_deck",
    "draft_innovation",
    "treasure_chest",
    "commander",
    "planechase",
    "archenemy",
    "vanguard",
    "funny",
    "starter",
    "box",
    "promo",
    "token",
    "memorabilia",
    "minigame",
];

pub const CUBES: &[&str] = &[
    "arena",
    "grixis",
    "legacy",
    "chuck",
    "twisted",
    "protour",
    "uncommon",
    "april",
    "modern",
    "amaz",
    "tinkerer",
    "livethedream",
    "chromatic",
    "vintage",
];

pub const UNIQUES: &[&str] = &["cards", "prints", "art"];

pub const ORDERS: &[&str] = &[
    "name", "set", "released", "rarity", "color", "usd", "tix", "eur", "cmc", "power",
    "toughness", "edhrec", "penny", "artist", "review",
];

pub const DIRECTIONS: &[&str] = &["auto", "asc", "desc"];

pub const SUPERTYPES: &[&str] = &["basic", "legendary", "snow", "world", "ongoing"];

pub const CARD_TYPES: &[&str] = &[
    "artifact",
    "battle",
    "creature",
    "enchantment",
    "instant",
    "land",
    "planeswalker",
    "sorcery",
    "kindred",
    "conspiracy",
    "dungeon",
    "phenomenon",
    "plane",
    "scheme",
    "vanguard",
];

pub(super) fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
