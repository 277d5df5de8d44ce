//! The alias table.
//!
//! Each group lists the spellings that share one kind and one piece of help
//! text. The first alias of a group is its canonical spelling.

use super::ArgKind;

pub(super) struct AliasGroup {
    pub aliases: &'static [&'static str],
    pub kind: ArgKind,
    pub detail: &'static str,
    pub info: &'static str,
}

const fn group(
    aliases: &'static [&'static str],
    kind: ArgKind,
    detail: &'static str,
    info: &'static str,
) -> AliasGroup {
    AliasGroup {
        aliases,
        kind,
        detail,
        info,
    }
}

pub(super) static ALIAS_GROUPS: &[AliasGroup] = &[
    group(
        &["o", "oracle"],
        ArgKind::Oracle,
        "Oracle text",
        "Cards whose rules text contains the words. Use quotes for phrases and ~ for the card's own name.",
    ),
    group(
        &["fo"],
        ArgKind::Oracle,
        "Full oracle text",
        "Like o: but also matches reminder text.",
    ),
    group(
        &["t", "type"],
        ArgKind::Type,
        "Type line",
        "Cards with the word anywhere in their type line: card types, subtypes and supertypes.",
    ),
    group(
        &["s", "set", "e", "edition"],
        ArgKind::Set,
        "Set",
        "Cards printed in the set with this three to five letter code.",
    ),
    group(
        &["b", "block"],
        ArgKind::Set,
        "Block",
        "Cards printed in any set of the block with this code.",
    ),
    group(
        &["in"],
        ArgKind::Set,
        "Printed in",
        "Cards that have ever been printed in the set, game or language, regardless of the print shown.",
    ),
    group(
        &["st", "product"],
        ArgKind::Product,
        "Set type",
        "Cards from sets of this product type, such as core, expansion, masters or commander.",
    ),
    group(
        &["is"],
        ArgKind::Is,
        "Card property",
        "Cards with a property such as split, transform, spell, permanent, reprint or reserved.",
    ),
    group(
        &["not"],
        ArgKind::Is,
        "Missing property",
        "Cards without the property. Equivalent to -is:.",
    ),
    group(
        &["has"],
        ArgKind::Is,
        "Card feature",
        "Cards that have a feature such as a watermark or an indicator.",
    ),
    group(
        &["pow", "power"],
        ArgKind::Power,
        "Power",
        "Compare a creature's power with a number or with tou.",
    ),
    group(
        &["tou", "toughness"],
        ArgKind::Toughness,
        "Toughness",
        "Compare a creature's toughness with a number or with pow.",
    ),
    group(
        &["pt", "powtou"],
        ArgKind::PowTou,
        "Total power and toughness",
        "Compare the sum of power and toughness with a number.",
    ),
    group(
        &["loy", "loyalty"],
        ArgKind::Loyalty,
        "Starting loyalty",
        "Compare a planeswalker's starting loyalty with a number.",
    ),
    group(
        &["m", "mana"],
        ArgKind::Mana,
        "Mana cost",
        "Cards with these symbols in their mana cost, for example {G}{U} or 2WW. Comparisons test for a subset or superset of the cost.",
    ),
    group(
        &["produces"],
        ArgKind::Mana,
        "Produces mana",
        "Cards that can produce mana of these colors.",
    ),
    group(
        &["devotion"],
        ArgKind::Mana,
        "Devotion",
        "Compare the devotion a permanent contributes, written as repeated symbols such as {G}{G}.",
    ),
    group(
        &["name"],
        ArgKind::Name,
        "Card name",
        "Cards whose name contains the words. A bare word or quoted phrase searches names too.",
    ),
    group(
        &["c", "color"],
        ArgKind::Color,
        "Color",
        "Compare a card's colors, given as letters (wubrg), full names or guild and shard names. c: means at least these colors.",
    ),
    group(
        &["id", "identity", "ci"],
        ArgKind::Color,
        "Color identity",
        "Compare a card's commander color identity. id: means at most these colors.",
    ),
    group(
        &["kw", "keyword"],
        ArgKind::Keyword,
        "Keyword",
        "Cards with the keyword ability or action, such as flying or scry.",
    ),
    group(
        &["cmc", "mv", "manavalue"],
        ArgKind::Cmc,
        "Mana value",
        "Compare a card's mana value with a number, or test is even or odd.",
    ),
    group(
        &["r", "rarity"],
        ArgKind::Rarity,
        "Rarity",
        "Compare rarity: common, uncommon, rare, special, mythic or bonus.",
    ),
    group(
        &["cube"],
        ArgKind::Cube,
        "Cube",
        "Cards in one of the well-known cube lists.",
    ),
    group(
        &["f", "format", "legal"],
        ArgKind::Format,
        "Legal in format",
        "Cards legal in the format.",
    ),
    group(
        &["banned"],
        ArgKind::Format,
        "Banned in format",
        "Cards banned in the format.",
    ),
    group(
        &["restricted"],
        ArgKind::Format,
        "Restricted in format",
        "Cards restricted in the format.",
    ),
    group(
        &["a", "artist"],
        ArgKind::Artist,
        "Artist",
        "Cards illustrated by an artist whose name contains the words.",
    ),
    group(
        &["cn", "number"],
        ArgKind::Number,
        "Collector number",
        "Compare a print's collector number with a number.",
    ),
    group(
        &["ft", "flavor"],
        ArgKind::Flavor,
        "Flavor text",
        "Cards whose flavor text contains the words.",
    ),
    group(
        &["wm", "watermark"],
        ArgKind::Watermark,
        "Watermark",
        "Cards with this watermark. Use has:watermark for any watermark.",
    ),
    group(
        &["border"],
        ArgKind::Border,
        "Border color",
        "Cards with this border: black, white, silver, gold or borderless.",
    ),
    group(
        &["frame"],
        ArgKind::Frame,
        "Frame",
        "Cards printed with this frame edition or frame effect.",
    ),
    group(
        &["stamp"],
        ArgKind::Stamp,
        "Security stamp",
        "Cards with this security stamp: oval, acorn, triangle or arena.",
    ),
    group(
        &["date"],
        ArgKind::Date,
        "Release date",
        "Compare the release date with a date in yyyy-mm-dd form or with a set code.",
    ),
    group(
        &["year"],
        ArgKind::Date,
        "Release year",
        "Compare the release year with a year.",
    ),
    group(
        &["atag", "art", "arttag"],
        ArgKind::Atag,
        "Art tag",
        "Cards whose illustration carries this community tag.",
    ),
    group(
        &["otag", "function", "oracletag"],
        ArgKind::Otag,
        "Oracle tag",
        "Cards whose gameplay function carries this community tag, such as removal or ramp.",
    ),
    group(
        &["game"],
        ArgKind::Game,
        "Game",
        "Cards available in this game: paper, mtgo or arena.",
    ),
    group(
        &["oracleid", "uuid"],
        ArgKind::Uuid,
        "Oracle id",
        "The card with this oracle UUID.",
    ),
    group(
        &["unique"],
        ArgKind::Unique,
        "Uniqueness",
        "Setting. Show one result per card, per print or per artwork.",
    ),
    group(
        &["order"],
        ArgKind::Order,
        "Sort order",
        "Setting. Field the results are sorted by.",
    ),
    group(
        &["dir", "direction"],
        ArgKind::Dir,
        "Sort direction",
        "Setting. Sort results ascending or descending.",
    ),
];
