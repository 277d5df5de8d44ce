//! Common query fixtures.

/// Well-formed queries whose generic AST survives serialization.
pub const ROUND_TRIP_CORPUS: &[&str] = &[
    "t:creature",
    "t:creature c:g",
    "t:elf and c:g",
    "a b or c",
    "(t:elf or t:goblin) c:g",
    "((t:elf))",
    "-t:human cmc>=3",
    "pow>tou or loy=3",
    "o:\"draw a card\" name:/^bolt/",
    "t:elf or t:goblin or t:orc",
    "c:g\nelves: t:elf\ngoblins: t:goblin or t:orc",
    "first: t:elf\nsecond: -t:goblin c!=r",
];

/// Inputs with syntax errors that every walk must tolerate.
pub const MALFORMED_CORPUS: &[&str] = &[
    "",
    "(",
    ")",
    "t:elf (",
    "t:",
    ":",
    ">=3",
    "-",
    "- ",
    "--t:elf",
    "\"unterminated",
    "/unterminated",
    "t:elf or",
    "or",
    "and and",
    "((t:elf",
    "t:elf))",
    "-(",
    "-(t:elf)",
    "elves:",
    "elves:\ngoblins:",
    "name:\nfoo: ",
    "t:é c:",
    "cmc>=",
    "order:name order:",
];

pub const MULTI_QUERY_DOCUMENT: &str = "order:name\nq1: t:creature\nq2: t:instant order:set";
