//! Argument type registry.
//!
//! Static lookup from the surface spelling of a tag's argument (an alias
//! such as `o`, `oracle` or `fo`) to what it means:
//!
//! - [`ArgKind`] - the canonical filter dimension
//! - [`OperatorClass`] - which operators are valid for the kind
//! - [`SettingKey`] - set for the three tags that configure the query
//!   (`order`, `dir`, `unique`) instead of filtering it
//! - [`DetailNode`] - short label and long-form help text
//!
//! Lookups are case-insensitive and return `None` for unrecognized aliases.

mod completion;
mod table;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::parser::SyntaxKind;
use table::{ALIAS_GROUPS, AliasGroup};

pub use completion::{CompletionInfo, CompletionOptions, TYPE_SECTIONS, completion_info_from_arg};

/// The canonical filter dimension an argument resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Oracle,
    Type,
    Set,
    Product,
    Is,
    Power,
    Toughness,
    PowTou,
    Loyalty,
    Mana,
    Name,
    Color,
    Keyword,
    Cmc,
    Rarity,
    Cube,
    Format,
    Artist,
    Number,
    Flavor,
    Watermark,
    Border,
    Frame,
    Stamp,
    Date,
    Atag,
    Otag,
    Game,
    Uuid,
    Unique,
    Order,
    Dir,
}

impl ArgKind {
    pub const ALL: [ArgKind; 32] = [
        Self::Oracle,
        Self::Type,
        Self::Set,
        Self::Product,
        Self::Is,
        Self::Power,
        Self::Toughness,
        Self::PowTou,
        Self::Loyalty,
        Self::Mana,
        Self::Name,
        Self::Color,
        Self::Keyword,
        Self::Cmc,
        Self::Rarity,
        Self::Cube,
        Self::Format,
        Self::Artist,
        Self::Number,
        Self::Flavor,
        Self::Watermark,
        Self::Border,
        Self::Frame,
        Self::Stamp,
        Self::Date,
        Self::Atag,
        Self::Otag,
        Self::Game,
        Self::Uuid,
        Self::Unique,
        Self::Order,
        Self::Dir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::Type => "type",
            Self::Set => "set",
            Self::Product => "product",
            Self::Is => "is",
            Self::Power => "power",
            Self::Toughness => "toughness",
            Self::PowTou => "powtou",
            Self::Loyalty => "loyalty",
            Self::Mana => "mana",
            Self::Name => "name",
            Self::Color => "color",
            Self::Keyword => "keyword",
            Self::Cmc => "cmc",
            Self::Rarity => "rarity",
            Self::Cube => "cube",
            Self::Format => "format",
            Self::Artist => "artist",
            Self::Number => "number",
            Self::Flavor => "flavor",
            Self::Watermark => "watermark",
            Self::Border => "border",
            Self::Frame => "frame",
            Self::Stamp => "stamp",
            Self::Date => "date",
            Self::Atag => "atag",
            Self::Otag => "otag",
            Self::Game => "game",
            Self::Uuid => "uuid",
            Self::Unique => "unique",
            Self::Order => "order",
            Self::Dir => "dir",
        }
    }

    pub fn operator_class(self) -> OperatorClass {
        match self {
            Self::Unique | Self::Order | Self::Dir => OperatorClass::Assign,
            Self::Power
            | Self::Toughness
            | Self::PowTou
            | Self::Loyalty
            | Self::Mana
            | Self::Color
            | Self::Cmc
            | Self::Rarity
            | Self::Number
            | Self::Date => OperatorClass::All,
            _ => OperatorClass::Assert,
        }
    }

    pub fn setting_key(self) -> Option<SettingKey> {
        match self {
            Self::Unique => Some(SettingKey::Unique),
            Self::Order => Some(SettingKey::Order),
            Self::Dir => Some(SettingKey::Dir),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operators are semantically valid for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorClass {
    /// `:` and `=` only; the tag sets a value.
    Assign,
    /// `:` and `=` only; the tag tests membership.
    Assert,
    /// Every comparison operator.
    All,
}

impl OperatorClass {
    /// Whether the operator token kind is valid for this class.
    pub fn allows(self, op: SyntaxKind) -> bool {
        match self {
            Self::Assign | Self::Assert => matches!(op, SyntaxKind::COLON | SyntaxKind::EQ),
            Self::All => op.is_operator(),
        }
    }

    /// Operator spellings valid for this class, most common first.
    pub fn operators(self) -> &'static [&'static str] {
        match self {
            Self::Assign | Self::Assert => &[":", "="],
            Self::All => &[":", "=", "!=", "<", ">", "<=", ">="],
        }
    }
}

/// Query-wide settings a tag can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKey {
    Order,
    Dir,
    Unique,
}

impl SettingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Dir => "dir",
            Self::Unique => "unique",
        }
    }
}

/// Help text attached to an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DetailNode {
    pub detail: &'static str,
    pub info: &'static str,
}

/// What the engine needs to know about an alias beyond its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArgNode {
    pub operator_class: OperatorClass,
    pub setting: Option<SettingKey>,
}

/// Alias (lowercase) → group index.
static ALIAS_INDEX: LazyLock<FxHashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for (idx, group) in ALIAS_GROUPS.iter().enumerate() {
        for alias in group.aliases {
            index.insert(*alias, idx);
        }
    }
    index
});

fn lookup(alias: &str) -> Option<&'static AliasGroup> {
    let idx = match ALIAS_INDEX.get(alias) {
        Some(idx) => *idx,
        None => *ALIAS_INDEX.get(alias.to_ascii_lowercase().as_str())?,
    };
    ALIAS_GROUPS.get(idx)
}

/// Whether `alias` is a recognized argument spelling.
pub fn is_argument(alias: &str) -> bool {
    lookup(alias).is_some()
}

pub fn arg_type_from_arg(alias: &str) -> Option<ArgKind> {
    lookup(alias).map(|g| g.kind)
}

pub fn detail_from_arg(alias: &str) -> Option<DetailNode> {
    lookup(alias).map(|g| DetailNode {
        detail: g.detail,
        info: g.info,
    })
}

pub fn node_from_arg(alias: &str) -> Option<ArgNode> {
    lookup(alias).map(|g| ArgNode {
        operator_class: g.kind.operator_class(),
        setting: g.kind.setting_key(),
    })
}

/// The setting an alias configures, if any.
pub fn setting_from_arg(alias: &str) -> Option<SettingKey> {
    node_from_arg(alias).and_then(|node| node.setting)
}

/// Every recognized alias, in table order.
pub fn all_arguments() -> impl Iterator<Item = &'static str> {
    ALIAS_GROUPS.iter().flat_map(|g| g.aliases.iter().copied())
}

/// The canonical (first) alias of each alias group with its help text.
pub fn canonical_arguments() -> impl Iterator<Item = (&'static str, DetailNode)> {
    ALIAS_GROUPS.iter().filter_map(|g| {
        g.aliases.first().map(|alias| {
            (
                *alias,
                DetailNode {
                    detail: g.detail,
                    info: g.info,
                },
            )
        })
    })
}
