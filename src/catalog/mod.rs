//! Tag catalog: the vocabulary that completion draws values from.
//!
//! A [`Catalog`] is an immutable snapshot. [`Catalog::default`] carries the
//! static vocabularies; the dynamic fields (card names, artist names, type
//! lists, keywords, sets, tags) start empty and are filled from
//! already-fetched search API responses:
//!
//! ```
//! use scrycards::catalog::{Catalog, CatalogField};
//!
//! let body = r#"{"object":"catalog","total_values":2,"data":["Elf","Goblin"]}"#;
//! let catalog = Catalog::default()
//!     .with_scryfall_catalog(CatalogField::CreatureTypes, body)
//!     .unwrap();
//! assert_eq!(catalog.creature_types, vec!["Elf", "Goblin"]);
//! ```
//!
//! Consumers share a snapshot as `Arc<Catalog>` and replace it wholesale on
//! refresh.

pub mod vocabulary;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use vocabulary::owned;

/// A set as listed by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInfo {
    pub code: String,
    pub name: String,
    #[serde(default, alias = "released_at", skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
}

/// Named string sequences consulted by completion and detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub card_names: Vec<String>,
    pub artist_names: Vec<String>,

    pub card_types: Vec<String>,
    pub creature_types: Vec<String>,
    pub artifact_types: Vec<String>,
    pub enchantment_types: Vec<String>,
    pub land_types: Vec<String>,
    pub planeswalker_types: Vec<String>,
    pub battle_types: Vec<String>,
    pub spell_types: Vec<String>,
    pub supertypes: Vec<String>,

    pub powers: Vec<String>,
    pub toughnesses: Vec<String>,
    pub loyalties: Vec<String>,
    pub watermarks: Vec<String>,
    pub keyword_abilities: Vec<String>,
    pub keyword_actions: Vec<String>,
    pub ability_words: Vec<String>,

    pub formats: Vec<String>,
    pub rarities: Vec<String>,
    pub colors: Vec<String>,
    pub is_values: Vec<String>,
    pub borders: Vec<String>,
    pub frames: Vec<String>,
    pub stamps: Vec<String>,
    pub games: Vec<String>,
    pub products: Vec<String>,
    pub cubes: Vec<String>,
    pub uniques: Vec<String>,
    pub orders: Vec<String>,
    pub directions: Vec<String>,

    pub sets: Vec<SetInfo>,
    pub otags: Vec<String>,
    pub atags: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            card_names: Vec::new(),
            artist_names: Vec::new(),
            card_types: owned(vocabulary::CARD_TYPES),
            creature_types: Vec::new(),
            artifact_types: Vec::new(),
            enchantment_types: Vec::new(),
            land_types: Vec::new(),
            planeswalker_types: Vec::new(),
            battle_types: Vec::new(),
            spell_types: Vec::new(),
            supertypes: owned(vocabulary::SUPERTYPES),
            powers: Vec::new(),
            toughnesses: Vec::new(),
            loyalties: Vec::new(),
            watermarks: Vec::new(),
            keyword_abilities: Vec::new(),
            keyword_actions: Vec::new(),
            ability_words: Vec::new(),
            formats: owned(vocabulary::FORMATS),
            rarities: owned(vocabulary::RARITIES),
            colors: owned(vocabulary::COLORS),
            is_values: owned(vocabulary::IS_VALUES),
            borders: owned(vocabulary::BORDERS),
            frames: owned(vocabulary::FRAMES),
            stamps: owned(vocabulary::STAMPS),
            games: owned(vocabulary::GAMES),
            products: owned(vocabulary::PRODUCTS),
            cubes: owned(vocabulary::CUBES),
            uniques: owned(vocabulary::UNIQUES),
            orders: owned(vocabulary::ORDERS),
            directions: owned(vocabulary::DIRECTIONS),
            sets: Vec::new(),
            otags: Vec::new(),
            atags: Vec::new(),
        }
    }
}

/// Catalog endpoints of the search API, by their path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogField {
    CardNames,
    ArtistNames,
    CardTypes,
    CreatureTypes,
    ArtifactTypes,
    EnchantmentTypes,
    LandTypes,
    PlaneswalkerTypes,
    BattleTypes,
    SpellTypes,
    Supertypes,
    Powers,
    Toughnesses,
    Loyalties,
    Watermarks,
    KeywordAbilities,
    KeywordActions,
    AbilityWords,
}

impl CatalogField {
    pub const ALL: [CatalogField; 18] = [
        Self::CardNames,
        Self::ArtistNames,
        Self::CardTypes,
        Self::CreatureTypes,
        Self::ArtifactTypes,
        Self::EnchantmentTypes,
        Self::LandTypes,
        Self::PlaneswalkerTypes,
        Self::BattleTypes,
        Self::SpellTypes,
        Self::Supertypes,
        Self::Powers,
        Self::Toughnesses,
        Self::Loyalties,
        Self::Watermarks,
        Self::KeywordAbilities,
        Self::KeywordActions,
        Self::AbilityWords,
    ];

    /// Path segment under `/catalog/`.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::CardNames => "card-names",
            Self::ArtistNames => "artist-names",
            Self::CardTypes => "card-types",
            Self::CreatureTypes => "creature-types",
            Self::ArtifactTypes => "artifact-types",
            Self::EnchantmentTypes => "enchantment-types",
            Self::LandTypes => "land-types",
            Self::PlaneswalkerTypes => "planeswalker-types",
            Self::BattleTypes => "battle-types",
            Self::SpellTypes => "spell-types",
            Self::Supertypes => "supertypes",
            Self::Powers => "powers",
            Self::Toughnesses => "toughnesses",
            Self::Loyalties => "loyalties",
            Self::Watermarks => "watermarks",
            Self::KeywordAbilities => "keyword-abilities",
            Self::KeywordActions => "keyword-actions",
            Self::AbilityWords => "ability-words",
        }
    }
}

impl FromStr for CatalogField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.endpoint() == s)
            .ok_or_else(|| Error::unknown_field(s))
    }
}

#[derive(Deserialize)]
struct ScryfallCatalog {
    object: String,
    #[serde(default)]
    data: Vec<String>,
}

#[derive(Deserialize)]
struct ScryfallSetList {
    object: String,
    #[serde(default)]
    data: Vec<SetInfo>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog snapshot from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded catalog");
        Ok(catalog)
    }

    pub fn field(&self, field: CatalogField) -> &[String] {
        match field {
            CatalogField::CardNames => &self.card_names,
            CatalogField::ArtistNames => &self.artist_names,
            CatalogField::CardTypes => &self.card_types,
            CatalogField::CreatureTypes => &self.creature_types,
            CatalogField::ArtifactTypes => &self.artifact_types,
            CatalogField::EnchantmentTypes => &self.enchantment_types,
            CatalogField::LandTypes => &self.land_types,
            CatalogField::PlaneswalkerTypes => &self.planeswalker_types,
            CatalogField::BattleTypes => &self.battle_types,
            CatalogField::SpellTypes => &self.spell_types,
            CatalogField::Supertypes => &self.supertypes,
            CatalogField::Powers => &self.powers,
            CatalogField::Toughnesses => &self.toughnesses,
            CatalogField::Loyalties => &self.loyalties,
            CatalogField::Watermarks => &self.watermarks,
            CatalogField::KeywordAbilities => &self.keyword_abilities,
            CatalogField::KeywordActions => &self.keyword_actions,
            CatalogField::AbilityWords => &self.ability_words,
        }
    }

    fn field_mut(&mut self, field: CatalogField) -> &mut Vec<String> {
        match field {
            CatalogField::CardNames => &mut self.card_names,
            CatalogField::ArtistNames => &mut self.artist_names,
            CatalogField::CardTypes => &mut self.card_types,
            CatalogField::CreatureTypes => &mut self.creature_types,
            CatalogField::ArtifactTypes => &mut self.artifact_types,
            CatalogField::EnchantmentTypes => &mut self.enchantment_types,
            CatalogField::LandTypes => &mut self.land_types,
            CatalogField::PlaneswalkerTypes => &mut self.planeswalker_types,
            CatalogField::BattleTypes => &mut self.battle_types,
            CatalogField::SpellTypes => &mut self.spell_types,
            CatalogField::Supertypes => &mut self.supertypes,
            CatalogField::Powers => &mut self.powers,
            CatalogField::Toughnesses => &mut self.toughnesses,
            CatalogField::Loyalties => &mut self.loyalties,
            CatalogField::Watermarks => &mut self.watermarks,
            CatalogField::KeywordAbilities => &mut self.keyword_abilities,
            CatalogField::KeywordActions => &mut self.keyword_actions,
            CatalogField::AbilityWords => &mut self.ability_words,
        }
    }

    pub fn with_field(mut self, field: CatalogField, values: Vec<String>) -> Self {
        *self.field_mut(field) = values;
        self
    }

    /// Fill `field` from a `{"object":"catalog","data":[...]}` response body.
    pub fn with_scryfall_catalog(self, field: CatalogField, json: &str) -> Result<Self> {
        let response: ScryfallCatalog = serde_json::from_str(json)?;
        if response.object != "catalog" {
            return Err(Error::invalid_response(format!(
                "expected a catalog object, found '{}'",
                response.object
            )));
        }
        tracing::debug!(
            field = field.endpoint(),
            values = response.data.len(),
            "decoded catalog response"
        );
        Ok(self.with_field(field, response.data))
    }

    /// Fill `sets` from a `/sets` list response body.
    pub fn with_scryfall_sets(mut self, json: &str) -> Result<Self> {
        let response: ScryfallSetList = serde_json::from_str(json)?;
        if response.object != "list" {
            return Err(Error::invalid_response(format!(
                "expected a list object, found '{}'",
                response.object
            )));
        }
        tracing::debug!(sets = response.data.len(), "decoded set list");
        self.sets = response.data;
        Ok(self)
    }

    pub fn with_otags(mut self, otags: Vec<String>) -> Self {
        self.otags = otags;
        self
    }

    pub fn with_atags(mut self, atags: Vec<String>) -> Self {
        self.atags = atags;
        self
    }
}
