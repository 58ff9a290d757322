//! Raw PokéAPI payloads.
//!
//! Only the fields the transformers read are modelled; everything else in
//! the response is ignored. A payload missing one of these fields fails to
//! deserialize.

use serde::{Deserialize, Serialize};


/// `{ "name": ..., "url": ... }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated list endpoint (`pokemon`, `type`, `ability`, ...).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceList {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub is_default: bool,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<RawMoveEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawType {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// Offensive relations of a type. The `*_from` halves are not needed: every
/// pair is covered by the attacking type's own `*_to` lists.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAbility {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_main_series: bool,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EffectEntry {
    pub effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMove {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
}

/// Per-language text entry.
pub trait Localized {
    fn language(&self) -> &str;
    fn text(&self) -> &str;
}

impl Localized for EffectEntry {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.effect
    }
}

impl Localized for FlavorTextEntry {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.flavor_text
    }
}

impl Localized for LocalizedName {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.name
    }
}
