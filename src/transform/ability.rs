use super::first_english;
use crate::pokeapi::types::RawAbility;
use crate::storage::models::AbilityRow;

/// English display name (falling back to the internal name), effect and
/// flavor text (empty when no English entry exists).
pub fn transform_ability(raw: &RawAbility) -> AbilityRow {
    AbilityRow {
        id: raw.id,
        name: first_english(&raw.names).unwrap_or(&raw.name).to_string(),
        effect: first_english(&raw.effect_entries).unwrap_or_default().to_string(),
        flavor_text: first_english(&raw.flavor_text_entries)
            .unwrap_or_default()
            .to_string(),
        is_main_series: raw.is_main_series,
    }
}

pub fn transform_ability_batch(raw_batch: &[RawAbility]) -> Vec<AbilityRow> {
    raw_batch.iter().map(transform_ability).collect()
}
