use super::extract_id_from_url;
use crate::pokeapi::types::RawMove;
use crate::storage::models::MoveRow;
use crate::Result;

pub fn transform_move(raw: &RawMove) -> Result<MoveRow> {
    Ok(MoveRow {
        id: raw.id,
        name: raw.name.clone(),
        power: raw.power,
        pp: raw.pp,
        accuracy: raw.accuracy,
        type_id: Some(extract_id_from_url(&raw.kind.url)?),
        damage_class: raw.damage_class.as_ref().map(|dc| dc.name.clone()),
    })
}

pub fn transform_move_batch(raw_batch: &[RawMove]) -> Result<Vec<MoveRow>> {
    raw_batch.iter().map(transform_move).collect()
}
