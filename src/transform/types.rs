use tracing::info;

use super::{extract_id_from_url, TypeBatch};
use crate::pokeapi::types::{NamedResource, RawType};
use crate::storage::models::{TypeEffectivenessRow, TypeRow};
use crate::Result;

pub const NO_EFFECT: f64 = 0.0;
pub const NOT_VERY_EFFECTIVE: f64 = 0.5;
pub const SUPER_EFFECTIVE: f64 = 2.0;

pub fn transform_type(raw: &RawType) -> Result<TypeBatch> {
    let relations = &raw.damage_relations;
    let mut effectiveness = Vec::new();

    let groups: [(&[NamedResource], f64); 3] = [
        (relations.no_damage_to.as_slice(), NO_EFFECT),
        (relations.half_damage_to.as_slice(), NOT_VERY_EFFECTIVE),
        (relations.double_damage_to.as_slice(), SUPER_EFFECTIVE),
    ];

    for (targets, multiplier) in groups {
        for target in targets {
            effectiveness.push(TypeEffectivenessRow {
                attack_type_id: raw.id,
                defense_type_id: extract_id_from_url(&target.url)?,
                effectiveness: multiplier,
            });
        }
    }

    info!("Transformed data for Type: {} (ID: {})", raw.name, raw.id);

    Ok(TypeBatch {
        types: vec![TypeRow {
            id: raw.id,
            name: raw.name.clone(),
        }],
        effectiveness,
    })
}

pub fn transform_type_batch(raw_batch: &[RawType]) -> Result<TypeBatch> {
    let mut batch = TypeBatch::default();

    for raw in raw_batch {
        let transformed = transform_type(raw)?;
        batch.types.extend(transformed.types);
        batch.effectiveness.extend(transformed.effectiveness);
    }

    info!("Transformed batch of {} Types", raw_batch.len());
    Ok(batch)
}
