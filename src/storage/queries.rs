//! Upserts and basic lookups
//!
//! Every write is a single `INSERT ... ON CONFLICT(<natural key>) DO UPDATE`,
//! so loading the same row twice leaves one row holding the latest values.
//! Each load method is one transaction: it commits when every row went in
//! and rolls back (then returns the error) otherwise.

use super::{models::*, schema::PokedexDatabase};
use crate::Result;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{error, info, warn};

const UPSERT_POKEMON: &str = "INSERT INTO pokemon (id, name, height, weight, base_experience, is_default, order_num)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
     ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        height = excluded.height,
        weight = excluded.weight,
        base_experience = excluded.base_experience,
        is_default = excluded.is_default,
        order_num = excluded.order_num";

const UPSERT_STAT: &str = "INSERT INTO pokemon_stats (pokemon_id, stat_name, base_value)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(pokemon_id, stat_name) DO UPDATE SET base_value = excluded.base_value";

const UPSERT_TYPE: &str = "INSERT INTO types (id, name) VALUES (?1, ?2)
     ON CONFLICT(id) DO UPDATE SET name = excluded.name";

const UPSERT_EFFECTIVENESS: &str = "INSERT INTO type_effectiveness (attack_type_id, defense_type_id, effectiveness)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(attack_type_id, defense_type_id) DO UPDATE SET effectiveness = excluded.effectiveness";

const UPSERT_POKEMON_TYPE: &str = "INSERT INTO pokemon_types (pokemon_id, type_id, slot)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(pokemon_id, type_id) DO UPDATE SET slot = excluded.slot";

const UPSERT_ABILITY: &str = "INSERT INTO abilities (id, name, effect, flavor_text, is_main_series)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        effect = excluded.effect,
        flavor_text = excluded.flavor_text,
        is_main_series = excluded.is_main_series";

const UPSERT_POKEMON_ABILITY: &str = "INSERT INTO pokemon_abilities (pokemon_id, ability_id, is_hidden, slot)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(pokemon_id, ability_id) DO UPDATE SET
        is_hidden = excluded.is_hidden,
        slot = excluded.slot";

const UPSERT_MOVE: &str = "INSERT INTO moves (id, name, power, pp, accuracy, type_id, damage_class)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
     ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        power = excluded.power,
        pp = excluded.pp,
        accuracy = excluded.accuracy,
        type_id = excluded.type_id,
        damage_class = excluded.damage_class";

const UPSERT_POKEMON_MOVE: &str = "INSERT INTO pokemon_moves (pokemon_id, move_id, level_learned_at, learn_method)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(pokemon_id, move_id, learn_method) DO UPDATE SET
        level_learned_at = excluded.level_learned_at";

/// Run `f` inside a transaction; dropping an uncommitted transaction rolls it back.
fn run_in_transaction<F>(conn: &mut Connection, f: F) -> rusqlite::Result<usize>
where
    F: FnOnce(&Transaction<'_>) -> rusqlite::Result<usize>,
{
    let tx = conn.transaction()?;
    let written = f(&tx)?;
    tx.commit()?;
    Ok(written)
}

/// Ability ids that share a display name within one batch, by name
pub(crate) fn duplicate_ability_names(rows: &[AbilityRow]) -> BTreeMap<&str, Vec<u32>> {
    let mut by_name: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for a in rows {
        by_name.entry(a.name.as_str()).or_default().push(a.id);
    }
    by_name.retain(|_, ids| ids.len() > 1);
    by_name
}

impl PokedexDatabase {
    fn in_transaction<F>(&mut self, entity: &str, f: F) -> Result<usize>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<usize>,
    {
        match run_in_transaction(&mut self.conn, f) {
            Ok(written) => {
                info!("Loaded {} {}", written, entity);
                Ok(written)
            }
            Err(e) => {
                error!("Error loading {}: {}", entity, e);
                Err(e.into())
            }
        }
    }

    /// Insert or update Pokémon by id
    pub fn load_pokemon(&mut self, rows: &[PokemonRow]) -> Result<usize> {
        self.in_transaction("Pokémon", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_POKEMON)?;
            for p in rows {
                stmt.execute(params![
                    p.id,
                    p.name,
                    p.height,
                    p.weight,
                    p.base_experience,
                    p.is_default,
                    p.order_num
                ])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update base stats by (pokemon_id, stat_name)
    pub fn load_pokemon_stats(&mut self, rows: &[StatRow]) -> Result<usize> {
        self.in_transaction("Pokémon stats", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_STAT)?;
            for s in rows {
                stmt.execute(params![s.pokemon_id, s.stat_name, s.base_value])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update types by id
    pub fn load_types(&mut self, rows: &[TypeRow]) -> Result<usize> {
        self.in_transaction("types", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_TYPE)?;
            for t in rows {
                stmt.execute(params![t.id, t.name])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update effectiveness by (attack_type_id, defense_type_id)
    pub fn load_type_effectiveness(&mut self, rows: &[TypeEffectivenessRow]) -> Result<usize> {
        self.in_transaction("type effectiveness entries", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_EFFECTIVENESS)?;
            for e in rows {
                stmt.execute(params![e.attack_type_id, e.defense_type_id, e.effectiveness])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update type assignments by (pokemon_id, type_id)
    pub fn load_pokemon_types(&mut self, rows: &[PokemonTypeRow]) -> Result<usize> {
        self.in_transaction("Pokémon-type associations", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_POKEMON_TYPE)?;
            for t in rows {
                stmt.execute(params![t.pokemon_id, t.type_id, t.slot])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update abilities by id
    ///
    /// `name` is unique too, so two ids sharing a display name make the
    /// whole batch fail.
    pub fn load_abilities(&mut self, rows: &[AbilityRow]) -> Result<usize> {
        for (name, ids) in duplicate_ability_names(rows) {
            warn!(
                "Abilities {:?} share the name {:?}; the unique name constraint will reject this batch",
                ids, name
            );
        }

        self.in_transaction("abilities", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_ABILITY)?;
            for a in rows {
                stmt.execute(params![a.id, a.name, a.effect, a.flavor_text, a.is_main_series])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update ability assignments by (pokemon_id, ability_id)
    pub fn load_pokemon_abilities(&mut self, rows: &[PokemonAbilityRow]) -> Result<usize> {
        self.in_transaction("Pokémon-ability associations", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_POKEMON_ABILITY)?;
            for a in rows {
                stmt.execute(params![a.pokemon_id, a.ability_id, a.is_hidden, a.slot])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update moves by id
    pub fn load_moves(&mut self, rows: &[MoveRow]) -> Result<usize> {
        self.in_transaction("moves", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_MOVE)?;
            for m in rows {
                stmt.execute(params![
                    m.id,
                    m.name,
                    m.power,
                    m.pp,
                    m.accuracy,
                    m.type_id,
                    m.damage_class
                ])?;
            }
            Ok(rows.len())
        })
    }

    /// Insert or update learnable moves by (pokemon_id, move_id, learn_method)
    pub fn load_pokemon_moves(&mut self, rows: &[PokemonMoveRow]) -> Result<usize> {
        self.in_transaction("Pokémon-move associations", |tx| {
            let mut stmt = tx.prepare_cached(UPSERT_POKEMON_MOVE)?;
            for m in rows {
                stmt.execute(params![m.pokemon_id, m.move_id, m.level_learned_at, m.learn_method])?;
            }
            Ok(rows.len())
        })
    }

    /// Get a single Pokémon by id
    pub fn get_pokemon(&self, pokemon_id: u32) -> Result<Option<PokemonRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, height, weight, base_experience, is_default, order_num
                 FROM pokemon WHERE id = ?",
                params![pokemon_id],
                row_to_pokemon,
            )
            .optional()?;
        Ok(row)
    }

    /// Get all base stats for a Pokémon
    pub fn get_pokemon_stats(&self, pokemon_id: u32) -> Result<Vec<StatRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT pokemon_id, stat_name, base_value FROM pokemon_stats
             WHERE pokemon_id = ? ORDER BY id",
        )?;

        let rows = stmt.query_map(params![pokemon_id], |row| {
            Ok(StatRow {
                pokemon_id: row.get(0)?,
                stat_name: row.get(1)?,
                base_value: row.get(2)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    /// Get a Pokémon's type assignments ordered by slot
    pub fn get_pokemon_types(&self, pokemon_id: u32) -> Result<Vec<PokemonTypeRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT pokemon_id, type_id, slot FROM pokemon_types
             WHERE pokemon_id = ? ORDER BY slot",
        )?;

        let rows = stmt.query_map(params![pokemon_id], |row| {
            Ok(PokemonTypeRow {
                pokemon_id: row.get(0)?,
                type_id: row.get(1)?,
                slot: row.get(2)?,
            })
        })?;

        let mut types = Vec::new();
        for row in rows {
            types.push(row?);
        }
        Ok(types)
    }

    /// Stored multiplier for one ordered pair, if any
    pub fn get_type_effectiveness(
        &self,
        attack_type_id: u32,
        defense_type_id: u32,
    ) -> Result<Option<f64>> {
        let value = self
            .conn
            .query_row(
                "SELECT effectiveness FROM type_effectiveness
                 WHERE attack_type_id = ? AND defense_type_id = ?",
                params![attack_type_id, defense_type_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn get_ability(&self, ability_id: u32) -> Result<Option<AbilityRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, effect, flavor_text, is_main_series FROM abilities WHERE id = ?",
                params![ability_id],
                |row| {
                    Ok(AbilityRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        effect: row.get(2)?,
                        flavor_text: row.get(3)?,
                        is_main_series: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    pub fn get_move(&self, move_id: u32) -> Result<Option<MoveRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, power, pp, accuracy, type_id, damage_class FROM moves WHERE id = ?",
                params![move_id],
                |row| {
                    Ok(MoveRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        power: row.get(2)?,
                        pp: row.get(3)?,
                        accuracy: row.get(4)?,
                        type_id: row.get(5)?,
                        damage_class: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Ids of every stored type
    pub fn type_ids(&self) -> Result<BTreeSet<u32>> {
        self.collect_ids("SELECT id FROM types")
    }

    /// Ids of every stored ability
    pub fn ability_ids(&self) -> Result<BTreeSet<u32>> {
        self.collect_ids("SELECT id FROM abilities")
    }

    /// Ids of every stored move
    pub fn move_ids(&self) -> Result<BTreeSet<u32>> {
        self.collect_ids("SELECT id FROM moves")
    }

    fn collect_ids(&self, sql: &str) -> Result<BTreeSet<u32>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, u32>(0))?;

        let mut ids = BTreeSet::new();
        for row in rows {
            ids.insert(row?);
        }
        Ok(ids)
    }

    /// Number of rows currently in each table
    pub fn row_counts(&self) -> Result<LoadSummary> {
        let count = |table: &str| -> Result<usize> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
            Ok(n as usize)
        };

        Ok(LoadSummary {
            pokemon: count("pokemon")?,
            stats: count("pokemon_stats")?,
            types: count("types")?,
            effectiveness: count("type_effectiveness")?,
            pokemon_types: count("pokemon_types")?,
            abilities: count("abilities")?,
            pokemon_abilities: count("pokemon_abilities")?,
            moves: count("moves")?,
            pokemon_moves: count("pokemon_moves")?,
        })
    }
}

/// Helper to convert database row to PokemonRow
pub(crate) fn row_to_pokemon(row: &Row) -> rusqlite::Result<PokemonRow> {
    Ok(PokemonRow {
        id: row.get(0)?,
        name: row.get(1)?,
        height: row.get(2)?,
        weight: row.get(3)?,
        base_experience: row.get(4)?,
        is_default: row.get(5)?,
        order_num: row.get(6)?,
    })
}
