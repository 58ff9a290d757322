//! Read-only aggregate queries and type-matchup analytics over loaded data

use super::{models::*, schema::PokedexDatabase};
use crate::analytics::{
    self, CounterRecommendation, EffectivenessMatrix, TypeDefense, TypeOffense, WeaknessEntry,
};
use crate::cli::types::PokemonId;
use crate::Result;
use rusqlite::{params, OptionalExtension};
use tracing::{info, warn};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PokedexDatabase {
    /// Pokémon with the highest sum of base stats
    pub fn top_pokemon_by_total_base_stats(&self, limit: u32) -> Result<Vec<TopPokemon>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, SUM(s.base_value) AS total_base_stats
             FROM pokemon p
             JOIN pokemon_stats s ON p.id = s.pokemon_id
             GROUP BY p.id, p.name
             ORDER BY total_base_stats DESC, p.id
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            Ok(TopPokemon {
                id: row.get(0)?,
                name: row.get(1)?,
                total_base_stats: row.get(2)?,
            })
        })?;

        let mut top = Vec::new();
        for row in rows {
            top.push(row?);
        }
        Ok(top)
    }

    /// How many Pokémon carry each type, in either slot
    pub fn type_distribution(&self) -> Result<Vec<TypeCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name, COUNT(pt.pokemon_id) AS pokemon_count
             FROM types t
             JOIN pokemon_types pt ON t.id = pt.type_id
             GROUP BY t.id, t.name
             ORDER BY pokemon_count DESC, t.name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TypeCount {
                type_name: row.get(0)?,
                pokemon_count: row.get(1)?,
            })
        })?;

        let mut distribution = Vec::new();
        for row in rows {
            distribution.push(row?);
        }
        Ok(distribution)
    }

    /// Frequency of each `primary/secondary` combination; single-typed
    /// Pokémon count under their primary type alone
    pub fn dual_type_combinations(&self) -> Result<Vec<TypeCombination>> {
        let mut stmt = self.conn.prepare(
            "SELECT t1.name || COALESCE('/' || t2.name, '') AS type_combination,
                    COUNT(*) AS pokemon_count
             FROM pokemon_types pt1
             JOIN types t1 ON pt1.type_id = t1.id
             LEFT JOIN pokemon_types pt2
                    ON pt2.pokemon_id = pt1.pokemon_id AND pt2.slot = 2
             LEFT JOIN types t2 ON pt2.type_id = t2.id
             WHERE pt1.slot = 1
             GROUP BY type_combination
             ORDER BY pokemon_count DESC, type_combination",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TypeCombination {
                type_combination: row.get(0)?,
                pokemon_count: row.get(1)?,
            })
        })?;

        let mut combinations = Vec::new();
        for row in rows {
            combinations.push(row?);
        }
        Ok(combinations)
    }

    /// Pokémon whose learnable moves span the most distinct types
    pub fn best_move_type_coverage(&self, limit: u32) -> Result<Vec<MoveCoverage>> {
        let type_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM types", [], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name,
                    COUNT(DISTINCT m.type_id) AS unique_move_types,
                    COUNT(pm.move_id) AS total_moves
             FROM pokemon p
             JOIN pokemon_moves pm ON p.id = pm.pokemon_id
             JOIN moves m ON pm.move_id = m.id
             GROUP BY p.id, p.name
             ORDER BY unique_move_types DESC, total_moves DESC, p.id
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            let unique_move_types: i64 = row.get(2)?;
            Ok(MoveCoverage {
                pokemon_id: row.get(0)?,
                pokemon_name: row.get(1)?,
                unique_move_types,
                total_moves: row.get(3)?,
                type_coverage_pct: if type_count > 0 {
                    round2(unique_move_types as f64 / type_count as f64)
                } else {
                    0.0
                },
            })
        })?;

        let mut coverage = Vec::new();
        for row in rows {
            coverage.push(row?);
        }
        Ok(coverage)
    }

    /// Every stored type name, ordered by id
    pub fn type_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM types ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// Every stored `(attack, defense, multiplier)` triple, by type name
    pub fn effectiveness_pairs(&self) -> Result<Vec<(String, String, f64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.name, d.name, te.effectiveness
             FROM type_effectiveness te
             JOIN types a ON te.attack_type_id = a.id
             JOIN types d ON te.defense_type_id = d.id
             ORDER BY a.id, d.id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })?;

        let mut pairs = Vec::new();
        for row in rows {
            pairs.push(row?);
        }
        Ok(pairs)
    }

    /// A Pokémon's type names, primary first
    pub fn pokemon_type_names(&self, pokemon_id: PokemonId) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name
             FROM pokemon_types pt
             JOIN types t ON pt.type_id = t.id
             WHERE pt.pokemon_id = ?
             ORDER BY pt.slot",
        )?;

        let rows = stmt.query_map(params![pokemon_id.as_u32()], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    pub fn pokemon_name(&self, pokemon_id: PokemonId) -> Result<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT name FROM pokemon WHERE id = ?",
                params![pokemon_id.as_u32()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(name)
    }

    /// Complete matrix over every stored type; unstored pairs are neutral
    pub fn effectiveness_matrix(&self) -> Result<EffectivenessMatrix> {
        let types = self.type_names()?;
        let pairs = self.effectiveness_pairs()?;
        info!(
            "Built effectiveness matrix over {} types from {} stored pairs",
            types.len(),
            pairs.len()
        );
        Ok(EffectivenessMatrix::from_pairs(types, &pairs))
    }

    pub fn best_attacking_types(&self) -> Result<Vec<TypeOffense>> {
        Ok(analytics::best_attacking_types(&self.effectiveness_matrix()?))
    }

    pub fn best_defensive_types(&self) -> Result<Vec<TypeDefense>> {
        Ok(analytics::best_defensive_types(&self.effectiveness_matrix()?))
    }

    /// Combined multiplier of every attacking type against one Pokémon
    pub fn pokemon_weakness_profile(&self, pokemon_id: PokemonId) -> Result<Vec<WeaknessEntry>> {
        let defending_types = self.pokemon_type_names(pokemon_id)?;
        if defending_types.is_empty() {
            warn!("No types stored for Pokémon {}", pokemon_id);
            return Ok(Vec::new());
        }

        let matrix = self.effectiveness_matrix()?;
        Ok(analytics::weakness_profile(&matrix, &defending_types))
    }

    /// Attacking types that deal more than neutral damage to a Pokémon
    pub fn recommend_counter_types(
        &self,
        pokemon_id: PokemonId,
        top_n: usize,
    ) -> Result<Vec<CounterRecommendation>> {
        let profile = self.pokemon_weakness_profile(pokemon_id)?;
        let counters = analytics::recommend_counters(&profile, top_n);
        info!(
            "Found {} counter types for Pokémon {}",
            counters.len(),
            pokemon_id
        );
        Ok(counters)
    }
}
