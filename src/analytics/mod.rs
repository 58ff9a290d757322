//! Type-matchup analytics over the effectiveness matrix.
//!
//! Everything here is pure: the storage layer reads the stored pairs and
//! type names, builds an [`EffectivenessMatrix`], and hands it to these
//! functions.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multiplier for a pair with no stored row.
pub const NEUTRAL: f64 = 1.0;

/// Complete attack × defense table over a fixed, ordered set of types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessMatrix {
    types: Vec<String>,
    /// `values[attack][defense]`, indexed like `types`.
    values: Vec<Vec<f64>>,
}

impl EffectivenessMatrix {
    /// Build the matrix for `types`, filling every pair not present in
    /// `pairs` with [`NEUTRAL`]. Pairs naming an unknown type are ignored.
    pub fn from_pairs(types: Vec<String>, pairs: &[(String, String, f64)]) -> Self {
        let index: HashMap<&str, usize> = types
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut values = vec![vec![NEUTRAL; types.len()]; types.len()];
        for (attack, defense, effectiveness) in pairs {
            if let (Some(&a), Some(&d)) = (index.get(attack.as_str()), index.get(defense.as_str())) {
                values[a][d] = *effectiveness;
            }
        }

        Self { types, values }
    }

    /// Type names in row/column order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn position(&self, type_name: &str) -> Option<usize> {
        self.types.iter().position(|t| t == type_name)
    }

    /// Multiplier of `attack` against `defense`; `None` if either type is unknown.
    pub fn get(&self, attack: &str, defense: &str) -> Option<f64> {
        let a = self.position(attack)?;
        let d = self.position(defense)?;
        Some(self.values[a][d])
    }

    /// Row of `attack` against every defending type.
    pub fn row(&self, attack: &str) -> Option<&[f64]> {
        self.position(attack).map(|a| self.values[a].as_slice())
    }

    /// Column of every attacking type against `defense`.
    pub fn column(&self, defense: &str) -> Option<Vec<f64>> {
        let d = self.position(defense)?;
        Some(self.values.iter().map(|row| row[d]).collect())
    }
}

/// Offensive statistics of one attacking type (a matrix row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOffense {
    pub type_name: String,
    pub avg_effectiveness: f64,
    pub super_effective_count: usize,
    pub no_effect_count: usize,
}

/// Defensive statistics of one defending type (a matrix column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefense {
    pub type_name: String,
    pub avg_effectiveness: f64,
    pub weaknesses: usize,
    pub resistances: usize,
    pub immunities: usize,
}

/// Combined multiplier of one attacking type against a Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaknessEntry {
    pub attack_type: String,
    pub effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRecommendation {
    pub type_name: String,
    pub effectiveness: f64,
    pub label: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Attacking types ranked by how many types they hit super-effectively,
/// then by mean multiplier.
pub fn best_attacking_types(matrix: &EffectivenessMatrix) -> Vec<TypeOffense> {
    let mut ranking: Vec<TypeOffense> = matrix
        .types
        .iter()
        .zip(&matrix.values)
        .map(|(type_name, row)| TypeOffense {
            type_name: type_name.clone(),
            avg_effectiveness: round2(mean(row)),
            super_effective_count: row.iter().filter(|&&v| v > NEUTRAL).count(),
            no_effect_count: row.iter().filter(|&&v| v == 0.0).count(),
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.super_effective_count
            .cmp(&a.super_effective_count)
            .then(b.avg_effectiveness.total_cmp(&a.avg_effectiveness))
    });
    ranking
}

/// Defending types ranked by immunities, then resistances, then lowest
/// mean multiplier taken.
pub fn best_defensive_types(matrix: &EffectivenessMatrix) -> Vec<TypeDefense> {
    let mut ranking: Vec<TypeDefense> = matrix
        .types
        .iter()
        .enumerate()
        .map(|(d, type_name)| {
            let column: Vec<f64> = matrix.values.iter().map(|row| row[d]).collect();
            TypeDefense {
                type_name: type_name.clone(),
                avg_effectiveness: round2(mean(&column)),
                weaknesses: column.iter().filter(|&&v| v > NEUTRAL).count(),
                resistances: column.iter().filter(|&&v| v < NEUTRAL).count(),
                immunities: column.iter().filter(|&&v| v == 0.0).count(),
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.immunities
            .cmp(&a.immunities)
            .then(b.resistances.cmp(&a.resistances))
            .then(a.avg_effectiveness.total_cmp(&b.avg_effectiveness))
    });
    ranking
}

/// Multiplier of every attacking type against a Pokémon with
/// `defending_types`, highest first.
///
/// Dual types compose multiplicatively, so a 2× and a 2× make 4× and a 0×
/// anywhere makes 0×. Defending types the matrix does not know are skipped;
/// no defending types at all yields an empty profile.
pub fn weakness_profile(
    matrix: &EffectivenessMatrix,
    defending_types: &[String],
) -> Vec<WeaknessEntry> {
    let columns: Vec<usize> = defending_types
        .iter()
        .filter_map(|t| matrix.position(t))
        .collect();

    if columns.is_empty() {
        return Vec::new();
    }

    let mut profile: Vec<WeaknessEntry> = matrix
        .types
        .iter()
        .zip(&matrix.values)
        .map(|(attack_type, row)| WeaknessEntry {
            attack_type: attack_type.clone(),
            effectiveness: columns.iter().map(|&d| row[d]).product(),
        })
        .collect();

    profile.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));
    profile
}

/// Human label for a counter's multiplier.
pub fn effectiveness_label(effectiveness: f64) -> String {
    if effectiveness >= 4.0 {
        "4× (extremely effective)".to_string()
    } else if effectiveness >= 2.0 {
        "2× (super effective)".to_string()
    } else {
        format!("{}× (effective)", effectiveness)
    }
}

/// The `top_n` attacking types that deal more than neutral damage,
/// strongest first.
pub fn recommend_counters(profile: &[WeaknessEntry], top_n: usize) -> Vec<CounterRecommendation> {
    let mut counters: Vec<&WeaknessEntry> =
        profile.iter().filter(|e| e.effectiveness > NEUTRAL).collect();
    counters.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));

    counters
        .into_iter()
        .take(top_n)
        .map(|e| CounterRecommendation {
            type_name: e.attack_type.clone(),
            effectiveness: e.effectiveness,
            label: effectiveness_label(e.effectiveness),
        })
        .collect()
}
