//! Analytics command implementation

use serde::Serialize;
use tracing::info;

use crate::{
    analytics::{TypeDefense, TypeOffense},
    cli::types::AnalyticsKind,
    storage::{MoveCoverage, PokedexDatabase, TopPokemon, TypeCombination, TypeCount},
    Result,
};

use super::open_database;

/// Everything the analytics command can print; sections not requested stay empty
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_pokemon: Option<Vec<TopPokemon>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_distribution: Option<Vec<TypeCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_types: Option<Vec<TypeCombination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_coverage: Option<Vec<MoveCoverage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_attacking: Option<Vec<TypeOffense>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_defensive: Option<Vec<TypeDefense>>,
}

/// Gather the requested analytics from the database
pub fn build_report(db: &PokedexDatabase, kind: AnalyticsKind, limit: u32) -> Result<AnalyticsReport> {
    let mut report = AnalyticsReport::default();
    let take = limit as usize;

    if kind.includes_stats() {
        info!("Running stats analytics");
        report.top_pokemon = Some(db.top_pokemon_by_total_base_stats(limit)?);
        report.type_distribution = Some(db.type_distribution()?);
        report.dual_types = Some(db.dual_type_combinations()?.into_iter().take(take).collect());
        report.move_coverage = Some(db.best_move_type_coverage(limit)?);
    }

    if kind.includes_types() {
        info!("Running type analytics");
        report.best_attacking = Some(db.best_attacking_types()?.into_iter().take(take).collect());
        report.best_defensive = Some(db.best_defensive_types()?.into_iter().take(take).collect());
    }

    Ok(report)
}

/// Handle the analytics command
pub fn handle_analytics(
    kind: AnalyticsKind,
    limit: u32,
    as_json: bool,
    database_url: Option<String>,
) -> Result<()> {
    let db = open_database(database_url)?;
    let report = build_report(&db, kind, limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(top) = &report.top_pokemon {
        println!("\nTop {} Pokémon by Total Base Stats:", limit);
        for p in top {
            println!("{:>5} {:<20} {}", p.id, p.name, p.total_base_stats);
        }
    }

    if let Some(distribution) = &report.type_distribution {
        println!("\nType Distribution:");
        for t in distribution {
            println!("{:<12} {}", t.type_name, t.pokemon_count);
        }
    }

    if let Some(combinations) = &report.dual_types {
        println!("\nMost Common Type Combinations:");
        for c in combinations {
            println!("{:<20} {}", c.type_combination, c.pokemon_count);
        }
    }

    if let Some(coverage) = &report.move_coverage {
        println!("\nBest Move Type Coverage:");
        for c in coverage {
            println!(
                "{:>5} {:<20} {} types / {} moves ({:.2})",
                c.pokemon_id, c.pokemon_name, c.unique_move_types, c.total_moves, c.type_coverage_pct
            );
        }
    }

    if let Some(attacking) = &report.best_attacking {
        println!("\nBest Attacking Types:");
        for t in attacking {
            println!(
                "{:<12} super effective vs {:>2}, no effect vs {:>2}, mean {:.2}",
                t.type_name, t.super_effective_count, t.no_effect_count, t.avg_effectiveness
            );
        }
    }

    if let Some(defensive) = &report.best_defensive {
        println!("\nBest Defensive Types:");
        for t in defensive {
            println!(
                "{:<12} immune to {:>2}, resists {:>2}, weak to {:>2}, mean {:.2}",
                t.type_name, t.immunities, t.resistances, t.weaknesses, t.avg_effectiveness
            );
        }
    }

    Ok(())
}
