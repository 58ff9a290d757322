use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn pair(attack: &str, defense: &str, value: f64) -> (String, String, f64) {
    (attack.to_string(), defense.to_string(), value)
}

/// Small slice of the real chart: normal, fire, water, grass, electric, ground, flying.
fn sample_matrix() -> EffectivenessMatrix {
    let types = names(&["normal", "fire", "water", "grass", "electric", "ground", "flying"]);
    let pairs = vec![
        pair("fire", "fire", 0.5),
        pair("fire", "water", 0.5),
        pair("fire", "grass", 2.0),
        pair("water", "fire", 2.0),
        pair("water", "water", 0.5),
        pair("water", "grass", 0.5),
        pair("water", "ground", 2.0),
        pair("grass", "fire", 0.5),
        pair("grass", "water", 2.0),
        pair("grass", "grass", 0.5),
        pair("grass", "ground", 2.0),
        pair("grass", "flying", 0.5),
        pair("electric", "water", 2.0),
        pair("electric", "grass", 0.5),
        pair("electric", "electric", 0.5),
        pair("electric", "ground", 0.0),
        pair("electric", "flying", 2.0),
        pair("ground", "fire", 2.0),
        pair("ground", "grass", 0.5),
        pair("ground", "electric", 2.0),
        pair("ground", "flying", 0.0),
        pair("flying", "grass", 2.0),
        pair("flying", "electric", 0.5),
    ];
    EffectivenessMatrix::from_pairs(types, &pairs)
}

#[test]
fn test_matrix_defaults_missing_pairs_to_neutral() {
    let matrix = sample_matrix();

    for attack in matrix.types() {
        for defense in matrix.types() {
            assert!(matrix.get(attack, defense).is_some());
        }
    }
    assert_eq!(matrix.get("normal", "fire"), Some(1.0));
    assert_eq!(matrix.get("fire", "normal"), Some(1.0));
    assert_eq!(matrix.get("fire", "grass"), Some(2.0));
    assert_eq!(matrix.get("electric", "ground"), Some(0.0));
    assert_eq!(matrix.get("fire", "dragon"), None);
}

#[test]
fn test_matrix_ignores_unknown_types_in_pairs() {
    let matrix = EffectivenessMatrix::from_pairs(
        names(&["fire", "water"]),
        &[pair("fire", "steel", 2.0), pair("water", "fire", 2.0)],
    );

    assert_eq!(matrix.types().len(), 2);
    assert_eq!(matrix.row("fire"), Some([1.0, 1.0].as_slice()));
    assert_eq!(matrix.column("fire"), Some(vec![1.0, 2.0]));
}

#[test]
fn test_empty_matrix() {
    let matrix = EffectivenessMatrix::from_pairs(Vec::new(), &[]);

    assert!(matrix.is_empty());
    assert!(best_attacking_types(&matrix).is_empty());
    assert!(best_defensive_types(&matrix).is_empty());
    assert!(weakness_profile(&matrix, &names(&["fire"])).is_empty());
}

#[test]
fn test_best_attacking_types() {
    let ranking = best_attacking_types(&sample_matrix());

    assert_eq!(ranking.len(), 7);
    // water, grass, ground, electric each hit 2 types super-effectively
    let top: Vec<&str> = ranking.iter().take(4).map(|t| t.type_name.as_str()).collect();
    assert_eq!(top, vec!["water", "grass", "ground", "electric"]);
    assert_eq!(ranking[0].avg_effectiveness, 1.14);

    let ground = &ranking[2];
    assert_eq!(ground.super_effective_count, 2);
    assert_eq!(ground.no_effect_count, 1);
    assert_eq!(ground.avg_effectiveness, 1.07);

    let normal = ranking.iter().find(|t| t.type_name == "normal").unwrap();
    assert_eq!(normal.super_effective_count, 0);
    assert_eq!(normal.avg_effectiveness, 1.0);
}

#[test]
fn test_best_defensive_types() {
    let ranking = best_defensive_types(&sample_matrix());

    assert_eq!(ranking.len(), 7);
    // ground and flying both have one immunity; ground resists less
    assert_eq!(ranking[0].type_name, "flying");
    assert_eq!(ranking[0].immunities, 1);
    assert_eq!(ranking[0].resistances, 2);
    assert_eq!(ranking[1].type_name, "ground");
    assert_eq!(ranking[1].immunities, 1);
    assert_eq!(ranking[1].resistances, 1);
    assert_eq!(ranking[1].weaknesses, 2);

    let grass = ranking.iter().find(|t| t.type_name == "grass").unwrap();
    assert_eq!(grass.weaknesses, 2);
    assert_eq!(grass.resistances, 4);
    assert_eq!(grass.immunities, 0);
}

#[test]
fn test_weakness_profile_single_type() {
    let matrix = sample_matrix();
    let profile = weakness_profile(&matrix, &names(&["water"]));

    assert_eq!(profile.len(), 7);
    assert_eq!(profile[0].effectiveness, 2.0);
    for entry in &profile {
        assert_eq!(
            Some(entry.effectiveness),
            matrix.get(&entry.attack_type, "water")
        );
    }
}

#[test]
fn test_weakness_profile_is_multiplicative() {
    let matrix = sample_matrix();
    let dual = names(&["water", "ground"]);
    let profile = weakness_profile(&matrix, &dual);

    for entry in &profile {
        let expected = matrix.get(&entry.attack_type, "water").unwrap()
            * matrix.get(&entry.attack_type, "ground").unwrap();
        assert_eq!(entry.effectiveness, expected);
    }

    // water/ground: grass 4×, electric 0×
    assert_eq!(profile[0].attack_type, "grass");
    assert_eq!(profile[0].effectiveness, 4.0);
    let electric = profile.iter().find(|e| e.attack_type == "electric").unwrap();
    assert_eq!(electric.effectiveness, 0.0);
}

#[test]
fn test_weakness_profile_without_types() {
    let matrix = sample_matrix();

    assert!(weakness_profile(&matrix, &[]).is_empty());
    assert!(weakness_profile(&matrix, &names(&["shadow"])).is_empty());
}

#[test]
fn test_weakness_profile_skips_unknown_types() {
    let matrix = sample_matrix();

    assert_eq!(
        weakness_profile(&matrix, &names(&["water", "shadow"])),
        weakness_profile(&matrix, &names(&["water"]))
    );
}

#[test]
fn test_recommend_counters() {
    let profile = weakness_profile(&sample_matrix(), &names(&["water", "flying"]));
    let counters = recommend_counters(&profile, 5);

    // water/flying: electric 4×, everything else at most neutral
    assert_eq!(
        counters,
        vec![CounterRecommendation {
            type_name: "electric".to_string(),
            effectiveness: 4.0,
            label: "4× (extremely effective)".to_string(),
        }]
    );
}

#[test]
fn test_recommend_counters_filters_sorts_and_truncates() {
    let profile = vec![
        WeaknessEntry { attack_type: "a".to_string(), effectiveness: 1.0 },
        WeaknessEntry { attack_type: "b".to_string(), effectiveness: 2.0 },
        WeaknessEntry { attack_type: "c".to_string(), effectiveness: 0.5 },
        WeaknessEntry { attack_type: "d".to_string(), effectiveness: 4.0 },
        WeaknessEntry { attack_type: "e".to_string(), effectiveness: 2.0 },
    ];

    let all = recommend_counters(&profile, 10);
    let picked: Vec<&str> = all.iter().map(|c| c.type_name.as_str()).collect();
    assert_eq!(picked, vec!["d", "b", "e"]);
    assert!(all.iter().all(|c| c.effectiveness > 1.0));

    let top_two = recommend_counters(&profile, 2);
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[1].label, "2× (super effective)");

    assert!(recommend_counters(&profile, 0).is_empty());
}

#[test]
fn test_effectiveness_label() {
    assert_eq!(effectiveness_label(4.0), "4× (extremely effective)");
    assert_eq!(effectiveness_label(2.0), "2× (super effective)");
    assert_eq!(effectiveness_label(1.5), "1.5× (effective)");
}
