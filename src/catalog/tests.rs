use super::*;
use crate::parser::parse;

fn record(input: &str) -> Value {
    parse(input).expect("Failed to parse record")
}

#[test]
fn test_catalog_load_sorts_species_by_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path();
    std::fs::write(data.join("types.yml"), "- slug: fire\n  color: \"#f08030\"\n").expect("types");
    std::fs::write(data.join("moves.yml"), "- slug: ember\n  power: 40\n").expect("moves");

    let species = data.join("species");
    std::fs::create_dir(&species).expect("mkdir");
    std::fs::write(species.join("002_second.yml"), "id: 2\nslug: second\n").expect("write");
    std::fs::write(species.join("001_first.yml"), "id: 1\nslug: first\n").expect("write");

    let catalog = Catalog::load(data).expect("load");
    assert_eq!(catalog.types.len(), 1);
    assert_eq!(catalog.moves.len(), 1);
    let slugs: Vec<_> = catalog
        .species
        .iter()
        .filter_map(|s| s.get("slug").and_then(Value::as_str))
        .collect();
    assert_eq!(slugs, ["first", "second"]);
}

#[test]
fn test_catalog_load_without_moves_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path();
    std::fs::write(data.join("types.yml"), "- slug: fire\n").expect("types");
    std::fs::create_dir(data.join("species")).expect("mkdir");

    let catalog = Catalog::load(data).expect("load");
    assert!(catalog.moves.is_empty());
}

#[test]
fn test_catalog_load_rejects_mapping_types_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path();
    std::fs::write(data.join("types.yml"), "slug: fire\n").expect("types");
    std::fs::create_dir(data.join("species")).expect("mkdir");

    let err = Catalog::load(data).expect_err("must fail");
    assert!(matches!(err, DexError::FileError { .. }));
}

#[test]
fn test_to_dex_number() {
    assert_eq!(to_dex_number(&Value::Number(25.0)), Some(25));
    assert_eq!(to_dex_number(&Value::String("25".into())), Some(25));
    assert_eq!(to_dex_number(&Value::String("x".into())), None);
    assert_eq!(to_dex_number(&Value::Number(1.5)), None);
    assert_eq!(to_dex_number(&Value::Null), None);
}

#[test]
fn test_pad_species_fills_gaps() {
    let list = vec![record("id: 1\nslug: a\n"), record("id: 3\nslug: c\n")];
    let padded = pad_species(list);
    assert_eq!(padded.len(), 3);
    assert_eq!(padded[0].get("slug"), Some(&Value::String("a".into())));
    assert_eq!(padded[1].get("id"), Some(&Value::Number(2.0)));
    assert_eq!(padded[1].get("placeholder"), Some(&Value::Bool(true)));
    assert_eq!(padded[2].get("slug"), Some(&Value::String("c".into())));
}

#[test]
fn test_pad_species_empty_list() {
    assert!(pad_species(Vec::new()).is_empty());
}

#[test]
fn test_name_index_prefers_localized_name() {
    let list = vec![
        record("id: 1\nslug: a\nname:\n  de: Erstes\n"),
        record("id: 2\nname: Plain\n"),
        record("slug: no-id\n"),
    ];
    let index = name_index(&list);
    assert_eq!(index.len(), 2);
    assert_eq!(index[&1].name, "Erstes");
    assert_eq!(index[&1].slug.as_deref(), Some("a"));
    assert_eq!(index[&2].name, "Plain");
    assert_eq!(index[&2].slug, None);
}

#[test]
fn test_resolve_relations_adds_names_and_slugs() {
    let list = vec![
        record("id: 1\nslug: seedling\nname:\n  de: Keimling\nevolutions:\n  - target: 2\n    condition: Level 16\n"),
        record("id: 2\nslug: sprout\nname:\n  de: Spross\nevolves_from: 1\nevolutions: []\n"),
    ];
    let index = name_index(&list);
    let resolved = resolve_relations(list, &index);

    let first_evo = resolved[0]
        .get("evolutions")
        .and_then(Value::as_list)
        .and_then(|l| l.first())
        .expect("resolved evolution");
    assert_eq!(first_evo.get("target_id"), Some(&Value::Number(2.0)));
    assert_eq!(first_evo.get("target_name"), Some(&Value::String("Spross".into())));
    assert_eq!(first_evo.get("target_slug"), Some(&Value::String("sprout".into())));
    assert_eq!(first_evo.get("condition"), Some(&Value::String("Level 16".into())));

    assert_eq!(
        resolved[1].get("evolves_from_name"),
        Some(&Value::String("Keimling".into()))
    );
    assert_eq!(
        resolved[1].get("evolves_from_slug"),
        Some(&Value::String("seedling".into()))
    );
}

#[test]
fn test_resolve_relations_unknown_target_keeps_marker() {
    let list = vec![record("id: 1\nslug: a\nevolutions:\n  - target: 99\n")];
    let index = name_index(&list);
    let resolved = resolve_relations(list, &index);

    let evo = resolved[0]
        .get("evolutions")
        .and_then(Value::as_list)
        .and_then(|l| l.first())
        .expect("entry");
    assert_eq!(evo.get("target_id"), Some(&Value::Number(99.0)));
    assert_eq!(evo.get("target_name"), Some(&Value::String("???".into())));
    assert_eq!(evo.get("target_slug"), None);
}

#[test]
fn test_resolve_relations_accepts_bare_id_entries() {
    let list = vec![
        record("id: 1\nslug: a\nevolutions:\n  - 2\n"),
        record("id: 2\nslug: b\nname:\n  de: Zwei\n"),
    ];
    let index = name_index(&list);
    let resolved = resolve_relations(list, &index);

    let evo = resolved[0]
        .get("evolutions")
        .and_then(Value::as_list)
        .and_then(|l| l.first())
        .expect("entry");
    assert_eq!(evo.get("target_id"), Some(&Value::Number(2.0)));
    assert_eq!(evo.get("target_name"), Some(&Value::String("Zwei".into())));
    assert_eq!(evo.get("condition"), None);
}

#[test]
fn test_resolve_relations_skips_placeholders() {
    let list = vec![record("id: 1\nslug: a\n"), record("id: 3\nslug: c\n")];
    let index = name_index(&list);
    let resolved = resolve_relations(pad_species(list), &index);
    assert_eq!(resolved[1].get("placeholder"), Some(&Value::Bool(true)));
    assert_eq!(resolved[1].get("evolutions"), None);
}

#[test]
fn test_attach_signature_moves() {
    let moves = vec![record("slug: ember\npower: 40\n")];
    let list = vec![
        record("id: 1\nslug: a\nsignature_move: ember\n"),
        record("id: 2\nslug: b\nsignature_move: unknown\n"),
    ];
    let attached = attach_signature_moves(list, &moves);

    let data = attached[0].get("signature_move_data").expect("joined");
    assert_eq!(data.get("power"), Some(&Value::Number(40.0)));
    assert_eq!(attached[1].get("signature_move_data"), Some(&Value::Null));
}
