use std::fs;
use std::path::{Path, PathBuf};

use game_content::ContentFactory;
use game_core::{ContentError, ContentTables, GameConfig, LootRoll};

fn forest_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/forest")
}

/// Copies the forest pack into a scratch directory for mutation.
fn scratch_forest() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(forest_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    dir
}

#[test]
fn forest_directory_loads_the_classic_content() {
    let pack = ContentFactory::new(forest_dir()).load().unwrap();
    assert_eq!(pack.tables, ContentTables::forest());
    assert_eq!(pack.config, GameConfig::default());
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = scratch_forest();
    fs::remove_file(dir.path().join("config.toml")).unwrap();

    let pack = ContentFactory::new(dir.path()).load().unwrap();
    assert_eq!(pack.config, GameConfig::default());
}

#[test]
fn config_overrides_are_applied() {
    let dir = scratch_forest();
    fs::write(
        dir.path().join("config.toml"),
        "rest_heal = 3\nloot_roll = \"species\"\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.rest_heal, 3);
    assert_eq!(config.loot_roll, LootRoll::Species);
    assert_eq!(config.crit_multiplier, GameConfig::DEFAULT_CRIT_MULTIPLIER);
}

#[test]
fn missing_table_file_names_the_path() {
    let dir = scratch_forest();
    fs::remove_file(dir.path().join("species.ron")).unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();
    assert!(format!("{err:#}").contains("species.ron"), "{err:#}");
}

#[test]
fn malformed_file_names_the_path() {
    let dir = scratch_forest();
    fs::write(dir.path().join("items.ron"), "(items: [(name: \"Apple\")])").unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("items.ron"), "{message}");
    assert!(message.contains("item catalog"), "{message}");
}

#[test]
fn inconsistent_tables_surface_content_errors() {
    let dir = scratch_forest();
    fs::write(
        dir.path().join("tables.ron"),
        r#"(
            spawn: [(name: "Dragon", weight: 1)],
            loot: [
                (id: 1, entries: [(name: "Apple", weight: 1)]),
                (id: 2, entries: [(name: "Potion", weight: 1)]),
            ],
        )"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::UnknownSpecies("Dragon".into()))
    );
}
