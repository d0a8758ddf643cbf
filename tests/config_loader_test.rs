use gradecalc::config::{
    ancestor_config_paths, first_valid_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
use gradecalc::Error;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn full_document_parses() {
    let config = parse_and_validate_config(indoc! {r#"
        [weights]
        exams = 0.3
        oral = 0.6
        presentation = 0.1

        [display]
        placeholder = "n/a"
    "#})
    .unwrap();

    assert_eq!(config.weights.exams, 0.3);
    assert_eq!(config.weights.oral, 0.6);
    assert_eq!(config.display.placeholder, "n/a");
}

#[test]
fn partial_document_keeps_other_defaults() {
    let config = parse_and_validate_config(indoc! {r#"
        [weights]
        oral = 0.7
    "#})
    .unwrap();

    assert_eq!(config.weights.oral, 0.7);
    assert_eq!(config.weights.exams, 0.4);
    assert_eq!(config.weights.presentation, 0.1);
    assert_eq!(config.display.placeholder, "-");
}

#[test]
fn empty_placeholder_is_rejected() {
    let err = parse_and_validate_config(indoc! {r#"
        [display]
        placeholder = "  "
    "#})
    .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn discovers_config_in_parent_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [weights]
            exams = 0.5
            oral = 0.5
            presentation = 0.2
        "#},
    )
    .unwrap();
    let nested = root.path().join("klasse5").join("halbjahr1");
    fs::create_dir_all(&nested).unwrap();

    let config = first_valid_config(&ancestor_config_paths(nested)).unwrap();
    assert_eq!(config.weights.exams, 0.5);
    assert_eq!(config.weights.presentation, 0.2);
}

#[test]
fn nearest_config_wins() {
    let root = TempDir::new().unwrap();
    let child = root.path().join("child");
    fs::create_dir_all(&child).unwrap();
    fs::write(root.path().join(CONFIG_FILE_NAME), "[weights]\noral = 0.2\n").unwrap();
    fs::write(child.join(CONFIG_FILE_NAME), "[weights]\noral = 0.9\n").unwrap();

    let config = first_valid_config(&ancestor_config_paths(child)).unwrap();
    assert_eq!(config.weights.oral, 0.9);
}

#[test]
fn invalid_discovered_config_is_skipped() {
    let root = TempDir::new().unwrap();
    let invalid = root.path().join("child").join(CONFIG_FILE_NAME);
    fs::create_dir_all(invalid.parent().unwrap()).unwrap();
    fs::write(&invalid, "[weights]\nexams = 3.0\n").unwrap();

    assert_eq!(first_valid_config(&[invalid.clone()]), None);

    let valid = root.path().join(CONFIG_FILE_NAME);
    fs::write(&valid, "[weights]\nexams = 0.3\n").unwrap();
    let config = first_valid_config(&[invalid, valid]).unwrap();
    assert_eq!(config.weights.exams, 0.3);
}

#[test]
fn missing_candidates_yield_nothing() {
    let root = TempDir::new().unwrap();
    let paths = vec![
        root.path().join(CONFIG_FILE_NAME),
        root.path().join("gradecalc").join("config.toml"),
    ];
    assert_eq!(first_valid_config(&paths), None);
}

#[test]
fn explicit_invalid_config_is_an_error() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("grades.toml");
    fs::write(&path, "[weights]\nexams = 3.0\n").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn explicit_valid_config_loads() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("grades.toml");
    fs::write(&path, "[display]\nplaceholder = \"?\"\n").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.display.placeholder, "?");
}
