//! Integration tests for contact-register-core
//!
//! These tests exercise the public helpers together the way the `cr`
//! binary strings them along.

use contact_register_core::{
    config::{get_data_dir, get_last_query_path},
    error::Error,
    file_handling::{get_last_query, require_existing_file, try_create_dir, write_last_query},
    modules::get_module_files,
    query::{ensure_known_fields, parse_query_filters, QueryFilter},
};
use std::collections::HashSet;
use std::fs::File;
use tempfile::TempDir;

const CONTACT_FIELDS: &[&str] = &["name", "surname", "email", "phone", "address"];

/// Parse, validate and persist a query, then reload it from a fresh data dir
#[test]
fn test_query_round_trip_through_data_dir() {
    let root = TempDir::new().unwrap();
    let data_dir = get_data_dir(&Some(
        root.path().join("nested").join("data").display().to_string(),
    ));

    try_create_dir(&data_dir).unwrap();
    // A second start-up must not fail on the existing directory
    try_create_dir(&data_dir).unwrap();

    let filters = parse_query_filters(" name = Bob , email=bob@example.com, address=1=2 Road").unwrap();
    ensure_known_fields(&filters, CONTACT_FIELDS).unwrap();

    let last_query_path = get_last_query_path(&data_dir);
    write_last_query(&last_query_path, &filters).unwrap();

    let reloaded = get_last_query(&last_query_path).unwrap().unwrap();
    assert_eq!(
        reloaded,
        vec![
            QueryFilter::new("name", "Bob"),
            QueryFilter::new("email", "bob@example.com"),
            QueryFilter::new("address", "1=2 Road"),
        ]
    );
}

#[test]
fn test_well_formed_queries_yield_one_filter_per_segment() {
    let cases: &[(&str, &[(&str, &str)])] = &[
        ("a=1", &[("a", "1")]),
        ("a=1,b=2", &[("a", "1"), ("b", "2")]),
        ("x = y , z=w=v ,q=r", &[("x", "y"), ("z", "w=v"), ("q", "r")]),
    ];

    for (query, expected) in cases {
        let filters = parse_query_filters(query).unwrap();
        assert_eq!(filters.len(), expected.len(), "query `{query}`");
        for (filter, (field, pattern)) in filters.iter().zip(expected.iter()) {
            assert_eq!(filter.field(), *field);
            assert_eq!(filter.pattern(), *pattern);
        }
    }
}

#[test]
fn test_unknown_field_is_reported_after_parsing() {
    let filters = parse_query_filters("name=Bob,birthday=1990").unwrap();
    let result = ensure_known_fields(&filters, CONTACT_FIELDS);

    match result {
        Err(Error::UnknownQueryField(field)) => assert_eq!(field, "birthday"),
        other => panic!("expected unknown field error, got {other:?}"),
    }
}

#[test]
fn test_malformed_query_never_reaches_validation() {
    let result = parse_query_filters("name=Bob,Bob");
    match result {
        Err(Error::MalformedQuery(query)) => assert_eq!(query, "name=Bob,Bob"),
        other => panic!("expected malformed query error, got {other:?}"),
    }
}

#[test]
fn test_module_files_skip_reserved_names() {
    let dir = TempDir::new().unwrap();
    for name in ["foo.py", "bar.py", "__init__.py", "__main__.py"] {
        File::create(dir.path().join(name)).unwrap();
    }

    let files: HashSet<String> = get_module_files(dir.path().join("__init__.py"))
        .unwrap()
        .into_iter()
        .collect();

    let expected: HashSet<String> = ["foo", "bar"].iter().map(ToString::to_string).collect();
    assert_eq!(files, expected);
}

#[test]
fn test_import_file_must_exist() {
    let dir = TempDir::new().unwrap();
    let import_path = dir.path().join("contacts.csv");

    assert!(matches!(
        require_existing_file(&import_path),
        Err(Error::NonexistentFile(_))
    ));

    File::create(&import_path).unwrap();
    assert_eq!(require_existing_file(&import_path).unwrap(), import_path);
}

#[test]
fn test_directory_under_file_propagates_system_error() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("register.db");
    File::create(&file_path).unwrap();

    let error = try_create_dir(file_path.join("exports")).unwrap_err();
    assert_ne!(error.kind(), std::io::ErrorKind::AlreadyExists);
}
