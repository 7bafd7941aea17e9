use std::collections::HashSet;

use assert_matches::assert_matches;
use camino::Utf8Path;

use gene_model_finder::domain::Sketch;
use gene_model_finder::error::FinderError;
use gene_model_finder::models::{check_models_exist, list_model_entries};

fn sketch(id: &str) -> Sketch {
    Sketch {
        hashes: 1000,
        length: 4_000_000,
        sketch_id: id.to_string(),
        comment: String::new(),
    }
}

fn entries(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn missing_model_is_reported_by_id() {
    let models = entries(&["A", "B"]);
    let sketches = vec![sketch("A"), sketch("C")];
    let err = check_models_exist(&models, &sketches, Utf8Path::new("data/models")).unwrap_err();
    assert_matches!(err, FinderError::MissingModels { missing, .. } => {
        assert_eq!(missing, vec!["C".to_string()]);
    });
}

#[test]
fn complete_models_pass_silently() {
    let models = entries(&["A", "C"]);
    let sketches = vec![sketch("A"), sketch("C")];
    check_models_exist(&models, &sketches, Utf8Path::new("data/models")).unwrap();
}

#[test]
fn missing_list_is_truncated_to_ten_in_sketch_order() {
    let models = HashSet::new();
    let sketches: Vec<Sketch> = (0..12).map(|i| sketch(&format!("ref{i:02}"))).collect();
    let err = check_models_exist(&models, &sketches, Utf8Path::new("data/models")).unwrap_err();
    assert_matches!(err, FinderError::MissingModels { missing, .. } => {
        assert_eq!(missing.len(), 10);
        assert_eq!(missing[0], "ref00");
        assert_eq!(missing[9], "ref09");
    });
}

#[test]
fn error_message_names_the_models_path() {
    let models = entries(&[]);
    let sketches = vec![sketch("GCF_000005845.2")];
    let err = check_models_exist(&models, &sketches, Utf8Path::new("data/models")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("data/models"));
    assert!(message.contains("GCF_000005845.2"));
}

#[test]
fn directory_entry_names_become_model_ids() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("GCF_000005845.2")).unwrap();
    std::fs::write(temp.path().join("GCF_000009045.1"), b"model").unwrap();

    let dir = Utf8Path::from_path(temp.path()).unwrap();
    let names = list_model_entries(dir).unwrap();
    assert_eq!(names, entries(&["GCF_000005845.2", "GCF_000009045.1"]));
}

#[test]
fn missing_directory_is_a_filesystem_error() {
    let err = list_model_entries(Utf8Path::new("no/such/dir")).unwrap_err();
    assert_matches!(err, FinderError::Filesystem(_));
}
