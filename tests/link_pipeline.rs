// End-to-end link runs over temporary CSV files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wolfies_namematch::commands::link::{execute, LinkPaths};
use wolfies_namematch::config::{ColumnSelector, LinkConfig};
use wolfies_namematch::LinkError;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn paths(dir: &TempDir, a: &str, b: &str) -> LinkPaths {
    LinkPaths {
        file_a: write(dir.path(), "a.csv", a),
        file_b: write(dir.path(), "b.csv", b),
        output: dir.path().join("out.csv"),
    }
}

fn output_lines(paths: &LinkPaths) -> Vec<String> {
    fs::read_to_string(&paths.output)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn link_writes_best_matches_in_a_order() {
    let dir = TempDir::new().unwrap();
    let paths = paths(
        &dir,
        "Project\nACME Corp\nfoo\nbar\nxyz\n",
        "Project\nfoo2\nfoo\nAcme Corporation\nCompletely Unrelated Name\n",
    );

    let summary = execute(&paths, &LinkConfig::default()).unwrap();

    assert_eq!(summary.names_a, 4);
    assert_eq!(summary.names_b, 4);
    assert_eq!(summary.matches, 2);
    assert_eq!(
        output_lines(&paths),
        vec![
            "FileA_Project,FileB_Project,Similarity",
            "acme corp,acme corporation,0.912",
            "foo,foo,1.000",
        ]
    );
}

#[test]
fn link_deduplicates_normalized_names() {
    let dir = TempDir::new().unwrap();
    let paths = paths(
        &dir,
        "name\nAcme\nacme\nACME!\n\"Beta, Ltd.\"\nbeta ltd\n",
        "name\nacme\nbeta ltd\n",
    );

    let summary = execute(&paths, &LinkConfig::default()).unwrap();

    assert_eq!(summary.names_a, 2);
    assert_eq!(
        output_lines(&paths),
        vec![
            "FileA_Project,FileB_Project,Similarity",
            "acme,acme,1.000",
            "beta ltd,beta ltd,1.000",
        ]
    );
}

#[test]
fn link_with_empty_b_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let paths = paths(&dir, "name\nAcme\nBeta\n", "name\n");

    let summary = execute(&paths, &LinkConfig::default()).unwrap();

    assert_eq!(summary.matches, 0);
    assert_eq!(output_lines(&paths), vec!["FileA_Project,FileB_Project,Similarity"]);
}

#[test]
fn link_threshold_changes_result() {
    let dir = TempDir::new().unwrap();
    let paths = paths(&dir, "name\nacme corp\n", "name\nacme corporation\n");

    let strict = LinkConfig { threshold: 0.95, ..LinkConfig::default() };
    assert_eq!(execute(&paths, &strict).unwrap().matches, 0);

    let loose = LinkConfig { threshold: 0.9, ..LinkConfig::default() };
    assert_eq!(execute(&paths, &loose).unwrap().matches, 1);
}

#[test]
fn link_selects_columns_per_side() {
    let dir = TempDir::new().unwrap();
    let paths = paths(
        &dir,
        "id;company\n1;Acme Corp\n2;Globex\n",
        "company name;city\nGlobex;Springfield\nAcme Corporation;Oslo\n",
    );
    let config = LinkConfig {
        column_a: ColumnSelector::Name("company".to_string()),
        column_b: ColumnSelector::Index(0),
        delimiter: ';',
        ..LinkConfig::default()
    };

    let summary = execute(&paths, &config).unwrap();

    assert_eq!(summary.matches, 2);
    assert_eq!(
        output_lines(&paths),
        vec![
            "FileA_Project;FileB_Project;Similarity",
            "acme corp;acme corporation;0.912",
            "globex;globex;1.000",
        ]
    );
}

#[test]
fn link_parallel_matches_sequential_output() {
    let dir = TempDir::new().unwrap();
    let a: String = std::iter::once("name".to_string())
        .chain((0..60).map(|i| format!("Vendor {} Holdings", i)))
        .collect::<Vec<_>>()
        .join("\n");
    let b: String = std::iter::once("name".to_string())
        .chain((0..60).rev().map(|i| format!("vendor {} holding", i)))
        .collect::<Vec<_>>()
        .join("\n");
    let paths = paths(&dir, &a, &b);

    execute(&paths, &LinkConfig::default()).unwrap();
    let sequential = output_lines(&paths);

    let parallel = LinkConfig { parallel: true, ..LinkConfig::default() };
    execute(&paths, &parallel).unwrap();

    assert_eq!(output_lines(&paths), sequential);
}

#[test]
fn link_reports_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let paths = LinkPaths {
        file_a: dir.path().join("missing.csv"),
        file_b: write(dir.path(), "b.csv", "name\nacme\n"),
        output: dir.path().join("out.csv"),
    };

    let err = execute(&paths, &LinkConfig::default()).unwrap_err();

    assert!(matches!(err.downcast_ref::<LinkError>(), Some(LinkError::Read { .. })));
    assert!(err.to_string().contains("missing.csv"));
    assert!(!paths.output.exists());
}

#[test]
fn link_rejects_invalid_threshold() {
    let dir = TempDir::new().unwrap();
    let paths = paths(&dir, "name\nacme\n", "name\nacme\n");
    let config = LinkConfig { threshold: 1.5, ..LinkConfig::default() };

    assert!(execute(&paths, &config).is_err());
    assert!(!paths.output.exists());
}
