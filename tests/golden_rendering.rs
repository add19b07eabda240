use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use blockprint::{HtmlSerializer, Template};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{name}.sha256"));
    p
}

fn fixtures() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir("tests/goldens/templates")
        .expect("read fixtures dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

/// Snippets the export must contain, one per line
fn anchors(name: &str) -> Vec<String> {
    let path = PathBuf::from(format!("tests/goldens/expected/{name}.anchors"));
    let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path:?}: {e}"));
    text.lines().filter(|l| !l.trim().is_empty()).map(str::to_string).collect()
}

fn check_golden(fixture: &Path) {
    let json = fs::read_to_string(fixture).expect("read fixture");
    let template = Template::from_json(&json).expect("parse fixture");
    template.validate().expect("valid fixture");

    // The digest covers the full document, so any markup change shows up here
    let out = HtmlSerializer::default().render(&template);
    assert!(out.warnings.is_empty(), "{:?}: {:?}", fixture, out.warnings);
    let name = fixture.file_stem().and_then(|s| s.to_str()).expect("fixture name");
    for anchor in anchors(name) {
        assert!(out.html.contains(&anchor), "{fixture:?} lost `{anchor}`");
    }
    let expected_path = golden_path(name);

    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, out.digest()).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(out.digest(), expected.trim(), "{:?} changed", fixture);
}

#[test]
fn golden_exports_match_fixtures() {
    let paths = fixtures();
    assert!(!paths.is_empty(), "no fixtures under tests/goldens/templates");
    for path in &paths {
        check_golden(path);
    }
}

#[test]
fn fixtures_survive_a_json_round_trip() {
    for path in fixtures() {
        let template = Template::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        let again = Template::from_json(&template.to_json_pretty().unwrap()).unwrap();
        assert_eq!(again, template);
        assert_eq!(
            HtmlSerializer::default().render(&again).html,
            HtmlSerializer::default().render(&template).html
        );
    }
}
