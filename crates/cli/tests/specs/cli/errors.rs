//! Error reporting specs

use crate::prelude::*;

#[test]
fn missing_document_fails() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["show", "absent.json"])
        .fails()
        .stderr_has("IO error");
}

#[test]
fn malformed_json_fails() {
    let temp = Project::empty();
    temp.file("broken.json", "{\"gdalg\": ");
    temp.gdalg()
        .args(&["show", "broken.json"])
        .fails()
        .stderr_has("malformed JSON");
}

#[test]
fn legacy_document_is_rejected_by_name() {
    let temp = Project::empty();
    temp.file("old.json", r#"{"steps": [{"command": "raster convert"}]}"#);
    temp.gdalg()
        .args(&["show", "old.json"])
        .fails()
        .stderr_has("format no longer supported");
}

#[test]
fn unknown_document_shape_fails() {
    let temp = Project::empty();
    temp.file("other.json", r#"{"hello": "world"}"#);
    temp.gdalg()
        .args(&["render", "other.json"])
        .fails()
        .stderr_has("unrecognized specification format");
}

#[test]
fn empty_command_fails_to_parse() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["parse", "raster pipeline"])
        .fails()
        .stderr_has("command string is empty");
}

#[test]
fn missing_step_mapping_file_fails() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["--steps", "nope.toml", "classify", "raster", "info"])
        .fails()
        .stderr_has("failed to load step mapping");
}
