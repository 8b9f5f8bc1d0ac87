//! `gdalg show` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn show_hybrid_document_is_lossless() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["parse", REPROJECT_COMMAND, "-o", "reproject.json", "--name", "to-wgs84"])
        .passes();

    temp.gdalg()
        .args(&["show", "reproject.json"])
        .passes()
        .stdout_has("Source: hybrid (lossless)")
        .stdout_has("Name: to-wgs84")
        .stdout_has("Stages: 3")
        .stdout_has("reproject --dst-crs EPSG:4326");
}

#[test]
fn show_portable_document_is_lossy() {
    let temp = Project::empty();
    temp.file(
        "foreign.gdalg.json",
        r#"{"type": "gdal_streamed_alg", "command_line": "gdal vector pipeline ! read a.gpkg ! sql --sql 'SELECT * FROM a' ! write b.gpkg"}"#,
    );

    temp.gdalg()
        .args(&["show", "foreign.gdalg.json"])
        .passes()
        .stdout_has("Source: portable-only (lossy)")
        .stdout_has("Stages: 3")
        .stdout_has("vector sql");
}

#[test]
fn show_as_json() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    let run = temp
        .gdalg()
        .args(&["show", "reproject.json", "--format", "json"])
        .passes();
    let summary = run.stdout_json();
    assert_eq!(summary["source"], "hybrid");
    assert_eq!(summary["lossless"], true);
    assert_eq!(summary["stages"][0]["command"], "raster read");
    assert_eq!(summary["stages"][2]["step"], "write --of COG out.tif");
}

#[test]
fn portable_fallback_logs_a_warning() {
    let temp = Project::empty();
    temp.file(
        "foreign.json",
        r#"{"type": "gdal_streamed_alg", "command_line": "raster pipeline ! read a.tif ! write b.tif"}"#,
    );

    temp.gdalg()
        .args(&["show", "foreign.json"])
        .passes()
        .stderr_has("no job snapshots");
}
