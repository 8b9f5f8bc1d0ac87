//! `gdalg parse` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn parse_prints_hybrid_document() {
    let temp = Project::empty();
    let run = temp.gdalg().args(&["parse", REPROJECT_COMMAND]).passes();
    let doc = run.stdout_json();

    assert_eq!(doc["gdalg"]["type"], "gdal_streamed_alg");
    assert_eq!(
        doc["gdalg"]["command_line"],
        "gdal raster pipeline ! read in.tif ! reproject --dst-crs EPSG:4326 ! write --of COG out.tif"
    );
    assert_eq!(doc["r_job_specs"][1]["command_path"][1], "reproject");
    assert_eq!(doc["r_job_specs"][2]["arguments"]["output_format"], "COG");
    assert_eq!(doc["r_job_specs"][2]["arguments"]["output"], "out.tif");
}

#[test]
fn parse_writes_file_with_metadata() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&[
            "parse",
            "gdal vector pipeline ! read roads.gpkg ! write roads.parquet",
            "-o",
            "roads.json",
            "--name",
            "roads",
            "--description",
            "to parquet",
            "--tag",
            "owner=gis",
        ])
        .passes()
        .stdout_eq("Wrote roads.json (2 stages)\n");

    let doc: serde_json::Value = serde_json::from_str(&temp.read("roads.json")).unwrap();
    assert_eq!(doc["metadata"]["pipeline_name"], "roads");
    assert_eq!(doc["metadata"]["pipeline_description"], "to parquet");
    assert_eq!(doc["metadata"]["custom_tags"]["owner"], "gis");
    assert!(doc["metadata"]["created_at"].is_string());
}

#[test]
fn parse_rejects_malformed_tag() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["parse", REPROJECT_COMMAND, "--tag", "novalue"])
        .fails()
        .stderr_has("invalid key=value");
}
