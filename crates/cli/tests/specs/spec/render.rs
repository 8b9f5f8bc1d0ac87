//! `gdalg render` specs

use crate::prelude::*;

#[test]
fn render_uses_step_names() {
    let temp = Project::empty();
    temp.file(
        "info.json",
        r#"{
  "gdalg": {"type": "gdal_streamed_alg", "command_line": "raster pipeline ! read a.tif"},
  "metadata": {"format_version": "1.0.0", "gdal_version_required": "3.11"},
  "r_job_specs": [
    {"command_path": ["raster", "info"], "arguments": {"input": "a.tif"}},
    {"command_path": ["raster", "convert"], "arguments": {"output": "b tif.tif", "overwrite": true}}
  ]
}"#,
    );

    temp.gdalg()
        .args(&["render", "info.json"])
        .passes()
        .stdout_eq("raster pipeline ! read a.tif ! write --overwrite 'b tif.tif'\n");
    temp.gdalg()
        .args(&["render", "info.json", "--leaf-names"])
        .passes()
        .stdout_eq("raster pipeline ! info a.tif ! convert --overwrite 'b tif.tif'\n");
    temp.gdalg()
        .args(&["render", "info.json", "--stored"])
        .passes()
        .stdout_eq("raster pipeline ! read a.tif\n");
}

#[test]
fn render_round_trips_parse() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);
    temp.gdalg()
        .args(&["render", "reproject.json"])
        .passes()
        .stdout_eq(&format!("{}\n", REPROJECT_COMMAND));
}

#[test]
fn render_honors_step_overrides() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);
    temp.file("steps.toml", "[raster]\nreproject = \"warp\"\n");
    temp.gdalg()
        .args(&["--steps", "steps.toml", "render", "reproject.json"])
        .passes()
        .stdout_has("! warp --dst-crs EPSG:4326 !");
}
