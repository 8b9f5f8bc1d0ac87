//! `gdalg run` specs against a stand-in tool

use crate::prelude::*;

#[test]
fn run_invokes_tool_with_argument_vector() {
    let temp = Project::empty();
    let tool = temp.script("bin/gdal", "printf '%s|' \"$@\"");
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    temp.gdalg()
        .env("GDALG_BIN", &tool)
        .args(&["run", "reproject.json"])
        .passes()
        .stdout_eq(
            "raster|pipeline|read|in.tif|!|reproject|--dst-crs|EPSG:4326|!|write|--of|COG|out.tif|",
        );
}

#[test]
fn run_prints_captured_text() {
    let temp = Project::empty();
    let tool = temp.script("bin/gdal", "echo \"Driver: GTiff/GeoTIFF ($CPL_DEBUG)\"");
    temp.file(
        "info.json",
        r#"{
  "gdalg": {"type": "gdal_streamed_alg", "command_line": "gdal raster pipeline ! read dem.tif"},
  "r_job_specs": [
    {
      "command_path": ["raster", "info"],
      "arguments": {"input": "dem.tif"},
      "env_vars": {"CPL_DEBUG": "OFF"},
      "stream_out_format": "text"
    }
  ]
}"#,
    );

    temp.gdalg()
        .env("GDALG_BIN", &tool)
        .args(&["run", "info.json"])
        .passes()
        .stdout_eq("Driver: GTiff/GeoTIFF (OFF)\n");
}

#[test]
fn run_reports_tool_failure() {
    let temp = Project::empty();
    let tool = temp.script("bin/gdal", "echo 'ERROR 4: in.tif: No such file or directory' >&2\nexit 1");
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    temp.gdalg()
        .env("GDALG_BIN", &tool)
        .args(&["run", "reproject.json"])
        .fails()
        .stderr_has("command exited with status 1")
        .stderr_has("No such file or directory");
}

#[test]
fn run_reports_missing_tool() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    temp.gdalg()
        .env("GDALG_BIN", temp.path().join("no-such-gdal"))
        .args(&["run", "reproject.json"])
        .fails()
        .stderr_has("failed to start");
}
