//! `gdalg run --dry-run` specs

use crate::prelude::*;

#[test]
fn dry_run_prints_pipeline_command() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    temp.gdalg()
        .args(&["run", "reproject.json", "--dry-run"])
        .passes()
        .stdout_eq(
            "gdal raster pipeline read in.tif ! reproject --dst-crs EPSG:4326 ! write --of COG out.tif\n",
        );
}

#[test]
fn dry_run_single_stage_with_config_env_and_stream() {
    let temp = Project::empty();
    temp.file(
        "info.json",
        r#"{
  "gdalg": {"type": "gdal_streamed_alg", "command_line": "gdal raster pipeline ! read dem.tif"},
  "r_job_specs": [
    {
      "command_path": ["gdal", "raster", "info"],
      "arguments": {"input": "dem.tif", "format": "json"},
      "config_options": {"GDAL_CACHEMAX": "512"},
      "env_vars": {"CPL_DEBUG": "ON"},
      "stream_out_format": "text"
    }
  ]
}"#,
    );

    temp.gdalg()
        .args(&["run", "info.json", "--dry-run"])
        .passes()
        .stdout_eq(
            "CPL_DEBUG=ON gdal raster info --config GDAL_CACHEMAX=512 --format json dem.tif /vsistdout/\n",
        );
}

#[test]
fn dry_run_uses_configured_binary_name() {
    let temp = Project::empty();
    temp.spec_from("reproject.json", REPROJECT_COMMAND);

    temp.gdalg()
        .env("GDALG_BIN", "/opt/gdal/bin/gdal")
        .args(&["run", "reproject.json", "--dry-run"])
        .passes()
        .stdout_has("/opt/gdal/bin/gdal raster pipeline");
}
