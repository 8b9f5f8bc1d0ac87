//! Step classification specs

use crate::prelude::*;

#[test]
fn builtin_classification() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["classify", "raster", "convert"])
        .passes()
        .stdout_eq("write\n");
    temp.gdalg()
        .args(&["classify", "vector", "info"])
        .passes()
        .stdout_eq("read\n");
}

#[test]
fn unknown_operation_is_its_own_step() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["classify", "mdim", "mosaic"])
        .passes()
        .stdout_eq("mosaic\n");
}

#[test]
fn overrides_from_flag() {
    let temp = Project::empty();
    temp.file("steps.toml", "[raster]\nconvert = \"translate\"\n");
    temp.gdalg()
        .args(&["--steps", "steps.toml", "classify", "raster", "convert"])
        .passes()
        .stdout_eq("translate\n");
}

#[test]
fn overrides_from_environment() {
    let temp = Project::empty();
    let path = temp.file("steps.toml", "[vector]\nsql = \"filter\"\n");
    temp.gdalg()
        .env("GDALG_STEP_MAPPING", &path)
        .args(&["classify", "vector", "sql"])
        .passes()
        .stdout_eq("filter\n");
}
