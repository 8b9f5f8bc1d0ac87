//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["--help"])
        .passes()
        .stdout_has("render")
        .stdout_has("parse")
        .stdout_has("show")
        .stdout_has("classify")
        .stdout_has("run");
}

#[test]
fn version_flag() {
    let temp = Project::empty();
    temp.gdalg().args(&["--version"]).passes().stdout_has("gdalg");
}

#[test]
fn run_help_mentions_dry_run() {
    let temp = Project::empty();
    temp.gdalg()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--dry-run");
}
