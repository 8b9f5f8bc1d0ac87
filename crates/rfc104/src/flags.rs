// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument name <-> flag spelling

/// Prefix marking a token as a flag
pub const FLAG_PREFIX: &str = "--";

/// Names whose flag is not the mechanical kebab-case spelling
const FLAG_OVERRIDES: &[(&str, &str)] = &[
    ("res", "--resolution"),
    ("output_format", "--of"),
    ("input_format", "--if"),
];

/// `dst_crs` -> `--dst-crs`, honoring overrides
pub fn flag_for(name: &str) -> String {
    FLAG_OVERRIDES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, flag)| flag.to_string())
        .unwrap_or_else(|| format!("{}{}", FLAG_PREFIX, name.replace('_', "-")))
}

/// `--dst-crs` -> `dst_crs`, honoring overrides
pub fn name_for_flag(flag: &str) -> String {
    if let Some((name, _)) = FLAG_OVERRIDES.iter().find(|(_, f)| *f == flag) {
        return name.to_string();
    }
    flag.trim_start_matches('-').replace('-', "_")
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX) && token.len() > FLAG_PREFIX.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mechanical_spelling() {
        assert_eq!(flag_for("dst_crs"), "--dst-crs");
        assert_eq!(flag_for("creation_option"), "--creation-option");
        assert_eq!(flag_for("overwrite"), "--overwrite");
        assert_eq!(name_for_flag("--dst-crs"), "dst_crs");
    }

    #[test]
    fn overrides_apply_both_ways() {
        assert_eq!(flag_for("res"), "--resolution");
        assert_eq!(flag_for("output_format"), "--of");
        assert_eq!(name_for_flag("--of"), "output_format");
        assert_eq!(name_for_flag("--if"), "input_format");
        assert_eq!(name_for_flag("--resolution"), "res");
    }

    #[test]
    fn flag_detection() {
        assert!(is_flag("--of"));
        assert!(!is_flag("--"));
        assert!(!is_flag("-9999"));
        assert!(!is_flag("in.tif"));
    }
}
