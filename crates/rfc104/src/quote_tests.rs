// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    plain = { "out.tif", "out.tif" },
    crs = { "EPSG:4326", "EPSG:4326" },
    option = { "COMPRESS=LZW", "COMPRESS=LZW" },
    path = { "/vsis3/bucket/a_b-c.tif", "/vsis3/bucket/a_b-c.tif" },
    empty = { "", "''" },
    space = { "my file.tif", "'my file.tif'" },
    comma = { "0,0,10,10", "'0,0,10,10'" },
    single_quote = { "it's", r#"'it'"'"'s'"# },
    dollar = { "$HOME", "'$HOME'" },
    unicode = { "données.tif", "'données.tif'" },
)]
fn quote_cases(input: &str, expected: &str) {
    assert_eq!(quote(input), expected);
}

proptest! {
    #[test]
    fn safe_strings_are_unchanged(s in "[A-Za-z0-9_./:=-]{1,32}") {
        prop_assert_eq!(quote(&s), s);
    }

    #[test]
    fn quoted_strings_survive_shell_tokenizing(s in "[ -~]{0,32}") {
        let quoted = quote(&s);
        let words = shell_words::split(&quoted).unwrap();
        prop_assert_eq!(words, vec![s]);
    }

    #[test]
    fn embedded_single_quotes_round_trip(a in "[a-z ]{0,8}", b in "[a-z ]{0,8}") {
        let s = format!("{}'{}", a, b);
        let words = shell_words::split(&quote(&s)).unwrap();
        prop_assert_eq!(words, vec![s]);
    }
}
