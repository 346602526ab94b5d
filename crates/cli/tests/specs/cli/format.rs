//! Formatting specs
//!
//! Verify the formatted text for the documented examples.

use crate::prelude::*;

#[test]
fn default_picks_one_unit() {
    cli()
        .args(&["360", "1500401823", "158334286578"])
        .passes()
        .stdout_eq("360 ns\n1500 ms\n3 m\n")
        .stderr_empty();
}

#[test]
fn three_levels() {
    cli()
        .args(&["-n", "3", "13000499000", "5586486000000"])
        .passes()
        .stdout_eq("13 s 499 μs\n93 m 6 s 486 ms\n");
}

#[test]
fn fixed_primary_keeps_inner_zeroes() {
    cli()
        .args(&[
            "--primary",
            "ms",
            "--levels",
            "3",
            "--keep-inner-zeroes",
            "360",
            "1500000000",
            "60001003",
        ])
        .passes()
        .stdout_eq("360 ns\n1500 ms 0 μs 0 ns\n60 ms 1 μs 3 ns\n");
}

#[test]
fn lowest_unit() {
    cli()
        .args(&["--lowest", "ms", "360", "1500401823", "158334286578"])
        .passes()
        .stdout_eq("0 ms\n1500 ms\n3 m\n");
}

#[test]
fn keep_leading_zeroes() {
    cli()
        .args(&["-p", "m", "-n", "3", "--keep-leading-zeroes", "-u", "s", "5"])
        .passes()
        .stdout_eq("0 m 5 s\n");
}

#[test]
fn amounts_in_other_units() {
    cli()
        .args(&["--unit", "minutes", "90", "5999"])
        .passes()
        .stdout_eq("90 m\n100 h\n");
}

#[test]
fn zero_check() {
    cli()
        .args(&["--primary", "s", "--zero", "360", "158334286578"])
        .passes()
        .stdout_eq("true\nfalse\n");
}

#[test]
fn json_output() {
    cli()
        .args(&["-o", "json", "-p", "s", "360"])
        .passes()
        .stdout_has("\"formatted\": \"0 s\"")
        .stdout_has("\"zero\": true")
        .stdout_has("\"unit\": \"nanoseconds\"");
}
