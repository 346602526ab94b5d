//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--primary")
        .stdout_has("--lowest")
        .stdout_has("--levels")
        .stdout_has("--keep-inner-zeroes");
}

#[test]
fn version() {
    cli().args(&["--version"]).passes().stdout_has("durfmt ");
}

#[test]
fn no_arguments_is_usage_error() {
    cli().fails().code(2).stderr_has("Usage:");
}
