//! Config file specs
//!
//! Verify settings load from a TOML file and flags override them.

use crate::prelude::*;

const MS_CONFIG: &str = r#"
primary_unit = "ms"
levels = 3
drop_inner_zeroes = false
"#;

#[test]
fn config_flag() {
    let project = Project::empty();
    let config = project.file("durfmt.toml", MS_CONFIG);

    cli()
        .args(&["--config", config.to_str().unwrap(), "1500000000"])
        .passes()
        .stdout_eq("1500 ms 0 μs 0 ns\n");
}

#[test]
fn config_from_env() {
    let project = Project::empty();
    let config = project.file("durfmt.toml", MS_CONFIG);

    cli()
        .env("DURFMT_CONFIG", &config)
        .args(&["60001003"])
        .passes()
        .stdout_eq("60 ms 1 μs 3 ns\n");
}

#[test]
fn flags_override_config() {
    let project = Project::empty();
    let config = project.file("durfmt.toml", MS_CONFIG);

    cli()
        .env("DURFMT_CONFIG", &config)
        .args(&["--levels", "1", "1500000000"])
        .passes()
        .stdout_eq("1500 ms\n");
}

#[test]
fn debug_log_goes_to_stderr() {
    let project = Project::empty();
    let config = project.file("durfmt.toml", MS_CONFIG);

    cli()
        .env("DURFMT_LOG", "debug")
        .args(&["--config", config.to_str().unwrap(), "360"])
        .passes()
        .stdout_eq("360 ns\n")
        .stderr_has("loading format config");
}
