use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn routeviz() -> Command {
    cargo_bin_cmd!("routeviz")
}
