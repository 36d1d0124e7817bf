use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_cflogin");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join("tests/fixtures").join(relative).display().to_string()
}

/// Run the binary with the given arguments, feeding `input` to stdin.
pub fn run_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(BINARY_PATH)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("can spawn cflogin binary");
    child
        .stdin
        .as_mut()
        .expect("child stdin")
        .write_all(input.as_bytes())
        .expect("can write to child stdin");
    child
        .wait_with_output()
        .expect("binary runs to completion")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
