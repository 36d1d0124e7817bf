use crate::common::{fixture, run_with_input, stderr_of, stdout_of};

#[test]
fn version_flag_prints_the_crate_version_and_exits() {
    let output = run_with_input(&["--version"], "");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_profile_prints_a_single_error_line() {
    let config = fixture("config_basic.yml");
    let output = run_with_input(&["--filename", &config, "staging"], "");

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Profile `staging` not found"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_config_file_is_a_read_error() {
    let output = run_with_input(&["--filename", "/nonexistent/cflogin.yml", "dev"], "");

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Failed to read configuration file"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_required_field_names_the_field() {
    let config = fixture("config_missing_username.yml");
    let output = run_with_input(&["--filename", &config, "dev"], "");

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("missing required field `username`"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_profile_argument_is_reported() {
    let config = fixture("config_basic.yml");
    let output = run_with_input(&["--filename", &config], "");

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Please specify a profile."), "stderr: {stderr}");
}
