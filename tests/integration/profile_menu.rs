use crate::common::{fixture, run_with_input, stderr_of, stdout_of};

#[test]
fn list_mode_prints_the_sorted_zero_based_menu() {
    let config = fixture("config_menu.yml");
    // Selection 5 is out of range, so the run stops after the menu and
    // never reaches the login action.
    let output = run_with_input(&["--filename", &config, "--list"], "5\n");

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Available profiles:"), "stdout: {stdout}");
    let alpha = stdout.find("0. alpha").expect("menu lists alpha at 0");
    let beta = stdout.find("1. beta").expect("menu lists beta at 1");
    assert!(alpha < beta);

    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Invalid profile selection 5"),
        "stderr: {stderr}"
    );
}

#[test]
fn unparsable_selection_falls_back_to_the_first_profile() {
    let config = fixture("config_menu.yml");
    // alpha has no username, so resolution fails after selection; the error
    // proves the fallback picked index 0.
    let output = run_with_input(&["--filename", &config, "--list"], "x\n");

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Using profile: 'alpha'"), "stdout: {stdout}");
}

#[test]
fn in_range_selection_picks_the_listed_name() {
    let config = fixture("config_menu.yml");
    // beta also lacks a username, so the run fails at resolution rather
    // than spawning the real cf CLI.
    let output = run_with_input(&["--filename", &config, "--list"], "1\n");

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Using profile: 'beta'"), "stdout: {stdout}");
}
