use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_smoke() {
    let output = run_sim(&["--seed", "1", "--games", "3", "--hunt"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    assert_eq!(v["strategy"], "Hunt");
    assert_eq!(v["reveal_perimeter"], false);
    let played = v["victories"].as_u64().unwrap() + v["defeats"].as_u64().unwrap();
    assert_eq!(played, 3);
}

#[test]
fn sim_binary_defaults_to_one_random_game() {
    let output = run_sim(&[]);
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["games"], 1);
    assert_eq!(v["strategy"], "Random");
}

#[test]
fn sim_binary_reveals_perimeter() {
    let output = run_sim(&["--seed", "7", "--games", "2", "--reveal-perimeter"]);
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["reveal_perimeter"], true);
    let played = v["victories"].as_u64().unwrap() + v["defeats"].as_u64().unwrap();
    assert_eq!(played, 2);
}

#[test]
fn sim_binary_rejects_bad_flag_values() {
    assert!(!run_sim(&["--games", "many"]).status.success());
    assert!(!run_sim(&["--seed", "-1"]).status.success());
    assert!(!run_sim(&["--strategy", "cheat"]).status.success());
}
