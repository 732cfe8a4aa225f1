use std::process::Command;

fn slck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_slck"));
    cmd.env_remove("SLACK_BOT_TOKEN").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_subcommand_exits_with_usage() {
    let output = slck().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn test_failure_is_reported_once() {
    let output = slck().args(["channels"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("SLACK_BOT_TOKEN").count(), 1, "stderr was: {stderr}");
}
