use assert_cmd::Command;

pub fn journal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("growth-journal").unwrap();
    cmd.env_remove("GROWTH_JOURNAL_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
