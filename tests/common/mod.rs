use assert_cmd::Command;

pub fn entix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("entix").unwrap();
    cmd.env_remove("ENTIX_TOKEN");
    cmd.env_remove("ENTIX_JOURNAL_URL");
    cmd.env_remove("ENTIX_CONFIG");
    cmd.env_remove("ENTIX_TIMEOUT");
    cmd.env_remove("ENTIX_APPLICATION_ID");
    cmd.env_remove("ENTIX_REPORTS_TOKEN");
    cmd.env_remove("ENTIX_REPORTS_JOURNAL_ID");
    cmd
}
