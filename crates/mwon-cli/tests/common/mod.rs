#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::time::Duration;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Sample page exercising every MWON construct.
#[allow(dead_code)]
pub const SAMPLE_PAGE: &str = "Intro prose before any record.\n\
== Datasets ==\n\
=== Alpha ===\n\
* Key: Value\n\
* Tags\n\
** a\n\
** b\n\
\n\
free text\n\
=== Beta ===\n\
* Empty:\n";

/// Create a configured `mwon` command suitable for integration tests.
pub fn mwon_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mwon"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("MWON_TIMEOUT");
    cmd.env_remove("MWON_USER_AGENT");
    cmd
}
