#![cfg(unix)]

use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
    thread::sleep,
    time::{Duration, Instant}
};

use tempfile::tempdir;

fn command(vars: &[(&str, &str)], args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cmdwt"));
    for key in ["CMDWT_STRATEGY", "CMDWT_TARGET", "CMDWT_TARGET_NAME", "CMDWT_SHELL", "CMDWT_PAUSE", "CMDWT_DEBUG"] {
        command.env_remove(key);
    }
    command.envs(vars.iter().copied()).args(args);
    command
}

fn cmdwt(vars: &[(&str, &str)], args: &[&str]) -> Output {
    command(vars, args).output().unwrap()
}

/// Writes a script that dumps its arguments, one per line, to `argv` beside it.
fn recording_script(dir: &Path) -> String {
    let script = dir.join("record.sh");
    fs::write(
        &script,
        "out=\"$(dirname \"$0\")/argv\"\n\
         for a in \"$@\"; do printf '%s\\n' \"$a\"; done > \"$out.tmp\"\n\
         mv \"$out.tmp\" \"$out\"\n"
    )
    .unwrap();
    script.to_string_lossy().into_owned()
}

fn wait_for(path: &Path) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !path.exists() {
        assert!(Instant::now() < deadline, "{} never appeared", path.display());
        sleep(Duration::from_millis(20));
    }
    fs::read_to_string(path).unwrap()
}

#[test]
fn prints_and_launches() {
    let output = cmdwt(
        &[("CMDWT_STRATEGY", "static"), ("CMDWT_TARGET", "/opt/Apps/term"), ("CMDWT_SHELL", "true")],
        &["--foo", "bar"]
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Running: true /opt/Apps/term --foo bar\n");
}

#[test]
fn missing_target_exits_with_two() {
    let output = cmdwt(
        &[("CMDWT_STRATEGY", "search"), ("CMDWT_TARGET_NAME", "cmdwt-missing-target.exe")],
        &[]
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cmdwt-missing-target.exe could not be found.\n");
}

#[test]
fn bad_strategy_exits_with_one() {
    let output = cmdwt(&[("CMDWT_STRATEGY", "index")], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CMDWT_STRATEGY"));
}

#[test]
fn unspawnable_shell_exits_with_three() {
    let output = cmdwt(
        &[("CMDWT_STRATEGY", "static"), ("CMDWT_TARGET", "/opt/Apps/term"), ("CMDWT_SHELL", "/nonexistent/cmdwt-shell")],
        &[]
    );

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Running: /nonexistent/cmdwt-shell /opt/Apps/term"));
}

#[test]
fn child_receives_arguments_unchanged() {
    let dir = tempdir().unwrap();
    let script = recording_script(dir.path());
    let forwarded = ["-d", r"C:\Users\me", "it's", "two words", "$HOME"];

    let output = cmdwt(
        &[("CMDWT_STRATEGY", "static"), ("CMDWT_TARGET", script.as_str()), ("CMDWT_SHELL", "/bin/sh")],
        &forwarded
    );
    assert!(output.status.success(), "{:?}", output);

    let recorded = wait_for(&dir.path().join("argv"));
    assert_eq!(recorded.lines().collect::<Vec<_>>(), forwarded);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed = stdout.trim_end().strip_prefix("Running: /bin/sh ").unwrap();
    let mut argv = shlex::split(printed).unwrap();
    assert_eq!(argv.remove(0), script);
    assert_eq!(argv, forwarded);
}

#[test]
fn pause_waits_for_a_line() {
    let mut child = command(
        &[("CMDWT_STRATEGY", "static"), ("CMDWT_TARGET", "/opt/Apps/term"), ("CMDWT_SHELL", "true"), ("CMDWT_PAUSE", "1")],
        &[]
    )
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .spawn()
    .unwrap();

    sleep(Duration::from_millis(300));
    assert!(child.try_wait().unwrap().is_none(), "exited before reading stdin");

    child.stdin.take().unwrap().write_all(b"\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Running: true /opt/Apps/term"));
}
