use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_shell(input: impl AsRef<[u8]>, home: Option<&Path>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_minish"));
    command
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(home) = home {
        command.env("HOME", home);
    }

    let mut child = command.spawn().expect("spawn minish");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(input.as_ref())
        .expect("write input");
    child.wait_with_output().expect("wait for minish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn echo_and_exit() {
    let output = run_shell("echo a  b   c\n   \nexit 3\necho never\n", None);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "$ a b c\n$ $ ");
    assert_eq!(stderr(&output), "");
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = run_shell("echo hi\n", None);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "$ hi\n$ ");
}

#[test]
fn cd_home_then_pwd() {
    let home = tempfile::TempDir::new().expect("temp home");
    let home_path = home.path().canonicalize().expect("canonical home");

    let output = run_shell("cd ~\npwd\n", Some(&home_path));

    assert_eq!(stdout(&output), format!("$ $ {}\n$ ", home_path.display()));
    assert_eq!(stderr(&output), "");
}

#[test]
fn cd_to_missing_directory() {
    let output = run_shell("cd /nonexistent-path-xyz\n", None);

    assert_eq!(
        stderr(&output),
        "cd: /nonexistent-path-xyz: No such file or directory\n"
    );
    assert_eq!(stdout(&output), "$ $ ");
}

#[test]
fn type_builtins_and_missing() {
    let output = run_shell("type exit\ntype type\ntype minish-missing-xyz\n", None);

    assert_eq!(
        stdout(&output),
        "$ exit is a shell builtin\n$ type is a shell builtin\n$ minish-missing-xyz: not found\n$ "
    );
}

#[cfg(unix)]
#[test]
fn type_resolves_sh() {
    let output = run_shell("type sh\n", None);
    let out = stdout(&output);

    assert!(out.starts_with("$ sh is /"), "unexpected output: {out:?}");
    assert!(out.ends_with("/sh\n$ "), "unexpected output: {out:?}");
}

#[cfg(unix)]
#[test]
fn external_command_output_passes_through() {
    let output = run_shell("expr 1 + 2\necho done\n", None);

    assert_eq!(stdout(&output), "$ 3\n$ done\n$ ");
}

#[cfg(unix)]
#[test]
fn failing_external_command_reports_not_found() {
    let output = run_shell("false\nminish-no-such-program\n", None);

    assert_eq!(
        stdout(&output),
        "$ false: not found\n$ minish-no-such-program: not found\n$ "
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments_reach_commands() {
    let output = run_shell(b"echo caf\xe9\nprintf %s\\n caf\xe9\n", None);

    assert_eq!(output.stdout, b"$ caf\xe9\n$ caf\xe9\n$ ");
    assert_eq!(stderr(&output), "");
}

#[test]
fn version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_minish"))
        .arg("--version")
        .output()
        .expect("run minish --version");

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("minish "));
}
