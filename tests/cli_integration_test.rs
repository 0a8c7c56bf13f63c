//! End-to-end tests for the frametrim binary.

use assert_cmd::Command;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn frametrim(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("frametrim").unwrap();
    cmd.current_dir(dir.path()).env_remove("FRAMETRIM_PLATFORM");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_normalize_arguments() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(frametrim(&dir).args(["normalize", "foo::bar(int)", "main::$_0"]));

    assert_eq!(out, "foo::bar\nmain::lambda\n");
}

#[test]
fn test_normalize_stdin_with_platform() {
    let dir = TempDir::new().unwrap();
    let input = indoc! {"
        closure #1 (T1) in foo(bar: T2)
        thunk for @escaping @callee_guaranteed () -> ()
    "};

    let out = stdout_of(frametrim(&dir).args(["normalize", "--platform", "cocoa"]).write_stdin(input));

    assert_eq!(out, "foo\nthunk for closure\n");
}

#[test]
fn test_normalize_json_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(frametrim(&dir).args([
        "normalize",
        "--platform",
        "csharp",
        "--format",
        "json",
        "Ex.Execute[T] (Foo a, Bar b)",
    ]));

    let record: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(record["function"], "Ex.Execute[T] (Foo a, Bar b)");
    assert_eq!(record["platform"], "csharp");
    assert_eq!(record["trimmed"], "Ex.Execute[T]");
}

#[test]
fn test_normalize_input_file_to_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("frames.txt"),
        indoc! {"
            pthread_cond_timedwait@@GLIBC_2.3.2
            +[FLFoo barBaz]
        "},
    )
    .unwrap();

    frametrim(&dir)
        .args(["normalize", "--input", "frames.txt", "--output", "trimmed.txt", "--no-parallel"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("trimmed.txt")).unwrap(),
        "pthread_cond_timedwait\n+[FLFoo barBaz]\n"
    );
}

#[test]
fn test_discovered_config_sets_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".frametrim.toml"),
        indoc! {r#"
            default_platform = "csharp"
            normalize_lambdas = false
        "#},
    )
    .unwrap();

    let out = stdout_of(frametrim(&dir).args(["normalize", "Program.Main (string[] args)"]));
    assert_eq!(out, "Program.Main\n");

    let out = stdout_of(frametrim(&dir).args(["normalize", "--platform", "native", "main::$_0"]));
    assert_eq!(out, "main::$_0\n");
}

#[test]
fn test_unknown_platform_fails() {
    let dir = TempDir::new().unwrap();
    let assert = frametrim(&dir)
        .args(["normalize", "--platform", "cobol", "foo()"])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("cobol"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    frametrim(&dir).arg("init").assert().success();
    assert!(dir.path().join(".frametrim.toml").exists());

    frametrim(&dir).arg("init").assert().failure();
    frametrim(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_tokenize_command() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(frametrim(&dir).args(["tokenize", "foo(enclosed bar)baz {moar stuff}"]));

    assert_eq!(out, "*   0  foo(enclosed bar)baz\n*  21  {moar stuff}\n");
}
