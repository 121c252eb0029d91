mod common;

use std::ffi::OsStr;

use common::{setup, stderr, stdout, tempdir, tools};
use pretty_assertions::assert_eq;

#[test]
fn test_capture() {
    setup();
    let output = tools(["capture", "--", "sh", "-c", "echo out; echo err >&2; exit 5"]);
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(stdout(&output), "out\nerr\n");
}

#[test]
fn test_capture_shell() {
    setup();
    let output = tools(["capture", "--shell", "--", "echo", "hello", "|", "tr", "a-z", "A-Z"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "HELLO\n");
}

#[test]
fn test_capture_missing_program() {
    setup();
    let output = tools(["capture", "--", "autograde-this-program-does-not-exist"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to execute"), "{output:?}");
}

#[test]
fn test_run_test_from_config() {
    setup();
    let tmpdir = tempdir();
    let sh = which::which("sh").unwrap();
    let config = tmpdir.path().join("test1.json");
    let results = tmpdir.path().join("results");
    let invocation = serde_json::json!({
        "name": "test1",
        "programdir": sh.parent().unwrap(),
        "program": sh.file_name().unwrap().to_string_lossy(),
        "args": ["-c", "echo $0 $1; echo oops >&2; exit 3", "first", "second"],
    });
    std::fs::write(&config, invocation.to_string()).unwrap();

    let output = tools([
        OsStr::new("run-test"),
        OsStr::new("--config"),
        config.as_os_str(),
        OsStr::new("--output-dir"),
        results.as_os_str(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("test returned: 3"), "{output:?}");
    assert_eq!(
        std::fs::read_to_string(results.join("test1.stdout")).unwrap(),
        "first second\n"
    );
    assert_eq!(
        std::fs::read_to_string(results.join("test1.stderr")).unwrap(),
        "oops\n"
    );
}

#[test]
fn test_run_test_from_args() {
    setup();
    let tmpdir = tempdir();
    let sh = which::which("sh").unwrap();

    let output = tools([
        OsStr::new("run-test"),
        OsStr::new("--name"),
        OsStr::new("hello"),
        OsStr::new("--program-dir"),
        sh.parent().unwrap().as_os_str(),
        OsStr::new("--program"),
        sh.file_name().unwrap(),
        OsStr::new("--output-dir"),
        tmpdir.path().as_os_str(),
        OsStr::new("--"),
        OsStr::new("-c"),
        OsStr::new("echo hello"),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("test returned: 0"), "{output:?}");
    assert_eq!(
        std::fs::read_to_string(tmpdir.path().join("hello.stdout")).unwrap(),
        "hello\n"
    );
}

#[test]
fn test_run_test_missing_program() {
    setup();
    let tmpdir = tempdir();

    let output = tools([
        OsStr::new("run-test"),
        OsStr::new("--name"),
        OsStr::new("broken"),
        OsStr::new("--program-dir"),
        tmpdir.path().as_os_str(),
        OsStr::new("--program"),
        OsStr::new("missing"),
        OsStr::new("--output-dir"),
        tmpdir.path().as_os_str(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Exception running test program"));
    assert!(!tmpdir.path().join("broken.stdout").exists());
}
