mod common;

use std::ffi::OsStr;

use common::{setup, stderr, stdout, tempdir, tools};
use pretty_assertions::assert_eq;

#[test]
fn test_has_tabs() {
    setup();
    let tmpdir = tempdir();
    let with_tabs = tmpdir.path().join("with.cpp");
    let without_tabs = tmpdir.path().join("without.cpp");
    std::fs::write(&with_tabs, "int main() {\n\treturn 0;\n}\n").unwrap();
    std::fs::write(&without_tabs, "int main() {\n  return 0;\n}\n").unwrap();

    let output = tools([
        OsStr::new("has-tabs"),
        with_tabs.as_os_str(),
        OsStr::new("Please do not use tabs"),
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stderr(&output), "Please do not use tabs\n");

    let output = tools([
        OsStr::new("has-tabs"),
        without_tabs.as_os_str(),
        OsStr::new("Please do not use tabs"),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_has_long_lines() {
    setup();
    let tmpdir = tempdir();
    let file = tmpdir.path().join("main.cpp");
    std::fs::write(&file, "short\nthis line is quite long\n").unwrap();

    let output = tools([
        OsStr::new("has-long-lines"),
        file.as_os_str(),
        OsStr::new("10"),
        OsStr::new("Lines too long"),
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stderr(&output), "Lines too long\n");

    let output = tools([
        OsStr::new("has-long-lines"),
        file.as_os_str(),
        OsStr::new("80"),
        OsStr::new("Lines too long"),
    ]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_check_json() {
    setup();
    let tmpdir = tempdir();
    let good = tmpdir.path().join("good.json");
    let bad = tmpdir.path().join("bad.json");
    std::fs::write(&good, r#"{"name": "test1"}"#).unwrap();
    std::fs::write(&bad, r#"{"name": "test1",}"#).unwrap();

    let output = tools([OsStr::new("check-json"), good.as_os_str(), bad.as_os_str()]);
    assert!(output.status.success(), "{output:?}");
    let stdout = stdout(&output);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some(&*bad.to_string_lossy()));
    assert!(lines.next().unwrap().starts_with("Exception parsing file"));
    assert!(!stdout.contains("good.json"));
}

#[test]
fn test_sort_lines() {
    setup();
    let tmpdir = tempdir();
    let input = tmpdir.path().join("test1.stdout");
    let output_file = tmpdir.path().join("test1.stdout.sorted");
    std::fs::write(&input, "pear\napple\nfig\n").unwrap();

    let output = tools([OsStr::new("sort-lines"), input.as_os_str()]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "apple\nfig\npear\n");

    let output = tools([
        OsStr::new("sort-lines"),
        input.as_os_str(),
        output_file.as_os_str(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "apple\nfig\npear"
    );
}

#[test]
fn test_sort_lines_numeric() {
    setup();
    let tmpdir = tempdir();
    let input = tmpdir.path().join("test2.stdout");
    std::fs::write(&input, "10\n9\n1\n").unwrap();

    let output = tools([
        OsStr::new("sort-lines"),
        OsStr::new("--numeric"),
        input.as_os_str(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "1\n9\n10\n");

    std::fs::write(&input, "10\nnine\n").unwrap();
    let output = tools([
        OsStr::new("sort-lines"),
        OsStr::new("--numeric"),
        input.as_os_str(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not an integer"), "{output:?}");
}
