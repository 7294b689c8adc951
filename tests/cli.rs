use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn sexpr_lang() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sexpr_lang"))
}

fn run(args: &[&str]) -> Output {
    sexpr_lang().args(args).output().expect("Failed to execute sexpr_lang")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = sexpr_lang()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sexpr_lang");

    child.stdin.take().expect("stdin is piped").write_all(input.as_bytes()).expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for sexpr_lang")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

fn source_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sexpr_lang_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("Failed to write source file");
    path
}

#[test]
fn eval_sources_share_one_session() {
    let output = run(&["-e", "(set x 5)", "-e", "(print (get x))"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!("5\n", stdout(&output));
}

#[test]
fn files_run_before_eval_sources() {
    let path = source_file("files_first.sl", "(set x 2)\n(print \"file\")");
    let output = run(&[path.to_str().expect("temp path is UTF-8"), "-e", "(print (mult (get x) 3))"]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!("file\n6\n", stdout(&output));
}

#[test]
fn diagnostics_fail_the_run() {
    let output = run(&["-e", "(print 1 #)"]);

    assert!(!output.status.success());
    assert_eq!("1\n", stdout(&output));
    assert!(stderr(&output).contains("Unknown character '#'"));
}

#[test]
fn missing_input_file_fails() {
    let output = run(&["does_not_exist.sl"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn stdin_is_read_without_inputs() {
    let output = run_with_stdin(&["--print-result"], "(add 1 2)\n(print \"hi\")");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!("=> 3\nhi\n=> hi\n", stdout(&output));
}

#[test]
fn tokens_are_dumped_without_evaluating() {
    let output = run(&["--tokens", "-e", "(print 1)"]);

    assert!(output.status.success());
    assert_eq!(
        "[line 1 column 1] `(`\n[line 1 column 2] `print`\n[line 1 column 8] `1`\n[line 1 column 9] `)`\n[line 1 column 10] Eof\n",
        stdout(&output),
    );
}

#[test]
fn ast_is_dumped_without_evaluating() {
    let output = run(&["--ast", "-e", "(print 1 \"a\")"]);

    assert!(output.status.success());
    assert_eq!("List([Identifier(\"print\"), NumberLiteral(1), StringLiteral(\"a\")])\n", stdout(&output));
}
