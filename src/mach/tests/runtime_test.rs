use super::run;
use crate::mach::{Program, Runtime};
use std::sync::atomic::Ordering;

#[test]
fn test_print_three() {
    assert_eq!(run("+++.", b"").unwrap(), [3]);
}

#[test]
fn test_repeat_print() {
    assert_eq!(run("+65.", b"").unwrap(), b"A");
}

#[test]
fn test_cell_arithmetic_wraps() {
    assert_eq!(run("-.", b"").unwrap(), [255]);
    assert_eq!(run("+255+.", b"").unwrap(), [0]);
}

#[test]
fn test_input_stores_bytes() {
    assert_eq!(run("*.*.", b"ok").unwrap(), b"ok");
}

#[test]
fn test_exhausted_input_reads_255() {
    assert_eq!(run("*.", b"").unwrap(), [255]);
}

#[test]
fn test_random_fill_writes_one_byte() {
    assert_eq!(run("?.", b"").unwrap().len(), 1);
}

#[test]
fn test_loop_skipped_when_cell_is_zero() {
    assert_eq!(run("[+++].", b"").unwrap(), [0]);
}

#[test]
fn test_loop_body_runs_until_zero() {
    assert_eq!(run("+2[>+3<-]>.", b"").unwrap(), [6]);
}

#[test]
fn test_nested_loops() {
    // Three outer passes, each draining two from the second cell into
    // the third.
    assert_eq!(run("+3[>+2[>+<-]<-]>>.", b"").unwrap(), [6]);
}

#[test]
fn test_multiplication_loop() {
    assert_eq!(run("++++++++[>++++++++<-]>.", b"").unwrap(), [64]);
}

#[test]
fn test_unmatched_loop_open() {
    let error = run("[", b"").unwrap_err();
    assert_eq!(error.to_string(), "UNMATCHED LOOP OPEN AT 0");
}

#[test]
fn test_unmatched_loop_open_reports_opening_address() {
    let error = run("+[-[", b"").unwrap_err();
    assert_eq!(error.to_string(), "UNMATCHED LOOP OPEN AT 3");
}

#[test]
fn test_unmatched_loop_close() {
    let error = run("]", b"").unwrap_err();
    assert_eq!(error.to_string(), "UNMATCHED LOOP CLOSE AT 0");
}

#[test]
fn test_loop_stack_overflow() {
    let mut source = String::from("+");
    source.push_str(&"[".repeat(1025));
    let error = run(&source, b"").unwrap_err();
    assert_eq!(
        error.to_string(),
        "LOOP STACK OVERFLOW; LOOP NESTING TOO DEEP"
    );
}

#[test]
fn test_output_kept_before_fatal_error() {
    let mut runtime = Runtime::new(Program::compile("+++.]"));
    let mut input: &[u8] = b"";
    let mut output = Vec::new();
    let error = runtime.execute(&mut input, &mut output).unwrap_err();
    assert_eq!(output, [3]);
    assert_eq!(error.to_string(), "UNMATCHED LOOP CLOSE AT 4");
}

#[test]
fn test_interrupt_reports_break() {
    let mut runtime = Runtime::new(Program::compile("+[]"));
    runtime.interrupt_flag().store(true, Ordering::SeqCst);
    let mut input: &[u8] = b"";
    let mut output = Vec::new();
    let error = runtime.execute(&mut input, &mut output).unwrap_err();
    assert_eq!(error.to_string(), "BREAK AT 0");
}
