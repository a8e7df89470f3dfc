//! # Tape
//!
//! Command line runner for the Tape esoteric programming language.

use ansi_term::Style;
use std::env;
use std::fs;
use std::io;
use std::io::Write;
use std::process::exit;
use std::sync::atomic::Ordering;
use tape::mach::{Program, Runtime};

fn main() {
    let mut args = env::args();
    let program_name = args.next().unwrap_or_else(|| "tape".to_string());
    let filename = match args.next() {
        Some(filename) => filename,
        None => {
            eprintln!("Usage: {} <SOURCE_FILE>", program_name);
            exit(1);
        }
    };
    let source = match fs::read(&filename) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            eprintln!("{}: {}", filename, error);
            exit(1);
        }
    };

    let mut runtime = Runtime::new(Program::compile(&source));
    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let result = runtime.execute(&mut stdin.lock(), &mut output);
    // Emitted bytes survive a fatal error.
    let _ = output.flush();
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        exit(2);
    }
}
