//! # Tape
//!
//! An interpreter for the Tape esoteric programming language: a
//! Brainfuck descendant with repeat counts, comments, and a random-fill
//! instruction.
//!
//! A program is a stream of single-character instructions run against a
//! tape of 30000 byte cells:
//!
//! ```text
//! >  <   move the cursor right or left, wrapping at either end
//! +  -   increment or decrement the current cell, modulo 256
//! .      write the current cell to the output stream
//! *      read one byte from the input stream into the current cell
//! ?      fill the current cell with a random byte
//! [ ]    loop while the current cell is nonzero; ( ) and { } also work
//! ```
//!
//! `>`, `<`, `+`, and `-` accept a decimal repeat count, so `+65.` prints
//! an `A`. A `#` comments out the rest of the line and a pair of `'`
//! quotes comments out everything between them.

pub mod lang;
pub mod mach;
