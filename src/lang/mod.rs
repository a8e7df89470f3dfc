/*!
# Language Module

This Rust module turns Tape source text into the instruction stream
executed by the machine module.

*/

#[macro_use]
mod error;
mod lex;
mod opcode;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use opcode::Opcode;

#[cfg(test)]
mod tests;
