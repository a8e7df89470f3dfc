use crate::lang::Error;
use crate::mach::{Program, Runtime};

mod runtime_test;
mod stack_test;

fn run(source: &str, input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut runtime = Runtime::new(Program::compile(source));
    let mut input = input;
    let mut output = Vec::new();
    runtime.execute(&mut input, &mut output)?;
    Ok(output)
}
