use tape::lang::Error;
use tape::mach::{Program, Runtime};

pub fn run(source: &str, input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut runtime = Runtime::new(Program::compile(source));
    let mut input = input;
    let mut output = Vec::new();
    runtime.execute(&mut input, &mut output)?;
    Ok(output)
}
