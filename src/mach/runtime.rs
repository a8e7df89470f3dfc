use super::{Address, Program, Stack, Tape, LOOP_DEPTH};
use crate::error;
use crate::lang::{Error, Opcode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine runtime
///
/// Owns everything one execution needs: the instruction stream, the
/// tape and cursor, the loop stack, the program counter, and the random
/// generator. Constructing a runtime seeds the generator from the
/// clock, so runs are not reproducible.

pub struct Runtime {
    program: Program,
    pc: Address,
    tape: Tape,
    loops: Stack<Address>,
    rng: StdRng,
    interrupted: Arc<AtomicBool>,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            pc: 0,
            tape: Tape::new(),
            loops: Stack::new(LOOP_DEPTH, "LOOP NESTING TOO DEEP"),
            rng: StdRng::seed_from_u64(clock_seed()),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag that makes the next dispatched instruction fail with
    /// BREAK. Hand this to a Ctrl-C handler.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    /// Run the program to completion.
    ///
    /// PRINT writes the current cell to `output` one byte at a time.
    /// INPUT takes the next byte from `input`, blocking until one
    /// arrives; once `input` is exhausted every further INPUT stores
    /// 255. Bytes already written stay written when a fatal error halts
    /// execution.
    pub fn execute(&mut self, input: &mut impl Read, output: &mut impl Write) -> Result<()> {
        while let Some(op) = self.program.op(self.pc) {
            if self.interrupted.load(Ordering::SeqCst) {
                return Err(error!(Break, self.pc));
            }
            self.pc += 1;
            match op {
                Opcode::Right => self.tape.right(),
                Opcode::Left => self.tape.left(),
                Opcode::Inc => self.tape.set(self.tape.get().wrapping_add(1)),
                Opcode::Dec => self.tape.set(self.tape.get().wrapping_sub(1)),
                Opcode::Print => self.print(output)?,
                Opcode::Input => self.input(input)?,
                Opcode::Rnd => self.tape.set(self.rng.gen()),
                Opcode::Open => self.open()?,
                Opcode::Close => self.close()?,
            }
        }
        Ok(())
    }

    fn print(&mut self, output: &mut impl Write) -> Result<()> {
        match output.write_all(&[self.tape.get()]) {
            Ok(()) => Ok(()),
            Err(_) => Err(error!(InternalError, self.pc - 1; "WRITE FAILED")),
        }
    }

    fn input(&mut self, input: &mut impl Read) -> Result<()> {
        let mut byte = [0];
        loop {
            return match input.read(&mut byte) {
                Ok(0) => {
                    // Exhausted input reads as 255.
                    self.tape.set(0xFF);
                    Ok(())
                }
                Ok(_) => {
                    self.tape.set(byte[0]);
                    Ok(())
                }
                Err(ref error) if error.kind() == ErrorKind::Interrupted => {
                    if self.interrupted.load(Ordering::SeqCst) {
                        Err(error!(Break, self.pc - 1))
                    } else {
                        continue;
                    }
                }
                Err(_) => Err(error!(InternalError, self.pc - 1; "READ FAILED")),
            };
        }
    }

    fn open(&mut self) -> Result<()> {
        let open_addr = self.pc - 1;
        if self.tape.get() != 0 {
            return self.loops.push(open_addr);
        }
        // Zero cell: skip to just past the matching Close.
        let mut depth = 1;
        while depth > 0 {
            match self.program.op(self.pc) {
                Some(Opcode::Open) => depth += 1,
                Some(Opcode::Close) => depth -= 1,
                Some(_) => {}
                None => return Err(error!(UnmatchedLoopOpen, open_addr)),
            }
            self.pc += 1;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let close_addr = self.pc - 1;
        let open_addr = match self.loops.last() {
            Some(addr) => *addr,
            None => return Err(error!(UnmatchedLoopClose, close_addr)),
        };
        if self.tape.get() != 0 {
            self.pc = open_addr + 1;
        } else {
            self.loops.pop()?;
        }
        Ok(())
    }
}

fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(_) => 0,
    }
}
