/// ## Machine instruction set
///
/// One instruction per source glyph. The alternate bracket pairs `(` `)`
/// and `{` `}` are folded into `Open` and `Close` here, so the machine
/// only ever sees one loop form.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Move the cursor one cell right, wrapping at the end of the tape.
    Right,
    /// Move the cursor one cell left, wrapping at the start of the tape.
    Left,
    /// Increment the current cell, wrapping at 255.
    Inc,
    /// Decrement the current cell, wrapping at 0.
    Dec,
    /// Write the current cell to the output stream.
    Print,
    /// Read one byte from the input stream into the current cell.
    Input,
    /// Fill the current cell with a random byte.
    Rnd,
    /// Enter the loop body if the current cell is nonzero, else skip
    /// past the matching `Close`.
    Open,
    /// Re-enter the loop body if the current cell is nonzero, else
    /// leave the loop.
    Close,
}

impl Opcode {
    pub fn from_char(ch: char) -> Option<Opcode> {
        match ch {
            '>' => Some(Opcode::Right),
            '<' => Some(Opcode::Left),
            '+' => Some(Opcode::Inc),
            '-' => Some(Opcode::Dec),
            '.' => Some(Opcode::Print),
            '*' => Some(Opcode::Input),
            '?' => Some(Opcode::Rnd),
            '[' | '(' | '{' => Some(Opcode::Open),
            ']' | ')' | '}' => Some(Opcode::Close),
            _ => None,
        }
    }

    /// Movement and arithmetic accept a decimal repeat count in source.
    pub fn repeatable(self) -> bool {
        matches!(
            self,
            Opcode::Right | Opcode::Left | Opcode::Inc | Opcode::Dec
        )
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Right => write!(f, "RIGHT"),
            Left => write!(f, "LEFT"),
            Inc => write!(f, "INC"),
            Dec => write!(f, "DEC"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Rnd => write!(f, "RND"),
            Open => write!(f, "OPEN"),
            Close => write!(f, "CLOSE"),
        }
    }
}
