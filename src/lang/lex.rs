use super::Opcode;

/// Turn source text into the instruction stream.
///
/// Comments are stripped, repeat counts are expanded, and every
/// character that is not an instruction is discarded. Loop brackets are
/// not checked for balance here; the runtime reports unmatched loops
/// when it reaches them.
pub fn lex(s: &str) -> Vec<Opcode> {
    SourceLexer {
        chars: s.chars().peekable(),
        repeat: None,
    }
    .collect()
}

struct SourceLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    repeat: Option<(Opcode, usize)>,
}

impl<'a> Iterator for SourceLexer<'a> {
    type Item = Opcode;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((op, extra)) = self.repeat {
            self.repeat = if extra > 1 { Some((op, extra - 1)) } else { None };
            return Some(op);
        }
        loop {
            let ch = self.chars.next()?;
            if ch == '#' {
                self.line_comment();
                continue;
            }
            if ch == '\'' {
                self.block_comment();
                continue;
            }
            if let Some(op) = Opcode::from_char(ch) {
                if op.repeatable() {
                    if let Some(count) = self.decimal() {
                        if count > 1 {
                            self.repeat = Some((op, count - 1));
                        }
                    }
                }
                return Some(op);
            }
        }
    }
}

impl<'a> SourceLexer<'a> {
    /// Everything through the next newline is a comment.
    fn line_comment(&mut self) {
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Everything through the closing quote is a comment. No nesting.
    fn block_comment(&mut self) {
        while let Some(ch) = self.chars.next() {
            if ch == '\'' {
                break;
            }
        }
    }

    /// Scan the decimal numeral immediately following an instruction,
    /// if any. A count of zero or one repeats nothing; oversized counts
    /// saturate.
    fn decimal(&mut self) -> Option<usize> {
        let mut count: Option<usize> = None;
        while let Some(digit) = self.chars.peek().and_then(|ch| ch.to_digit(10)) {
            self.chars.next();
            count = Some(
                count
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(digit as usize),
            );
        }
        count
    }
}
