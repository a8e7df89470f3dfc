use tape::lang::{lex, Opcode};
use tape::mach::Program;

#[test]
fn test_clean_source_passes_through() {
    let source = "><+-.*?[]";
    let stream = lex(source);
    assert_eq!(stream.len(), source.len());
    assert_eq!(Program::compile(source).ops(), &stream[..]);
}

#[test]
fn test_bracket_styles_compile_identically() {
    assert_eq!(Program::compile("(+)").ops(), Program::compile("[+]").ops());
    assert_eq!(Program::compile("{+}").ops(), Program::compile("[+]").ops());
}

#[test]
fn test_repeat_expansion() {
    assert_eq!(Program::compile("+5").ops(), vec![Opcode::Inc; 5].as_slice());
    assert_eq!(Program::compile("+0").ops(), &[Opcode::Inc][..]);
}

#[test]
fn test_invalid_characters_removed() {
    let noisy = "a > b < c #++\n '..' - .";
    assert_eq!(
        Program::compile(noisy).ops(),
        &[Opcode::Right, Opcode::Left, Opcode::Dec, Opcode::Print][..]
    );
}

#[test]
fn test_stream_length() {
    assert_eq!(Program::compile("+5").len(), 5);
    assert!(Program::compile("# nothing here").is_empty());
}
