//! PHP lexical vocabulary and the ordered pass table.

use super::{Pass, PassKind, TokenCategory};

pub const KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch",
    "class", "clone", "const", "continue", "declare", "default", "do", "echo",
    "else", "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif",
    "endswitch", "endwhile", "eval", "exit", "extends", "final", "finally",
    "fn", "for", "foreach", "function", "global", "goto", "if", "implements",
    "include", "include_once", "instanceof", "insteadof", "interface", "isset",
    "list", "match", "namespace", "new", "or", "print", "private", "protected",
    "public", "readonly", "require", "require_once", "return", "static", "switch",
    "throw", "trait", "try", "unset", "use", "var", "while", "xor", "yield",
];

pub const CONSTANTS: &[&str] = &["true", "false", "null", "TRUE", "FALSE", "NULL"];

/// Whole-word alternation over a closed vocabulary.
fn words(vocabulary: &[&str]) -> String {
    format!(r"\b(?:{})\b", vocabulary.join("|"))
}

/// Passes in evaluation order.
pub(super) fn passes() -> Vec<Pass> {
    use PassKind::{Literal, Token};
    use TokenCategory::*;

    vec![
        Pass::new(Literal, Comment, r"//[^\n]*".into()),
        Pass::new(Literal, Comment, r"#[^\n]*".into()),
        Pass::new(Literal, Comment, r"(?s)/\*.*?\*/".into()),
        Pass::new(Literal, StringLiteral, r#"(?s)"(?:[^"\\]|\\.)*""#.into()),
        Pass::new(Literal, StringLiteral, r"(?s)'(?:[^'\\]|\\.)*'".into()),
        Pass::new(Token, Number, r"\b[0-9]+(?:\.[0-9]+)?\b".into()),
        Pass::new(Token, Variable, r"\$[a-zA-Z_][a-zA-Z0-9_]*".into()),
        Pass::new(Token, Keyword, words(KEYWORDS)),
        Pass::new(Token, Constant, words(CONSTANTS)),
    ]
}
