use std::fmt;

use logos::Logos;

/// The statement terminator, printed results follow it.
pub const PRINT: char = ';';

/// Represents a lexical token in the calculator input.
///
/// Keywords are matched case-sensitively by the lexer. The session markers
/// `quit` and `help` are matched case-insensitively after an identifier has
/// been lexed, see [`Token::classify_word`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.`, `3.14`, `.5` or `2e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Name(String),
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `pow`
    #[token("pow")]
    Pow,
    /// `;`
    #[token(";")]
    Print,
    /// `quit`, in any letter case.
    Quit,
    /// `help`, in any letter case.
    Help,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// The input source is exhausted.
    End,
    /// Spaces, tabs, line breaks, vertical tabs and form feeds.
    #[regex(r"[ \t\r\n\x0b\x0c]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Turns a lexed identifier into a session marker when it spells `quit`
    /// or `help` in any letter case.
    #[must_use]
    pub fn classify_word(self) -> Self {
        match self {
            Self::Name(word) if word.eq_ignore_ascii_case("quit") => Self::Quit,
            Self::Name(word) if word.eq_ignore_ascii_case("help") => Self::Help,
            other => other,
        }
    }

    /// Returns the literal character of an operator or punctuation token.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        let c = match self {
            Self::Print => PRINT,
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::Bang => '!',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::LBrace => '{',
            Self::RBrace => '}',
            Self::Equals => '=',
            Self::Comma => ',',
            _ => return None,
        };
        Some(c)
    }

    /// Returns `true` for tokens that can only begin a new operand.
    ///
    /// Such a token directly after a complete term means two operands were
    /// written without an operator, as in `(1+1)1`.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::Name(_)
                 | Self::LParen
                 | Self::LBrace
                 | Self::Equals
                 | Self::Sqrt
                 | Self::Pow)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Name(name) => write!(f, "name {name}"),
            Self::Let => f.write_str("'let'"),
            Self::Const => f.write_str("'const'"),
            Self::Sqrt => f.write_str("'sqrt'"),
            Self::Pow => f.write_str("'pow'"),
            Self::Print => write!(f, "'{PRINT}'"),
            Self::Quit => f.write_str("'quit'"),
            Self::Help => f.write_str("'help'"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Percent => f.write_str("'%'"),
            Self::Bang => f.write_str("'!'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::LBrace => f.write_str("'{'"),
            Self::RBrace => f.write_str("'}'"),
            Self::Equals => f.write_str("'='"),
            Self::Comma => f.write_str("','"),
            Self::End => f.write_str("end of input"),
            Self::Ignored => f.write_str("whitespace"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.expect("lexing failed").classify_word())
                            .collect()
    }

    #[test]
    fn numbers_in_all_forms() {
        assert_eq!(lex_all("12 12. 12.5 .5 2e3 1.5E-2"),
                   vec![Token::Number(12.0),
                        Token::Number(12.0),
                        Token::Number(12.5),
                        Token::Number(0.5),
                        Token::Number(2000.0),
                        Token::Number(0.015)]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lex_all("let const sqrt pow"),
                   vec![Token::Let, Token::Const, Token::Sqrt, Token::Pow]);
        assert_eq!(lex_all("LET Sqrt"),
                   vec![Token::Name("LET".into()), Token::Name("Sqrt".into())]);
    }

    #[test]
    fn session_markers_are_case_insensitive() {
        assert_eq!(lex_all("quit QUIT Help hElP"),
                   vec![Token::Quit, Token::Quit, Token::Help, Token::Help]);
        assert_eq!(lex_all("quitter helpful"),
                   vec![Token::Name("quitter".into()), Token::Name("helpful".into())]);
    }

    #[test]
    fn identifiers_take_the_longest_run() {
        assert_eq!(lex_all("letter pow2 rate_of_3"),
                   vec![Token::Name("letter".into()),
                        Token::Name("pow2".into()),
                        Token::Name("rate_of_3".into())]);
    }

    #[test]
    fn punctuation_represents_itself() {
        let tokens = lex_all("+-*/%!(){}=,;");
        let symbols: String = tokens.iter().filter_map(Token::symbol).collect();
        assert_eq!(symbols, "+-*/%!(){}=,;");
    }

    #[test]
    fn all_ascii_whitespace_is_skipped() {
        assert_eq!(lex_all(" 1\t+\r\n1\x0b*\x0c2 "),
                   vec![Token::Number(1.0),
                        Token::Plus,
                        Token::Number(1.0),
                        Token::Star,
                        Token::Number(2.0)]);
    }

    #[test]
    fn display_quotes_punctuation() {
        for token in lex_all("+-*/%!(){}=,;") {
            let c = token.symbol().unwrap();
            assert_eq!(token.to_string(), format!("'{c}'"));
        }
        assert_eq!(Token::End.to_string(), "end of input");
        assert_eq!(Token::Ignored.to_string(), "whitespace");
    }

    #[test]
    fn unknown_characters_fail() {
        let mut lexer = Token::lexer("1 # 2");
        assert_eq!(lexer.next(), Some(Ok(Token::Number(1.0))));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.slice(), "#");
    }

    #[test]
    fn underscore_cannot_start_a_name() {
        let mut lexer = Token::lexer("_x");
        assert_eq!(lexer.next(), Some(Err(())));
    }
}
