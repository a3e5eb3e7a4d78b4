/// The lexer module defines the calculator's tokens.
///
/// Tokens are produced by a `logos` lexer: numbers, names, the keywords
/// `let`, `const`, `sqrt` and `pow`, the session markers `quit` and `help`,
/// and single-character operators and punctuation.
pub mod lexer;
/// Integer powers and factorials over doubles.
pub mod math;
/// The parser module evaluates statements while parsing them.
///
/// A recursive-descent grammar (statement, expression, term, primary) reads
/// tokens on demand and computes the result directly, without building a
/// syntax tree. One token of lookahead decides every production.
///
/// # Responsibilities
/// - Enforces precedence through the layering of the productions.
/// - Binds and rebinds names in the symbol table as declarations and
///   assignments are evaluated.
/// - Aborts the statement on the first error.
pub mod parser;
/// The session environment of variables and constants.
pub mod symbol_table;
/// Lazily lexed token input with one token of pushback.
///
/// Reads a line-oriented character source, hands out one token per request,
/// and provides the recovery hook that skips to the next statement
/// terminator after an error.
pub mod token_stream;
