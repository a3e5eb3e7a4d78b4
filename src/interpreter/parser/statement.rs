use std::io::BufRead;

use tracing::debug;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        lexer::Token,
        parser::{binary::expression, utils::reject},
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Evaluates exactly one top-level statement and returns its value.
///
/// Grammar:
/// ```text
///     statement   := declaration | expression
///     declaration := ("let" | "const") name "=" expression
/// ```
/// `let` declares a variable and `const` a constant. Anything else is
/// evaluated as an expression. The statement terminator is left in the
/// stream for the caller.
///
/// # Errors
/// Any failure aborts the whole statement. Declarations in the statement
/// that completed before the failure keep their effect.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     parser::statement, symbol_table::SymbolTable, token_stream::TokenStream,
/// };
///
/// let mut ts = TokenStream::new("let r = 2; pi * r * r;".as_bytes());
/// let mut symbols = SymbolTable::with_constants();
///
/// assert_eq!(statement(&mut ts, &mut symbols).unwrap(), 2.0);
/// ts.get().unwrap(); // ';'
/// let area = statement(&mut ts, &mut symbols).unwrap();
/// assert!((area - 12.566_370_614).abs() < 1e-9);
/// ```
pub fn statement<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let value = match ts.get()? {
        Token::Let => declaration(ts, symbols, true)?,
        Token::Const => declaration(ts, symbols, false)?,
        token => {
            ts.putback(token)?;
            expression(ts, symbols)?
        },
    };

    debug!(line = ts.line(), value, "statement");
    Ok(value)
}

/// Parses the part of a declaration after `let` or `const` and binds the
/// name.
///
/// # Errors
/// - `ReservedName` if the name is one of the keywords `const`, `sqrt` or
///   `pow`.
/// - `NameExpected` if any other non-name token follows the keyword.
/// - `AssignExpected` if the name is not followed by `=`.
/// - `DuplicateName` if the name is already declared.
fn declaration<R>(ts: &mut TokenStream<R>,
                  symbols: &mut SymbolTable,
                  mutable: bool)
                  -> CalcResult<f64>
    where R: BufRead
{
    let name = match ts.get()? {
        Token::Name(name) => name,
        Token::Const => return Err(reserved("const")),
        Token::Sqrt => return Err(reserved("sqrt")),
        Token::Pow => return Err(reserved("pow")),
        token => return Err(CalcError::NameExpected { found: reject(ts, token)? }),
    };

    let token = ts.get()?;
    if token != Token::Equals {
        ts.putback(token)?;
        return Err(CalcError::AssignExpected { name });
    }

    let value = expression(ts, symbols)?;
    symbols.define(&name, value, mutable)?;
    Ok(value)
}

fn reserved(name: &str) -> CalcError {
    CalcError::ReservedName { name: name.to_owned() }
}
