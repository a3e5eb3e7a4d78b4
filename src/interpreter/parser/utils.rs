use std::io::BufRead;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{lexer::Token, token_stream::TokenStream},
};

/// Consumes the next token and checks that it is the `expected` closer
/// (`)`, `}` or `,`).
///
/// # Errors
/// Returns `CloserExpected` naming the token found instead.
pub(in crate::interpreter::parser) fn expect_closer<R>(ts: &mut TokenStream<R>,
                                                       expected: char)
                                                       -> CalcResult<()>
    where R: BufRead
{
    let token = ts.get()?;
    if token.symbol() == Some(expected) {
        return Ok(());
    }
    Err(CalcError::CloserExpected { expected,
                                    found: reject(ts, token)? })
}

/// Consumes the `(` that must follow a function keyword.
///
/// # Errors
/// Returns `OpenerExpected` naming the function and the token found instead.
pub(in crate::interpreter::parser) fn expect_opener<R>(ts: &mut TokenStream<R>,
                                                       function: &'static str)
                                                       -> CalcResult<()>
    where R: BufRead
{
    match ts.get()? {
        Token::LParen => Ok(()),
        token => Err(CalcError::OpenerExpected { function,
                                                 found: reject(ts, token)? }),
    }
}

/// Pushes back a token the grammar cannot accept and describes it.
///
/// The token stays in the stream, so a terminator that caused the failure
/// is consumed by error recovery rather than the statement after it.
pub(in crate::interpreter::parser) fn reject<R>(ts: &mut TokenStream<R>,
                                                token: Token)
                                                -> CalcResult<String>
    where R: BufRead
{
    let found = token.to_string();
    ts.putback(token)?;
    Ok(found)
}
