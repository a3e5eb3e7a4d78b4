use std::io::BufRead;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        lexer::Token,
        parser::unary::primary,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
    util::num::narrow,
};

/// Evaluates a left-associative chain of terms joined by `+` and `-`.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// The first token after the chain is pushed back, unless it can only begin
/// another operand. That case means an operator is missing, as in `(1+1)1`,
/// and is reported instead of silently ending the expression.
///
/// # Errors
/// - `OperandExpected` if an operand directly follows a complete term.
/// - Propagates any error from the terms.
pub fn expression<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = term(ts, symbols)?;

    loop {
        match ts.get()? {
            Token::Plus => left += term(ts, symbols)?,
            Token::Minus => left -= term(ts, symbols)?,
            token if token.starts_operand() => {
                return Err(CalcError::OperandExpected { found: token.to_string() });
            },
            token => {
                ts.putback(token)?;
                return Ok(left);
            },
        }
    }
}

/// Evaluates a left-associative chain of primaries joined by `*`, `/` and
/// `%`.
///
/// Grammar: `term := primary (("*" | "/" | "%") primary)*`
///
/// `%` works on integers: both operands are narrowed to `i32` and the result
/// is the integer remainder, taking the sign of the dividend.
///
/// # Errors
/// - `DivideByZero` for `/` or `%` with a zero divisor.
/// - `Narrowing` if an operand of `%` is not an integer.
/// - `Overflow` for `i32::MIN % -1`.
pub(crate) fn term<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = primary(ts, symbols)?;

    loop {
        match ts.get()? {
            Token::Star => left *= primary(ts, symbols)?,
            Token::Slash => {
                let divisor = primary(ts, symbols)?;
                if divisor == 0.0 {
                    return Err(CalcError::DivideByZero { operation: "/" });
                }
                left /= divisor;
            },
            Token::Percent => {
                let dividend = narrow(left)?;
                let divisor = narrow(primary(ts, symbols)?)?;
                if divisor == 0 {
                    return Err(CalcError::DivideByZero { operation: "%" });
                }
                let remainder = dividend.checked_rem(divisor)
                                        .ok_or(CalcError::Overflow { operation: "%" })?;
                left = f64::from(remainder);
            },
            token => {
                ts.putback(token)?;
                return Ok(left);
            },
        }
    }
}
