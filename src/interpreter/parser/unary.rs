use std::io::BufRead;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        lexer::Token,
        math::{factorial, pow},
        parser::{
            binary::expression,
            utils::{expect_closer, expect_opener, reject},
        },
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
    util::num::narrow,
};

/// Evaluates a primary expression.
///
/// Grammar:
/// ```text
///     primary := number "!"?
///              | "(" expression ")" "!"?
///              | "{" expression "}" "!"?
///              | "-" primary
///              | "+" primary
///              | name "=" expression
///              | name
///              | "sqrt" "(" expression ")"
///              | "pow" "(" expression "," expression ")"
/// ```
/// Assignment is an expression yielding the assigned value, so
/// `x = y = 10` binds both names.
///
/// # Errors
/// Returns `PrimaryExpected` if the leading token cannot start a primary,
/// and propagates every error raised while evaluating it.
pub(crate) fn primary<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    match ts.get()? {
        Token::LParen => {
            let value = grouping(ts, symbols, ')')?;
            factorial_suffix(ts, value)
        },
        Token::LBrace => {
            let value = grouping(ts, symbols, '}')?;
            factorial_suffix(ts, value)
        },
        Token::Number(value) => factorial_suffix(ts, value),
        Token::Minus => Ok(-primary(ts, symbols)?),
        Token::Plus => primary(ts, symbols),
        Token::Name(name) => name_or_assignment(ts, symbols, &name),
        Token::Sqrt => square_root(ts, symbols),
        Token::Pow => power(ts, symbols),
        token => Err(CalcError::PrimaryExpected { found: reject(ts, token)? }),
    }
}

/// Evaluates the expression inside a grouping whose opener was consumed.
fn grouping<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable, closer: char) -> CalcResult<f64>
    where R: BufRead
{
    let value = expression(ts, symbols)?;
    expect_closer(ts, closer)?;
    Ok(value)
}

/// Applies a trailing `!` to `value`, if present.
///
/// # Errors
/// - `Narrowing` if `value` is not an integer.
/// - `NegativeFactorial` or `Overflow` from [`factorial`].
fn factorial_suffix<R>(ts: &mut TokenStream<R>, value: f64) -> CalcResult<f64>
    where R: BufRead
{
    let token = ts.get()?;
    if token == Token::Bang {
        return factorial(narrow(value)?);
    }
    ts.putback(token)?;
    Ok(value)
}

/// Reads a variable, or assigns to it when the name is followed by `=`.
///
/// The right-hand side is evaluated before the name is looked up.
fn name_or_assignment<R>(ts: &mut TokenStream<R>,
                         symbols: &mut SymbolTable,
                         name: &str)
                         -> CalcResult<f64>
    where R: BufRead
{
    let token = ts.get()?;
    if token == Token::Equals {
        let value = expression(ts, symbols)?;
        symbols.set(name, value)?;
        return Ok(value);
    }

    ts.putback(token)?;
    symbols.get(name)
}

/// `sqrt "(" expression ")"`
fn square_root<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    expect_opener(ts, "sqrt")?;
    let value = grouping(ts, symbols, ')')?;
    if value < 0.0 {
        return Err(CalcError::NegativeSqrt { value });
    }
    Ok(value.sqrt())
}

/// `pow "(" expression "," expression ")"`, the exponent must be an integer.
fn power<R>(ts: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    expect_opener(ts, "pow")?;
    let base = grouping(ts, symbols, ',')?;
    let exponent = narrow(grouping(ts, symbols, ')')?)?;
    pow(base, exponent)
}
