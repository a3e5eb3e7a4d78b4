//! # tally
//!
//! tally is an interactive arithmetic calculator written in Rust.
//! It reads statements such as `let r = 2; pi * r * r;`, evaluates them with
//! a recursive-descent grammar and prints one result per statement.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{
        lexer::Token,
        parser::statement,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Provides the unified error type.
///
/// Parsing and evaluation are interleaved, so every failure (bad characters,
/// syntax mistakes, arithmetic errors, symbol table violations, I/O) is a
/// variant of one enum, `CalcError`.
pub mod error;
/// Tokenizer, symbol table and grammar.
///
/// This module turns raw characters into evaluated doubles: the token stream
/// feeds the recursive-descent parser, which reads and writes the symbol
/// table as it resolves names and assignments.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Prints the greeting and prompts, dispatches the `quit` and `help` markers,
/// reports errors and resynchronizes on the next statement terminator.
pub mod repl;
/// General numeric helpers.
pub mod util;

/// Evaluates every statement in `source` and returns their results.
///
/// A fresh environment holding `pi` and `e` is used. Statement terminators
/// are skipped, evaluation stops at `quit` or at the end of the source, and
/// `help` is ignored.
///
/// # Errors
/// Returns the first error raised by any statement.
///
/// # Examples
/// ```
/// use tally::get_results;
///
/// let results = get_results("let x = 2; x * 21; quit; 99;").unwrap();
/// assert_eq!(results, vec![2.0, 42.0]);
///
/// // 'y' is not defined
/// assert!(get_results("let x = y + 1;").is_err());
/// ```
pub fn get_results(source: &str) -> CalcResult<Vec<f64>> {
    let mut ts = TokenStream::new(source.as_bytes());
    let mut symbols = SymbolTable::with_constants();
    let mut results = Vec::new();

    loop {
        match ts.get()? {
            Token::Print | Token::Help => {},
            Token::End | Token::Quit => return Ok(results),
            token => {
                ts.putback(token)?;
                results.push(statement(&mut ts, &mut symbols)?);
            },
        }
    }
}

