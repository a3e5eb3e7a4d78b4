use std::io::{BufRead, Write};

use tracing::warn;

use crate::{
    error::CalcResult,
    interpreter::{
        lexer::{PRINT, Token},
        parser::statement,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Printed before reading a new line of input.
pub const PROMPT: &str = "> ";
/// Printed before every result.
pub const RESULT: &str = "= ";

const GREETING: &str = "\
Simple calculator
Type 'help' for help and 'quit' to exit.
Enter an expression using floating-point numbers and end it with ';'.
";

const HELP: &str = "\
Operators: '+', '-', '*', '/' and '%' (integers only).
Grouping: '(' ')' and '{' '}'.
Functions:
  n!         factorial, integers only
  sqrt(x)    square root
  pow(x, n)  x to the integer power n
Variables:
  let NAME = EXPRESSION     declares a variable
  const NAME = EXPRESSION   declares a constant
  NAME = EXPRESSION         assigns a new value to a variable
  A name starts with a letter and continues with letters, digits or '_'.
  'pi' and 'e' are predefined.
End a statement with ';' to print its result, 'help' shows this text and
'quit' exits.
";

/// What the session shows besides results and errors.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Print the greeting before the first prompt.
    pub greeting: bool,
    /// Print a prompt whenever a new line of input is needed.
    pub prompt:   bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { greeting: true,
               prompt:   true, }
    }
}

impl SessionOptions {
    /// No greeting and no prompts, for scripts and piped input.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { greeting: false,
               prompt:   false, }
    }
}

/// The outcome of reading one item at the top of the loop.
enum Step {
    Value(f64),
    Help,
    Skip,
    Stop,
}

/// A calculator session: one token stream and one environment.
///
/// The environment starts with the constants `pi` and `e` and lives as long
/// as the session.
pub struct Session<R> {
    tokens:  TokenStream<R>,
    symbols: SymbolTable,
    options: SessionOptions,
}

impl<R: BufRead> Session<R> {
    #[must_use]
    pub fn new(reader: R, options: SessionOptions) -> Self {
        Self { tokens: TokenStream::new(reader),
               symbols: SymbolTable::with_constants(),
               options }
    }

    /// The session environment.
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Runs the read-eval-print loop until `quit` or the end of input.
    ///
    /// Results go to `out` as `= <value>`. A failed statement is reported on
    /// `err` and the input is skipped up to the next `;` before the loop
    /// continues.
    ///
    /// # Errors
    /// Returns `Io` if reading the input or writing either output fails.
    pub fn run<W, E>(&mut self, out: &mut W, err: &mut E) -> CalcResult<()>
        where W: Write,
              E: Write
    {
        if self.options.greeting {
            out.write_all(GREETING.as_bytes())?;
        }

        loop {
            if self.options.prompt && self.tokens.needs_input() {
                out.write_all(PROMPT.as_bytes())?;
                out.flush()?;
            }

            match self.step() {
                Ok(Step::Value(value)) => writeln!(out, "{RESULT}{value}")?,
                Ok(Step::Help) => out.write_all(HELP.as_bytes())?,
                Ok(Step::Skip) => {},
                Ok(Step::Stop) => return Ok(()),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    let line = self.tokens.line();
                    warn!(line, error = %e, "statement failed");
                    writeln!(err, "error on line {line}: {e}")?;
                    self.tokens.ignore(PRINT)?;
                },
            }
        }
    }

    fn step(&mut self) -> CalcResult<Step> {
        match self.tokens.get()? {
            Token::Print => Ok(Step::Skip),
            Token::End | Token::Quit => Ok(Step::Stop),
            Token::Help => Ok(Step::Help),
            token => {
                self.tokens.putback(token)?;
                statement(&mut self.tokens, &mut self.symbols).map(Step::Value)
            },
        }
    }
}
