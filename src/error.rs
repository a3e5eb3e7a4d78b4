use thiserror::Error;

/// Result type shared by the tokenizer, the symbol table and the grammar.
pub type CalcResult<T> = Result<T, CalcError>;

/// Represents every failure a statement can run into.
///
/// Parsing and evaluation are interleaved, so syntax mistakes and arithmetic
/// failures travel through the same type. Every variant except [`Self::Io`]
/// aborts only the current statement.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A character that cannot start any token.
    #[error("bad token '{found}'")]
    BadToken {
        /// The offending character.
        found: char,
    },
    /// A second token was pushed back before the first was consumed.
    #[error("putback() into a full buffer")]
    BufferFull,
    /// A declaration was not followed by a name.
    #[error("name expected in declaration, found {found}")]
    NameExpected {
        /// Description of the token that was found instead.
        found: String,
    },
    /// A declared name was not followed by `=`.
    #[error("'=' expected in declaration of {name}")]
    AssignExpected {
        /// The name being declared.
        name: String,
    },
    /// Two operands appeared without an operator between them.
    #[error("operand expected, found {found}")]
    OperandExpected {
        /// Description of the token that was found instead.
        found: String,
    },
    /// Division, remainder or negative power with a zero divisor.
    #[error("{operation}: divide by zero")]
    DivideByZero {
        /// The operation that divided by zero (`/`, `%`, `pow`).
        operation: &'static str,
    },
    /// A value with a fractional part (or out of range) used as an integer.
    #[error("narrowing error: {value} is not an integer")]
    Narrowing {
        /// The value that could not be narrowed.
        value: f64,
    },
    /// Assignment to a constant.
    #[error("can't change constant {name}")]
    ImmutableAssignment {
        /// The name of the constant.
        name: String,
    },
    /// Use of a name that was never declared.
    #[error("undeclared variable {name}")]
    UndeclaredName {
        /// The unknown name.
        name: String,
    },
    /// A second declaration of an existing name.
    #[error("{name} declared twice")]
    DuplicateName {
        /// The name declared twice.
        name: String,
    },
    /// Declaration of a reserved word.
    #[error("{name} is a reserved name")]
    ReservedName {
        /// The reserved word.
        name: String,
    },
    /// Square root of a negative number.
    #[error("sqrt: square root of negative number {value}")]
    NegativeSqrt {
        /// The negative argument.
        value: f64,
    },
    /// Factorial of a negative integer.
    #[error("factorial is defined only for non-negative integers, got {value}")]
    NegativeFactorial {
        /// The negative argument.
        value: i32,
    },
    /// A result too large to be represented.
    #[error("{operation}: overflow")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
    /// A token that cannot start a primary expression.
    #[error("primary expected, found {found}")]
    PrimaryExpected {
        /// Description of the token that was found instead.
        found: String,
    },
    /// A missing `)`, `}` or `,`.
    #[error("'{expected}' expected, found {found}")]
    CloserExpected {
        /// The closing character the grammar required.
        expected: char,
        /// Description of the token that was found instead.
        found:    String,
    },
    /// A function keyword not followed by `(`.
    #[error("{function}: '(' expected, found {found}")]
    OpenerExpected {
        /// The function keyword (`sqrt` or `pow`).
        function: &'static str,
        /// Description of the token that was found instead.
        found:    String,
    },
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Returns `true` if the session cannot continue after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
