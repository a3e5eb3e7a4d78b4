/// Top-level statements and declarations.
///
/// Entry point of the grammar: decides between a `let`/`const` declaration
/// and a plain expression.
pub mod statement;

/// Additive and multiplicative chains.
///
/// Implements `Expression` (`+`, `-`) and `Term` (`*`, `/`, `%`), both
/// left-associative. Precedence follows from the layering of the two.
pub mod binary;

/// Primaries.
///
/// Numbers, groupings, unary signs, names and assignments, factorial suffixes
/// and the `sqrt`/`pow` functions.
pub mod unary;

/// Helpers shared by the grammar productions.
mod utils;

pub use binary::expression;
pub use statement::statement;
