use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Names that can never be declared.
pub const RESERVED_NAMES: [&str; 3] = ["const", "pow", "sqrt"];

/// A named value. Constants are variables with `mutable` unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The declared identifier.
    pub name:    String,
    /// The current value.
    pub value:   f64,
    /// `false` for constants, which reject assignment.
    pub mutable: bool,
}

/// The session environment: every declared variable and constant in
/// declaration order.
///
/// Names are global to the session and are never removed.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding the predefined constants `pi` and `e`.
    #[must_use]
    #[allow(clippy::approx_constant)]
    pub fn with_constants() -> Self {
        let variables = vec![Variable { name:    "pi".to_owned(),
                                        value:   3.141_592_653_5,
                                        mutable: false, },
                             Variable { name:    "e".to_owned(),
                                        value:   2.718_281_828_4,
                                        mutable: false, },];
        Self { variables }
    }

    /// Declares `name` with an initial value.
    ///
    /// # Errors
    /// - `DuplicateName` if `name` is already declared.
    /// - `ReservedName` if `name` is one of [`RESERVED_NAMES`].
    pub fn define(&mut self, name: &str, value: f64, mutable: bool) -> CalcResult<()> {
        if self.is_declared(name) {
            return Err(CalcError::DuplicateName { name: name.to_owned() });
        }
        if Self::is_prohibited(name) {
            return Err(CalcError::ReservedName { name: name.to_owned() });
        }

        debug!(name, value, mutable, "define");
        self.variables.push(Variable { name: name.to_owned(),
                                       value,
                                       mutable });
        Ok(())
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `UndeclaredName` if `name` was never declared.
    pub fn get(&self, name: &str) -> CalcResult<f64> {
        self.lookup(name)
            .map(|v| v.value)
            .ok_or_else(|| CalcError::UndeclaredName { name: name.to_owned() })
    }

    /// Rebinds a mutable variable.
    ///
    /// # Errors
    /// - `UndeclaredName` if `name` was never declared.
    /// - `ImmutableAssignment` if `name` is a constant.
    pub fn set(&mut self, name: &str, value: f64) -> CalcResult<()> {
        let variable = self.variables
                           .iter_mut()
                           .find(|v| v.name == name)
                           .ok_or_else(|| CalcError::UndeclaredName { name: name.to_owned() })?;

        if !variable.mutable {
            return Err(CalcError::ImmutableAssignment { name: name.to_owned() });
        }

        debug!(name, value, "set");
        variable.value = value;
        Ok(())
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns `true` if `name` is reserved and can never be declared.
    #[must_use]
    pub fn is_prohibited(name: &str) -> bool {
        RESERVED_NAMES.contains(&name)
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}
