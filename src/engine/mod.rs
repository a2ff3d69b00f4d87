use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::EvalError;
use crate::ops::{Registry, Step};

mod render;

/// The calculator's expression engine.
///
/// Owns a postfix program (a flat sequence of [`Step`]s, always consumed
/// from the tail) and a table of variable bindings. All mutation goes
/// through explicit push/undo/clear calls; evaluation and rendering work
/// on borrowed slices and never disturb the program, even on failure.
pub struct Engine {
    program: Vec<Step>,
    variables: HashMap<String, f64>,
    registry: Registry,
}

impl Engine {
    /// An engine with the standard operation catalog.
    pub fn new() -> Self {
        Self::with_registry(Registry::standard())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            program: Vec::new(),
            variables: HashMap::new(),
            registry,
        }
    }

    /// Appends a literal operand and re-evaluates the whole program.
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        debug!("push operand {value}");
        self.program.push(Step::Operand(value));
        self.evaluate()
    }

    /// Appends a variable reference and re-evaluates. The name is looked
    /// up in the bindings table at evaluation time, not now.
    pub fn push_variable(&mut self, name: &str) -> Option<f64> {
        debug!("push variable {name}");
        self.program.push(Step::Variable(name.to_string()));
        self.evaluate()
    }

    /// Looks up `symbol` in the registry and appends the matching step.
    /// An unknown symbol is ignored, not an error: the push is skipped
    /// and the unchanged program is still re-evaluated.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.registry.lookup(symbol) {
            Some(step) => {
                debug!("perform {symbol}");
                self.program.push(step.clone());
            }
            None => debug!("unknown operation symbol {symbol:?}, skipping"),
        }
        self.evaluate()
    }

    /// Removes the last step, if any.
    pub fn undo(&mut self) {
        if let Some(step) = self.program.pop() {
            debug!("undo {step}");
        }
    }

    /// Empties the program. Variable bindings are owned by the caller's
    /// session and are cleared separately via [`Engine::clear_variables`].
    pub fn clear(&mut self) {
        self.program.clear();
    }

    pub fn bind_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Reduces the whole program to a value, or `None` if it is empty,
    /// malformed or references an unbound variable.
    pub fn evaluate(&self) -> Option<f64> {
        match self.evaluate_result() {
            Ok(value) => {
                debug!("evaluated to {value}");
                Some(value)
            }
            Err(err) => {
                debug!("evaluation failed: {err}");
                None
            }
        }
    }

    /// Like [`Engine::evaluate`] but reports why reduction failed.
    pub fn evaluate_result(&self) -> Result<f64, EvalError> {
        let (result, remainder) = self.reduce(&self.program)?;
        if !remainder.is_empty() {
            // Excess operands are not an error; the top result stands.
            debug!("evaluation left {} unconsumed step(s)", remainder.len());
        }
        Ok(result)
    }

    /// Recursive postfix reduction over a borrowed slice. Consumes from
    /// the tail; the returned remainder is the unconsumed prefix.
    fn reduce<'a>(&self, steps: &'a [Step]) -> Result<(f64, &'a [Step]), EvalError> {
        let (step, rest) = steps.split_last().ok_or(EvalError::EmptyProgram)?;
        match step {
            Step::Operand(value) => Ok((*value, rest)),
            Step::Constant { value, .. } => Ok((*value, rest)),
            Step::Variable(name) => self
                .variables
                .get(name)
                .map(|value| (*value, rest))
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Step::Unary { symbol, func } => {
                let (operand, rest) = self.reduce(rest).map_err(|e| e.under(symbol))?;
                Ok((func.apply(operand), rest))
            }
            Step::Binary { symbol, func, .. } => {
                // First reduction yields the operand pushed last (rhs).
                let (rhs, rest) = self.reduce(rest).map_err(|e| e.under(symbol))?;
                let (lhs, rest) = self.reduce(rest).map_err(|e| e.under(symbol))?;
                Ok((func.apply(lhs, rhs), rest))
            }
        }
    }

    /// The program as a flat sequence of symbol strings, operands as
    /// their decimal text. Order is significant (postfix).
    pub fn export_program(&self) -> Vec<String> {
        self.program.iter().map(Step::symbol).collect()
    }

    /// Replaces the program by resolving each token against the registry,
    /// falling back to numeric parse for literals. Unrecognized tokens
    /// are dropped silently; this is a lenient deserialization.
    pub fn import_program<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let mut program = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            if let Some(step) = self.registry.lookup(token) {
                program.push(step.clone());
            } else if let Ok(value) = token.parse::<f64>() {
                program.push(Step::Operand(value));
            } else {
                debug!("import: dropping unrecognized token {token:?}");
            }
        }
        self.program = program;
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the same string as [`Engine::history`], so an engine can be
/// used directly as a display or graph title.
impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.history())
    }
}
