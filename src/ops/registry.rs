use std::collections::HashMap;

use super::{BinaryFunc, Step, UnaryFunc};

/// Catalog of named operations, keyed by rendering symbol.
///
/// Built once at engine construction and treated as immutable afterwards;
/// the engine never hands out a mutable reference to it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    ops: HashMap<String, Step>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed catalog of the calculator: the four arithmetic operators
    /// with their precedence levels, square root, sine, cosine and π.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Step::binary("×", 1, BinaryFunc::Multiply));
        registry.register(Step::binary("÷", 1, BinaryFunc::Divide));
        registry.register(Step::binary("+", 0, BinaryFunc::Add));
        registry.register(Step::binary("−", 0, BinaryFunc::Subtract));
        registry.register(Step::unary("√", UnaryFunc::Sqrt));
        registry.register(Step::unary("sin", UnaryFunc::Sin));
        registry.register(Step::unary("cos", UnaryFunc::Cos));
        registry.register(Step::constant("π", std::f64::consts::PI));
        registry
    }

    /// Stores a step template under its symbol. Last registration wins,
    /// so a symbol can be redefined (e.g. to change precedence metadata).
    pub fn register(&mut self, step: Step) {
        self.ops.insert(step.symbol(), step);
    }

    pub fn lookup(&self, symbol: &str) -> Option<&Step> {
        self.ops.get(symbol)
    }

    /// Registered symbols, in no particular order. Useful for UI layers
    /// that enumerate available operation buttons.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
