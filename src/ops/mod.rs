use std::fmt;

mod registry;

pub use registry::Registry;

/// Precedence assigned to anything that is not a binary operator.
/// Leaves and already-parenthesized forms never need wrapping.
pub const LEAF_PRECEDENCE: u8 = u8::MAX;

/// Unary operations known to the engine, resolved by name so a [`Step`]
/// stays plain data instead of carrying a function pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunc {
    Sqrt,
    Sin,
    Cos,
}

impl UnaryFunc {
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryFunc::Sqrt => operand.sqrt(),
            UnaryFunc::Sin => operand.sin(),
            UnaryFunc::Cos => operand.cos(),
        }
    }
}

/// Binary operations known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryFunc {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryFunc {
    /// Applies the operation. `lhs` is the operand popped *second* during
    /// postfix reduction (the one pushed earlier), so pushing 10, 3 and
    /// performing `−` yields `10 − 3`. Division by zero follows IEEE-754
    /// and produces an infinity or NaN rather than an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryFunc::Add => lhs + rhs,
            BinaryFunc::Subtract => lhs - rhs,
            BinaryFunc::Multiply => lhs * rhs,
            BinaryFunc::Divide => lhs / rhs,
        }
    }

    /// Whether operand order is irrelevant. Rendering uses this to decide
    /// if an equal-precedence right operand needs parentheses.
    pub fn commutative(&self) -> bool {
        matches!(self, BinaryFunc::Add | BinaryFunc::Multiply)
    }
}

/// One element of a postfix program.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A literal number.
    Operand(f64),
    /// A symbolic reference resolved against the engine's variable
    /// bindings at evaluation time.
    Variable(String),
    /// A named literal such as `π`; the symbol is used for rendering,
    /// the value is fixed at registration.
    Constant { symbol: String, value: f64 },
    Unary { symbol: String, func: UnaryFunc },
    Binary {
        symbol: String,
        precedence: u8,
        func: BinaryFunc,
    },
}

impl Step {
    pub fn unary(symbol: &str, func: UnaryFunc) -> Self {
        Step::Unary {
            symbol: symbol.to_string(),
            func,
        }
    }

    pub fn binary(symbol: &str, precedence: u8, func: BinaryFunc) -> Self {
        Step::Binary {
            symbol: symbol.to_string(),
            precedence,
            func,
        }
    }

    pub fn constant(symbol: &str, value: f64) -> Self {
        Step::Constant {
            symbol: symbol.to_string(),
            value,
        }
    }

    /// The rendering symbol of the step. Operands render as their decimal
    /// text; this is also the token used by the export format.
    pub fn symbol(&self) -> String {
        match self {
            Step::Operand(value) => value.to_string(),
            Step::Variable(name) => name.clone(),
            Step::Constant { symbol, .. }
            | Step::Unary { symbol, .. }
            | Step::Binary { symbol, .. } => symbol.clone(),
        }
    }

    /// Binding tightness for parenthesization. Non-binary steps bind
    /// maximally tight and never need wrapping.
    pub fn precedence(&self) -> u8 {
        match self {
            Step::Binary { precedence, .. } => *precedence,
            _ => LEAF_PRECEDENCE,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Operand(value) => write!(f, "{}", value),
            Step::Variable(name) => f.write_str(name),
            Step::Constant { symbol, .. }
            | Step::Unary { symbol, .. }
            | Step::Binary { symbol, .. } => f.write_str(symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_apply_order() {
        // lhs is the second-popped (earlier-pushed) operand.
        assert_eq!(BinaryFunc::Subtract.apply(10.0, 3.0), 7.0);
        assert_eq!(BinaryFunc::Divide.apply(10.0, 4.0), 2.5);
        assert_eq!(BinaryFunc::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryFunc::Multiply.apply(6.0, 7.0), 42.0);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(BinaryFunc::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert!(BinaryFunc::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_commutativity() {
        assert!(BinaryFunc::Add.commutative());
        assert!(BinaryFunc::Multiply.commutative());
        assert!(!BinaryFunc::Subtract.commutative());
        assert!(!BinaryFunc::Divide.commutative());
    }

    #[test]
    fn test_unary_apply() {
        assert_eq!(UnaryFunc::Sqrt.apply(9.0), 3.0);
        assert!((UnaryFunc::Sin.apply(0.0)).abs() < 1e-12);
        assert!((UnaryFunc::Cos.apply(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_symbols() {
        assert_eq!(Step::Operand(3.0).symbol(), "3");
        assert_eq!(Step::Operand(2.5).symbol(), "2.5");
        assert_eq!(Step::Variable("M".to_string()).symbol(), "M");
        assert_eq!(Step::constant("π", std::f64::consts::PI).symbol(), "π");
        assert_eq!(Step::unary("√", UnaryFunc::Sqrt).symbol(), "√");
        assert_eq!(Step::binary("+", 0, BinaryFunc::Add).symbol(), "+");
    }

    #[test]
    fn test_step_precedence() {
        assert_eq!(Step::binary("×", 1, BinaryFunc::Multiply).precedence(), 1);
        assert_eq!(Step::binary("+", 0, BinaryFunc::Add).precedence(), 0);
        assert_eq!(Step::Operand(1.0).precedence(), LEAF_PRECEDENCE);
        assert_eq!(
            Step::unary("sin", UnaryFunc::Sin).precedence(),
            LEAF_PRECEDENCE
        );
    }

    #[test]
    fn test_step_display_matches_symbol() {
        let step = Step::binary("÷", 1, BinaryFunc::Divide);
        assert_eq!(step.to_string(), step.symbol());
        assert_eq!(Step::Operand(42.0).to_string(), "42");
    }
}
