use thiserror::Error;

/// Why a program failed to reduce to a value.
///
/// The public push/evaluate API collapses these into an absent result
/// (the program itself is never corrupted by a failed evaluation);
/// [`crate::Engine::evaluate_result`] surfaces the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("nothing to evaluate")]
    EmptyProgram,

    #[error("variable '{0}' has no bound value")]
    UnboundVariable(String),

    #[error("operator '{symbol}' is missing an operand")]
    MissingOperand { symbol: String },
}

impl EvalError {
    /// Attributes a bare empty-program failure to the operator whose
    /// operand reduction ran off the front of the program.
    pub(crate) fn under(self, symbol: &str) -> Self {
        match self {
            EvalError::EmptyProgram => EvalError::MissingOperand {
                symbol: symbol.to_string(),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(EvalError::EmptyProgram.to_string(), "nothing to evaluate");
        assert_eq!(
            EvalError::UnboundVariable("M".to_string()).to_string(),
            "variable 'M' has no bound value"
        );
        assert_eq!(
            EvalError::MissingOperand {
                symbol: "+".to_string()
            }
            .to_string(),
            "operator '+' is missing an operand"
        );
    }

    #[test]
    fn test_under_rewrites_only_empty() {
        assert_eq!(
            EvalError::EmptyProgram.under("×"),
            EvalError::MissingOperand {
                symbol: "×".to_string()
            }
        );
        let unbound = EvalError::UnboundVariable("x".to_string());
        assert_eq!(unbound.clone().under("×"), unbound);
    }
}
