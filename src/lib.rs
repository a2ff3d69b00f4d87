pub mod engine;
pub mod error;
pub mod ops;

pub use engine::Engine;
pub use error::EvalError;
pub use ops::{BinaryFunc, Registry, Step, UnaryFunc};

/// One-shot evaluation of an exported program. Unrecognized tokens are
/// dropped, as on any import; programs that reference variables need a
/// long-lived [`Engine`] with bindings instead.
pub fn evaluate_program<S: AsRef<str>>(tokens: &[S]) -> Option<f64> {
    let mut engine = Engine::new();
    engine.import_program(tokens);
    engine.evaluate()
}
