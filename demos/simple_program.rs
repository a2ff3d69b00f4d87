use log::debug;
use rpncalc_rs::Engine;

fn main() {
    pretty_env_logger::init();

    let mut engine = Engine::new();

    engine.push_operand(2.0);
    engine.push_operand(3.0);
    engine.perform_operation("+");
    engine.push_operand(4.0);
    let result = engine.perform_operation("×");
    debug!("program: {:?}", engine.export_program());

    println!("{}  ->  {:?}", engine.history(), result);

    engine.undo();
    println!("after undo: {}  ->  {:?}", engine.history(), engine.evaluate());

    engine.clear();
    println!("after clear: {:?}", engine.evaluate());
}
