use rpncalc_rs::Engine;

/// Tabulates a program over a range of x values, the way a graph view
/// samples the engine once per pixel column.
fn main() {
    pretty_env_logger::init();

    let mut engine = Engine::new();
    engine.push_variable("x");
    engine.perform_operation("sin");

    println!("f(x) = {}", engine);

    let steps = 16;
    for i in 0..=steps {
        let x = 2.0 * std::f64::consts::PI * (i as f64) / (steps as f64);
        engine.bind_variable("x", x);
        match engine.evaluate() {
            Some(y) => println!("x = {x:6.3}  y = {y:6.3}"),
            None => println!("x = {x:6.3}  y = undefined"),
        }
    }
}
