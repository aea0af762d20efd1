use circuit_calc::prelude::*;

fn main() {
    let mut calc = Calculator::new(CalculatorConfig::with_precision(4));

    // Ohm's law: leave the unknown blank.
    for (v, i, r) in [("12", "", "470"), ("", "0.02", "220"), ("5", "0", "")] {
        match calc.calculate_ohms_law(v, i, r) {
            Ok(result) => println!(
                "V={v:>4} I={i:>4} R={r:>4} -> {result} {}",
                result.unknown.unit_symbol()
            ),
            Err(err) => println!("V={v:>4} I={i:>4} R={r:>4} -> error: {err}"),
        }
    }
    println!();

    match calc.calculate_series_parallel("100, 220, 470", "1e-6, 2.2e-6", "1e-3, 1e-3") {
        Ok(report) => println!("{report}"),
        Err(err) => println!("error: {err}"),
    }
    println!();

    for (name, kind, value) in [
        ("R1", "resistor", "100"),
        ("C1", "capacitor", "1e-6"),
        ("R2", "resistor", "330"),
    ] {
        if let Err(err) = calc.add_component(name, kind, value) {
            println!("error: {err}");
        }
    }
    println!("{}", calc.view_components());

    let resistors = calc.registry().values_by_type("resistor");
    if let Ok(total) = parallel_sum(&resistors) {
        println!("registered resistors in parallel: {total:.2} Ω");
    }
}
