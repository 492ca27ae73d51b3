//! Example showing the calculator on a fast electron
//!
//! Evaluates the relativistic quantities of an electron at 0.95c, the
//! ground level of an electron in a 1.1 nm box, and prints the electron's
//! Standard Model record. Rejected inputs are logged at `warn`.

use modfys::{Calculator, Lookup, ModfysError, SPEED_OF_LIGHT};

fn main() -> modfys::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let calculator = Calculator::standard_model()?;
    let evaluator = calculator.evaluator();

    let v = 0.950 * SPEED_OF_LIGHT;
    println!("Lorentz factor:        {}", evaluator.lorentz_factor(v)?);
    println!("Dilated 30 s:          {} s", evaluator.time_dilation(v, 30.0)?);
    println!("Momentum (m = 0.511):  {}", evaluator.relativistic_momentum(v, 0.511)?);
    println!(
        "Relative velocity:     {} m/s",
        evaluator.relative_velocity(v, 0.999 * SPEED_OF_LIGHT)?
    );

    let scattering = evaluator.barrier_scattering(0.511, 1.1e-9, 30e3, 35e3)?;
    println!(
        "Barrier ({:?}):  T = {}, R = {}",
        scattering.regime, scattering.transmission, scattering.reflection
    );
    println!("Ground level:          {}", evaluator.energy_level(0.511, 1.1e-9, 1)?);

    // Singular and rejected inputs come back as errors
    match evaluator.lorentz_factor(SPEED_OF_LIGHT) {
        Err(ModfysError::UndefinedAtLightSpeed) => println!("γ(c) is undefined"),
        other => println!("unexpected: {other:?}"),
    }

    println!("{}", calculator.lookup("e"));

    if let Lookup::Particles(symbols) = calculator.lookup("particles") {
        println!("Particles: {}", symbols.join(", "));
    }

    println!("{}", calculator.lookup("graviton"));
    Ok(())
}
