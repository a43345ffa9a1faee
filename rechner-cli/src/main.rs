#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! A command line front-end for the `rechner` calculator.

mod cli;

use cli::prelude::*;
use rechner::{Calculator, Operation};
use std::process;
use structopt::StructOpt;

fn main() {
    pretty_env_logger::init();
    log::info!("Rechner ready. Beep boop.");

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    let result = match opt.cmd {
        Cmd::Demo => {
            main_demo();
            Ok(())
        }
        Cmd::Eval(cmd) => main_eval(cmd),
        Cmd::Run(cmd) => main_run(cmd),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn main_demo() {
    let mut calculator = Calculator::new();

    for line in demo_results(&mut calculator) {
        println!("{}", line);
    }

    print_history(&calculator);
}

/// Run the sample calculations, results are printed like `5 + 3 = 8.0`.
fn demo_results(calculator: &mut Calculator) -> Vec<String> {
    let mut lines = vec!["Testing Calculator:".to_string()];
    lines.push(format!("5 + 3 = {:?}", calculator.add(5.0, 3.0)));
    lines.push(format!("10 - 4 = {:?}", calculator.subtract(10.0, 4.0)));
    lines.push(format!("6 * 7 = {:?}", calculator.multiply(6.0, 7.0)));
    match calculator.divide(15.0, 3.0) {
        Ok(result) => lines.push(format!("15 / 3 = {:?}", result)),
        Err(err) => log::error!("Failed to divide: {}", err),
    }
    lines
}

fn main_eval(cmd: cmd::Eval) -> Result<(), Error> {
    let cmd::Eval { x, op, y } = cmd;

    let operation = Operation::new(op, x, y);
    let result = operation.apply(&mut Calculator::new())?;
    println!("{} = {}", operation, result);
    Ok(())
}

fn main_run(cmd: cmd::Run) -> Result<(), Error> {
    let cmd::Run { script, fail_fast } = cmd;

    let script = Script::load(&script)?;
    let mut calculator = Calculator::new();
    let mut failed = 0;
    let mut result = Ok(());

    for operation in &script.operations {
        match operation.apply(&mut calculator) {
            Ok(value) => println!("{} = {}", operation, value),
            Err(err) if fail_fast => {
                result = Err(err.into());
                break;
            }
            Err(err) => {
                failed += 1;
                log::error!("Failed to calculate {}: {}", operation, err);
            }
        }
    }

    if failed > 0 {
        log::warn!(
            "{} of {} operations failed.",
            failed,
            script.operations.len()
        );
    }

    print_history(&calculator);
    result
}

fn print_history(calculator: &Calculator) {
    println!();
    println!("Calculation History:");
    for entry in calculator.history() {
        println!("  {}", entry);
    }
}
