//! `signal-sim`: drive the reference intersection from the console.
//!
//! Reads one command per line from stdin:
//!
//! - `car <ES|NL|NR|WS|WL>`: a car joins the queue
//! - `press` / `1`, `release` / `0`: one clock sample
//! - `tick`: a full clock pulse (release then press)
//! - `status`: print the phase and the waiting cars
//! - `quit`
//!
//! Usage: `signal-sim [CONFIG.toml]`. `RUST_LOG` controls log output.

use log::{info, warn};
use signal_fsm::config::ControllerConfig;
use signal_fsm::driver::{Controller, CycleReport};
use signal_fsm::intersection::{Direction, LampOutputs, Phase, SensorSnapshot, LAMP_NAMES};
use signal_fsm::render::{LogActuator, OutputRenderer};
use signal_fsm::sim::CarQueue;
use std::env;
use std::error::Error;
use std::io::{self, BufRead};
use std::process::ExitCode;

type Simulator = Controller<Phase, SensorSnapshot, LampOutputs, LogActuator>;

enum Command {
    Car(Direction),
    Clock(bool),
    Tick,
    Status,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "car" => Command::Car(Direction::from_code(words.next()?)?),
        "press" | "1" => Command::Clock(true),
        "release" | "0" => Command::Clock(false),
        "tick" => Command::Tick,
        "status" => Command::Status,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn print_status(controller: &Simulator, queue: &CarQueue) {
    let cars: Vec<&str> = queue.iter().map(Direction::code).collect();
    println!(
        "State: {}, Queue ({} cars): [{}]",
        controller.current_state(),
        queue.len(),
        cars.join(", ")
    );
}

fn on_cycle(
    report: &CycleReport<Phase, LampOutputs>,
    queue: &mut CarQueue,
    report_json: bool,
) -> Result<(), serde_json::Error> {
    if report_json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!(
            "cycle {}: {} -> {} [{}]",
            report.cycle,
            report.from,
            report.to,
            report.outputs.lit().join(" ")
        );
    }
    if let Some(direction) = queue.try_pass(report.to) {
        println!("Car passed: {direction}");
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    let report_json = config.controller.report_json;

    let engine = config.build_engine()?;
    let renderer = OutputRenderer::new::<LampOutputs>(LogActuator::new(&LAMP_NAMES))?;
    let mut controller: Simulator =
        Controller::new(engine, renderer).with_history(config.controller.history);
    let mut queue = config.build_queue();

    controller.start()?;
    print_status(&controller, &queue);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = parse_command(line) else {
            warn!("unrecognised command: {line}");
            continue;
        };

        let levels = match command {
            Command::Car(direction) => {
                if queue.enqueue(direction).is_ok() {
                    println!("New car added: {direction} (Total: {} cars)", queue.len());
                }
                continue;
            }
            Command::Status => {
                print_status(&controller, &queue);
                continue;
            }
            Command::Quit => break,
            Command::Clock(level) => vec![level],
            Command::Tick => vec![false, true],
        };

        for level in levels {
            if let Some(report) = controller.poll(level, || queue.snapshot())? {
                on_cycle(&report, &mut queue, report_json)?;
            }
        }
    }

    let history = controller.history();
    info!(
        "stopped after {} cycles ({} transitions retained, spanning {:?})",
        controller.cycles(),
        history.len(),
        history.duration().unwrap_or_default()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("signal-sim: {err}");
            ExitCode::FAILURE
        }
    }
}
