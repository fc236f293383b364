//! Flow-field demo on an ASCII level.
//!
//! Run: cargo run --bin sinkflow-demo -- [LEVEL_FILE] [--seed N]

use std::error::Error;

use sinkflow_demos::{DemoConfig, run};

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = DemoConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().ok_or("--seed needs a value")?;
            config.seed = Some(value.parse()?);
        } else {
            config.level = std::fs::read_to_string(&arg)?;
        }
    }

    run(&config, &mut std::io::stdout().lock())
}
