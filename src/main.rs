// src/main.rs
// Loads a YAML parameter file, binds it onto a default mapper and prints the
// effective integrator configuration.
//
// Usage: initialize_mapper <params.yaml> [namespace]
// Log level follows RUST_LOG (e.g. RUST_LOG=debug shows every applied setter).

use log::{error, info};
use mapper_init::{bind_parameters, Mapper, ParameterMap};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        error!("Missing parameter file");
        eprintln!("usage: initialize_mapper <params.yaml> [namespace]");
        std::process::exit(2);
    };
    let namespace = args.next();

    let mut params = ParameterMap::from_yaml_file(&path)?;
    if let Some(namespace) = &namespace {
        info!("Reading parameters under namespace \"{}\"", namespace);
        params = params.scoped(namespace);
    }

    let mut mapper = Mapper::new();
    bind_parameters(&mut mapper, &params);

    print!("{}", mapper.to_yaml()?);
    Ok(())
}
