mod cli;
mod commands;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
