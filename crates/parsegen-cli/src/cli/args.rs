//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar description in JSON (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar description (JSON)")
}

/// Wrapper type name (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .help("Name of the generated parser type [default: grammar file stem]")
}

/// Grammar source quoted in the header (-s/--source).
pub fn source_arg() -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar source quoted in the header [default: GRAMMAR]")
}

/// Parse engine crate path (--engine).
pub fn engine_arg() -> Arg {
    Arg::new("engine")
        .long("engine")
        .value_name("PATH")
        .default_value(parsegen_compiler::config::DEFAULT_ENGINE_PATH)
        .help("Path of the parse engine crate")
}

/// Wide terminals (--wide).
pub fn wide_arg() -> Arg {
    Arg::new("wide")
        .short('w')
        .long("wide")
        .action(ArgAction::SetTrue)
        .help("Use `char` terminals instead of bytes")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}
