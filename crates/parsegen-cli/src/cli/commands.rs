//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("parsegen")
        .about("Generate Rust parser modules from grammar descriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
}

/// Render the parser module for a grammar.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate a parser module from a grammar")
        .after_help(
            r#"EXAMPLES:
  parsegen generate calc.json                  # module `Calc` on stdout
  parsegen generate calc.json -o src/calc.rs   # write to a file
  parsegen generate calc.json --wide           # `char` terminals
  parsegen generate g.json -n Expr -s expr.tgf # quote expr.tgf in the header"#,
        )
        .arg(grammar_path_arg())
        .arg(name_arg())
        .arg(source_arg())
        .arg(engine_arg())
        .arg(wide_arg())
        .arg(output_arg())
}
