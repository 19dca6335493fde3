//! Tests for CLI dispatch logic.

use std::path::{Path, PathBuf};

use super::dispatch::default_module_name;
use super::*;
use crate::cli::commands::generate_command;
use crate::commands::generate::GenerateArgs;

fn params(args: &[&str]) -> GenerateParams {
    let m = generate_command()
        .try_get_matches_from(args)
        .expect("arguments should parse");
    GenerateParams::from_matches(&m)
}

#[test]
fn generate_defaults() {
    let args: GenerateArgs = params(&["generate", "grammars/calc.json"]).into();

    assert_eq!(args.grammar_path, PathBuf::from("grammars/calc.json"));
    assert_eq!(args.module_name, "Calc");
    assert_eq!(args.source, PathBuf::from("grammars/calc.json"));
    assert_eq!(args.engine, "parser_engine");
    assert!(!args.wide);
    assert_eq!(args.output, None);
}

#[test]
fn generate_all_flags() {
    let args: GenerateArgs = params(&[
        "generate",
        "g.json",
        "--name",
        "Expr",
        "--source",
        "expr.tgf",
        "--engine",
        "crate::engine",
        "--wide",
        "-o",
        "out.rs",
    ])
    .into();

    assert_eq!(args.module_name, "Expr");
    assert_eq!(args.source, PathBuf::from("expr.tgf"));
    assert_eq!(args.engine, "crate::engine");
    assert!(args.wide);
    assert_eq!(args.output, Some(PathBuf::from("out.rs")));
}

#[test]
fn generate_requires_grammar() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["parsegen"]);
    assert!(result.is_err());
}

#[test]
fn cli_dispatches_generate() {
    let m = build_cli()
        .try_get_matches_from(["parsegen", "generate", "x.json", "-w"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "generate");
    assert!(GenerateParams::from_matches(sub).wide);
}

#[test]
fn module_name_from_stem() {
    assert_eq!(default_module_name(Path::new("my-grammar.json")), "MyGrammar");
    assert_eq!(default_module_name(Path::new("dir/json_value.grammar.json")), "JsonValueGrammar");
    assert_eq!(default_module_name(Path::new("2d.json")), "Nt2d");
}
