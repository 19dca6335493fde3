//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use parsegen_core::utils::to_type_ident;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub grammar_path: PathBuf,
    pub name: Option<String>,
    pub source: Option<PathBuf>,
    pub engine: String,
    pub wide: bool,
    pub output: Option<PathBuf>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m
                .get_one::<PathBuf>("grammar_path")
                .cloned()
                .unwrap_or_default(),
            name: m.get_one::<String>("name").cloned(),
            source: m.get_one::<PathBuf>("source").cloned(),
            engine: m
                .get_one::<String>("engine")
                .cloned()
                .unwrap_or_else(|| parsegen_compiler::config::DEFAULT_ENGINE_PATH.to_string()),
            wide: m.get_flag("wide"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let module_name = p.name.unwrap_or_else(|| default_module_name(&p.grammar_path));
        let source = p.source.unwrap_or_else(|| p.grammar_path.clone());
        Self {
            grammar_path: p.grammar_path,
            module_name,
            source,
            engine: p.engine,
            wide: p.wide,
            output: p.output,
        }
    }
}

/// PascalCase stem of the grammar file.
pub fn default_module_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    to_type_ident(&stem)
}
