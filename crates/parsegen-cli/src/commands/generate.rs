use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{info, warn};
use parsegen_compiler::{Config, generate_from_json};

pub struct GenerateArgs {
    pub grammar_path: PathBuf,
    pub module_name: String,
    pub source: PathBuf,
    pub engine: String,
    pub wide: bool,
    pub output: Option<PathBuf>,
}

/// Errors reported by `parsegen generate`.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read grammar {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot generate parser from {}: {source}", path.display())]
    Generate {
        path: PathBuf,
        source: parsegen_compiler::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn run(args: GenerateArgs) {
    let output = render(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let Some(output) = output else {
        warn!(
            "grammar {} has no productions, nothing written",
            args.grammar_path.display()
        );
        return;
    };

    if let Err(e) = write_output(&args, &output) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Read the grammar and render its parser module.
///
/// Returns `None` for a grammar without productions.
pub fn render(args: &GenerateArgs) -> Result<Option<String>, GenerateError> {
    let json = fs::read_to_string(&args.grammar_path).map_err(|source| GenerateError::Read {
        path: args.grammar_path.clone(),
        source,
    })?;

    let config = Config::new(&args.module_name)
        .engine_path(&args.engine)
        .provenance_file(&args.source);

    let result = if args.wide {
        generate_from_json::<char>(&json, &config)
    } else {
        generate_from_json::<u8>(&json, &config)
    };
    result.map_err(|source| GenerateError::Generate {
        path: args.grammar_path.clone(),
        source,
    })
}

fn write_output(args: &GenerateArgs, output: &str) -> Result<(), GenerateError> {
    match &args.output {
        Some(path) => {
            fs::write(path, output).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            info!("wrote parser `{}` to {}", args.module_name, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| GenerateError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}
