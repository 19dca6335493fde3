//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use log::debug;
use parsegen_core::{Grammar, GrammarInspector, TerminalChar, TerminalTable};

use crate::Result;
use crate::config::Config;
use crate::encode::encode;
use crate::provenance::render_header;

/// Rust source emitter for one grammar.
///
/// An emitter owns the terminal table of a single generation run and is
/// consumed by [`Emitter::emit`].
pub struct Emitter<'a, C> {
    pub(super) inspector: GrammarInspector<'a, C>,
    pub(super) config: &'a Config,

    /// Terminals interned while encoding productions
    pub(super) terminals: TerminalTable<C>,
    /// Enum variant name per nonterminal id
    pub(super) variant_names: Vec<String>,
    /// Names already used (for collision avoidance)
    pub(super) used_names: BTreeSet<String>,
    /// Output buffer
    pub(super) output: String,
}

impl<'a, C: TerminalChar> Emitter<'a, C> {
    /// Fails if the configured module name cannot name the wrapper type.
    pub fn new(grammar: &'a Grammar<C>, config: &'a Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inspector: grammar.inspect(),
            config,
            terminals: TerminalTable::new(),
            variant_names: Vec::new(),
            used_names: BTreeSet::new(),
            output: String::new(),
        })
    }

    /// Emit the complete parser module.
    pub fn emit(mut self) -> String {
        // Encoding fills the terminal table; every table below is rendered
        // from the same state.
        let productions = encode(&self.inspector, &mut self.terminals);
        debug!(
            "module `{}`: {} productions, {} nonterminals, {} terminals",
            self.config.module_name,
            productions.len(),
            self.inspector.nonterminals().len(),
            self.terminals.len(),
        );

        self.assign_variant_names();

        self.output.push_str(&render_header(self.config));
        self.output.push('\n');
        self.emit_imports();
        self.emit_nonterminal_enum();
        self.emit_nonterminal_table();
        self.emit_char_class_table();
        self.emit_terminal_table();
        self.emit_helpers();
        self.emit_loaders(&productions);
        self.emit_wrapper();

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
