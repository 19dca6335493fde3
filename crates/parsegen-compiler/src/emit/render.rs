//! Output rendering methods.

use parsegen_core::{NonterminalId, TerminalChar};

use super::Emitter;
use crate::encode::{EncodedProduction, SymbolRef};

/// Terminal literals per line in `TERMINALS`.
const TERMINALS_PER_LINE: usize = 10;

/// Render one production as a `load_prods` statement.
///
/// Alternatives are joined with `|`, symbols within one alternative with `+`.
/// Multi-symbol alternatives are parenthesized when there is more than one
/// alternative.
pub fn render_production(production: &EncodedProduction) -> String {
    let alternation = production.alternatives.len() > 1;
    let body = production
        .alternatives
        .iter()
        .map(|alt| {
            let concat = alt.iter().map(render_symbol).collect::<Vec<_>>().join(" + ");
            if alternation && alt.len() > 1 {
                format!("({concat})")
            } else {
                concat
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("q.add(nt({}), {body});", production.lhs)
}

fn render_symbol(symbol: &SymbolRef) -> String {
    match symbol {
        SymbolRef::Nonterminal(id) => format!("nt({id})"),
        SymbolRef::Terminal(id) => format!("t({})", id.as_u32()),
        SymbolRef::Null => "nul()".to_string(),
    }
}

impl<C: TerminalChar> Emitter<'_, C> {
    fn char_type(&self) -> &'static str {
        C::WIDTH.rust_type()
    }

    fn variant(&self, id: NonterminalId) -> &str {
        self.inspector.nonterminal_name(id);
        &self.variant_names[id.index()]
    }

    /// Emit `pub const NAME: &[TY] = &[...];` with `per_line` items per row.
    fn emit_table(&mut self, doc: &str, decl: &str, items: &[String], per_line: usize) {
        self.output.push_str(&format!("/// {doc}\n"));
        if items.is_empty() {
            self.output.push_str(&format!("{decl} = &[];\n\n"));
            return;
        }

        self.output.push_str(&format!("{decl} = &[\n"));
        for chunk in items.chunks(per_line) {
            self.output.push_str(&format!("    {},\n", chunk.join(", ")));
        }
        self.output.push_str("];\n\n");
    }

    pub(super) fn emit_imports(&mut self) {
        self.output
            .push_str(&format!("use {} as engine;\n\n", self.config.engine_path));
    }

    pub(super) fn emit_nonterminal_enum(&mut self) {
        self.output.push_str(&format!(
            "/// Nonterminals of the `{}` grammar, numbered as in `NONTERMINALS`.\n",
            self.config.module_name
        ));
        self.output
            .push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n");
        self.output.push_str("#[repr(usize)]\n");
        self.output.push_str("pub enum Nonterminal {\n");
        for (id, variant) in self.variant_names.iter().enumerate() {
            self.output.push_str(&format!("    {variant} = {id},\n"));
        }
        self.output.push_str("}\n\n");
    }

    pub(super) fn emit_nonterminal_table(&mut self) {
        let names: Vec<String> = self
            .inspector
            .nonterminals()
            .iter()
            .map(|(_, name)| format!("{name:?}"))
            .collect();
        self.emit_table(
            "Nonterminal names, indexed by `Nonterminal`.",
            "pub const NONTERMINALS: &[&str]",
            &names,
            1,
        );
    }

    pub(super) fn emit_char_class_table(&mut self) {
        let names: Vec<String> = self
            .inspector
            .predicate_names()
            .map(|name| format!("{name:?}"))
            .collect();
        self.emit_table(
            "Nonterminals matched by a predefined character class.",
            "pub const CHAR_CLASSES: &[&str]",
            &names,
            1,
        );
    }

    pub(super) fn emit_terminal_table(&mut self) {
        let literals = self.terminals.render_table();
        let decl = format!("pub const TERMINALS: &[{}]", self.char_type());
        self.emit_table(
            "Terminals, indexed by the ids used in `load_prods`.",
            &decl,
            &literals,
            TERMINALS_PER_LINE,
        );
    }

    pub(super) fn emit_helpers(&mut self) {
        let ty = self.char_type();
        self.output.push_str(&format!(
            "#[allow(dead_code)]\n\
             fn t(tid: usize) -> engine::Prods<{ty}> {{\n    \
                 engine::Prods::terminal(TERMINALS[tid])\n\
             }}\n\n\
             fn nt(ntid: usize) -> engine::Prods<{ty}> {{\n    \
                 engine::Prods::nonterminal(ntid)\n\
             }}\n\n\
             #[allow(dead_code)]\n\
             fn nul() -> engine::Prods<{ty}> {{\n    \
                 engine::Prods::null()\n\
             }}\n\n"
        ));
    }

    pub(super) fn emit_loaders(&mut self, productions: &[EncodedProduction]) {
        let ty = self.char_type();
        self.output.push_str(&format!(
            "fn load_nonterminals() -> engine::Nonterminals<{ty}> {{\n    \
                 let mut nts = engine::Nonterminals::new();\n    \
                 for &name in NONTERMINALS {{\n        \
                     nts.get(name);\n    \
                 }}\n    \
                 nts\n\
             }}\n\n\
             fn load_cc(nts: &mut engine::Nonterminals<{ty}>) -> engine::CharClassFns<{ty}> {{\n    \
                 engine::predefined_char_classes(CHAR_CLASSES, nts)\n\
             }}\n\n"
        ));

        self.output
            .push_str(&format!("fn load_prods() -> engine::Prods<{ty}> {{\n"));
        self.output.push_str("    let mut q = engine::Prods::new();\n");
        for production in productions {
            self.output
                .push_str(&format!("    {}\n", render_production(production)));
        }
        self.output.push_str("    q\n}\n\n");
    }

    pub(super) fn emit_wrapper(&mut self) {
        let ty = self.char_type();
        let name = self.config.module_name.clone();
        let start = self.variant(self.inspector.start()).to_string();

        self.output.push_str(&format!(
            "/// Parser for the `{name}` grammar.\n\
             pub struct {name} {{\n    \
                 p: engine::Parser<{ty}>,\n\
             }}\n\n"
        ));

        self.output.push_str(&format!("impl {name} {{\n"));
        self.output.push_str(&format!(
            "    pub fn new() -> Self {{\n        \
                     let mut nts = load_nonterminals();\n        \
                     let cc = load_cc(&mut nts);\n        \
                     let start = nt(Nonterminal::{start} as usize);\n        \
                     let g = engine::Grammar::new(nts, load_prods(), start, cc);\n        \
                     Self {{\n            \
                         p: engine::Parser::new(g),\n        \
                     }}\n    \
                 }}\n\n"
        ));
        self.output.push_str(&format!(
            "    pub fn parse(\n        \
                     &mut self,\n        \
                     data: &[{ty}],\n        \
                     size: usize,\n        \
                     eof: {ty},\n    \
                 ) -> Option<Box<engine::ParseForest<{ty}>>> {{\n        \
                     self.p.parse(data, size, eof)\n    \
                 }}\n\n"
        ));
        self.output.push_str(&format!(
            "    pub fn parse_stream<R: std::io::Read>(\n        \
                     &mut self,\n        \
                     reader: R,\n        \
                     size: usize,\n        \
                     eof: {ty},\n    \
                 ) -> Option<Box<engine::ParseForest<{ty}>>> {{\n        \
                     self.p.parse_stream(reader, size, eof)\n    \
                 }}\n\n"
        ));
        self.output.push_str(&format!(
            "    pub fn found(&self) -> bool {{\n        \
                     self.p.found()\n    \
                 }}\n\n    \
                 pub fn get_error(&self) -> engine::ParseError<{ty}> {{\n        \
                     self.p.get_error()\n    \
                 }}\n\
             }}\n\n"
        ));

        self.output.push_str(&format!(
            "impl Default for {name} {{\n    \
                 fn default() -> Self {{\n        \
                     Self::new()\n    \
                 }}\n\
             }}\n"
        ));
    }
}
