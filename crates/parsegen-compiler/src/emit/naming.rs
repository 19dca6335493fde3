//! Enum variant names for nonterminals.

use parsegen_core::TerminalChar;
use parsegen_core::utils::to_type_ident;

use super::Emitter;

impl<C: TerminalChar> Emitter<'_, C> {
    pub(super) fn assign_variant_names(&mut self) {
        let nonterminals = self.inspector.nonterminals();
        self.variant_names = Vec::with_capacity(nonterminals.len());
        for (_, name) in nonterminals.iter() {
            let variant = self.unique_name(&to_type_ident(name));
            self.variant_names.push(variant);
        }
    }

    pub(super) fn unique_name(&mut self, base: &str) -> String {
        if self.used_names.insert(base.to_string()) {
            return base.to_string();
        }

        let mut counter = 2;
        loop {
            let name = format!("{}{}", base, counter);
            if self.used_names.insert(name.clone()) {
                return name;
            }
            counter += 1;
        }
    }
}
