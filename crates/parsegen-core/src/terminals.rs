//! Terminal interning for generated symbol tables.
//!
//! Assigns each distinct terminal character a dense index in first-use
//! order. Index 0 is reserved for the null character before anything is
//! interned, so an empty table still renders as `[NUL]`.

use std::collections::HashMap;

use crate::TerminalChar;
use crate::literal::render_literal;

/// Index of a terminal in a [`TerminalTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TerminalId(u32);

impl TerminalId {
    /// Id of the reserved null sentinel.
    pub const NUL: TerminalId = TerminalId(0);

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create an id from a raw index. Use only in tests and diagnostics.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Terminal interner. One table is owned by exactly one generation run.
#[derive(Debug, Clone)]
pub struct TerminalTable<C> {
    /// Map from terminal to id for deduplication.
    map: HashMap<C, TerminalId>,
    /// Terminals indexed by id.
    values: Vec<C>,
}

impl<C: TerminalChar> Default for TerminalTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TerminalChar> TerminalTable<C> {
    pub fn new() -> Self {
        let mut table = Self {
            map: HashMap::new(),
            values: Vec::new(),
        };
        table.intern(C::NUL);
        table
    }

    /// Intern a terminal, returning its id.
    /// If the terminal was already interned, returns the existing id.
    pub fn intern(&mut self, value: C) -> TerminalId {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }

        let id = TerminalId(self.values.len() as u32);
        self.values.push(value);
        self.map.insert(value, id);
        id
    }

    /// Terminal stored under `id`, or `None` if the id is out of range.
    #[inline]
    pub fn get(&self, id: TerminalId) -> Option<C> {
        self.values.get(id.index()).copied()
    }

    /// Resolve an id back to its terminal.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn resolve(&self, id: TerminalId) -> C {
        self.ensure_terminal(id)
    }

    /// Number of terminals, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the sentinel is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Terminals in intern order.
    #[inline]
    pub fn values(&self) -> &[C] {
        &self.values
    }

    /// Iterate over all terminals with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (TerminalId, C)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &c)| (TerminalId(i as u32), c))
    }

    /// Render every terminal as an escaped source literal, in intern order.
    pub fn render_table(&self) -> Vec<String> {
        self.values.iter().map(|&c| render_literal(c)).collect()
    }
}
