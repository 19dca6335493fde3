//! Rust source emission for generated parser modules.
//!
//! The emitted module has a fixed shape:
//! - provenance header quoting the grammar source
//! - `Nonterminal` enum, one variant per nonterminal, discriminant = id
//! - `NONTERMINALS`, `CHAR_CLASSES` and `TERMINALS` tables
//! - `load_prods()`, one `q.add(..)` per production
//! - a wrapper struct delegating to the parse engine

mod emitter;
mod naming;
mod render;


pub use emitter::Emitter;
pub use render::render_production;
