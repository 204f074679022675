//! EDSL rendering.

pub mod edsl;
pub mod literal;

use crate::config::RenderOptions;
use crate::model::{Sequence, Step, SymbolTable};

pub use edsl::EdslRenderer;
pub use literal::Fragment;

/// Render a whole sequence. Unresolved symbols become inline error comments;
/// rendering itself never fails.
pub fn render_sequence(seq: &Sequence, options: &RenderOptions) -> String {
    EdslRenderer::new(seq.symbol_table(), options).sequence(seq)
}

/// Render one step at the top level, resolving symbols against `symbols`.
pub fn render_step(step: &Step, symbols: &SymbolTable<'_>, options: &RenderOptions) -> String {
    EdslRenderer::new(*symbols, options).step(step, 0)
}
