//! Ancestor numbering and report rendering

mod ahnentafel;
mod render;

pub use ahnentafel::{Ahnentafel, AncestorEntry};
pub use render::{write_entry, write_report};
