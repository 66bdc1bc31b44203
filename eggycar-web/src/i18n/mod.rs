mod bundle;
mod render;

pub use bundle::{LANG, apply_document_lang};
pub use render::{t, tr};
