// Deterministic projection of a document through a render config.
// `layout` builds the template-aware tree; `html` and `text` serialize it.
// Nothing in here mutates the document or performs IO.

pub mod html;
pub mod layout;
pub mod text;
