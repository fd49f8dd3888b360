// ============ Model implementations ============

pub(crate) mod modernbert;
pub(crate) mod vit;

// Public model structs and size enums (for type annotations)
pub use modernbert::ModernBertSize;
pub use vit::VitSize;
