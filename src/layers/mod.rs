pub mod dense;

pub use dense::{LayerCache, LayerStep};
