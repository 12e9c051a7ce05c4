//! Output mask assembly

mod composite;

pub use composite::{composite, Composite, CompositeInput};
