pub mod prelude;

pub use metatools_chain as chain;
pub use metatools_core as core;
pub use metatools_matrix as matrix;
