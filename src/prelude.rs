pub use crate::chain::{build_chain, static_chain, write_chain, ChainSpec};
pub use crate::core::{
    error::{Error, Result},
    logging::init_logging,
};
pub use crate::matrix::{fixed_lhs, fixed_product, fixed_rhs, write_demo, Element, MatmulDemo, Matrix3};
