pub mod matmul;
pub mod transform;
