mod creation;
mod d;
mod demo;
mod operators;
pub(crate) mod ops;

pub use demo::{fixed_lhs, fixed_product, fixed_rhs, write_demo, MatmulDemo};

use std::{
    fmt,
    ops::{Add, Mul},
};

/// Rows and columns of every [`Matrix3`].
pub const DIM: usize = 3;

/// Scalar types a [`Matrix3`] can hold.
pub trait Element: Copy + PartialEq + fmt::Debug + Add<Output = Self> + Mul<Output = Self> + 'static {
    const ZERO: Self;
    const ONE: Self;

    fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_element {
    ($type:ty, $zero:expr, $one:expr, $format:expr) => {
        impl Element for $type {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            fn fmt_elem(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $format, self)
            }
        }
    };
}

impl_element!(i32, 0, 1, "{}");
impl_element!(i64, 0, 1, "{}");
impl_element!(f32, 0.0, 1.0, "{:.8}");
impl_element!(f64, 0.0, 1.0, "{:.8}");

/// Row-major 3x3 matrix.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3<T> {
    data: [[T; DIM]; DIM],
}

impl<T: Element> Matrix3<T> {
    pub fn rows(&self) -> &[[T; DIM]; DIM] {
        &self.data
    }

    pub fn into_rows(self) -> [[T; DIM]; DIM] {
        self.data
    }

    pub fn to_flatten_vec(&self) -> Vec<T> {
        self.data.iter().flatten().copied().collect()
    }
}
