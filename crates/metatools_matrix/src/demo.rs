use crate::Matrix3;
use metatools_core::error::Result;
use rand::Rng;
use std::{fmt, io::Write};

pub fn fixed_lhs() -> Matrix3<i64> {
    Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
}

pub fn fixed_rhs() -> Matrix3<i64> {
    Matrix3::new([[10, 20, 30], [40, 50, 60], [70, 80, 90]])
}

pub fn fixed_product() -> Matrix3<i64> {
    fixed_lhs().matmul(&fixed_rhs())
}

/// The four matrices printed by one demo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatmulDemo {
    pub random_a: Matrix3<f64>,
    pub random_b: Matrix3<f64>,
    pub random_product: Matrix3<f64>,
    pub fixed_product: Matrix3<i64>,
}

impl MatmulDemo {
    pub fn run() -> Self {
        Self::run_with_rng(&mut rand::thread_rng())
    }

    pub fn run_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let random_a = Matrix3::<f64>::rand_with_rng(rng);
        let random_b = Matrix3::<f64>::rand_with_rng(rng);
        let random_product = random_a.matmul(&random_b);
        let fixed_product = fixed_product();

        tracing::debug!(%random_product, %fixed_product, "matmul demo");

        Self {
            random_a,
            random_b,
            random_product,
            fixed_product,
        }
    }

    /// Matrices in printing order: A, B, A x B, then the fixed product.
    pub fn matrices(&self) -> [&dyn fmt::Display; 4] {
        [&self.random_a, &self.random_b, &self.random_product, &self.fixed_product]
    }
}

/// Writes each matrix of `demo` on its own line.
pub fn write_demo<W: Write>(out: &mut W, demo: &MatmulDemo) -> Result<()> {
    for matrix in demo.matrices() {
        writeln!(out, "{}", matrix)?;
    }
    out.flush()?;

    Ok(())
}
