use rand::{rngs::StdRng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[macro_export]
macro_rules! test_ops {
    ([$($op:ident),*]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;

                paste! {
                    #[test]
                    fn i32() -> Result<()> {
                        test_functions::[<$op _test>]::<i32>()
                    }

                    #[test]
                    fn i64() -> Result<()> {
                        test_functions::[<$op _test>]::<i64>()
                    }

                    #[test]
                    fn f32() -> Result<()> {
                        test_functions::[<$op _test>]::<f32>()
                    }

                    #[test]
                    fn f64() -> Result<()> {
                        test_functions::[<$op _test>]::<f64>()
                    }
                }
            }
        )*
    };
}
