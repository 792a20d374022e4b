pub fn count(haystack: &str, c: char) -> usize {
    haystack.chars().filter(|&x| x == c).count()
}

/// Writer whose every write and flush fails with `BrokenPipe`.
pub struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }
}

#[macro_export]
macro_rules! test_nums {
    ([$($num:literal),*]) => {
        $(
            paste::paste! {
                #[test]
                fn [<num_ $num>]() -> Result<()> {
                    test_functions::balanced_test($num)
                }
            }
        )*
    };
}
