use crate::ChainSpec;
use metatools_core::error::{Error, Result};

impl ChainSpec {
    /// Checks that every module name is a C++ identifier.
    pub fn validate(&self) -> Result<()> {
        for (role, name) in [("sink", self.sink()), ("source", self.source()), ("mid", self.mid())] {
            if !is_identifier(name) {
                return Err(Error::InvalidArgument(format!(
                    "{} module name {:?} is not a valid identifier",
                    role, name
                )));
            }
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
