use crate::ChainSpec;
use std::fmt;

impl fmt::Display for ChainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChainSpec(sink={}, mid={}x{}, source={}, depth={})",
            self.sink(),
            self.mid(),
            self.num(),
            self.source(),
            self.depth()
        )
    }
}
