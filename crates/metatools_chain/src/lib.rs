//! Generator for statically-typed module chain declarations.
//!
//! A chain nests a sink around `num` copies of a middle module around a source,
//! and names the resulting variable `sink`:
//!
//! ```
//! use metatools_chain::ChainSpec;
//!
//! assert_eq!(
//!     ChainSpec::with_num(2).render().unwrap(),
//!     "SinkModule<AmplitudeScale<AmplitudeScale<ConstModule>>>sink;"
//! );
//! ```

mod d;
mod render;
mod validate;

pub use render::{build_chain, static_chain, write_chain};

/// Outermost module of the chain.
pub const SINK: &str = "SinkModule";
/// Innermost module of the chain.
pub const SOURCE: &str = "ConstModule";
/// Module repeated between sink and source.
pub const MID: &str = "AmplitudeScale";
/// Number of middle modules.
pub const NUM: usize = 200;

/// Name of the declared variable, appended after the closing brackets.
pub const VAR_SUFFIX: &str = "sink;";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainSpec {
    sink: String,
    source: String,
    mid: String,
    num: usize,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::new(SINK, SOURCE, MID, NUM)
    }
}

impl ChainSpec {
    pub fn new(sink: impl Into<String>, source: impl Into<String>, mid: impl Into<String>, num: usize) -> Self {
        Self {
            sink: sink.into(),
            source: source.into(),
            mid: mid.into(),
            num,
        }
    }

    /// Default module names with `num` middle modules.
    pub fn with_num(num: usize) -> Self {
        Self { num, ..Self::default() }
    }

    pub fn sink(&self) -> &str {
        &self.sink
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn mid(&self) -> &str {
        &self.mid
    }
    pub fn num(&self) -> usize {
        self.num
    }

    /// Template nesting levels: the sink plus every middle module.
    pub fn depth(&self) -> usize {
        self.num.saturating_add(1)
    }

    /// Byte length of the built chain, saturating at `usize::MAX`.
    pub fn rendered_len(&self) -> usize {
        self.num
            .saturating_mul(self.mid.len() + 1)
            .saturating_add(self.sink.len() + 1)
            .saturating_add(self.source.len())
            .saturating_add(self.depth())
            .saturating_add(VAR_SUFFIX.len())
    }
}
