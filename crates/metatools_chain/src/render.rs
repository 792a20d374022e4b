use crate::{ChainSpec, VAR_SUFFIX};
use metatools_core::error::Result;
use std::io::Write;

/// Builds the chain declaration for `spec`.
///
/// No validation is done here; see [`ChainSpec::render`].
pub fn build_chain(spec: &ChainSpec) -> String {
    let depth = spec.depth();
    let mut chain = String::with_capacity(spec.rendered_len());

    chain.push_str(spec.sink());
    chain.push('<');
    for _ in 0..spec.num() {
        chain.push_str(spec.mid());
        chain.push('<');
    }
    chain.push_str(spec.source());
    chain.extend(std::iter::repeat('>').take(depth));
    chain.push_str(VAR_SUFFIX);

    tracing::debug!(depth, len = chain.len(), "built static chain");

    chain
}

/// The chain built from the default constants.
pub fn static_chain() -> String {
    build_chain(&ChainSpec::default())
}

/// Writes the validated chain for `spec` as a single line.
pub fn write_chain<W: Write>(out: &mut W, spec: &ChainSpec) -> Result<()> {
    let chain = spec.render()?;
    writeln!(out, "{}", chain)?;
    out.flush()?;

    Ok(())
}

impl ChainSpec {
    pub fn render(&self) -> Result<String> {
        self.validate()?;

        Ok(build_chain(self))
    }
}
