use metatools::prelude::*;

fn main() -> Result<()> {
    init_logging();

    let spec = ChainSpec::default();
    tracing::info!(%spec, "generating static chain");

    write_chain(&mut std::io::stdout().lock(), &spec)
}
