use metatools::prelude::*;

fn main() -> Result<()> {
    init_logging();

    let demo = MatmulDemo::run();

    write_demo(&mut std::io::stdout().lock(), &demo)
}
