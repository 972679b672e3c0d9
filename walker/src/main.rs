use anyhow::Result;
use walker::{run_demo, WriteSink};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut sink = WriteSink::new(std::io::stdout());
    run_demo(&mut sink)
}
