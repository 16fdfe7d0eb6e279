use anyhow::Result;
use extraer::{ExtraerConfig, run};

fn main() -> Result<()> {
    // Fixed invocation: no flags, no environment, always the current
    // working directory with the default ignore set and suffix.
    run(ExtraerConfig::default())
}
