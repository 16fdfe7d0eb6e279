use crate::config::ExtraerConfig;
use crate::format::{write_completion, write_file_content, write_read_failure};
use crate::fs::{read_file_text, walk_directory};
use anyhow::Result;
use std::io::{self, Write};

/// Main entry point for the extractor in CLI mode.
///
/// Streams every matching file to standard output in traversal order and
/// finishes with the completion banner.
pub fn run(config: ExtraerConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(&config, &mut handle)
}

/// Runs the whole extraction against an arbitrary writer.
///
/// A missing root propagates as an error before anything is written; a file
/// that cannot be read only costs its own block, never the run. Each file is
/// opened, fully read, and closed before the next one is touched.
pub fn run_with_writer(config: &ExtraerConfig, output: &mut impl Write) -> Result<()> {
    config.validate()?;

    let paths = walk_directory(&config.root, &config.ignored_dirs, &config.target_suffix);
    for path in &paths {
        match read_file_text(path) {
            Ok(content) => write_file_content(output, path, &content)?,
            Err(err) => write_read_failure(output, path, &err)?,
        }
    }

    write_completion(output, &config.ignored_dirs)?;
    Ok(())
}
