//! Command-line interface for batch decomposition of figure files

use crate::algorithm::decompose::decompose;
use crate::analysis::tally::SizeTally;
use crate::io::configuration::{BLOCK_SEPARATOR, FIGURE_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, fs_error, invalid_target};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rectcarve")]
#[command(
    author,
    version,
    about = "Decompose ASCII box figures into their component rectangles"
)]
/// Command-line arguments for the decomposition tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input figure file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Print rectangle blocks to stdout instead of writing files
    #[arg(short, long)]
    pub print: bool,

    /// Stop after this many rectangles per figure
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Append a size tally after each figure's blocks
    #[arg(short, long)]
    pub summary: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    ///
    /// Skipping only applies when writing files; printing to stdout
    /// always reprocesses.
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.print
    }

    /// Check if progress should be displayed
    ///
    /// Progress is also suppressed when printing, so spinner output
    /// never interleaves with figure blocks.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.print
    }
}

/// Orchestrates batch decomposition of figure files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_figure_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_target(
                    &self.cli.target,
                    &"target file must be a .txt figure",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)
                .map_err(|source| fs_error(&self.cli.target, "read directory", source))?
            {
                let path = entry
                    .map_err(|source| fs_error(&self.cli.target, "read directory entry", source))?
                    .path();
                if Self::is_figure_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &self.cli.target,
                &"target must be a figure file or directory",
            ))
        }
    }

    // Inputs are .txt figures; previously written output files are not re-decomposed
    fn is_figure_file(path: &Path) -> bool {
        let is_txt = path.extension().and_then(|ext| ext.to_str()) == Some(FIGURE_EXTENSION);
        let is_output = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        is_txt && !is_output
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let figure = std::fs::read_to_string(input_path)
            .map_err(|source| fs_error(input_path, "read figure", source))?;

        let cap = self.cli.limit.unwrap_or(usize::MAX);
        let mut tally = SizeTally::new();
        let mut blocks = Vec::new();
        for block in decompose(&figure).take(cap) {
            tally.record(&block);
            blocks.push(block);
            if let Some(ref pm) = self.progress_manager {
                pm.update_rectangles(index, blocks.len());
            }
        }

        let mut output = blocks.join(BLOCK_SEPARATOR);
        if self.cli.summary {
            if !output.is_empty() {
                output.push_str(BLOCK_SEPARATOR);
            }
            for line in tally.summary_lines() {
                output.push_str(&line);
                output.push('\n');
            }
        }

        if self.cli.print {
            // Allow print: stdout is the requested output channel
            #[allow(clippy::print_stdout)]
            {
                print!("{output}");
            }
        } else {
            let output_path = Self::output_path(input_path);
            std::fs::write(&output_path, &output)
                .map_err(|source| fs_error(&output_path, "write decomposition", source))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, tally.total());
        }

        Ok(())
    }

    /// Output path for a figure file: `<stem>_parts.txt` next to the input
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{FIGURE_EXTENSION}",
            stem.to_string_lossy()
        );

        input_path.parent().map_or_else(
            || PathBuf::from(&output_name),
            |parent| parent.join(&output_name),
        )
    }
}
