//! docnav: post-process the pages of a static documentation site.

use clap::{Args, Parser, Subcommand};
use docnav::{
    ExecutorKind, FilesystemPageProvider, PageContext, PageOutcome, PipelineBuilder, PipelineError,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "docnav")]
#[command(version, about = "Numbers chapters, renders tables of contents and links API names in documentation pages", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process every page below a site directory
    Site {
        /// The site directory
        dir: PathBuf,

        /// Write processed pages here instead of overwriting them
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        passes: Passes,

        /// Process pages one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Process a single page
    Page {
        file: PathBuf,

        /// Relative path from the page to the site root, e.g. "../"
        #[arg(long, default_value = "")]
        root: String,

        /// Write the page here instead of to stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        passes: Passes,
    },

    /// Print the edits planned for a page as JSON
    Plan {
        file: PathBuf,

        /// Relative path from the page to the site root, e.g. "../"
        #[arg(long, default_value = "")]
        root: String,

        /// JSON link table merged over the built-in one
        #[arg(long)]
        links: Option<PathBuf>,
    },

    /// Print the effective link table as JSON
    Links {
        /// JSON link table merged over the built-in one
        #[arg(long)]
        links: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Passes {
    /// Skip chapter numbering and tables of contents
    #[arg(long)]
    no_toc: bool,

    /// Skip linking type names to the API reference
    #[arg(long)]
    no_doclinks: bool,

    /// JSON link table merged over the built-in one
    #[arg(long)]
    links: Option<PathBuf>,
}

impl Passes {
    fn builder(&self) -> PipelineBuilder {
        builder_with_links(self.links.as_ref())
            .with_toc(!self.no_toc)
            .with_doclinks(!self.no_doclinks)
    }
}

fn builder_with_links(links: Option<&PathBuf>) -> PipelineBuilder {
    match links {
        Some(path) => PipelineBuilder::new().with_link_file(path),
        None => PipelineBuilder::new(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "docnav=debug" } else { "docnav=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some pages of a site failed.
fn run(command: Commands) -> Result<bool, PipelineError> {
    match command {
        Commands::Site { dir, out, passes, sequential } => {
            let executor = if sequential { ExecutorKind::Sequential } else { ExecutorKind::Parallel };
            let pipeline = passes.builder().with_executor(executor).build()?;

            let mut provider = FilesystemPageProvider::new(&dir);
            if let Some(out) = out {
                provider = provider.with_output_dir(out);
            }

            let report = pipeline.run(Arc::new(provider))?;
            for page in report.failures() {
                if let PageOutcome::Failed { error } = &page.outcome {
                    eprintln!("{}: {error}", page.path);
                }
            }
            Ok(report.is_success())
        }
        Commands::Page { file, root, out, passes } => {
            let processor = passes.builder().build_processor()?;
            let source = fs::read_to_string(&file)?;
            let page = processor.process(&source, &PageContext::new(root))?;
            log::info!(
                "{}: {} chapters, {} toc edits, {} doc links",
                file.display(),
                page.chapters.len(),
                page.toc_edits,
                page.doclink_edits
            );

            match out {
                Some(path) => fs::write(path, &page.html)?,
                None => io::stdout().write_all(page.html.as_bytes())?,
            }
            Ok(true)
        }
        Commands::Plan { file, root, links } => {
            let processor = builder_with_links(links.as_ref()).build_processor()?;
            let source = fs::read_to_string(&file)?;
            let plan = processor.plan(&source, &PageContext::new(root))?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(true)
        }
        Commands::Links { links } => {
            let table = builder_with_links(links.as_ref()).link_table()?;
            println!("{}", serde_json::to_string_pretty(&table)?);
            Ok(true)
        }
    }
}
