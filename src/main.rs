//! CLI entry point for sizetree

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use sizetree::{
    Console, ConsoleConfig, DEFAULT_INDENT_STEP, ReportConfig, ReportFormatter, TreeBuilder,
    is_write_denied, print_json, resolve_output_path, sort_descending_by_size, write_report,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Whether status messages on stderr are coloured.
    fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stderr_supports_color(),
        }
    }
}

/// NO_COLOR (https://no-color.org/) wins over FORCE_COLOR; a dumb terminal
/// or a redirected stderr gets plain text.
fn stderr_supports_color() -> bool {
    let set = |key: &str| std::env::var_os(key).is_some();
    if set("NO_COLOR") {
        false
    } else if set("FORCE_COLOR") {
        true
    } else {
        std::env::var_os("TERM").is_none_or(|term| term != "dumb") && io::stderr().is_terminal()
    }
}

#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(about = "Report directory and file sizes, largest first")]
#[command(version)]
struct Args {
    /// Directory to scan (prompted for when omitted)
    path: Option<PathBuf>,

    /// Report file; ".txt" is appended if missing, relative paths are
    /// resolved against the scanned directory [default: <dir>_sizes.txt]
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Spaces of indentation per nesting level
    #[arg(
        short = 'n',
        long = "indent",
        value_name = "N",
        default_value_t = DEFAULT_INDENT_STEP,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    indent: usize,

    /// Keep directory order instead of sorting largest first
    #[arg(long = "no-sort")]
    no_sort: bool,

    /// Print the report to stdout instead of writing a file
    #[arg(long = "stdout", conflicts_with = "json")]
    stdout: bool,

    /// Print the size tree as JSON to stdout instead of writing a file
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Only print warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("sizetree: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut console = Console::new(ConsoleConfig {
        use_color: args.color.enabled(),
        quiet: args.quiet,
    });

    let root = match args.path {
        Some(path) => {
            if !path.is_dir() {
                bail!("cannot access '{}': No such directory", path.display());
            }
            path
        }
        None => prompt_for_root(&mut console)?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("cannot resolve '{}'", root.display()))?;

    let report_config = ReportConfig {
        indent_step: args.indent,
    };

    console.status("Reading directories...")?;
    let mut tree = TreeBuilder::new()
        .build(&root)
        .with_context(|| format!("error scanning '{}'", root.display()))?;

    let inaccessible = tree.inaccessible_count();
    if !tree.accessible {
        console.warning(&format!("cannot read '{}': permission denied", root.display()))?;
    } else if inaccessible > 0 {
        console.warning(&format!(
            "{} directories could not be read and are reported as 0b",
            inaccessible
        ))?;
    }

    if !args.no_sort {
        console.status("Sorting...")?;
        sort_descending_by_size(&mut tree);
    }
    console.summary(&tree)?;

    if args.json {
        print_json(&tree).context("error writing output")?;
        return Ok(());
    }

    let formatter = ReportFormatter::new(report_config);

    if args.stdout {
        let stdout = io::stdout();
        formatter
            .write_to(&tree, &mut stdout.lock())
            .context("error writing output")?;
        return Ok(());
    }

    let output = resolve_output_path(&root, args.output.as_deref());
    console.writing(&output)?;
    match write_report(&output, &formatter.lines(&tree)) {
        Ok(()) => console.status("Done.")?,
        Err(e) if is_write_denied(&e) => {
            console.warning(&format!("cannot write '{}': permission denied", output.display()))?;
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot write '{}'", output.display()));
        }
    }

    Ok(())
}

/// Ask for a directory on stdin until an existing one is given.
fn prompt_for_root(console: &mut Console) -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        eprint!("Directory to scan: ");
        io::stderr().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no directory given");
        }

        let path = PathBuf::from(line.trim());
        if path.is_dir() {
            return Ok(path);
        }
        console.warning(&format!("'{}' is not a directory", path.display()))?;
    }
}
