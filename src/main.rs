// treeprint: tree height and integer printing from the command line

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use treeprint::printer::{print_line, IoSink};
use treeprint::tree::{self, HeightConvention, HeightOptions, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "treeprint", version, about)]
struct Args {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG also applies
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the height of a tree read from a slot file
    Height {
        /// File of integer slots, or "-" for stdin
        file: PathBuf,
        /// Slot index of the root node
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        root: i32,
        /// Count the node itself (1 + max of children)
        #[arg(long)]
        textbook: bool,
        /// Reject trees deeper than this many nodes
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Use the plain recursive routine without validation
        #[arg(long, conflicts_with_all = ["textbook", "max_depth"])]
        unchecked: bool,
    },
    /// Print integers in decimal, one per line
    Print {
        /// Values to print; read one per stdin line when omitted
        #[arg(allow_negative_numbers = true, value_parser = parse_value)]
        values: Vec<i32>,
    },
}

fn parse_value(token: &str) -> Result<i32, String> {
    tree::parse_int(token).ok_or_else(|| format!("'{}' is not a 32-bit integer", token))
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Could not read tree from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(file).with_context(|| format!("Could not read '{}'", file.display()))
    }
}

/// One integer per line; blank lines are skipped
fn read_values(reader: impl BufRead) -> anyhow::Result<Vec<i32>> {
    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Could not read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match tree::parse_int(line) {
            Some(value) => values.push(value),
            None => bail!("Could not parse integer '{}' on line {}", line, line_no + 1),
        }
    }
    Ok(values)
}

fn height_options(textbook: bool, max_depth: usize) -> HeightOptions {
    let convention = if textbook {
        HeightConvention::CountNodes
    } else {
        HeightConvention::MaxOfChildren
    };
    HeightOptions::default()
        .with_convention(convention)
        .with_max_depth(max_depth)
}

fn compute_height(
    slots: &[i32],
    root: i32,
    unchecked: bool,
    options: &HeightOptions,
) -> anyhow::Result<i32> {
    if unchecked {
        Ok(tree::height(slots, root))
    } else {
        Ok(tree::height_iterative(slots, root, options)?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = IoSink::new(stdout.lock());

    match args.command {
        Commands::Height {
            file,
            root,
            textbook,
            max_depth,
            unchecked,
        } => {
            let source = read_input(&file)?;
            let slots = tree::parse_slots(&source)
                .with_context(|| format!("Could not parse tree in '{}'", file.display()))?;
            info!("Loaded {} slots from {}", slots.len(), file.display());

            let options = height_options(textbook, max_depth);
            let height = compute_height(&slots, root, unchecked, &options)?;
            print_line(height, &mut out)?;
        }
        Commands::Print { values } => {
            let values = if values.is_empty() {
                read_values(io::stdin().lock())?
            } else {
                values
            };
            info!("Printing {} values", values.len());
            for value in values {
                print_line(value, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
