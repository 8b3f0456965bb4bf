use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use httpd_tree::config::load_options;
use httpd_tree::{ConfigTree, Node, ParseOptions, parse_file};

#[derive(Parser)]
#[command(name = "httpd-tree")]
#[command(
	author,
	version,
	about = "Parse Apache httpd configuration files into a searchable tree"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Options file (defaults to ~/.httpd-tree.toml when present)
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Ignore stray closing tags and allow unclosed sections
	#[arg(long, global = true)]
	lenient: bool,

	/// Enable debug logging
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the parsed tree
	Show {
		/// Configuration file to parse
		file: PathBuf,
	},
	/// Print every node with the given name, breadth-first
	Find {
		/// Configuration file to parse
		file: PathBuf,
		/// Directive or section name
		name: String,
	},
	/// Print the first node with the given name, breadth-first
	FindOne {
		/// Configuration file to parse
		file: PathBuf,
		/// Directive or section name
		name: String,
	},
	/// Parse a file and report whether it is well-formed
	Check {
		/// Configuration file to parse
		file: PathBuf,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let options = resolve_options(cli.config.as_deref(), cli.lenient)?;

	match cli.command {
		Commands::Show { file } => handle_show(&file, &options),
		Commands::Find { file, name } => handle_find(&file, &name, &options),
		Commands::FindOne { file, name } => handle_find_one(&file, &name, &options),
		Commands::Check { file } => handle_check(&file, &options),
	}
}

fn resolve_options(config: Option<&Path>, lenient: bool) -> Result<ParseOptions> {
	if lenient {
		return Ok(ParseOptions::lenient());
	}
	load_options(config).context("Failed to load parse options")
}

fn load_tree(file: &Path, options: &ParseOptions) -> Result<ConfigTree> {
	parse_file(file, options).with_context(|| format!("Failed to parse {}", file.display()))
}

fn handle_show(file: &Path, options: &ParseOptions) -> Result<ExitCode> {
	let tree = load_tree(file, options)?;
	print!("{tree}");

	let cursor = tree.cursor();
	if !cursor.is_root() {
		eprintln!(
			"Warning: section <{} {}> opened on line {} is never closed",
			cursor.name(),
			cursor.content(),
			cursor.line()
		);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_find(file: &Path, name: &str, options: &ParseOptions) -> Result<ExitCode> {
	let tree = load_tree(file, options)?;
	for node in tree.find_all(name) {
		print_match(node);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_find_one(file: &Path, name: &str, options: &ParseOptions) -> Result<ExitCode> {
	let tree = load_tree(file, options)?;
	match tree.find_one(name) {
		Some(node) => {
			print_match(node);
			Ok(ExitCode::SUCCESS)
		}
		None => {
			eprintln!("No node named {name}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_check(file: &Path, options: &ParseOptions) -> Result<ExitCode> {
	match parse_file(file, options) {
		Ok(tree) => {
			println!(
				"{} is valid ({} nodes, {} top-level)",
				file.display(),
				tree.len() - 1,
				tree.root().child_count()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {:?}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}

fn print_match(node: Node<'_>) {
	println!("{}: {} {}", node.line(), node.name(), node.content());
}
