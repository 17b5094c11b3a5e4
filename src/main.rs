#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "cubecast", about = "Cascade cube-scene export tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Export {
		scene: PathBuf,
		#[arg(long)]
		out: PathBuf,
		#[arg(long, default_value = "v3")]
		format: String,
	},
	Keyframes {
		scene: PathBuf,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cubecast::scene::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Export { scene, out, format } => cmd::export::run(scene, out, &format),
		Commands::Keyframes { scene } => cmd::keyframes::run(scene),
	}
}
