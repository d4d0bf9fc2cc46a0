// cpp2js: C++-subset to JavaScript transpiler

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cpp2js", version, about = "Compile a C++ subset to JavaScript")]
struct Cli {
    /// Source file to compile
    source: PathBuf,

    /// Write the generated JavaScript here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.source) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: cannot read {}: {}", cli.source.display(), err);
            process::exit(1);
        }
    };

    match cpp2js::compile(&source) {
        Ok(code) => {
            if let Some(path) = cli.output {
                if let Err(err) = fs::write(&path, code) {
                    eprintln!("Error: cannot write {}: {}", path.display(), err);
                    process::exit(1);
                }
            } else {
                print!("{}", code);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {}", inner);
                cause = inner.source();
            }
            process::exit(1);
        }
    }
}
