//! Dump a SAS XPORT (XPT v5) file as CSV on stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use xptread::XptReader;

#[derive(Parser)]
#[command(
    name = "xptread",
    version,
    about = "Read SAS XPORT/XPT files and print them as comma-separated values"
)]
struct Cli {
    /// XPORT/XPT file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xptread: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str) -> xptread::Result<()> {
    if input == "-" {
        dump(XptReader::new(io::stdin().lock())?)
    } else {
        dump(XptReader::open(input)?)
    }
}

fn dump<R: Read>(mut reader: XptReader<R>) -> xptread::Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());

    let header = reader.fields().collect::<Vec<_>>().join(",");
    writeln!(out, "{header}")?;

    for row in reader.rows() {
        let row = row?;
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(())
}
