mod args;
mod driver_error;

use anyhow::Context;
use args::Args;
use driver_error::DriverError;
use pl0c::lexer;
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::exit;

const SOURCE_EXTENSION: &str = "pl0";

fn fatal(line: u64, msg: impl Display) -> ! {
    eprintln!("pl0c: error: {line}: {msg}");
    exit(1)
}

fn read_source(path: &Path) -> Result<String, DriverError> {
    if path.extension().and_then(OsStr::to_str) != Some(SOURCE_EXTENSION) {
        return Err(DriverError::BadExtension);
    }

    let name = path.to_string_lossy().to_string();
    let mut file = File::open(path).map_err(|e| DriverError::Open(name.clone(), e))?;
    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|e| DriverError::Read(name, e))?;
    Ok(source)
}

fn dump_tokens(source: &str) -> Result<String, DriverError> {
    let tokens = lexer::tokenize(source)?;
    Ok(tokens.iter().map(|t| format!("{t}\n")).collect())
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        fs::write(path, text).with_context(|| format!("couldn't write {}", path.display()))?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("couldn't write to standard output")
}

fn run(args: &Args) -> Result<(), DriverError> {
    let source = read_source(&args.input)?;

    let text = if args.lex {
        dump_tokens(&source)?
    } else {
        pl0c::compile(&source)?
    };

    if args.check {
        return Ok(());
    }

    write_output(args.output.as_deref(), &text)?;
    Ok(())
}

fn main() {
    let args = Args::parse_or_exit();
    if let Err(err) = run(&args) {
        fatal(err.get_ln(), &err);
    }
}
