use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "pl0c", version, about = "PL/0 to C compiler", long_about = None)]
pub struct Args {
    /// Stop after lexing and print the token stream
    #[arg(long)]
    pub lex: bool,

    /// Stop after compiling, write no output
    #[arg(long, conflicts_with = "lex")]
    pub check: bool,

    /// Write the generated C to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Source file, must end in .pl0
    pub input: PathBuf,
}

impl Args {
    /// Parses the command line. `--help` and `--version` exit with 0, any other
    /// problem prints the usage line and exits with 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(_) => Self::usage(),
        }
    }

    fn usage() -> ! {
        eprintln!("usage: pl0c [OPTIONS] file.pl0");
        exit(1)
    }
}
