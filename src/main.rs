use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use bec::parser_io::SymbolicParseTree;
use bec::Compiler;
use clap::Parser;
use log::{debug, info, LevelFilter};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "INPUT")]
    /// File containing the formula (stdin if neither INPUT nor --formula is provided)
    input: Option<PathBuf>,

    #[clap(short = 'e', long, env = "BEC_FORMULA", value_name = "FORMULA", conflicts_with = "input")]
    /// The formula to compile, e.g. '((A&B)|(A&(!B)))'
    formula: Option<String>,

    #[clap(short, long)]
    /// Print the truth table instead of checking for a perfect disjunctive normal form
    table: bool,

    #[clap(long, requires = "table")]
    /// Print the truth table in csv format
    csv: bool,

    #[clap(short, long)]
    /// Print the parse tree before the result
    debug: bool,

    #[clap(long, value_parser, value_name = "FILE")]
    /// Write the parse tree to FILE in dot (GraphViz) format
    dot: Option<PathBuf>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase the log level (-v for debug, -vv for trace)
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    init_logger(args.verbose);

    let compiler = if let Some(formula) = &args.formula {
        Compiler::new(formula.as_str())
    } else if let Some(input) = &args.input {
        let file = File::open(input)?;
        Compiler::from_reader(&mut BufReader::new(file))?
    } else {
        Compiler::from_reader(&mut io::stdin().lock())?
    };

    info!("compiling {:?}", compiler.source().trim());

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    if args.debug || args.dot.is_some() {
        match compiler.parse() {
            Ok(formula) => {
                if args.debug {
                    for token in formula.symbols.tokens() {
                        debug!("token {}: {token}", token.id);
                    }
                    writeln!(writer, "{}", formula.debug())?;
                }

                if let Some(dot_file) = &args.dot {
                    let mut dot_writer = BufWriter::new(File::create(dot_file)?);
                    SymbolicParseTree::new(&formula.root).render_dot(&mut dot_writer)?;
                    dot_writer.flush()?;
                }
            }
            Err(e) => info!("cannot render the parse tree: {e}"),
        }
    }

    if args.table {
        match compiler.calculate_formula() {
            Ok(table) if args.csv => table.write_csv(&mut writer)?,
            Ok(table) => write!(writer, "{table}")?,
            Err(e) => writeln!(writer, "error: {e}")?,
        }
    } else {
        match compiler.check_pdnf() {
            None => writeln!(writer, "true")?,
            Some(e) => writeln!(writer, "false: {e}")?,
        }
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
