use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::io::*;
use std::path::PathBuf;

const MAX_VARIABLES: usize = 26;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "VARIABLES")]
    /// The number of variables in every elementary conjunction (2 to 26)
    variables: usize,

    #[clap(value_parser, value_name = "CONJUNCTIONS")]
    /// The number of elementary conjunctions (random if not provided)
    conjunctions: Option<usize>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_name = "SEED")]
    /// Seed for the random generator
    seed: Option<u64>,

    #[clap(short, long)]
    /// Use '&' and '|' instead of '/\' and '\/'
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !(2..=MAX_VARIABLES).contains(&args.variables) {
        Err(anyhow::anyhow!(
            "The number of variables must be between 2 and {}",
            MAX_VARIABLES
        ))?
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let minterms = generate_minterms(args.variables, args.conjunctions, &mut rng)?;

    let (and, or) = if args.ascii {
        ("&", "|")
    } else {
        ("/\\", "\\/")
    };

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    writeln!(
        writer,
        "{}",
        format_pdnf(&minterms, args.variables, and, or)
    )?;

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

/// Picks distinct assignments; bit `j` of a minterm is the polarity of variable `j`.
fn generate_minterms(
    variables: usize,
    conjunctions: Option<usize>,
    rng: &mut StdRng,
) -> anyhow::Result<Vec<usize>> {
    let total = 1usize << variables;

    let count = match conjunctions {
        Some(0) => Err(anyhow::anyhow!("Need at least one elementary conjunction"))?,
        Some(n) if n > total => Err(anyhow::anyhow!(
            "Cannot generate {} distinct conjunctions over {} variables",
            n,
            variables
        ))?,
        Some(n) => n,
        None => rand::Rng::gen_range(rng, 1..=total.min(64)),
    };

    let mut minterms: Vec<usize> = rand::seq::index::sample(rng, total, count).into_vec();
    minterms.shuffle(rng);

    Ok(minterms)
}

fn format_pdnf(minterms: &[usize], variables: usize, and: &str, or: &str) -> String {
    let conjunctions: Vec<String> = minterms
        .iter()
        .map(|minterm| {
            let literals: Vec<String> = (0..variables)
                .map(|j| {
                    let name = char::from(b'A' + j as u8);
                    if (minterm >> j) & 1 == 1 {
                        name.to_string()
                    } else {
                        format!("(!{})", name)
                    }
                })
                .collect();

            format!("({})", literals.join(and))
        })
        .collect();

    if conjunctions.len() == 1 {
        conjunctions.join("")
    } else {
        format!("({})", conjunctions.join(or))
    }
}
