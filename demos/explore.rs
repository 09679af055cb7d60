//! Explore an expression: renderings, truth table, normal forms, shuffles.
//!
//! Run with: `cargo run --example explore -- "NOT A AND (B => C)"`
//! Or generate one: `cargo run --example explore -- --generate 6 --seed 3`

use clap::Parser;
use color_eyre::eyre::eyre;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use prop_logic::display::Notation;
use prop_logic::{compare_expressions, generate, parse, Node};

#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Inspect a propositional logic expression")]
struct Args {
    /// Expression to inspect (generated when omitted)
    expr: Option<String>,

    /// Number of leaves of a generated expression
    #[arg(short, long, default_value_t = 5)]
    generate: usize,

    /// Variables for a generated expression
    #[arg(long, value_delimiter = ',', default_value = "A,B,C,D")]
    vars: Vec<String>,

    /// Seed for generation and shuffling
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of shuffled variants to print
    #[arg(long, default_value_t = 3)]
    shuffles: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let f: Node = match &args.expr {
        Some(text) => parse(text)?,
        None => {
            if args.generate == 0 || args.vars.is_empty() {
                return Err(eyre!("--generate needs at least one leaf and one variable"));
            }
            generate(&mut rng, args.generate, &args.vars)
        }
    };

    println!("─── Expression ───\n");
    println!("unicode: {}", f);
    println!("ascii:   {}", f.render(Notation::Ascii));
    println!("latex:   {}", f.render(Notation::Latex));
    println!(
        "leaves = {}, size = {}, depth = {}",
        f.leaf_count(),
        f.size(),
        f.depth()
    );
    println!();

    println!("─── Truth table ───\n");
    let tt = f.truth_table()?;
    print!("{}", tt);
    let props = f.properties()?;
    println!(
        "\nsatisfiable: {}, tautology: {}, true rows: {}/{}",
        props.is_satisfiable(),
        props.is_tautology(),
        tt.count_true(),
        tt.len()
    );
    println!();

    println!("─── Normal forms ───\n");
    println!("cnf: {}", f.to_cnf()?);
    println!("dnf: {}", f.to_dnf()?);
    let mut simplified = f.clone();
    simplified.simplify();
    println!("without ⊕ ⇒ ⇔: {}", simplified);
    println!("nnf: {}", f.to_nnf());
    println!();

    println!("─── Shuffles ───\n");
    let variants = f.distinct_shuffles(&mut rng, args.shuffles, 20 * args.shuffles.max(1));
    for variant in &variants {
        println!("{}", variant);
    }
    let mut all = vec![f.clone()];
    all.extend(variants);
    if all.len() >= 2 {
        println!("\nall equivalent: {}", compare_expressions(&all)?);
    }

    Ok(())
}
