use clap::Parser;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::reader::read_file_categorical;
use rusty_id3::error::Result;
use rusty_id3::metrics::information::FrequencyTables;
use rusty_id3::render::dot::{render_svg, write_dot};
use rusty_id3::render::text::{render_text, save_text};
use rusty_id3::trees::classifier::Id3Classifier;
use rusty_id3::trees::logger::{InductionLogger, Verbosity};
use std::path::PathBuf;
use std::process::ExitCode;

/// Induce a gain ratio decision tree from comma-delimited categorical rows.
#[derive(Parser, Debug)]
#[command(name = "induce", version, about)]
struct Args {
    /// Data file; the last field of every line is the decision
    data: PathBuf,

    /// Save the text rendering of the tree to this file
    #[arg(long)]
    text: Option<PathBuf>,

    /// Export the tree as a Graphviz DOT file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// SVG output path (defaults to the DOT path with an .svg extension)
    #[arg(long, requires = "dot")]
    svg: Option<PathBuf>,

    /// Write the DOT file without invoking Graphviz
    #[arg(long, requires = "dot")]
    no_render: bool,

    /// Evaluate candidate attributes in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence warnings
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn print_summary(dataset: &Dataset) -> Result<()> {
    let tables = FrequencyTables::new(dataset);

    println!("Unique values count:");
    for attribute in 0..dataset.nattributes() {
        println!(
            "Attribute {}: {} unique values",
            attribute + 1,
            tables.unique_value_count(attribute)?
        );
    }

    println!("\nValue occurrences:");
    for attribute in 0..dataset.nattributes() {
        println!("Attribute {}:", attribute + 1);
        let values = dataset.attribute_values(attribute)?;
        let occurrences = tables.value_occurrences(attribute)?;
        for (value, count) in values.tokens().iter().zip(occurrences.iter()) {
            println!("  Value {}: {} occurrences", value, count);
        }
    }

    println!("\nEntropy of the entire data set: {:.4}", tables.dataset_entropy());

    for attribute in 0..dataset.nattributes() {
        println!("\n--- Attribute {} ---", attribute + 1);
        println!("Conditional entropy: {:.4}", tables.conditional_entropy(attribute)?);
        println!("Information gain: {:.4}", tables.information_gain(attribute)?);
        println!("Split information: {:.4}", tables.split_information(attribute)?);
        println!("Gain ratio: {:.4}", tables.gain_ratio(attribute)?);
    }

    if let Some((best, _)) = tables.best_attribute() {
        println!("\nAttribute with highest gain ratio: Attribute {}", best + 1);
    }
    Ok(())
}

fn run(args: &Args, logger: &InductionLogger) -> Result<()> {
    let dataset = read_file_categorical(&args.data)?;
    print_summary(&dataset)?;

    let mut classifier = Id3Classifier::new();
    classifier.set_parallel(args.parallel);
    classifier.set_verbosity(Verbosity::from_flags(args.verbose, args.quiet));
    classifier.fit(&dataset)?;
    let Some(tree) = classifier.tree() else {
        return Ok(());
    };

    println!();
    print!("{}", render_text(tree));

    if let Some(path) = &args.text {
        match save_text(tree, path) {
            Ok(()) => println!("Decision tree saved to {}", path.display()),
            Err(err) => logger.warn(format_args!("Couldn't save {}: {}", path.display(), err)),
        }
    }

    if let Some(dot_path) = &args.dot {
        match write_dot(tree, dot_path) {
            Ok(()) => {
                println!("Decision tree exported to {}", dot_path.display());
                if !args.no_render {
                    let svg_path = args
                        .svg
                        .clone()
                        .unwrap_or_else(|| dot_path.with_extension("svg"));
                    match render_svg(dot_path, &svg_path) {
                        Ok(()) => println!("Decision tree rendered to {}", svg_path.display()),
                        Err(err) => logger.warn(err),
                    }
                }
            }
            Err(err) => {
                logger.warn(format_args!("Couldn't export {}: {}", dot_path.display(), err))
            }
        }
    }

    println!("\nTraining accuracy: {:.2}%", classifier.score(&dataset)? * 100.0);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.verbose, args.quiet);
    let logger = InductionLogger::new(verbosity);

    match run(&args, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
