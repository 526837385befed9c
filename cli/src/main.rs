//! Command-line entry point (`spec.md` §9: "the global script state of the
//! original reader scripts must be replaced by an explicit entry point").
//! Reads a config file, builds the transducer it describes, and prints the
//! directive-selected output to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use padic_automaton::{hausdorff_dimension, Dfa, Ndfa};
use padic_codegen_dot::{dfa_to_dot, ndfa_to_dot, transducer_to_dot};
use padic_codegen_report::{format_adjacency_matrix, format_dimension, format_simplify_report};
use padic_core::{ComplexPAdic, PAdic};
use padic_ifs::{ComplexMap, RealMap, Residue, Transducer};
use padic_parser::{Directive, ParseConfig};
use padic_pass::Pass;

mod pipeline;
use pipeline::{BuildFromConfig, Built};

/// Exploring a transducer never legitimately needs more states than this for
/// the contracting IFSs the config format describes; a run that hits it is
/// reported as `Unbounded` rather than left to exhaust memory.
const EXPLORATION_CAP: usize = 100_000;

#[derive(Parser)]
#[command(name = "padic-ifsc", about = "Builds and inspects p-adic IFS transducers")]
struct Cli {
    /// Path to a line-delimited IFS config file.
    path: PathBuf,

    /// Parse map lines with the complex-constant grammar (`a + b*i`) instead
    /// of the real one.
    #[arg(long)]
    complex: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read config file {}", cli.path.display()))?;
    info!("read config file {}", cli.path.display());

    let mut pipeline = ParseConfig::new(cli.complex).chain(BuildFromConfig::new(EXPLORATION_CAP));
    let (directive, p, built) = pipeline.run(&text).context("failed to parse or build config file")?;

    let output = match built {
        Built::Real { maps, transducer } => render_real(directive, p, maps, transducer),
        Built::Complex { maps, transducer } => render_complex(directive, p, maps, transducer),
    };
    println!("{output}");
    Ok(())
}

fn render_real(directive: Directive, p: u64, maps: Vec<RealMap>, t: Transducer<RealMap>) -> String {
    match directive {
        Directive::Dfa => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            dfa_to_dot(&dfa, |digit: u64| <PAdic as Residue>::digit_label(digit))
        }
        Directive::Ndfa => ndfa_to_dot(&Ndfa::build(&t)),
        Directive::AdjacencyMatrix => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            format_adjacency_matrix(&dfa.adjacency_matrix())
        }
        Directive::Dimension => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            format_dimension(hausdorff_dimension(p, &dfa.adjacency_matrix()))
        }
        Directive::Simplify => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            let dimension = hausdorff_dimension(p, &dfa.adjacency_matrix());
            let dot = dfa_to_dot(&dfa, |digit: u64| <PAdic as Residue>::digit_label(digit));
            format_simplify_report(&maps, dimension, &dot)
        }
        Directive::Transducer => transducer_to_dot(&t),
    }
}

fn render_complex(directive: Directive, p: u64, maps: Vec<ComplexMap>, t: Transducer<ComplexMap>) -> String {
    match directive {
        Directive::Dfa => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            dfa_to_dot(&dfa, <ComplexPAdic as Residue>::digit_label)
        }
        Directive::Ndfa => ndfa_to_dot(&Ndfa::build(&t)),
        Directive::AdjacencyMatrix => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            format_adjacency_matrix(&dfa.adjacency_matrix())
        }
        Directive::Dimension => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            format_dimension(hausdorff_dimension(p, &dfa.adjacency_matrix()))
        }
        Directive::Simplify => {
            let dfa = Dfa::build(&Ndfa::build(&t));
            let dimension = hausdorff_dimension(p, &dfa.adjacency_matrix());
            let dot = dfa_to_dot(&dfa, <ComplexPAdic as Residue>::digit_label);
            format_simplify_report(&maps, dimension, &dot)
        }
        Directive::Transducer => transducer_to_dot(&t),
    }
}
