//! # u-flowshop
//!
//! Command-line interface for flow-shop outsourcing allocation.
//!
//! ## Usage
//! ```bash
//! # Generate a random instance
//! u-flowshop generate --jobs 12 --machines 3 --seed 7 --output inst.json
//!
//! # Run both partitioners and cross-check them
//! u-flowshop solve --instance inst.json
//!
//! # Sequence every job in-house and print the per-position breakdown
//! u-flowshop sequence --instance inst.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use u_flowshop::generate::InstanceGenerator;
use u_flowshop::models::{format_job_list, Instance, PartitionResult};
use u_flowshop::partition::compare_partitioners;
use u_flowshop::sequencing::{sequence_or_empty, SequenceKpi, WsptMci};

#[derive(Parser)]
#[command(
    name = "u-flowshop",
    about = "Proportional flow-shop sequencing with budgeted outsourcing",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random instance as JSON.
    Generate(GenerateArgs),
    /// Run the exhaustive and DP partitioners and cross-check them.
    Solve(InstanceArgs),
    /// Sequence every job in-house with WSPT-MCI.
    Sequence(InstanceArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of jobs.
    #[arg(short = 'n', long, default_value_t = 10)]
    jobs: usize,
    /// Number of machine stages.
    #[arg(short, long, default_value_t = 2)]
    machines: usize,
    /// Budget as a fraction of the total outsourcing cost.
    #[arg(short, long, default_value_t = 0.3)]
    budget_ratio: f64,
    /// Maximum processing time (minimum is 1).
    #[arg(long, default_value_t = 10)]
    max_p: i64,
    /// Maximum weight (minimum is 1).
    #[arg(long, default_value_t = 10)]
    max_w: i64,
    /// Maximum outsourcing cost.
    #[arg(long, default_value_t = 100)]
    max_cost: i64,
    /// RNG seed.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InstanceArgs {
    /// Instance JSON file (the built-in three-job demo when omitted).
    #[arg(short, long)]
    instance: Option<PathBuf>,
    /// Skip the recurrence check of every sequence.
    #[arg(long)]
    no_verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Solve(args) => solve(args),
        Commands::Sequence(args) => sequence(args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_instance(path: Option<&Path>) -> Result<Instance> {
    let instance = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading instance {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing instance {}", path.display()))?
        }
        None => Instance::demo(),
    };
    tracing::info!(
        jobs = instance.job_count(),
        machines = instance.machine_count,
        budget = instance.budget,
        "instance loaded"
    );
    Ok(instance)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut generator = InstanceGenerator::new(args.jobs)
        .with_machine_count(args.machines)
        .with_processing_time(1, args.max_p)
        .with_weight(1, args.max_w)
        .with_outsourcing_cost(0, args.max_cost)
        .with_budget_ratio(args.budget_ratio);
    generator.seed = args.seed;

    let json = serde_json::to_string_pretty(&generator.generate())?;
    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn solve(args: InstanceArgs) -> Result<()> {
    let instance = load_instance(args.instance.as_deref())?;
    let sequencer = WsptMci::new().with_verification(!args.no_verify);

    let comparison = compare_partitioners(&instance, &sequencer)?;

    print_result("Exhaustive", &comparison.exhaustive, instance.budget);
    println!("Time: {:.3} ms", comparison.exhaustive_elapsed.as_secs_f64() * 1000.0);
    print_result("DP", &comparison.dp, instance.budget);
    println!("Time: {:.3} ms", comparison.dp_elapsed.as_secs_f64() * 1000.0);
    println!("\n[OK] Both partitioners agree on objective {}", comparison.objective());
    Ok(())
}

fn sequence(args: InstanceArgs) -> Result<()> {
    let instance = load_instance(args.instance.as_deref())?;
    let m = instance.machine_count;
    let sequencer = WsptMci::new().with_verification(!args.no_verify);
    let solution = sequence_or_empty(&sequencer, &instance.jobs, m)?;

    println!("=== Final schedule details (m = {m}) ===");
    println!(
        "{:<6}{:<6}{:<8}{:<8}{:<12}{:<12}{:<14}{:<14}{:<14}",
        "pos", "job", "p", "w", "sumP", "maxP", "C_last", "w*C", "cumObj"
    );
    println!("{}", "-".repeat(94));
    for row in solution.breakdown(m) {
        println!(
            "{:<6}{:<6}{:<8}{:<8}{:<12}{:<12}{:<14}{:<14}{:<14}",
            row.position,
            row.job.label(),
            row.job.p,
            row.job.w,
            row.sum_p,
            row.max_p,
            row.completion,
            row.weighted_completion,
            row.cumulative_objective
        );
    }

    let kpi = SequenceKpi::calculate(&solution, m);
    println!(
        "\nOrder: {}",
        format_job_list(&solution.sequence, "(none)", " -> ")
    );
    println!("Objective (sum w_j * C_j on last machine): {}", solution.objective);
    println!("Makespan: {}", kpi.makespan);
    println!("Average completion time: {:.2}", kpi.avg_completion);
    Ok(())
}

fn print_result(label: &str, result: &PartitionResult, budget: i64) {
    println!("\n=== RESULTS ({label}) ===");
    println!("Best objective: {}", result.objective);
    println!("Outsourcing cost: {} / {budget}", result.outsourcing_cost);
    println!(
        "In-house order: {}",
        format_job_list(&result.in_house, "(none)", " -> ")
    );
    println!(
        "Outsourced jobs: {}",
        format_job_list(&result.outsourced, "(none)", ", ")
    );
}
