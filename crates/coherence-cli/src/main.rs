mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coherence_core::{
    CouplingParameters, EntityParameters, Evaluator, ForceEngine, ForceEntity, PairRequest,
    Validation, demo_scenarios, evaluate_batch,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "coherence", about = "Pairwise coherence and relationship force evaluator")]
struct Cli {
    /// TOML config file (defaults to $COHERENCE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the two built-in demonstration scenarios
    Demo {
        /// Print JSON instead of key/value lines
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one entity pair
    Eval {
        #[arg(long, allow_negative_numbers = true)]
        magnitude_a: f64,
        /// Angle of entity A in degrees
        #[arg(long, allow_negative_numbers = true)]
        angle_a: f64,
        #[arg(long, allow_negative_numbers = true)]
        magnitude_b: f64,
        /// Angle of entity B in degrees
        #[arg(long, allow_negative_numbers = true)]
        angle_b: f64,
        /// Coupling friction, nominally in [0, 1]
        #[arg(long, allow_negative_numbers = true)]
        friction: f64,
        /// Reject inputs outside the nominal domain
        #[arg(long)]
        strict: bool,
        #[arg(long)]
        json: bool,
    },

    /// Compute the relationship force between two value-vector entities
    Force {
        #[arg(long, allow_negative_numbers = true)]
        potential_a: f64,
        /// Comma-separated values vector, e.g. 0.9,0.8,0.2
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values_a: Vec<f64>,
        #[arg(long, allow_negative_numbers = true)]
        potential_b: f64,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values_b: Vec<f64>,
        /// Information distance; lower is closer
        #[arg(long, allow_negative_numbers = true)]
        r_score: f64,
        /// Instinctive compatibility in [0, 1]
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        compatibility: f64,
        #[arg(long)]
        json: bool,
    },

    /// Evaluate random pairs drawn from the nominal domain
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo { json } => cmd_demo(&config, json),
        Commands::Eval {
            magnitude_a,
            angle_a,
            magnitude_b,
            angle_b,
            friction,
            strict,
            json,
        } => cmd_eval(
            &config,
            EntityParameters::new(magnitude_a, angle_a),
            EntityParameters::new(magnitude_b, angle_b),
            CouplingParameters::new(friction),
            strict,
            json,
        ),
        Commands::Force {
            potential_a,
            values_a,
            potential_b,
            values_b,
            r_score,
            compatibility,
            json,
        } => cmd_force(
            &config,
            ForceEntity::new(potential_a, values_a),
            ForceEntity::new(potential_b, values_b),
            r_score,
            compatibility,
            json,
        ),
        Commands::Sample { count, seed, json } => cmd_sample(&config, count, seed, json),
    }
}

fn build_evaluator(config: &CliConfig, strict: bool) -> Result<Evaluator> {
    let mut evaluator_config = config.evaluator;
    if strict {
        evaluator_config.validation = Validation::Strict;
    }
    Evaluator::new(evaluator_config).context("invalid evaluator configuration")
}

fn cmd_demo(config: &CliConfig, json: bool) -> Result<()> {
    let evaluator = build_evaluator(config, false)?;
    let precision = config.output.precision;

    let mut reports = Vec::new();
    for scenario in demo_scenarios() {
        let result = evaluator
            .evaluate(scenario.entity_a, scenario.entity_b, scenario.coupling)
            .with_context(|| format!("scenario '{}' rejected", scenario.name))?;
        reports.push(report::ScenarioReport::new(&scenario, result.rounded(precision)));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {} ==", r.name);
        report::print_inputs(&r.entity_a, &r.entity_b, &r.coupling);
        report::print_result(&r.result, precision);
    }
    Ok(())
}

fn cmd_eval(
    config: &CliConfig,
    entity_a: EntityParameters,
    entity_b: EntityParameters,
    coupling: CouplingParameters,
    strict: bool,
    json: bool,
) -> Result<()> {
    for issue in entity_a
        .domain_issues()
        .into_iter()
        .chain(entity_b.domain_issues())
        .chain(coupling.domain_issues())
    {
        tracing::warn!("outside nominal domain: {issue}");
    }

    let evaluator = build_evaluator(config, strict)?;
    let result = evaluator
        .evaluate(entity_a, entity_b, coupling)
        .context("evaluation failed")?;
    tracing::debug!("full precision result: {result:?}");

    let precision = config.output.precision;
    let shown = result.rounded(precision);
    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        report::print_result(&shown, precision);
    }
    Ok(())
}

fn cmd_force(
    config: &CliConfig,
    entity_a: ForceEntity,
    entity_b: ForceEntity,
    r_score: f64,
    compatibility: f64,
    json: bool,
) -> Result<()> {
    if entity_a.values.len() != entity_b.values.len() {
        tracing::warn!(
            "values vectors differ in length ({} vs {}); alignment treated as neutral",
            entity_a.values.len(),
            entity_b.values.len()
        );
    }
    let engine = ForceEngine::new(config.force);
    let result = engine.compute(&entity_a, &entity_b, r_score, compatibility);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_force(&result, config.output.precision);
    }
    Ok(())
}

fn cmd_sample(config: &CliConfig, count: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let requests: Vec<PairRequest> = (0..count)
        .map(|i| {
            PairRequest::new(
                format!("sample-{i}"),
                EntityParameters::random(&mut rng),
                EntityParameters::random(&mut rng),
                CouplingParameters::random(&mut rng),
            )
        })
        .collect();

    let evaluator = build_evaluator(config, false)?;
    let batch = evaluate_batch(&evaluator, &requests);
    tracing::debug!("sampled {} pairs", batch.outcomes.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&batch.summary)?);
    } else {
        report::print_summary(&batch.summary, config.output.precision);
    }
    Ok(())
}
