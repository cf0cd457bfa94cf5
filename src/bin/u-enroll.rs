use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use u_enroll::{placement_records, GreedyMatcher, MatchSummary, MatcherConfig, ScheduleInput};

#[derive(Parser)]
#[command(
    name = "u-enroll",
    about = "Greedy student-to-course-offering matcher",
    version,
    propagate_version = true
)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one matching pass.
    ///
    /// Loads courses, students, offerings and requests from a JSON file,
    /// places every unscheduled request and prints the summary. Conflicts
    /// are reported, not treated as failures.
    Run {
        /// Input records (JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Matcher settings (TOML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Where to write placement records (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive("u_enroll=info".parse()?);
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match cli.command {
        Commands::Run {
            input,
            config,
            output,
        } => run(&input, config.as_deref(), output.as_deref()),
    }
}

fn run(input: &Path, config: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => MatcherConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatcherConfig::default(),
    };

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading input {}", input.display()))?;
    let records = ScheduleInput::from_json_str(&content)
        .with_context(|| format!("parsing input {}", input.display()))?;
    let mut data = records.into_data(&config)?;

    let matcher = GreedyMatcher::new(config.clone());
    let outcome = match matcher.run(&mut data) {
        Err(u_enroll::MatchError::InvalidInput(errors)) => {
            for e in &errors {
                tracing::error!("{e}");
            }
            anyhow::bail!("input failed validation with {} error(s)", errors.len());
        }
        other => other?,
    };

    if let Some(path) = output {
        let records = placement_records(&data, &config);
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing output {}", path.display()))?;
        info!(path = %path.display(), rows = records.len(), "wrote placement records");
    }

    let summary = MatchSummary::calculate(&outcome, &data);
    println!("Requests attempted:   {}", summary.attempted);
    println!("Requests placed:      {}", summary.placed);
    println!("Requests unresolved:  {}", summary.unresolved);
    println!("  no offering:        {}", summary.no_offering);
    println!("  schedule collision: {}", summary.schedule_collision);
    println!("  seats exhausted:    {}", summary.seats_exhausted);
    println!("Placement rate:       {:.1}%", summary.placement_rate * 100.0);
    println!("Seat utilization:     {:.1}%", summary.seat_utilization * 100.0);
    for (semester, placed) in summary.placed_by_semester.iter().enumerate() {
        println!(
            "  {:<18}  {}",
            format!("{}:", config.semester_label(semester)),
            placed
        );
    }
    Ok(())
}
