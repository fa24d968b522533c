//! At-bat Solver Binary
//!
//! Loads a transition table (or generates a synthetic one), runs value
//! iteration, prints the per-count report, and optionally writes the
//! solution as JSON.

use anyhow::Context;
use atbat::*;
use clap::Parser;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Solve the pitcher/batter count game", long_about = None)]
struct Args {
    /// Transition table as JSON: pitch → zone → count → action → outcome → p
    #[arg(long, conflicts_with = "synthetic", required_unless_present = "synthetic")]
    table: Option<PathBuf>,
    /// Generate a synthetic table from this seed instead of loading one
    #[arg(long)]
    synthetic: Option<u64>,
    #[arg(long, value_enum, default_value_t = Rules::default())]
    rules: Rules,
    /// Reward per hit category, e.g. single=1,double=2,triple=3,homerun=4
    #[arg(long)]
    rewards: Option<Rewards>,
    #[arg(long, default_value_t = THETA)]
    theta: Utility,
    #[arg(long, default_value_t = MAX_USAGE)]
    max_usage: Probability,
    #[arg(long, default_value_t = MAX_SWEEPS)]
    max_sweeps: usize,
    /// Write the solution as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            theta: self.theta,
            max_usage: self.max_usage,
            max_sweeps: self.max_sweeps,
            rules: self.rules,
        }
    }
    fn transitions(&self) -> anyhow::Result<Transitions> {
        match (&self.table, self.synthetic) {
            (Some(path), _) => {
                log::info!("{:<32}{:<32}", "loading transitions", path.display());
                let file = std::fs::File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                serde_json::from_reader(std::io::BufReader::new(file))
                    .with_context(|| format!("parsing {}", path.display()))
            }
            (None, Some(seed)) => {
                log::info!("{:<32}{:<32}", "synthesizing transitions", seed);
                let ref mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
                Ok(Transitions::synthetic(self.rules, rng))
            }
            (None, None) => anyhow::bail!("either --table or --synthetic is required"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let transitions = args.transitions()?;
    let rewards = args.rewards.clone().unwrap_or_else(|| Rewards::from(args.rules));
    let game = Game::new(&transitions, rewards, args.config())?;
    let solution = game.solve()?;
    println!("{}", solution);
    if let Some(ref path) = args.output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &solution)?;
        log::info!("{:<32}{:<32}", "saved solution", path.display());
    }
    Ok(())
}
