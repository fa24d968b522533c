//! Pitcher location policy for a single at-bat.
//!
//! The at-bat is a zero-sum stochastic game over the twelve ball-strike
//! counts. The pitcher mixes over (pitch type, zone) choices, the batter
//! answers with swing or take, and value iteration with one linear program
//! per count yields the game value of every count together with both
//! players' mixed strategies.
//!
//! # Module Structure
//!
//! - `count`: Ball-strike counts and their successor rules
//! - `transition`: Pitch/zone choices and outcome distributions
//! - `lp`: Dense two-phase simplex with dual extraction
//! - `game`: Q-values, the per-count minimax LP, and value iteration
//! - `absorb`: Terminal outcome probabilities under the solved strategies

mod absorb;
mod count;
mod error;
mod game;
mod lp;
mod transition;

pub use absorb::*;
pub use count::*;
pub use error::*;
pub use game::*;
pub use lp::*;
pub use transition::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected batter reward: state values, Q-values, outcome rewards.
pub type Utility = f64;
/// Pitch usage, batter mixing, and outcome probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// VALUE ITERATION
// ============================================================================
/// Largest per-count change between the last two sweeps that counts as converged.
pub const THETA: Utility = 0.001;
/// Upper bound on sweeps before the solver reports non-convergence.
pub const MAX_SWEEPS: usize = 1024;

// ============================================================================
// PITCHER POLICY
// ============================================================================
/// Maximum share of pitches any single (pitch, zone) choice may receive.
/// Keeps the pitcher from collapsing onto one exploitable location.
pub const MAX_USAGE: Probability = 0.7;
/// Usage at or below this is dropped from a solved policy.
pub const POLICY_EPSILON: Probability = 1e-9;

// ============================================================================
// VALIDATION
// ============================================================================
/// Allowed deviation from 1 for an outcome distribution's total mass.
pub const DISTRIBUTION_TOLERANCE: Probability = 1e-6;
/// Allowed deviation from 1 for a count's absorption probabilities.
pub const RESOLUTION_TOLERANCE: Probability = 1e-3;

// ============================================================================
// SIMPLEX
// ============================================================================
/// Pivot and reduced-cost tolerance.
pub const SIMPLEX_EPSILON: f64 = 1e-9;
/// Residual phase-one infeasibility above which a program is infeasible.
pub const SIMPLEX_FEASIBILITY: f64 = 1e-7;
/// Pivot budget per phase. Bland's rule terminates long before this.
pub const SIMPLEX_PIVOTS: usize = 1 << 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "native")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
