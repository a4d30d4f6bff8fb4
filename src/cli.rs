//! CLI argument parsing using clap.

use clap::Parser;

/// `MindEase` - campus wellness companion
///
/// Terminal front end for the MindEase backend: mood check-ins,
/// inspiration cards, a support chat and login/signup.
#[derive(Parser, Debug)]
#[command(name = "mindease", version, about, long_about = None)]
pub struct Args {
    /// Base URL of the MindEase backend
    #[arg(long, default_value = "http://localhost:8000")]
    pub server: String,
}
