use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finwise_core::models::settings::Settings;

mod commands;
mod logging;
mod output;
mod shell;

#[derive(Parser)]
#[command(
    name = "finwise",
    version,
    about = "Budgeting, expense tracking and investment projections",
    long_about = "finwise helps you split your income into a budget, keep track of \
                  what you spend, and see how a SIP or your savings could grow over time."
)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(long, global = true, env = "FINWISE_CONFIG")]
    config: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split income (minus savings) across spending categories
    Budget {
        /// Monthly income
        #[arg(short, long)]
        income: String,
        /// Desired monthly savings
        #[arg(short, long)]
        savings: String,
        /// Custom percentage, e.g. "Healthcare=15" (repeatable)
        #[arg(long = "set", value_name = "CATEGORY=PCT")]
        overrides: Vec<String>,
    },

    /// Project the corpus of a monthly SIP
    Sip {
        /// Monthly investment
        #[arg(short, long)]
        monthly: String,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: String,
        /// Investment duration in years
        #[arg(short, long)]
        years: String,
        /// Target corpus to reach
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Project savings from a lump sum plus monthly contributions
    Savings {
        /// Current savings (defaults to 0)
        #[arg(short, long, default_value = "")]
        current: String,
        /// Monthly savings (defaults to 0)
        #[arg(short, long, default_value = "")]
        monthly: String,
        /// Expected annual return in percent (defaults to 0)
        #[arg(short, long, default_value = "")]
        rate: String,
        /// Number of years
        #[arg(short, long)]
        years: String,
    },

    /// Show what belongs in each spending category
    Guide,

    /// Start an interactive session (login, expense log, calculators)
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let settings = load_settings(cli.config.as_deref())?;
    let format = output::OutputFormat::from_flag(cli.json);

    match cli.command {
        Some(Commands::Budget {
            income,
            savings,
            overrides,
        }) => commands::budget(&settings, format, &income, &savings, &overrides)?,
        Some(Commands::Sip {
            monthly,
            rate,
            years,
            target,
        }) => commands::sip(&settings, format, monthly, rate, years, target)?,
        Some(Commands::Savings {
            current,
            monthly,
            rate,
            years,
        }) => commands::savings(&settings, format, current, monthly, rate, years)?,
        Some(Commands::Guide) => output::print_guide(format)?,
        Some(Commands::Shell) => shell::run(settings, format)?,
        None => {
            println!("finwise - budgeting, expenses and investment projections");
            println!();
            println!("Run 'finwise --help' for usage information.");
            println!("Run 'finwise shell' to start an interactive session.");
        }
    }

    Ok(())
}

fn load_settings(path: Option<&str>) -> Result<Settings> {
    match path {
        Some(path) => {
            tracing::debug!("Loading settings from {path}");
            Settings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {path}"))
        }
        None => Ok(Settings::default()),
    }
}
