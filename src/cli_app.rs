//! Top-level CLI definition and dispatch.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use log::warn;

use crate::core::config::{CONFIG_ENV_VAR, Config};
use crate::core::errors::{PredictorError, Result};
use crate::predict::{ApplicantForm, NumericField, Occupation, PredictionClient};
use crate::present::{AccessibilityProfile, Theme, render_result};

/// Insurance Premium Category Predictor: submit applicant details to a
/// prediction service and show the predicted premium tier.
#[derive(Parser)]
#[command(name = "premium", version, about)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to $PREMIUM_PREDICTOR_CONFIG.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prediction endpoint URL, overriding the configuration.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive prediction form.
    #[cfg(feature = "tui")]
    Form,
    /// Submit one prediction from flags and print the result.
    Predict(PredictArgs),
    /// Show the effective configuration.
    Config,
    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Applicant details for a one-shot prediction. Defaults match the form.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Age in years (1-119).
    #[arg(long, default_value_t = 25)]
    pub age: u32,

    /// Weight in kilograms (min 1.0).
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Height in meters (min 0.5).
    #[arg(long, default_value_t = 1.7)]
    pub height: f64,

    /// Annual income in lakhs per annum (min 0.1).
    #[arg(long, default_value_t = 5.0)]
    pub income_lpa: f64,

    /// The applicant smokes.
    #[arg(long)]
    pub smoker: bool,

    /// City of residence (required, must not be blank).
    #[arg(long, default_value = "")]
    pub city: String,

    /// Occupation.
    #[arg(long, value_enum, default_value_t = Occupation::Retired)]
    pub occupation: Occupation,

    /// Print the rendered result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    /// Build the form the way the input widgets would, clamping numbers into
    /// range.
    #[must_use]
    pub fn to_form(&self) -> ApplicantForm {
        let mut form = ApplicantForm {
            smoker: self.smoker,
            city: self.city.clone(),
            occupation: self.occupation,
            ..ApplicantForm::default()
        };
        let values = [
            (NumericField::Age, f64::from(self.age)),
            (NumericField::Weight, self.weight),
            (NumericField::Height, self.height),
            (NumericField::IncomeLpa, self.income_lpa),
        ];
        for (field, value) in values {
            if form.set(field, value) {
                warn!(
                    "{} {value} is out of range; using {}",
                    field.label(),
                    form.get(field)
                );
            }
        }
        form
    }
}

/// Resolve configuration from flags, environment, and file.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::resolve(cli.config.as_deref(), std::env::var_os(CONFIG_ENV_VAR))?;
    match &cli.endpoint {
        Some(endpoint) => config.with_endpoint(endpoint.clone()),
        None => Ok(config),
    }
}

fn theme_for(cli: &Cli, config: &Config) -> Theme {
    Theme::new(AccessibilityProfile::from_settings(
        &config.ui,
        cli.no_color,
        AccessibilityProfile::env_no_color(),
    ))
}

/// Dispatch CLI commands.
///
/// # Errors
/// Returns configuration and terminal failures. A failed prediction is
/// rendered and reported through the exit code instead.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        #[cfg(feature = "tui")]
        Command::Form => {
            let config = load_config(cli)?;
            let runtime = crate::tui::FormRuntimeConfig {
                theme: theme_for(cli, &config),
                api: config.api,
            };
            crate::tui::run_form(&runtime).map_err(|e| PredictorError::Runtime {
                details: format!("terminal failure: {e}"),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Predict(args) => {
            let config = load_config(cli)?;
            run_predict(args, &config, &theme_for(cli, &config))
        }
        Command::Config => {
            let config = load_config(cli)?;
            print!("{}", config.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "premium", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_predict(args: &PredictArgs, config: &Config, theme: &Theme) -> Result<ExitCode> {
    let client = PredictionClient::from_config(&config.api);
    let form = args.to_form();

    if !args.json && !form.city.trim().is_empty() {
        eprintln!("Analyzing your profile...");
    }
    let result = client.submit(&form);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result, theme, 80));
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
