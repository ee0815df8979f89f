//! Command line front end: score a profile and print the predicted role.

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

use personality_predictor::adapters::prediction::{HttpPredictionService, HttpServiceConfig};
use personality_predictor::application::PredictionClient;
use personality_predictor::config::{AppConfig, LogFormat, LoggingConfig};
use personality_predictor::domain::prediction::RequestState;
use personality_predictor::domain::profile::{ProfileStore, TraitName};
use personality_predictor::ports::PredictionService;

/// Predict a career role from personality trait scores (0-100, default 50).
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Arguments {
    #[arg(long, help = "Openness score")]
    openness: Option<i64>,

    #[arg(long, help = "Conscientiousness score")]
    conscientiousness: Option<i64>,

    #[arg(long, help = "Extraversion score")]
    extraversion: Option<i64>,

    #[arg(long, help = "Agreeableness score")]
    agreeableness: Option<i64>,

    #[arg(long, help = "Emotional Range score")]
    emotional_range: Option<i64>,

    #[arg(long, help = "Conversation score")]
    conversation: Option<i64>,

    #[arg(long, help = "Openness to Change score")]
    openness_to_change: Option<i64>,

    #[arg(long, help = "Hedonism score")]
    hedonism: Option<i64>,

    #[arg(long, help = "Self-enhancement score")]
    self_enhancement: Option<i64>,

    #[arg(long, help = "Self-transcendence score")]
    self_transcendence: Option<i64>,

    #[arg(long, help = "Prediction service base URL (overrides configuration)")]
    base_url: Option<String>,

    #[arg(long, help = "Only check that the prediction service answers")]
    ping: bool,
}

impl Arguments {
    fn scores(&self) -> [(TraitName, Option<i64>); 10] {
        [
            (TraitName::Openness, self.openness),
            (TraitName::Conscientiousness, self.conscientiousness),
            (TraitName::Extraversion, self.extraversion),
            (TraitName::Agreeableness, self.agreeableness),
            (TraitName::EmotionalRange, self.emotional_range),
            (TraitName::Conversation, self.conversation),
            (TraitName::OpennessToChange, self.openness_to_change),
            (TraitName::Hedonism, self.hedonism),
            (TraitName::SelfEnhancement, self.self_enhancement),
            (TraitName::SelfTranscendence, self.self_transcendence),
        ]
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging.env_filter();
    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let arguments = Arguments::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration load error: {}", err);
            return ExitCode::from(2);
        }
    };
    if let Some(base_url) = arguments.base_url.clone() {
        config.prediction.base_url = base_url;
    }
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        return ExitCode::from(2);
    }

    init_tracing(&config.logging);
    debug!(?config, "Configuration loaded");

    let service = match HttpPredictionService::new(HttpServiceConfig::from(&config.prediction)) {
        Ok(service) => Arc::new(service),
        Err(err) => {
            error!(error = %err, "Unable to create prediction service client");
            return ExitCode::FAILURE;
        }
    };

    if arguments.ping {
        return match service.welcome().await {
            Ok(message) => {
                println!("{}", message);
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(error = %err, "Prediction service did not answer");
                eprintln!("{}", err.summary());
                ExitCode::FAILURE
            }
        };
    }

    let mut store = ProfileStore::new();
    for (name, value) in arguments.scores() {
        if let Some(value) = value {
            store.set_trait(name, value);
        }
    }

    let profile = store.get();
    for (name, score) in profile.iter() {
        println!("{:<20} {:>3}", name.label(), score);
    }
    println!();

    let client = PredictionClient::new(service);
    if let Err(err) = client.submit(profile).await {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match client.current_state() {
        RequestState::Succeeded(result) => {
            println!("Predicted Role: {}", result.predicted_role);
            if !result.alternative_roles.is_empty() {
                println!("Alternative Roles:");
                for alternative in &result.alternative_roles {
                    println!("  - {}", alternative);
                }
            }
            ExitCode::SUCCESS
        }
        RequestState::Failed(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        other => {
            error!(state = ?other, "Submission finished without an outcome");
            ExitCode::FAILURE
        }
    }
}
