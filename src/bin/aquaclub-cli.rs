// ABOUTME: Aquaclub CLI - body-composition calculators and AI plan generation from the terminal
// ABOUTME: Prints calculator results and generated plans as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors
//!
//! Usage:
//! ```bash
//! # Body Mass Index
//! aquaclub-cli bmi --weight 70 --height 175
//!
//! # Navy body-fat estimate (hip required for women)
//! aquaclub-cli body-fat --gender Femenino --height 165 --waist 80 --neck 32 --hip 98
//!
//! # Weekly meal plan (uses AQUACLUB_LLM_PROVIDER and its API key)
//! aquaclub-cli nutrition-plan --diet-type vegan
//!
//! # Four-week mesocycle
//! aquaclub-cli training-plan --category "Sub-15 hockey subacuático" \
//!     --methodology tactical_periodization \
//!     --objective "Mejorar la transición defensa-ataque" --weeks 4
//! ```

use anyhow::{Context, Result};
use aquaclub::config::LlmConfig;
use aquaclub::constants::{nutrition_fields, training_fields};
use aquaclub::flows::{LlmGenerationService, NutritionPlanFlow, TrainingPlanFlow};
use aquaclub::intelligence::{
    calculate_bmi, calculate_body_fat_percentage, classify_bmi, BmiCategory,
};
use aquaclub::llm::{ChatProvider, LlmProvider};
use aquaclub::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "aquaclub-cli",
    about = "Aquaclub body-composition and plan generation CLI",
    long_about = "Compute BMI and body-fat figures for athlete records, and generate weekly nutrition plans and training mesocycles with the configured LLM provider."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the Body Mass Index
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },

    /// Estimate body fat with the U.S. Navy method
    BodyFat {
        /// Gender label (Masculino, Femenino, male, female, m, f)
        #[arg(long)]
        gender: String,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Waist circumference in centimeters
        #[arg(long)]
        waist: f64,

        /// Neck circumference in centimeters
        #[arg(long)]
        neck: f64,

        /// Hip circumference in centimeters (required for women)
        #[arg(long)]
        hip: Option<f64>,
    },

    /// Generate a weekly nutrition plan
    NutritionPlan {
        /// Diet goal: `weight_loss`, `weight_gain` or `vegan`
        #[arg(long)]
        diet_type: String,
    },

    /// Generate a multi-week training mesocycle
    TrainingPlan {
        /// Team or age category
        #[arg(long)]
        category: String,

        /// `traditional`, `tactical_periodization` or `structured_microcycle`
        #[arg(long)]
        methodology: String,

        /// What the mesocycle must achieve (at least 10 characters)
        #[arg(long)]
        objective: String,

        /// Number of weeks (1-8)
        #[arg(long, default_value = "4")]
        weeks: i64,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BmiReport {
    bmi: Option<f64>,
    category: Option<BmiCategory>,
    label: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyFatReport {
    body_fat_percentage: Option<f64>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_service() -> Result<LlmGenerationService<ChatProvider>> {
    let config = LlmConfig::from_env().context("invalid LLM configuration")?;
    let provider = ChatProvider::from_config(&config).context("could not create LLM provider")?;
    info!(
        "Generating with {} ({})",
        provider.display_name(),
        provider.default_model()
    );
    Ok(LlmGenerationService::from_config(provider, &config))
}

async fn nutrition_plan(diet_type: &str) -> Result<()> {
    let flow = NutritionPlanFlow::new(build_service()?);
    let mut input = Map::new();
    input.insert(nutrition_fields::DIET_TYPE.to_owned(), Value::from(diet_type));
    let input = Value::Object(input);
    let plan = flow.generate_from_value(&input).await?;
    print_json(&plan)
}

async fn training_plan(category: &str, methodology: &str, objective: &str, weeks: i64) -> Result<()> {
    let flow = TrainingPlanFlow::new(build_service()?);
    let input: Map<String, Value> = [
        (training_fields::CATEGORY, Value::from(category)),
        (training_fields::METHODOLOGY, Value::from(methodology)),
        (training_fields::MESOCYCLE_OBJECTIVE, Value::from(objective)),
        (training_fields::WEEKS, Value::from(weeks)),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value))
    .collect();
    let input = Value::Object(input);
    let plan = flow.generate_from_value(&input).await?;
    print_json(&plan)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    match cli.command {
        Command::Bmi { weight, height } => {
            let bmi = calculate_bmi(Some(weight), Some(height));
            let category = bmi.and_then(classify_bmi);
            print_json(&BmiReport {
                bmi,
                category,
                label: category.map(BmiCategory::label),
            })
        }
        Command::BodyFat {
            gender,
            height,
            waist,
            neck,
            hip,
        } => print_json(&BodyFatReport {
            body_fat_percentage: calculate_body_fat_percentage(
                Some(&gender),
                Some(height),
                Some(waist),
                Some(neck),
                hip,
            ),
        }),
        Command::NutritionPlan { diet_type } => nutrition_plan(&diet_type).await,
        Command::TrainingPlan {
            category,
            methodology,
            objective,
            weeks,
        } => training_plan(&category, &methodology, &objective, weeks).await,
    }
}
