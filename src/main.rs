//! Lakaz - similar listings and regional price estimates
//!
//! A command-line front end for the Mauritius real-estate recommender and
//! the per-region price models.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use lakaz::cli::{Cli, Command};
use lakaz::commands;
use lakaz::config;
use lakaz::core::Preferences;
use lakaz::ui::{self, Log};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(dir) = cli.models_dir {
		config::set_model_dir(dir);
	}

	match cli.command {
		Command::Fit { data, output } => commands::fit::run(&data, output.as_deref()),

		Command::Similar { property_id, data, limit, json } => {
			Log::set_quiet(json);
			commands::similar::run(&property_id, &data, limit, json)
		}

		Command::Suggest {
			data,
			max_price,
			min_bedrooms,
			min_bathrooms,
			property_type,
			min_area,
			premium,
			beachfront,
			limit,
			json,
		} => {
			Log::set_quiet(json);
			let preferences = Preferences {
				max_price,
				min_bedrooms,
				min_bathrooms,
				property_type,
				min_area,
				premium_location: premium,
				beachfront,
			};
			commands::suggest::run(&data, &preferences, limit, json)
		}

		Command::Train { data, target, output } => commands::train::run(&data, &target, output.as_deref()),

		Command::Predict { input, models } => commands::predict::run(&input, models.as_deref()),

		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
