use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_LIMIT, MAX_LIMIT};

fn parse_limit(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid count", s))?;
	if val == 0 || val > MAX_LIMIT {
		Err(format!("limit must be between 1 and {}, got {}", MAX_LIMIT, val))
	} else {
		Ok(val)
	}
}

fn parse_price(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid amount", s))?;
	if !val.is_finite() || val < 0.0 {
		Err(format!("price must be a non-negative amount, got {}", s))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "lakaz",
	author,
	version,
	about = "Similar listings and regional price estimates for Mauritius real estate",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {lakaz} {fit}      {fit_args}                    {fit_desc}
  {lakaz} {similar}  {similar_args}       {similar_desc}
  {lakaz} {suggest}  {suggest_args} {suggest_desc}
  {lakaz} {train}    {train_args}                    {train_desc}
  {lakaz} {predict}  {predict_args}                 {predict_desc}",
		title = "Examples:".bright_blue().bold(),
		lakaz = "lakaz".bright_blue(),
		fit = "fit".yellow(),
		fit_args = "-d listings.json",
		fit_desc = "Build the similarity model".dimmed(),
		similar = "similar".yellow(),
		similar_args = "PROP-42 -d listings.json",
		similar_desc = "Listings like PROP-42".dimmed(),
		suggest = "suggest".yellow(),
		suggest_args = "--max-price 8000000 --min-bedrooms 3",
		suggest_desc = "Match a wishlist".dimmed(),
		train = "train".yellow(),
		train_args = "-d listings.json",
		train_desc = "Train regional price models".dimmed(),
		predict = "predict".yellow(),
		predict_args = "-i query.json",
		predict_desc = "Estimate prices".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory holding trained models (default: $LAKAZ_MODELS_DIR or ./models)
	#[arg(long = "models-dir", global = true, value_name = "DIR")]
	pub models_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Fit the similarity model on a listings dataset and save it
	Fit {
		/// JSON array of listings
		#[arg(short = 'd', long = "data", value_name = "PATH")]
		data: PathBuf,

		/// Output artifact (default: <models-dir>/recommender.msgpack)
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: Option<PathBuf>,
	},

	/// Find listings similar to an existing one
	Similar {
		/// Identifier of the reference listing
		#[arg(value_name = "ID")]
		property_id: String,

		/// JSON array of listings, used for display and to fit when no model is saved
		#[arg(short = 'd', long = "data", value_name = "PATH")]
		data: PathBuf,

		/// Number of results (1-20)
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
		limit: usize,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Find listings that match buyer preferences
	Suggest {
		/// JSON array of listings, used for display and to fit when no model is saved
		#[arg(short = 'd', long = "data", value_name = "PATH")]
		data: PathBuf,

		/// Budget ceiling; listings above it are excluded
		#[arg(long = "max-price", value_parser = parse_price)]
		max_price: Option<f64>,

		/// Minimum number of bedrooms
		#[arg(long = "min-bedrooms")]
		min_bedrooms: Option<u32>,

		/// Minimum number of bathrooms
		#[arg(long = "min-bathrooms")]
		min_bathrooms: Option<u32>,

		/// Property type: apartment, house, villa, land
		#[arg(short = 't', long = "type", value_name = "TYPE")]
		property_type: Option<String>,

		/// Minimum living area in m²
		#[arg(long = "min-area")]
		min_area: Option<f64>,

		/// Prefer premium locations
		#[arg(long = "premium")]
		premium: bool,

		/// Prefer beachfront listings
		#[arg(long = "beachfront")]
		beachfront: bool,

		/// Number of results (1-20)
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
		limit: usize,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Train one price model per region and save them
	Train {
		/// JSON array of listings
		#[arg(short = 'd', long = "data", value_name = "PATH")]
		data: PathBuf,

		/// Field holding the sale price
		#[arg(long = "target", default_value = "price")]
		target: String,

		/// Artifact prefix (default: <models-dir>/price_model)
		#[arg(short = 'o', long = "output", value_name = "PREFIX")]
		output: Option<PathBuf>,
	},

	/// Estimate prices for one listing object or an array of them
	Predict {
		/// JSON file with a listing object or an array of listings
		#[arg(short = 'i', long = "input", value_name = "PATH")]
		input: PathBuf,

		/// Artifact prefix (default: <models-dir>/price_model)
		#[arg(short = 'm', long = "models", value_name = "PREFIX")]
		models: Option<PathBuf>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
