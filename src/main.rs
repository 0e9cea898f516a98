//! Rental Analysis CLI
//!
//! Command-line interface for analyzing rental investments

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rental_analysis::analysis::AmortizationSchedule;
use rental_analysis::format::{format_percent, CurrencyFormat, Locale};
use rental_analysis::market::{load_listings, loader::DEFAULT_ASSUMPTIONS_PATH};
use rental_analysis::{AnalysisInput, AnalysisResult, MarketAssumptions, ScenarioRunner};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "rental_analysis", version, about = "Rental investment calculator for Norwegian property")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a single property
    Analyze(AnalyzeArgs),
    /// Analyze every listing in a CSV file at its estimated rent
    Listings(ListingsArgs),
    /// Print estimated rent statistics for a CSV file of listings
    Rents(RentsArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// JSON file with analysis inputs; flags below override its values
    #[arg(long)]
    input: Option<PathBuf>,

    /// Purchase price in NOK
    #[arg(long)]
    price: Option<f64>,

    /// Down payment in percent of the price
    #[arg(long)]
    down_payment: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    years: Option<f64>,

    /// Monthly rent
    #[arg(long)]
    rent: Option<f64>,

    /// Monthly common costs (felleskostnader)
    #[arg(long)]
    common_costs: Option<f64>,

    /// Monthly maintenance reserve
    #[arg(long)]
    maintenance: Option<f64>,

    /// Monthly internet/TV
    #[arg(long)]
    internet_tv: Option<f64>,

    /// Annual insurance
    #[arg(long)]
    insurance: Option<f64>,

    /// Vacancy in percent of the year
    #[arg(long)]
    vacancy: Option<f64>,

    /// Tax rate in percent
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Start from the calculator's example property instead of empty defaults
    #[arg(long)]
    example: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also print the yearly amortization schedule
    #[arg(long)]
    schedule: bool,

    /// Display locale, e.g. nb-NO or en-US
    #[arg(long, default_value = "nb-NO")]
    locale: Locale,

    /// ISO currency code
    #[arg(long, default_value = "NOK")]
    currency: String,
}

#[derive(Debug, Args)]
struct ListingsArgs {
    /// CSV file of listings
    path: PathBuf,

    /// Directory with area_yields.csv and default_input.json
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Output CSV file
    #[arg(long, default_value = "listing_analysis.csv")]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct RentsArgs {
    /// CSV file of listings
    path: PathBuf,

    /// Directory with area_yields.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Display locale
    #[arg(long, default_value = "nb-NO")]
    locale: Locale,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Listings(args) => run_listings(args),
        Command::Rents(args) => run_rents(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let input = build_input(&args)?;
    let result = rental_analysis::analyze(&input);

    if args.json {
        let json = if args.schedule {
            serde_json::json!({
                "analysis": result,
                "schedule": AmortizationSchedule::build_from(&input).yearly(),
            })
        } else {
            serde_json::to_value(result)?
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let money = CurrencyFormat::new(args.locale, args.currency.as_str());
    print_report(&result, &money);

    if args.schedule {
        print_schedule(&AmortizationSchedule::build_from(&input), &money);
    }

    Ok(())
}

fn build_input(args: &AnalyzeArgs) -> Result<AnalysisInput> {
    let mut input = match &args.input {
        Some(path) => AnalysisInput::from_json_path(path)
            .with_context(|| format!("Failed to load input from {}", path.display()))?,
        None if args.example => AnalysisInput::dashboard_example(),
        None => AnalysisInput::default(),
    };
    apply_overrides(&mut input, args);

    Ok(input)
}

/// Explicitly given flags win over the base input
fn apply_overrides(input: &mut AnalysisInput, args: &AnalyzeArgs) {
    let overrides = [
        (args.price, &mut input.purchase_price),
        (args.down_payment, &mut input.down_payment_percent),
        (args.rate, &mut input.interest_rate),
        (args.years, &mut input.loan_term_years),
        (args.rent, &mut input.monthly_rent),
        (args.common_costs, &mut input.monthly_common_costs),
        (args.maintenance, &mut input.monthly_maintenance),
        (args.internet_tv, &mut input.internet_tv),
        (args.insurance, &mut input.annual_insurance),
        (args.vacancy, &mut input.vacancy_rate_percent),
        (args.tax_rate, &mut input.tax_rate),
    ];
    for (value, field) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
}

fn print_report(result: &AnalysisResult, money: &CurrencyFormat) {
    let locale = money.locale;
    let row = |label: &str, value: String| println!("  {:<32} {:>20}", label, value);

    println!("Rental Analysis");
    println!("===============\n");

    println!("Loan:");
    row("Purchase price", money.format(result.loan.purchase_price));
    row("Down payment", money.format(result.loan.down_payment));
    row("Loan amount", money.format(result.loan.loan_amount));
    row("Monthly mortgage", money.format(result.loan.monthly_mortgage));
    row("Interest (first year)", money.format(result.loan.annual_interest));
    row("Principal (first year)", money.format(result.loan.annual_principal));
    println!();

    println!("Annual cash flow:");
    row("Gross rent", money.format(result.income.gross_annual_rent));
    row("Vacancy loss", money.format(-result.income.vacancy_loss));
    row("Operating costs", money.format(-result.costs.total_operating_costs));
    row("Net operating income", money.format(result.results.net_operating_income));
    row("Mortgage payments", money.format(-result.costs.annual_mortgage));
    row("Before tax", money.format(result.results.annual_cash_flow_before_tax));
    row("Tax", money.format(-result.tax.annual_tax));
    row("After tax", money.format(result.results.annual_cash_flow_after_tax));
    row("Per month", money.format(result.results.monthly_cash_flow_after_tax));
    println!();

    println!("Returns:");
    row("Gross yield", format_percent(result.summary.gross_yield, locale));
    row("Net yield", format_percent(result.summary.net_yield, locale));
    row("Cash on cash", format_percent(result.summary.cash_on_cash, locale));
    println!();

    println!("Acquisition:");
    row("Document fee", money.format(result.acquisition.document_fee));
    row("Registration fee", money.format(result.acquisition.registration_fee));
    row("Total cost", money.format(result.acquisition.total));
}

fn print_schedule(schedule: &AmortizationSchedule, money: &CurrencyFormat) {
    println!("\nAmortization schedule:");
    println!("{:>5} {:>18} {:>18} {:>18}", "Year", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(62));
    for year in schedule.yearly() {
        println!(
            "{:>5} {:>18} {:>18} {:>18}",
            year.year,
            money.format(year.interest),
            money.format(year.principal),
            money.format(year.closing_balance),
        );
    }
    println!("{}", "-".repeat(62));
    println!("Total interest: {}", money.format(schedule.total_interest()));
}

fn load_market(dir: Option<&Path>) -> Result<MarketAssumptions> {
    match dir {
        Some(dir) => MarketAssumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display())),
        None if Path::new(DEFAULT_ASSUMPTIONS_PATH).is_dir() => MarketAssumptions::from_csv()
            .with_context(|| format!("Failed to load assumptions from {}", DEFAULT_ASSUMPTIONS_PATH)),
        None => Ok(MarketAssumptions::default_norway()),
    }
}

fn run_listings(args: ListingsArgs) -> Result<()> {
    let market = load_market(args.assumptions.as_deref())?;
    let listings = load_listings(&args.path)
        .with_context(|| format!("Failed to load listings from {}", args.path.display()))?;
    println!("Loaded {} listings", listings.len());

    let runner = ScenarioRunner::with_assumptions(market);
    let results = runner.run_listings(&listings);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writer.write_record([
        "ListingID",
        "City",
        "Price",
        "EstimatedRent",
        "GrossYield",
        "NetYield",
        "MonthlyCashFlow",
        "CashOnCash",
        "TotalAcquisitionCost",
    ])?;

    for (listing, result) in listings.iter().zip(&results) {
        let analysis = &result.analysis;
        writer.write_record([
            listing.id.clone(),
            listing.city.clone().unwrap_or_default(),
            format!("{:.0}", listing.price),
            format!("{:.0}", result.estimated_monthly_rent),
            format!("{:.4}", analysis.summary.gross_yield),
            format!("{:.4}", analysis.summary.net_yield),
            format!("{:.2}", analysis.summary.monthly_cash_flow),
            format!("{:.4}", analysis.summary.cash_on_cash),
            format!("{:.0}", analysis.acquisition.total),
        ])?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    if let Some(best) = results
        .iter()
        .filter(|r| r.analysis.loan.purchase_price > 0.0)
        .max_by(|a, b| a.analysis.summary.net_yield.total_cmp(&b.analysis.summary.net_yield))
    {
        println!(
            "Best net yield: listing {} at {:.2}%",
            best.listing_id, best.analysis.summary.net_yield
        );
    }

    Ok(())
}

fn run_rents(args: RentsArgs) -> Result<()> {
    let market = load_market(args.assumptions.as_deref())?;
    let listings = load_listings(&args.path)
        .with_context(|| format!("Failed to load listings from {}", args.path.display()))?;

    let Some(stats) = market.rent_stats(&listings) else {
        println!("No listings in {}", args.path.display());
        return Ok(());
    };

    let money = CurrencyFormat::new(args.locale, "NOK");
    println!("Estimated rents ({} listings)", listings.len());
    println!("  Per m²: {}", money.format(stats.per_sqm));
    println!("\nBy bedrooms:");
    for b in &stats.by_bedrooms {
        println!("  {:<12} {:>16}  ({} listings)", b.bucket.label(), money.format(b.average_rent), b.count);
    }
    println!("\nBy type:");
    for t in &stats.by_type {
        println!(
            "  {:<12} {:>16}  ({} listings)",
            t.property_type.key(),
            money.format(t.average_rent()),
            t.count
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let argv = ["rental_analysis", "analyze"].iter().chain(argv).copied();
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Analyze(args) => args,
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_json_input() {
        let path = std::env::temp_dir().join(format!("rental_analysis_input_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"purchasePrice": 2500000, "interestRate": 6.0, "monthlyRent": 12000}"#)
            .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let args = analyze_args(&["--input", &path_arg, "--rate", "4.2"]);
        let input = build_input(&args).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(input.interest_rate, 4.2);
        assert_eq!(input.purchase_price, 2_500_000.0);
        assert_eq!(input.monthly_rent, 12_000.0);
        // Fields missing from the file keep their defaults
        assert_eq!(input.loan_term_years, AnalysisInput::default().loan_term_years);
    }

    #[test]
    fn test_example_base_with_overrides() {
        let args = analyze_args(&["--example", "--rent", "20000", "--vacancy", "0"]);
        let input = build_input(&args).unwrap();

        let example = AnalysisInput::dashboard_example();
        assert_eq!(input.monthly_rent, 20_000.0);
        assert_eq!(input.vacancy_rate_percent, 0.0);
        assert_eq!(input.purchase_price, example.purchase_price);
        assert_eq!(input.interest_rate, example.interest_rate);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let args = analyze_args(&["--input", "does/not/exist.json"]);
        assert!(build_input(&args).is_err());
    }
}
