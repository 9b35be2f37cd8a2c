//! EcoSoil Carbon Report
//!
//! A CLI tool that estimates carbon sequestration, credit income and the
//! soil-organic-carbon outlook for one year of organic inputs on a farm.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p ecosoil-cli -- \
//!   --acres 5 --current-soc 0.4 \
//!   --fym 10 --vermicompost 5 --green-manure 2 \
//!   --price 20
//! ```

use clap::Parser;
use ecosoil_core::calculator::{CalculationResult, CarbonCalculator};
use ecosoil_core::constants::DEFAULT_EXCHANGE_RATE;
use ecosoil_core::inputs::OrganicInputs;

/// Farm carbon sequestration and credit income estimator
#[derive(Parser, Debug)]
#[command(name = "ecosoil")]
#[command(about = "Estimate carbon sequestration, credit income and the SOC outlook for organic farm inputs")]
struct Args {
    /// Farm size in acres
    #[arg(long, default_value_t = 5.0)]
    acres: f64,

    /// Current soil organic carbon (percent of soil mass)
    #[arg(long, default_value_t = 0.5)]
    current_soc: f64,

    /// Farm yard manure applied per year (tons)
    #[arg(long, default_value_t = 10.0)]
    fym: f64,

    /// Vermicompost applied per year (tons)
    #[arg(long, default_value_t = 2.0)]
    vermicompost: f64,

    /// Green manure applied per year (tons)
    #[arg(long, default_value_t = 5.0)]
    green_manure: f64,

    /// Carbon credit price (USD per ton CO2e)
    #[arg(long, default_value_t = 20.0)]
    price: f64,

    /// Local currency per USD
    #[arg(long, default_value_t = DEFAULT_EXCHANGE_RATE)]
    exchange_rate: f64,

    /// Print the result as pretty JSON instead of a report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_inputs(&self) -> OrganicInputs {
        OrganicInputs::new(
            self.acres,
            self.current_soc,
            self.fym,
            self.vermicompost,
            self.green_manure,
            self.price,
        )
        .with_exchange_rate(self.exchange_rate)
    }
}

fn main() {
    let args = Args::parse();
    let inputs = args.to_inputs();

    let result = match CarbonCalculator::new().calculate(&inputs) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&result).expect("Failed to serialize JSON");
        println!("{}", json);
    } else {
        print_report(&inputs, &result);
    }
}

/// Render the plain-text impact report.
fn print_report(inputs: &OrganicInputs, result: &CalculationResult) {
    println!("Carbon Impact Report");
    println!("====================");
    println!("Farm size:          {:.2} acres", inputs.acres);
    println!("Current SOC:        {:.3} %", inputs.current_soc);
    println!();
    println!("Stable carbon sequestered (t/yr):");
    for (kind, carbon) in result.breakdown.iter() {
        println!("  {:<14} {:>10.4}", kind.label(), carbon);
    }
    println!("  {:<14} {:>10.4}", "Total", result.total_stable_carbon);
    println!();
    println!("CO2 equivalent:     {:.4} t/yr", result.co2_equivalent);
    println!(
        "Credit income:      ${:.2} ({:.2} local at {:.2}/USD)",
        result.income_usd, result.income_local, inputs.exchange_rate
    );
    println!();
    println!(
        "Projected SOC:      {:.4} % ({:+.6} points)",
        result.projected_soc, result.soc_increase
    );
    println!("Soil carbon status: {}", result.verdict);
}
