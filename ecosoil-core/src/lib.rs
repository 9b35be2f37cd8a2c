//! Carbon sequestration and credit income estimation for organic farm inputs.
//!
//! Smallholder farms applying farm yard manure, vermicompost and green
//! manure lock a fraction of that material's carbon into the soil. This
//! crate estimates how much, what the sequestration is worth on the
//! voluntary carbon market, and how the farm's soil-organic-carbon (SOC)
//! level moves as a result.
//!
//! # Module Organisation
//!
//! - `inputs`: the farm record ([`OrganicInputs`]) and its validation
//! - `factors`: per-input carbon conversion factors and the standard table
//! - `calculator`: the sequestration, income and SOC projection pipeline
//! - `constants`: fixed scientific and reporting constants
//! - `errors`: the crate error type
//!
//! # Methodology
//!
//! Each input's fresh tonnage is multiplied by its dry matter, carbon
//! content and retention fractions to give stable soil carbon, and the
//! contributions are summed. Creditable CO2e applies the exact molar mass
//! ratio 44/12. The SOC projection spreads the carbon over a standard
//! plough layer of 2000 t of soil per acre. See [`calculator`] for the
//! full walkthrough.
//!
//! # Example
//!
//! ```rust
//! use ecosoil_core::calculator::CarbonCalculator;
//! use ecosoil_core::inputs::OrganicInputs;
//!
//! // Five acres applying 10 t FYM, 5 t vermicompost and 2 t green manure
//! // per year, selling credits at $20 per ton of CO2e.
//! let inputs = OrganicInputs::new(5.0, 0.40, 10.0, 5.0, 2.0, 20.0);
//!
//! let result = CarbonCalculator::new().calculate(&inputs).unwrap();
//! assert!(result.total_stable_carbon > 0.33 && result.total_stable_carbon < 0.34);
//! assert_eq!(result.verdict.to_string(), "Low");
//! ```

pub mod calculator;
pub mod constants;
pub mod factors;
pub mod inputs;

pub mod errors;

// Re-export the working surface for one-line imports
pub use calculator::{CalculationResult, CarbonCalculator, SequestrationBreakdown, Verdict};
pub use errors::{EcoSoilError, EcoSoilResult};
pub use factors::{CarbonFactor, CarbonFactorTable, STANDARD_FACTORS};
pub use inputs::{InputKind, OrganicInputs};
