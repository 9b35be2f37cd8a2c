//! Carbon Sequestration Calculator
//!
//! Turns one year of organic-matter applications into sequestered carbon,
//! CO2-equivalent credit volume, credit income and a projected
//! soil-organic-carbon level for the holding.
//!
//! # What This Calculator Does
//!
//! 1. Converts each fresh tonnage into stable soil carbon via the factor
//!    table:
//!    - the dry matter share strips the water weight
//!    - the carbon content takes the carbon share of that dry matter
//!    - the retention share keeps only what survives decomposition
//!
//! 2. Sums the per-input contributions into total stable carbon
//!
//! 3. Converts carbon mass to CO2-equivalent using the exact 44/12 molar
//!    mass ratio
//!
//! 4. Prices the CO2e at the given credit price and converts the proceeds
//!    to local currency
//!
//! 5. Projects the SOC percentage across the farm's plough layer (2000 t
//!    of soil per acre) and bands the outcome into a verdict
//!
//! # Inputs
//!
//! - [`OrganicInputs`] - one year of applications plus farm and market data
//!
//! # Outputs
//!
//! - [`CalculationResult`] - per-input breakdown, totals, income, SOC
//!   projection and verdict
//!
//! Records are validated for sign and finiteness up front, and the
//! zero-acre farm, whose soil mass would make the projection divide by
//! zero, is rejected as [`EcoSoilError::DegenerateFarm`]. Validation does
//! not bound magnitude: outputs stay finite for inputs of physical
//! magnitude, but an astronomically large tonnage or price can still
//! overflow the income figures.

use crate::constants::{
    FloatValue, CO2_PER_CARBON, FURROW_SLICE_TONS_PER_ACRE, SOC_HIGH_THRESHOLD,
    SOC_MEDIUM_THRESHOLD,
};
use crate::errors::{EcoSoilError, EcoSoilResult};
use crate::factors::CarbonFactorTable;
use crate::inputs::{InputKind, OrganicInputs};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil health verdict derived from the projected SOC level.
///
/// Banding is applied to the projected (not current) SOC:
/// above 0.75% is `High`, above 0.50% up to and including 0.75% is
/// `Medium`, everything at or below 0.50% is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    Medium,
    High,
}

impl Verdict {
    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Low => "Low",
            Verdict::Medium => "Medium",
            Verdict::High => "High",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable carbon sequestered per input type, in tons per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequestrationBreakdown {
    /// unit: tons C / yr
    pub fym: FloatValue,
    /// unit: tons C / yr
    pub vermicompost: FloatValue,
    /// unit: tons C / yr
    pub green_manure: FloatValue,
}

impl SequestrationBreakdown {
    /// Contribution of one input type.
    pub fn get(&self, kind: InputKind) -> FloatValue {
        match kind {
            InputKind::FarmYardManure => self.fym,
            InputKind::Vermicompost => self.vermicompost,
            InputKind::GreenManure => self.green_manure,
        }
    }

    /// Iterate over contributions in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (InputKind, FloatValue)> + '_ {
        InputKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total stable carbon across all input types.
    ///
    /// # Returns
    ///
    /// Sum of the per-input contributions (tons C / yr).
    pub fn total(&self) -> FloatValue {
        self.fym + self.vermicompost + self.green_manure
    }
}

/// Full result of one calculator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Stable carbon per input type.
    pub breakdown: SequestrationBreakdown,

    /// Total stable carbon sequestered.
    /// unit: tons C / yr
    pub total_stable_carbon: FloatValue,

    /// Creditable CO2-equivalent mass.
    /// unit: tons CO2e / yr
    pub co2_equivalent: FloatValue,

    /// Gross credit income.
    /// unit: USD / yr
    pub income_usd: FloatValue,

    /// Gross credit income after currency conversion.
    /// unit: local currency / yr
    pub income_local: FloatValue,

    /// Annual increase of the SOC share.
    /// unit: percentage points / yr
    pub soc_increase: FloatValue,

    /// SOC share after one year of the given applications.
    /// unit: %
    pub projected_soc: FloatValue,

    /// Banding of the projected SOC.
    pub verdict: Verdict,
}

/// Sequestration and income calculator over a fixed factor table.
///
/// # Algorithm
///
/// For each input type the stable carbon from fresh mass $m$ is
///
/// $$C_{stable} = m \times f_{dm} \times f_{c} \times f_{ret}$$
///
/// The contributions sum to $C_{total}$, which converts to creditable
/// CO2-equivalent mass via the molar mass ratio of CO2 to carbon:
///
/// $$CO_2e = C_{total} \times \frac{44}{12}$$
///
/// Income is the CO2e volume times the credit price, and the SOC gain is
/// $C_{total}$ expressed as a percentage of the plough-layer soil mass
/// (2000 t per acre).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonCalculator {
    factors: CarbonFactorTable,
}

impl CarbonCalculator {
    /// Create a calculator using the standard factor table.
    pub fn new() -> Self {
        Self::from_factors(CarbonFactorTable::default())
    }

    /// Create a calculator from an explicit factor table.
    pub fn from_factors(factors: CarbonFactorTable) -> Self {
        Self { factors }
    }

    /// The factor table this calculator applies.
    pub fn factors(&self) -> &CarbonFactorTable {
        &self.factors
    }

    /// Stable carbon sequestered by one input type.
    ///
    /// # Arguments
    ///
    /// * `kind` - Input type to look up in the factor table
    /// * `tons` - Fresh applied mass (tons / yr)
    ///
    /// # Returns
    ///
    /// Stable carbon (tons C / yr). A negative or non-finite tonnage is
    /// rejected, never clamped to zero.
    pub fn stable_carbon(&self, kind: InputKind, tons: FloatValue) -> EcoSoilResult<FloatValue> {
        if !tons.is_finite() || tons < 0.0 {
            return Err(EcoSoilError::InvalidInput {
                field: format!("{} tonnage", kind.label()),
                reason: format!("must be finite and non-negative, got {}", tons),
            });
        }
        Ok(tons * self.factors.get(kind).stable_fraction())
    }

    /// Convert sequestered carbon mass to CO2-equivalent mass.
    ///
    /// Uses the exact quotient 44/12, not the rounded 3.67 convention
    /// common in field handbooks.
    ///
    /// # Arguments
    ///
    /// * `total_carbon` - Sequestered carbon (tons C / yr)
    ///
    /// # Returns
    ///
    /// Creditable CO2e (tons / yr)
    pub fn co2_equivalent(total_carbon: FloatValue) -> FloatValue {
        total_carbon * CO2_PER_CARBON
    }

    /// Price a CO2e volume and convert the proceeds to local currency.
    ///
    /// # Arguments
    ///
    /// * `co2_tons` - Creditable CO2e (tons / yr)
    /// * `price` - Credit price (USD / ton CO2e)
    /// * `exchange_rate` - Local currency per USD
    ///
    /// # Returns
    ///
    /// (income_usd, income_local)
    pub fn income(
        co2_tons: FloatValue,
        price: FloatValue,
        exchange_rate: FloatValue,
    ) -> (FloatValue, FloatValue) {
        let usd = co2_tons * price;
        (usd, usd * exchange_rate)
    }

    /// Project the SOC change across the farm's plough layer.
    ///
    /// The sequestered carbon is spread over the plough-layer soil mass
    /// (2000 t per acre, the standard furrow-slice figure) and expressed
    /// as a percentage-point gain on the current SOC.
    ///
    /// # Arguments
    ///
    /// * `total_carbon` - Sequestered carbon (tons C / yr)
    /// * `acres` - Farm size (acres)
    /// * `current_soc` - Current SOC share (%)
    ///
    /// # Returns
    ///
    /// (soc_increase, projected_soc), both in percentage points. A negative
    /// or non-finite acreage is rejected, never clamped; a farm of exactly
    /// zero acres has no soil mass and is rejected as
    /// [`EcoSoilError::DegenerateFarm`].
    pub fn project_soc(
        total_carbon: FloatValue,
        acres: FloatValue,
        current_soc: FloatValue,
    ) -> EcoSoilResult<(FloatValue, FloatValue)> {
        if !acres.is_finite() || acres < 0.0 {
            return Err(EcoSoilError::InvalidInput {
                field: "acres".to_string(),
                reason: format!("must be finite and non-negative, got {}", acres),
            });
        }
        if acres == 0.0 {
            return Err(EcoSoilError::DegenerateFarm);
        }
        let soil_mass = acres * FURROW_SLICE_TONS_PER_ACRE;
        let increase = total_carbon / soil_mass * 100.0;
        Ok((increase, current_soc + increase))
    }

    /// Band a projected SOC level into a verdict.
    ///
    /// Both boundaries belong to the band below them: a projection of
    /// exactly 0.75% is `Medium` and exactly 0.50% is `Low`.
    pub fn classify_verdict(projected_soc: FloatValue) -> Verdict {
        if projected_soc > SOC_HIGH_THRESHOLD {
            Verdict::High
        } else if projected_soc > SOC_MEDIUM_THRESHOLD {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    /// Run the full pipeline for one farm record.
    ///
    /// Validates the record, then derives the per-input breakdown, totals,
    /// CO2-equivalent, income, SOC projection and verdict in one pass.
    ///
    /// # Arguments
    ///
    /// * `inputs` - One year of farm data
    ///
    /// # Returns
    ///
    /// The complete [`CalculationResult`], or the first validation error.
    pub fn calculate(&self, inputs: &OrganicInputs) -> EcoSoilResult<CalculationResult> {
        inputs.validate()?;

        let contribution = |kind: InputKind| self.stable_carbon(kind, inputs.tons(kind));
        let breakdown = SequestrationBreakdown {
            fym: contribution(InputKind::FarmYardManure)?,
            vermicompost: contribution(InputKind::Vermicompost)?,
            green_manure: contribution(InputKind::GreenManure)?,
        };
        let total_stable_carbon = breakdown.total();

        let co2_equivalent = Self::co2_equivalent(total_stable_carbon);
        let (income_usd, income_local) =
            Self::income(co2_equivalent, inputs.carbon_price, inputs.exchange_rate);
        let (soc_increase, projected_soc) =
            Self::project_soc(total_stable_carbon, inputs.acres, inputs.current_soc)?;
        let verdict = Self::classify_verdict(projected_soc);

        Ok(CalculationResult {
            breakdown,
            total_stable_carbon,
            co2_equivalent,
            income_usd,
            income_local,
            soc_increase,
            projected_soc,
            verdict,
        })
    }
}

impl Default for CarbonCalculator {
    /// A calculator over the standard factor table.
    fn default() -> Self {
        Self::new()
    }
}
