//! Farm input records.
//!
//! [`OrganicInputs`] is the single value record a caller hands to the
//! calculator: one year of organic-matter applications for one holding,
//! together with the farm size, its current soil-organic-carbon level and
//! the economics of the credit sale. The record is validated as a whole
//! before any computation runs; bad values are rejected, never clamped.

use crate::constants::{FloatValue, DEFAULT_EXCHANGE_RATE, SOC_EXPECTED_MAX};
use crate::errors::{EcoSoilError, EcoSoilResult};
use log::warn;
use serde::{Deserialize, Serialize};

/// The three organic input types tracked by the calculator.
///
/// The set is closed: the carbon factor table is keyed by this enum, so a
/// new input type cannot be added without also supplying its factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    /// Farm yard manure: decomposed mixture of cattle dung, urine and litter.
    FarmYardManure,
    /// Worm-processed compost.
    Vermicompost,
    /// Fresh plant matter grown to be ploughed back into the soil.
    GreenManure,
}

impl InputKind {
    /// All input types, in reporting order.
    pub const ALL: [InputKind; 3] = [
        InputKind::FarmYardManure,
        InputKind::Vermicompost,
        InputKind::GreenManure,
    ];

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::FarmYardManure => "FYM",
            InputKind::Vermicompost => "Vermicompost",
            InputKind::GreenManure => "Green Manure",
        }
    }
}

/// One year of farm data for a single holding.
///
/// All tonnages are fresh (as-applied) mass per year; moisture correction
/// happens inside the calculator via the factor table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganicInputs {
    /// Farm size.
    /// unit: acres
    pub acres: FloatValue,

    /// Current soil organic carbon share of soil mass.
    /// Expected range 0-2 for cultivated soils.
    /// unit: %
    pub current_soc: FloatValue,

    /// Farm yard manure applied per year.
    /// unit: tons / yr
    pub fym_tons: FloatValue,

    /// Vermicompost applied per year.
    /// unit: tons / yr
    pub vermicompost_tons: FloatValue,

    /// Green manure applied per year.
    /// unit: tons / yr
    pub green_manure_tons: FloatValue,

    /// Carbon credit price.
    /// unit: USD / ton CO2e
    pub carbon_price: FloatValue,

    /// USD to local-currency conversion applied to credit income.
    /// unit: local currency / USD
    /// default: 83
    pub exchange_rate: FloatValue,
}

impl Default for OrganicInputs {
    /// Reference smallholder scenario: five acres applying 10 t of FYM,
    /// 2 t of vermicompost and 5 t of green manure, selling at $20/ton.
    fn default() -> Self {
        Self {
            acres: 5.0,
            current_soc: 0.5,
            fym_tons: 10.0,
            vermicompost_tons: 2.0,
            green_manure_tons: 5.0,
            carbon_price: 20.0,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl OrganicInputs {
    /// Create a record with the default exchange rate.
    pub fn new(
        acres: FloatValue,
        current_soc: FloatValue,
        fym_tons: FloatValue,
        vermicompost_tons: FloatValue,
        green_manure_tons: FloatValue,
        carbon_price: FloatValue,
    ) -> Self {
        Self {
            acres,
            current_soc,
            fym_tons,
            vermicompost_tons,
            green_manure_tons,
            carbon_price,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }

    /// Override the USD conversion rate for a non-rupee local currency.
    pub fn with_exchange_rate(self, exchange_rate: FloatValue) -> Self {
        Self {
            exchange_rate,
            ..self
        }
    }

    /// Tonnage applied for one input type.
    pub fn tons(&self, kind: InputKind) -> FloatValue {
        match kind {
            InputKind::FarmYardManure => self.fym_tons,
            InputKind::Vermicompost => self.vermicompost_tons,
            InputKind::GreenManure => self.green_manure_tons,
        }
    }

    /// Validate the whole record before calculation.
    ///
    /// Every scalar must be finite and non-negative; a farm of exactly zero
    /// acres is rejected separately as [`EcoSoilError::DegenerateFarm`]
    /// because its soil mass (and hence any SOC projection) is undefined.
    /// A current SOC above the expected band is accepted with a warning.
    pub fn validate(&self) -> EcoSoilResult<()> {
        let fields = [
            ("acres", self.acres),
            ("current_soc", self.current_soc),
            ("fym_tons", self.fym_tons),
            ("vermicompost_tons", self.vermicompost_tons),
            ("green_manure_tons", self.green_manure_tons),
            ("carbon_price", self.carbon_price),
            ("exchange_rate", self.exchange_rate),
        ];
        for (field, value) in fields {
            require_finite(field, value)?;
            require_non_negative(field, value)?;
        }

        if self.acres == 0.0 {
            return Err(EcoSoilError::DegenerateFarm);
        }

        if self.current_soc > SOC_EXPECTED_MAX {
            warn!(
                "current SOC of {}% is above the {}% expected for cultivated soils; the projection may not be meaningful",
                self.current_soc, SOC_EXPECTED_MAX
            );
        }

        Ok(())
    }
}

fn require_finite(field: &str, value: FloatValue) -> EcoSoilResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EcoSoilError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be a finite number, got {}", value),
        })
    }
}

fn require_non_negative(field: &str, value: FloatValue) -> EcoSoilResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(EcoSoilError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be non-negative, got {}", value),
        })
    }
}
