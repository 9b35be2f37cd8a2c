//! Carbon conversion factors for organic inputs.
//!
//! Each input type carries three multiplicative fractions describing how
//! fresh applied material turns into carbon that stays in the soil:
//!
//! * dry matter share of the fresh mass (the rest is water),
//! * carbon share of that dry matter,
//! * the long-term retention share that survives decomposition.
//!
//! The product of the three is the stable-carbon fraction of fresh mass.
//! The standard table below follows published composition values for the
//! Indian smallholder context and is exposed as an inspectable constant.

use crate::constants::FloatValue;
use crate::inputs::InputKind;
use serde::{Deserialize, Serialize};

/// Conversion factors for one organic input type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFactor {
    /// Dry matter share of fresh applied mass.
    /// unit: fraction in (0, 1]
    pub dry_matter: FloatValue,

    /// Carbon share of the dry matter.
    /// unit: fraction in (0, 1]
    pub carbon_content: FloatValue,

    /// Share of the applied carbon retained in soil after decomposition.
    /// unit: fraction in (0, 1]
    pub retention: FloatValue,
}

impl CarbonFactor {
    /// Stable carbon per ton of fresh material.
    ///
    /// # Returns
    /// The product of the three fractions, i.e. tons of retained carbon
    /// per ton of fresh input.
    pub fn stable_fraction(&self) -> FloatValue {
        self.dry_matter * self.carbon_content * self.retention
    }
}

/// Factor table covering every [`InputKind`].
///
/// The table is total by construction: each input type has exactly one
/// entry, so lookups cannot fail. Construct a custom table with
/// [`CarbonFactorTable::new`] or take the standard one via `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFactorTable {
    fym: CarbonFactor,
    vermicompost: CarbonFactor,
    green_manure: CarbonFactor,
}

/// Standard factor table.
///
/// | input | dry matter | carbon content | retention |
/// |---|---|---|---|
/// | FYM | 0.40 | 0.35 | 0.12 |
/// | Vermicompost | 0.50 | 0.30 | 0.20 |
/// | Green manure | 0.20 | 0.40 | 0.08 |
pub const STANDARD_FACTORS: CarbonFactorTable = CarbonFactorTable {
    fym: CarbonFactor {
        dry_matter: 0.40,
        carbon_content: 0.35,
        retention: 0.12,
    },
    vermicompost: CarbonFactor {
        dry_matter: 0.50,
        carbon_content: 0.30,
        retention: 0.20,
    },
    green_manure: CarbonFactor {
        dry_matter: 0.20,
        carbon_content: 0.40,
        retention: 0.08,
    },
};

impl CarbonFactorTable {
    /// Build a table from explicit per-input factors.
    pub fn new(
        fym: CarbonFactor,
        vermicompost: CarbonFactor,
        green_manure: CarbonFactor,
    ) -> Self {
        Self {
            fym,
            vermicompost,
            green_manure,
        }
    }

    /// Factors for one input type.
    pub fn get(&self, kind: InputKind) -> CarbonFactor {
        match kind {
            InputKind::FarmYardManure => self.fym,
            InputKind::Vermicompost => self.vermicompost,
            InputKind::GreenManure => self.green_manure,
        }
    }

    /// Iterate over all entries in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (InputKind, CarbonFactor)> + '_ {
        InputKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Default for CarbonFactorTable {
    /// The standard table, identical to [`STANDARD_FACTORS`].
    fn default() -> Self {
        STANDARD_FACTORS
    }
}
