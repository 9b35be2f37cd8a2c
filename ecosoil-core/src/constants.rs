//! Fixed scientific and reporting constants.
//!
//! These are conversion factors and classification thresholds, not
//! configuration: the per-input carbon factors live in [`crate::factors`].

/// Scalar type used for every physical and monetary quantity in this crate.
pub type FloatValue = f64;

/// Mass of CO2 equivalent to a unit mass of sequestered carbon.
///
/// Ratio of molar masses (CO2 = 44, C = 12). Kept as the exact quotient
/// rather than a rounded 3.67-style literal so that chained computations do
/// not accumulate rounding error.
/// unit: dimensionless
pub const CO2_PER_CARBON: FloatValue = 44.0 / 12.0;

/// Reference mass of one acre of cultivated topsoil (the "furrow slice").
///
/// Standard soil-science assumption for the plough layer, used as the
/// denominator when expressing carbon gains as a share of soil mass.
/// unit: tons / acre
pub const FURROW_SLICE_TONS_PER_ACRE: FloatValue = 2000.0;

/// Default USD to local-currency conversion applied to credit income.
/// unit: local currency / USD
pub const DEFAULT_EXCHANGE_RATE: FloatValue = 83.0;

/// Upper edge of the SOC band expected for cultivated soils.
///
/// Values above this are accepted but logged as suspicious; most cropland
/// sits well below it.
/// unit: %
pub const SOC_EXPECTED_MAX: FloatValue = 2.0;

/// Projected SOC strictly above this classifies as a high trajectory.
/// unit: %
pub const SOC_HIGH_THRESHOLD: FloatValue = 0.75;

/// Projected SOC strictly above this (and at most [`SOC_HIGH_THRESHOLD`])
/// classifies as a medium trajectory.
/// unit: %
pub const SOC_MEDIUM_THRESHOLD: FloatValue = 0.50;
