//! Scenario tests for the sequestration calculator.
//!
//! These tests exercise the full pipeline against a worked smallholder
//! scenario and verify its bookkeeping invariants:
//! - Totals equal the sum of their parts
//! - Outputs stay finite and non-negative for every valid record
//! - Degenerate and invalid records are rejected before any computation

use approx::assert_relative_eq;
use ecosoil_core::calculator::{CarbonCalculator, Verdict};
use ecosoil_core::errors::EcoSoilError;
use ecosoil_core::inputs::OrganicInputs;

mod smallholder_scenario {
    use super::*;

    /// Worked example: a five-acre farm at 0.40% SOC applying 10 t FYM,
    /// 5 t vermicompost and 2 t green manure, selling at $20/ton CO2e.
    #[test]
    fn test_reference_farm_worked_example() {
        let inputs = OrganicInputs::new(5.0, 0.40, 10.0, 5.0, 2.0, 20.0);
        let result = CarbonCalculator::new().calculate(&inputs).unwrap();

        assert_relative_eq!(result.breakdown.fym, 0.168, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.vermicompost, 0.15, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.green_manure, 0.0128, epsilon = 1e-12);

        assert_relative_eq!(result.total_stable_carbon, 0.3308, epsilon = 1e-12);
        assert_relative_eq!(result.co2_equivalent, 1.2129333333333333, epsilon = 1e-12);
        assert_relative_eq!(result.income_usd, 24.258666666666667, epsilon = 1e-10);
        assert_relative_eq!(result.income_local, 2013.4693333333334, epsilon = 1e-8);

        assert_relative_eq!(result.soc_increase, 0.003308, epsilon = 1e-12);
        assert_relative_eq!(result.projected_soc, 0.403308, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Low);
    }

    /// The default record is the reference scenario with the farm already
    /// at 0.50% SOC, so one year of applications tips it into Medium.
    #[test]
    fn test_default_record_projects_medium() {
        let result = CarbonCalculator::new()
            .calculate(&OrganicInputs::default())
            .unwrap();

        assert_relative_eq!(result.total_stable_carbon, 0.26, epsilon = 1e-12);
        assert_relative_eq!(result.projected_soc, 0.5026, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Medium);
    }

    /// Halving the exchange rate halves local income and nothing else.
    #[test]
    fn test_exchange_rate_only_scales_local_income() {
        let base = OrganicInputs::default();
        let halved = base.clone().with_exchange_rate(base.exchange_rate / 2.0);

        let calc = CarbonCalculator::new();
        let result_base = calc.calculate(&base).unwrap();
        let result_halved = calc.calculate(&halved).unwrap();

        assert_eq!(result_base.income_usd, result_halved.income_usd);
        assert_relative_eq!(
            result_halved.income_local,
            result_base.income_local / 2.0,
            epsilon = 1e-10
        );
        assert_eq!(result_base.verdict, result_halved.verdict);
    }
}

mod degenerate_inputs {
    use super::*;

    /// A zero-acre farm has no soil mass to project SOC against.
    #[test]
    fn test_zero_acre_farm_rejected() {
        let mut inputs = OrganicInputs::default();
        inputs.acres = 0.0;
        let err = CarbonCalculator::new().calculate(&inputs).unwrap_err();
        assert!(
            matches!(err, EcoSoilError::DegenerateFarm),
            "expected DegenerateFarm, got {:?}",
            err
        );
    }

    /// Validation names the offending field before any arithmetic runs.
    #[test]
    fn test_negative_price_names_the_field() {
        let mut inputs = OrganicInputs::default();
        inputs.carbon_price = -5.0;
        let err = CarbonCalculator::new().calculate(&inputs).unwrap_err();
        match err {
            EcoSoilError::InvalidInput { field, reason } => {
                assert_eq!(field, "carbon_price");
                assert!(reason.contains("-5"), "reason was: {}", reason);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    /// NaN anywhere in the record is an error, never a NaN result.
    #[test]
    fn test_non_finite_record_rejected() {
        let mut inputs = OrganicInputs::default();
        inputs.current_soc = f64::NAN;
        assert!(matches!(
            CarbonCalculator::new().calculate(&inputs),
            Err(EcoSoilError::InvalidInput { .. })
        ));
    }
}

mod zero_application {
    use super::*;

    /// A fallow year sequesters nothing and earns nothing.
    #[test]
    fn test_fallow_farm_sequesters_nothing() {
        let inputs = OrganicInputs::new(5.0, 0.40, 0.0, 0.0, 0.0, 20.0);
        let result = CarbonCalculator::new().calculate(&inputs).unwrap();

        assert_eq!(result.total_stable_carbon, 0.0);
        assert_eq!(result.co2_equivalent, 0.0);
        assert_eq!(result.income_usd, 0.0);
        assert_eq!(result.income_local, 0.0);
    }

    /// With nothing applied the projection must leave the SOC untouched,
    /// bit for bit.
    #[test]
    fn test_fallow_projection_is_identity() {
        let inputs = OrganicInputs::new(5.0, 0.40, 0.0, 0.0, 0.0, 20.0);
        let result = CarbonCalculator::new().calculate(&inputs).unwrap();

        assert_eq!(result.soc_increase, 0.0);
        assert_eq!(result.projected_soc, 0.40);
    }

    /// A fallow verdict reflects the current SOC alone.
    #[test]
    fn test_fallow_verdict_reflects_current_soc() {
        let calc = CarbonCalculator::new();

        let rich = OrganicInputs::new(5.0, 0.80, 0.0, 0.0, 0.0, 20.0);
        assert_eq!(calc.calculate(&rich).unwrap().verdict, Verdict::High);

        let middling = OrganicInputs::new(5.0, 0.60, 0.0, 0.0, 0.0, 20.0);
        assert_eq!(calc.calculate(&middling).unwrap().verdict, Verdict::Medium);

        let depleted = OrganicInputs::new(5.0, 0.30, 0.0, 0.0, 0.0, 20.0);
        assert_eq!(calc.calculate(&depleted).unwrap().verdict, Verdict::Low);
    }
}

mod pipeline_properties {
    use super::*;

    /// The reported total is exactly the sum of the breakdown entries.
    #[test]
    fn test_total_equals_sum_of_parts() {
        let calc = CarbonCalculator::new();
        for inputs in [
            OrganicInputs::default(),
            OrganicInputs::new(0.5, 0.1, 1.0, 0.0, 3.0, 12.0),
            OrganicInputs::new(40.0, 1.8, 120.0, 35.0, 60.0, 8.5),
        ] {
            let result = calc.calculate(&inputs).unwrap();
            assert_eq!(
                result.total_stable_carbon,
                result.breakdown.fym + result.breakdown.vermicompost + result.breakdown.green_manure
            );
        }
    }

    /// Doubling every application doubles the sequestered carbon.
    #[test]
    fn test_sequestration_scales_linearly_with_tonnage() {
        let base = OrganicInputs::default();
        let mut doubled = base.clone();
        doubled.fym_tons *= 2.0;
        doubled.vermicompost_tons *= 2.0;
        doubled.green_manure_tons *= 2.0;

        let calc = CarbonCalculator::new();
        let result_base = calc.calculate(&base).unwrap();
        let result_doubled = calc.calculate(&doubled).unwrap();

        assert_relative_eq!(
            result_doubled.total_stable_carbon,
            2.0 * result_base.total_stable_carbon,
            epsilon = 1e-12
        );
    }

    /// Income is proportional to the credit price.
    #[test]
    fn test_income_proportional_to_price() {
        let base = OrganicInputs::default();
        let mut dearer = base.clone();
        dearer.carbon_price = 2.0 * base.carbon_price;

        let calc = CarbonCalculator::new();
        let result_base = calc.calculate(&base).unwrap();
        let result_dearer = calc.calculate(&dearer).unwrap();

        assert_relative_eq!(
            result_dearer.income_usd,
            2.0 * result_base.income_usd,
            epsilon = 1e-10
        );
        assert_eq!(
            result_base.total_stable_carbon, result_dearer.total_stable_carbon,
            "price must not feed back into the physics"
        );
    }

    /// Every output of a valid record is finite and non-negative.
    #[test]
    fn test_outputs_finite_and_non_negative() {
        let calc = CarbonCalculator::new();
        for acres in [0.25, 5.0, 500.0] {
            for tons in [0.0, 3.0, 250.0] {
                let inputs = OrganicInputs::new(acres, 0.45, tons, tons, tons, 20.0);
                let result = calc.calculate(&inputs).unwrap();
                for value in [
                    result.total_stable_carbon,
                    result.co2_equivalent,
                    result.income_usd,
                    result.income_local,
                    result.soc_increase,
                    result.projected_soc,
                ] {
                    assert!(
                        value.is_finite() && value >= 0.0,
                        "bad output {} for {} acres, {} t",
                        value,
                        acres,
                        tons
                    );
                }
            }
        }
    }

    /// More organic matter never projects a lower SOC.
    #[test]
    fn test_projection_monotonic_in_application() {
        let calc = CarbonCalculator::new();
        let mut previous = 0.0;
        for tons in [0.0, 5.0, 10.0, 20.0, 40.0] {
            let inputs = OrganicInputs::new(5.0, 0.40, tons, 0.0, 0.0, 20.0);
            let projected = calc.calculate(&inputs).unwrap().projected_soc;
            assert!(
                projected >= previous,
                "projection dropped from {} to {} at {} t",
                previous,
                projected,
                tons
            );
            previous = projected;
        }
    }
}
