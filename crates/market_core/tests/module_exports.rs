//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use chrono::NaiveDate;

/// Test that curve types are accessible via absolute path.
#[test]
fn test_curves_module_exports() {
    use market_core::curves::ConstantCurve;
    use market_core::curves::Curve;
    use market_core::curves::CurveEnum;
    use market_core::curves::CurveKind;
    use market_core::curves::InterpolatedNodalCurve;

    let nodal = InterpolatedNodalCurve::new("A", &[1.0_f64, 2.0], &[0.01, 0.02]).unwrap();
    let constant = ConstantCurve::new("B", 0.03_f64);

    let curves: Vec<CurveEnum<f64>> = vec![nodal.into(), constant.into()];
    let kinds: Vec<CurveKind> = curves.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![CurveKind::InterpolatedNodal, CurveKind::Constant]);
}

/// Test that metadata types are accessible via absolute path.
#[test]
fn test_metadata_module_exports() {
    use market_core::metadata::CurveMetadata;
    use market_core::metadata::NodeKey;
    use market_core::metadata::NodeMetadata;
    use market_core::metadata::Tenor;
    use market_core::metadata::TenorUnit;

    let date = NaiveDate::from_ymd_opt(2026, 6, 17).unwrap();
    let nodes = vec![
        NodeMetadata::tenor(Tenor::new(3, TenorUnit::Months)),
        NodeMetadata::date(date, "SFRM6"),
    ];
    let meta = CurveMetadata::with_parameters("USD-SOFR", nodes);

    let params = meta.parameters().unwrap();
    assert_eq!(params[0].label(), &NodeKey::from("3M"));
    assert_eq!(params[1].identifier(), &NodeKey::Date(date));
}

/// Test that adjustment and error types are accessible via absolute path.
#[test]
fn test_adjustment_and_error_exports() {
    use market_core::adjustment::ValueAdjustment;
    use market_core::error::MarketDataError;

    assert_eq!(ValueAdjustment::DeltaAmount(1.0_f64).adjust(1.0), 2.0);

    let err: MarketDataError = "7Q".parse::<market_core::Tenor>().unwrap_err();
    assert_eq!(err, MarketDataError::InvalidTenor("7Q".to_string()));
}

/// Test crate-root re-exports.
#[test]
fn test_root_reexports() {
    use market_core::{Curve, CurveName, Float, InterpolatedNodalCurve, NodeKey, Tenor};

    fn first_node<T: Float, C: Curve<T>>(curve: &C) -> Option<NodeKey> {
        curve
            .metadata()
            .parameters()
            .and_then(|nodes| nodes.first())
            .map(|node| node.identifier().clone())
    }

    let curve =
        InterpolatedNodalCurve::from_tenors("EUR-ESTR", &[Tenor::years(2)], &[0.025_f64]).unwrap();
    assert_eq!(curve.name(), &CurveName::from("EUR-ESTR"));
    assert_eq!(first_node(&curve), Some(NodeKey::Tenor(Tenor::years(2))));
}
