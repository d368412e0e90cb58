//! Integration tests exercising the public API end to end:
//! scenarios → evaluator → batch → presentation.

use approx::assert_relative_eq;
use coherence_core::{
    Classification, CouplingParameters, DISPLAY_PRECISION, EntityParameters, Evaluator,
    EvaluatorConfig, ForceEngine, ForceEntity, PairRequest, Validation, demo_scenarios,
    evaluate, evaluate_batch,
};

#[test]
fn demo_scenarios_end_to_end() {
    let requests: Vec<PairRequest> = demo_scenarios().iter().map(|s| s.to_request()).collect();
    let report = evaluate_batch(&Evaluator::default(), &requests);

    let shown: Vec<_> = report
        .results()
        .map(|(_, r)| r.rounded(DISPLAY_PRECISION))
        .collect();
    assert_eq!(shown.len(), 2);

    assert_eq!(shown[0].sync_factor, 0.581);
    assert_eq!(shown[0].total_output, 8.044);
    assert_eq!(shown[0].composite_score, 0.435);
    assert_eq!(shown[0].classification, Classification::HighFriction);

    assert_eq!(shown[1].sync_factor, 0.975);
    assert_eq!(shown[1].total_output, 9.753);
    assert_eq!(shown[1].composite_score, 0.975);
    assert_eq!(shown[1].classification, Classification::HighCoherence);

    assert_eq!(report.summary.high_coherence, 1);
    assert_eq!(report.summary.high_friction, 1);
}

#[test]
fn rounding_does_not_feed_back() {
    let a = EntityParameters::new(8.0, 30.0);
    let b = EntityParameters::new(8.0, -30.0);
    let c = CouplingParameters::new(0.8);
    let full = evaluate(a, b, c);
    let _ = full.rounded(1);
    let again = evaluate(a, b, c);
    assert_eq!(full, again);
    assert_ne!(full.sync_factor, full.rounded(3).sync_factor);
}

#[test]
fn default_evaluator_matches_free_function() {
    let a = EntityParameters::new(7.5, 120.0);
    let b = EntityParameters::new(2.0, -15.0);
    let c = CouplingParameters::new(0.33);
    let via_struct = Evaluator::default().evaluate(a, b, c).unwrap();
    assert_eq!(via_struct, evaluate(a, b, c));
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let r = evaluate(
        EntityParameters::new(5.0, 0.0),
        EntityParameters::new(5.0, 0.0),
        CouplingParameters::new(0.05),
    );
    let json = serde_json::to_value(r.rounded(3)).unwrap();
    assert_eq!(json["syncFactor"], 0.975);
    assert_eq!(json["totalOutput"], 9.753);
    assert_eq!(json["compositeScore"], 0.975);
    assert_eq!(json["classification"], "high-coherence");
    assert!(json["components"]["phaseAlignment"].is_number());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: EvaluatorConfig = serde_json::from_str(r#"{"validation": "strict"}"#).unwrap();
    assert_eq!(config.validation, Validation::Strict);
    assert_eq!(config.alpha, 0.5);
    assert_eq!(config.threshold, 0.67);
}

#[test]
fn negative_magnitudes_under_permissive_mode() {
    // Equal and opposite magnitudes leave only the ε guard in the denominator.
    let r = evaluate(
        EntityParameters::new(-3.0, 0.0),
        EntityParameters::new(3.0, 90.0),
        CouplingParameters::new(0.0),
    );
    assert!(r.components.phase_alignment > 1.0);
    assert!(r.sync_factor.is_finite());
}

#[test]
fn force_and_evaluator_share_nothing() {
    let engine = ForceEngine::default();
    let a = ForceEntity::new(0.9, vec![0.9, 0.5, 0.8]);
    let b = ForceEntity::new(0.9, vec![0.8, 0.6, 0.9]);
    let first = engine.compute(&a, &b, 0.05, 0.95);
    let _ = evaluate(
        EntityParameters::new(1.0, 0.0),
        EntityParameters::new(1.0, 0.0),
        CouplingParameters::new(0.5),
    );
    let second = engine.compute(&a, &b, 0.05, 0.95);
    assert_eq!(first, second);
    assert_relative_eq!(first.components.alignment, 0.991_940_220_660_986_2, epsilon = 1e-12);
}
