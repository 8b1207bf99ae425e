//! 평형 모델 생성/평가/역산 회귀 테스트.
use mccabe_thiele_toolbox::equilibrium::{
    EquilibriumCurve, EquilibriumModel, EquilibriumPoint, InterpolationMethod,
    BENZENE_TOLUENE_1ATM,
};
use mccabe_thiele_toolbox::error::{DesignError, ErrorKind};

const METHODS: [InterpolationMethod; 2] = [
    InterpolationMethod::NaturalCubic,
    InterpolationMethod::MonotoneCubic,
];

fn benzene_toluene(method: InterpolationMethod) -> EquilibriumModel {
    EquilibriumModel::build(BENZENE_TOLUENE_1ATM, method).expect("model")
}

#[test]
fn knots_are_reproduced_exactly() {
    for method in METHODS {
        let model = benzene_toluene(method);
        for p in BENZENE_TOLUENE_1ATM {
            let y = model.evaluate(p.x).expect("evaluate");
            assert!(
                (y - p.y).abs() < 1e-12,
                "{method:?}: y({}) = {y}, expected {}",
                p.x,
                p.y
            );
        }
    }
}

#[test]
fn curve_lies_above_diagonal_and_rises() {
    for method in METHODS {
        let model = benzene_toluene(method);
        let samples = model.sample(501);
        assert_eq!(samples.len(), 501);
        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[500].x, 1.0);
        for w in samples.windows(2) {
            assert!(w[1].y > w[0].y, "{method:?} not rising at x={}", w[1].x);
        }
        for p in &samples[1..500] {
            assert!(p.y > p.x, "{method:?} below diagonal at x={}", p.x);
        }
    }
}

#[test]
fn evaluation_outside_knots_is_rejected() {
    let pts = [
        EquilibriumPoint::new(0.1, 0.22),
        EquilibriumPoint::new(0.5, 0.72),
        EquilibriumPoint::new(0.9, 0.96),
    ];
    let model = EquilibriumModel::build(pts, InterpolationMethod::NaturalCubic).expect("model");
    assert_eq!(model.domain(), (0.1, 0.9));
    let err = model.evaluate(0.95).unwrap_err();
    assert_eq!(
        err,
        DesignError::Domain {
            x: 0.95,
            lo: 0.1,
            hi: 0.9
        }
    );
    assert_eq!(model.evaluate(0.05).unwrap_err().kind(), ErrorKind::Domain);
}

#[test]
fn unsorted_points_are_sorted() {
    let pts = [
        EquilibriumPoint::new(0.8, 0.92),
        EquilibriumPoint::new(0.0, 0.0),
        EquilibriumPoint::new(0.4, 0.63),
        EquilibriumPoint::new(1.0, 1.0),
    ];
    let model = EquilibriumModel::build(pts, InterpolationMethod::MonotoneCubic).expect("model");
    let xs: Vec<f64> = model.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 0.4, 0.8, 1.0]);
    assert!((model.evaluate(0.4).expect("y") - 0.63).abs() < 1e-12);
}

#[test]
fn malformed_data_is_rejected() {
    let single = [EquilibriumPoint::new(0.5, 0.7)];
    let duplicate = [
        EquilibriumPoint::new(0.0, 0.0),
        EquilibriumPoint::new(0.5, 0.7),
        EquilibriumPoint::new(0.5, 0.71),
        EquilibriumPoint::new(1.0, 1.0),
    ];
    let out_of_range = [
        EquilibriumPoint::new(0.0, 0.0),
        EquilibriumPoint::new(0.5, 1.2),
    ];
    let not_a_number = [
        EquilibriumPoint::new(0.0, 0.0),
        EquilibriumPoint::new(f64::NAN, 0.5),
    ];
    let cases: [(&str, &[EquilibriumPoint]); 4] = [
        ("single", &single),
        ("duplicate", &duplicate),
        ("range", &out_of_range),
        ("nan", &not_a_number),
    ];
    for (label, pts) in cases {
        let err = EquilibriumModel::build(pts.iter().copied(), InterpolationMethod::NaturalCubic)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData, "{label}: {err}");
    }
}

#[test]
fn inverse_lookup_matches_evaluation() {
    for method in METHODS {
        let model = benzene_toluene(method);
        for x in [0.03, 0.27, 0.55, 0.91] {
            let y = model.evaluate(x).expect("y");
            let back = model.liquid_for_vapor(y).expect("x");
            assert!((back - x).abs() < 1e-9, "{method:?}: {x} -> {y} -> {back}");
        }
    }
}

#[test]
fn inverse_lookup_outside_curve_range_fails() {
    let pts = [
        EquilibriumPoint::new(0.1, 0.22),
        EquilibriumPoint::new(0.9, 0.96),
    ];
    let model = EquilibriumModel::build(pts, InterpolationMethod::NaturalCubic).expect("model");
    let err = model.liquid_for_vapor(0.1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convergence);
}
