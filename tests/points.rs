// tests/points.rs
use hidrapink_commission::points::{DEFAULT_POINT_VALUE, round_currency, round_points};
use hidrapink_commission::{
    ActivationCount, Payout, PointValue, SaleLine, SaleTotals, SalesSummary, SkuPoints, SkuPointsTable, summarize,
};

#[test]
fn default_point_value_converts_both_ways() {
    let pv = PointValue::default();
    assert_eq!(pv.get(), DEFAULT_POINT_VALUE);
    assert_eq!(pv.points_to_brl(150.0), 15.0);
    assert_eq!(pv.brl_to_points(15.0), 150);
    assert_eq!(pv.brl_to_points(0.04), 0);
    assert_eq!(pv.brl_to_points(0.06), 1);
}

#[test]
fn conversions_ignore_non_finite_input() {
    let pv = PointValue::default();
    assert_eq!(pv.points_to_brl(f64::NAN), 0.0);
    assert_eq!(pv.points_to_brl(f64::INFINITY), 0.0);
    assert_eq!(pv.brl_to_points(f64::NEG_INFINITY), 0);
}

#[test]
fn negative_brl_is_zero_points() {
    assert_eq!(PointValue::default().brl_to_points(-20.0), 0);
}

#[test]
fn payout_rounds_the_summary_total() {
    let pv = PointValue::new(0.25).unwrap();
    // 33 * 1.25 = 41.25 → 41 points → R$ 10.25
    let summary = summarize(33.0, ActivationCount::new(7)).unwrap();
    assert_eq!(pv.payout(&summary), Payout { points: 41, brl: 10.25 });

    let nothing = summarize(500.0, ActivationCount::ZERO).unwrap();
    assert_eq!(pv.payout(&nothing), Payout { points: 0, brl: 0.0 });
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_points(0.5), 1);
    assert_eq!(round_points(2.49), 2);
    assert_eq!(round_currency(2.005_1), 2.01);
    assert_eq!(round_currency(-1.239), -1.24);
}

#[test]
fn sales_feed_the_summary() {
    let table: SkuPointsTable = [
        SkuPoints::new("HP-GLOSS", 12),
        SkuPoints::new("HP-SERUM", 40),
    ]
    .into_iter()
    .collect();

    let sales = [
        SaleLine { sku: "hp-gloss".into(), quantity: 5 },
        SaleLine { sku: "HP-SERUM".into(), quantity: 1 },
        SaleLine { sku: "UNKNOWN".into(), quantity: 3 },
    ];
    let base = table.base_points(&sales);
    assert_eq!(base.base_points, 100);
    assert_eq!(base.unmatched, vec!["UNKNOWN".to_string()]);

    let summary = summarize(base.base_points as f64, ActivationCount::new(12)).unwrap();
    assert_eq!(summary.total_points, 150.0);
    assert_eq!(PointValue::default().payout(&summary).brl, 15.0);
}

#[test]
fn sales_points_json_shape() {
    let table: SkuPointsTable = [SkuPoints::new("A", 2)].into_iter().collect();
    let out = table.base_points(&[SaleLine { sku: "B".into(), quantity: 1 }]);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({ "basePoints": 0, "unmatched": ["B"], "inactive": [] })
    );
}

#[test]
fn order_commission_becomes_base_points() {
    let summary: SalesSummary = [
        SaleTotals::compute(200.0, 20.0, 10.0).unwrap(),
        SaleTotals::compute(50.0, 80.0, 10.0).unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(summary.total_net, 180.0);
    assert_eq!(summary.total_commission, 18.0);

    let base = summary.commission_points(PointValue::default());
    assert_eq!(base, 180);
    assert_eq!(summarize(base as f64, ActivationCount::new(12)).unwrap().total_points, 270.0);
}
