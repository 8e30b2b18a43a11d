// demos/cycle_report.rs
// Run with:
//   RUST_LOG=debug cargo run --example cycle_report

use hidrapink_commission::config::Config;
use hidrapink_commission::{
    ActivationCount, Cycle, CycleProgress, SaleLine, SaleTotals, SalesSummary, SkuPoints, SkuPointsTable,
    format_multiplier, next_band, summarize,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::load();

    let table: SkuPointsTable = [
        SkuPoints::new("HP-GLOSS", 12),
        SkuPoints::new("HP-SERUM", 40),
        SkuPoints::new("HP-KIT", 95).inactive(),
    ]
    .into_iter()
    .collect();

    let sales = [
        SaleLine { sku: "HP-GLOSS".into(), quantity: 14 },
        SaleLine { sku: "hp-serum".into(), quantity: 6 },
        SaleLine { sku: "HP-KIT".into(), quantity: 2 },
        SaleLine { sku: "HP-OLD".into(), quantity: 1 },
    ];
    let base = table.base_points(&sales);

    let cycle = Cycle::new(2026, 10)?;
    println!("== Ciclo {cycle} ==");
    println!(
        "Base points -> {} (unmatched: {:?}, inactive: {:?})",
        base.base_points, base.unmatched, base.inactive
    );

    // (gross, discount) per order at a 10% commission
    let orders = [(189.90, 0.0), (74.50, 7.45), (20.00, 25.00)];
    let totals: SalesSummary = orders
        .iter()
        .map(|&(gross, discount)| SaleTotals::compute(gross, discount, 10.0))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect();
    println!(
        "Orders -> {} | net R$ {:.2} | commission R$ {:.2} ({} pts)",
        totals.sales,
        totals.total_net,
        totals.total_commission,
        totals.commission_points(cfg.point_value),
    );

    for activations in [0u32, 3, 8, 12, 17, 25] {
        let activations = ActivationCount::new(activations);
        let summary = summarize(base.base_points as f64, activations)?;
        let payout = cfg.point_value.payout(&summary);
        let progress = CycleProgress::new(activations.get(), cfg.cycle_target);

        println!(
            "{:>3} ativações | {} | {:>8.2} pts | R$ {:>8.2} | {:>5.1}% do ciclo | {}",
            activations,
            format_multiplier(summary.multiplier),
            summary.total_points,
            payout.brl,
            progress.capped_percent(),
            summary.label,
        );
        if let Some(next) = next_band(activations) {
            println!("      faltam {} para {}", next.activations_needed, format_multiplier(next.factor));
        }
    }

    Ok(())
}
