use anyhow::Result;

use pledge_core::calc::{
    format_lives_per_year, format_money, format_nets, format_ten_year, CampaignMath, ImpactStats,
};
use pledge_core::AppConfig;

/// One-shot calculator: print the derived stats and exit.
pub fn run(config: &AppConfig, income: f64, percent: Option<f64>) -> Result<()> {
    let percent = percent.unwrap_or(config.campaign.default_percent);
    let math = CampaignMath::from(&config.campaign);
    let stats = ImpactStats::compute(income, percent, &math);

    println!(
        "A {:.1}% pledge on {} a year:",
        percent.clamp(0.0, 100.0),
        format_money(income.max(0.0))
    );
    println!("  Donation        {}", format_money(stats.donation));
    println!("  Lives saved     {}", format_lives_per_year(stats.lives_per_year));
    println!("  Nets funded     {}", format_nets(stats.nets));
    println!("  Over ten years  {}", format_ten_year(stats.ten_year_lives));

    Ok(())
}
