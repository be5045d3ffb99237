//! contentlift - Content vs. Revenue report CLI
//!
//! Joins content-publishing events with daily sales and prints which content
//! types line up with higher future revenue (directional, not causal).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use contentlift_core::analytics::{DashboardReport, PlatformEffect, Winner};
use contentlift_core::format::{format_day, format_gbp, format_opt, format_pct};
use contentlift_core::{ingest, Config};

#[derive(Parser, Debug)]
#[command(name = "contentlift")]
#[command(about = "Which content type correlates with higher future revenue?")]
#[command(version)]
struct Args {
    /// Content events JSON file (default: data.content_path from config)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Daily sales JSON file (default: data.sales_path from config)
    #[arg(long)]
    sales: Option<PathBuf>,

    /// Number of top revenue days to list
    #[arg(long)]
    top: Option<usize>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = contentlift_core::logging::init(&config.logging).ok();

    let content_path = args
        .content
        .or_else(|| config.data.content_path.clone())
        .context("no content file given (use --content or set data.content_path)")?;
    let sales_path = args
        .sales
        .or_else(|| config.data.sales_path.clone())
        .context("no sales file given (use --sales or set data.sales_path)")?;

    let mut analytics = config.analytics.clone();
    if let Some(top) = args.top {
        analytics.top_revenue_days = top;
    }
    analytics.validate().context("invalid analytics settings")?;

    let events = ingest::load_content(&content_path)
        .with_context(|| format!("failed to load content from {}", content_path.display()))?;
    let sales = ingest::load_sales(&sales_path)
        .with_context(|| format!("failed to load sales from {}", sales_path.display()))?;

    tracing::info!(
        events = events.len(),
        sales = sales.len(),
        "Building dashboard report"
    );
    let report = DashboardReport::build(&events, &sales, &analytics);

    match args.export.as_deref() {
        Some("json") => print_json(&report)?,
        Some("md") => print_markdown(&report),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&report),
    }

    Ok(())
}

fn effect_sentence(effect: &PlatformEffect, for_what: &str) -> String {
    let rounded = effect.pct_diff.abs().round();
    match effect.winner.platform() {
        Some(winner) if rounded != 0.0 => {
            let other = if effect.winner == Winner::Instagram {
                "TikTok"
            } else {
                "Instagram"
            };
            format!(
                "{} shows ~{:.0}% stronger {} signal than {} (directional, small sample).",
                winner, rounded, for_what, other
            )
        }
        _ => format!(
            "Instagram and TikTok look roughly similar for {} in this sample.",
            for_what
        ),
    }
}

fn print_terminal(report: &DashboardReport) {
    let title = "CONTENT VS. REVENUE";

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    if report.daily.is_empty() {
        println!("  No sales days found in the input.");
        println!();
        return;
    }

    let o = &report.overview;
    println!("OVERVIEW");
    println!(
        "   Period:   {} - {}",
        format_opt(o.first_date, format_day),
        format_opt(o.last_date, format_day)
    );
    println!(
        "   Days:     {:<12} Posts: {} ({:.1}/day)",
        o.total_days, o.total_posts, o.avg_posts_per_day
    );
    println!(
        "   Revenue:  {}/day    Baseline AFR: {}",
        format_gbp(o.avg_revenue_per_day),
        format_gbp(report.baseline_afr)
    );
    println!();

    println!("WHERE TO POST");
    println!("   Sales: {}", effect_sentence(&report.sales_effect, "sales"));
    println!("   Reach: {}", effect_sentence(&report.reach_effect, "reach"));
    let p = &report.posting_projection;
    println!(
        "   2 -> 3+ posts/day: {} AFR ({} -> {}, n={}/{})",
        format_pct(p.pct_increase),
        format_gbp(p.from_afr),
        format_gbp(p.to_afr),
        p.sample_2,
        p.sample_3
    );
    println!();

    println!("CONTENT SPLIT");
    for row in &report.content_split {
        println!("   {:<16} {:>4}  {:>4.0}%", row.kind.label(), row.count, row.pct);
    }
    println!();

    if let Some(ex) = &report.extremes {
        println!("EXTREMES");
        println!(
            "   Views:    avg {:.0}, low {:.0} ({}), high {:.0} ({})",
            ex.views.avg,
            ex.views.min,
            format_day(ex.views.min_date),
            ex.views.max,
            format_day(ex.views.max_date)
        );
        println!(
            "   Revenue:  avg {}, low {} ({}), high {} ({})",
            format_gbp(ex.revenue.avg),
            format_gbp(ex.revenue.min),
            format_day(ex.revenue.min_date),
            format_gbp(ex.revenue.max),
            format_day(ex.revenue.max_date)
        );
        println!();
    }

    println!("LIFT BY CONTENT TYPE");
    for (lift, corr) in report.lift_by_type.iter().zip(&report.correlation_by_type) {
        println!(
            "   {:<16} {:>5}  {:<8}  days={:<3} r={:+.2} (n={})",
            lift.kind.label(),
            format_pct(lift.lift_pct),
            lift.badge().label(),
            lift.posted_days,
            corr.r,
            corr.n
        );
    }
    println!();

    if !report.top_revenue_days.is_empty() {
        println!("TOP REVENUE DAYS");
        for row in &report.top_revenue_days {
            let f = &row.formats_past_2_days;
            println!(
                "   {}. {:<7} {:>8} ({})  prior 2 days: reach {}, {} posts (R{} S{} P{} T{})",
                row.rank,
                format_day(row.date),
                format_gbp(row.revenue),
                format_pct(row.revenue_delta_pct),
                row.reach_past_2_days,
                f.total_posts,
                f.reels,
                f.stories,
                f.posts,
                f.tiktok
            );
        }
        println!();
    }

    println!("SUMMARY BY TYPE");
    for row in &report.summary_by_type {
        println!(
            "   {:<16} reach/post {:>8.0}  AFR {:>7}  lift {:>5}  posts {}",
            row.kind.label(),
            row.avg_reach_index,
            format_gbp(row.avg_afr),
            format_pct(row.lift_vs_baseline_pct),
            row.post_count
        );
    }
    println!();
}

fn print_markdown(report: &DashboardReport) {
    println!("# Content vs. Revenue");
    println!();

    if report.daily.is_empty() {
        println!("*No sales days found in the input.*");
        return;
    }

    let o = &report.overview;
    println!("## Overview");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!(
        "| Period | {} - {} |",
        format_opt(o.first_date, format_day),
        format_opt(o.last_date, format_day)
    );
    println!("| Days | {} |", o.total_days);
    println!("| Posts | {} |", o.total_posts);
    println!("| Avg revenue/day | {} |", format_gbp(o.avg_revenue_per_day));
    println!("| Baseline AFR | {} |", format_gbp(report.baseline_afr));
    println!();

    println!("## Where to post");
    println!();
    println!("- **Sales:** {}", effect_sentence(&report.sales_effect, "sales"));
    println!("- **Reach:** {}", effect_sentence(&report.reach_effect, "reach"));
    println!(
        "- **2 -> 3+ posts/day:** {} AFR (samples: {} / {})",
        format_pct(report.posting_projection.pct_increase),
        report.posting_projection.sample_2,
        report.posting_projection.sample_3
    );
    println!();

    println!("## Lift by content type");
    println!();
    println!("| Type | Lift | Signal | Posted days | r | n |");
    println!("|------|------|--------|-------------|---|---|");
    for (lift, corr) in report.lift_by_type.iter().zip(&report.correlation_by_type) {
        println!(
            "| {} | {} | {} | {} | {:.2} | {} |",
            lift.kind.label(),
            format_pct(lift.lift_pct),
            lift.badge().label(),
            lift.posted_days,
            corr.r,
            corr.n
        );
    }
    println!();

    println!("## Top revenue days");
    println!();
    println!("| # | Day | Revenue | vs avg | Reach (D-1, D-2) | Posts (D-1, D-2) |");
    println!("|---|-----|---------|--------|------------------|------------------|");
    for row in &report.top_revenue_days {
        println!(
            "| {} | {} | {} | {} | {} | {} |",
            row.rank,
            format_day(row.date),
            format_gbp(row.revenue),
            format_pct(row.revenue_delta_pct),
            row.reach_past_2_days,
            row.formats_past_2_days.total_posts
        );
    }
    println!();

    println!("---");
    println!("*Directional comparisons only; correlation is not causation.*");
}

fn print_json(report: &DashboardReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
