use analytics::{AnalyticsEngine, FilterCriteria, FilteredView, GroupKey, apply_filter};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::path::PathBuf;
use store::{GeneratorParams, SalesStore};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Vantage sales reporting application.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load configuration and initialize the sealed record store. This is the
    // single point where data enters the process; everything after here is a
    // pure read path.
    let settings = configuration::load_config()?;
    let params = GeneratorParams {
        seed: settings.generator.seed,
        record_count: settings.generator.record_count,
        day_span: settings.generator.day_span,
        end_date: chrono::Utc::now().date_naive(),
    };
    let store = SalesStore::initialize(&settings.data.path, &params)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &store)?,
        Commands::Export(args) => handle_export(args, &store)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An interactive-grade sales report over a persisted order dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filtered sales report: KPIs, breakdowns, trend, and top orders.
    Report(ReportArgs),
    /// Write the filtered records to a JSON file in the portable format.
    Export(ExportArgs),
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// How many of the highest-amount orders to list.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Number of bins in the quantity histogram.
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// Also dump the filtered records as raw JSON.
    #[arg(long)]
    show_raw: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// The output file path for the filtered JSON export.
    #[arg(long, short)]
    output: PathBuf,
}

/// The filter bounds, one flag per dashboard control. Every flag is optional;
/// an omitted flag leaves that dimension fully open.
#[derive(Args)]
struct FilterArgs {
    /// Start of the order-date range (YYYY-MM-DD). Defaults to the oldest order.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the order-date range (YYYY-MM-DD). Defaults to the newest order.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Keep only these regions (repeatable). Defaults to every region present.
    #[arg(long)]
    region: Vec<String>,

    /// Keep only these products (repeatable). Defaults to every product present.
    #[arg(long)]
    product: Vec<String>,

    /// Keep only these sales reps (repeatable). Defaults to every rep present.
    #[arg(long)]
    rep: Vec<String>,

    /// Minimum order amount, inclusive.
    #[arg(long)]
    min_amount: Option<Decimal>,

    /// Maximum order amount, inclusive.
    #[arg(long)]
    max_amount: Option<Decimal>,
}

/// Turns the CLI flags into one criteria value, starting from the
/// all-inclusive defaults the store implies.
fn build_criteria(store: &SalesStore, args: &FilterArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::all_inclusive(store.records());

    if let Some(from) = args.from {
        criteria.start_date = from;
    }
    if let Some(to) = args.to {
        criteria.end_date = to;
    }
    if !args.region.is_empty() {
        criteria.regions = args.region.iter().cloned().collect::<BTreeSet<_>>();
    }
    if !args.product.is_empty() {
        criteria.products = args.product.iter().cloned().collect::<BTreeSet<_>>();
    }
    if !args.rep.is_empty() {
        criteria.reps = args.rep.iter().cloned().collect::<BTreeSet<_>>();
    }
    if let Some(min) = args.min_amount {
        criteria.min_amount = min;
    }
    if let Some(max) = args.max_amount {
        criteria.max_amount = max;
    }

    criteria
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the `report` command: filter once, then render every section.
fn handle_report(args: ReportArgs, store: &SalesStore) -> Result<()> {
    let criteria = build_criteria(store, &args.filters);
    let view = apply_filter(store.records(), &criteria);
    let engine = AnalyticsEngine::new();

    print_summary(&engine, &view, &criteria);

    if view.is_empty() {
        println!("\nNo data for selected filters");
        return Ok(());
    }

    print_grouped_sales(&engine, &view, GroupKey::Product, "Sales by Product");
    print_grouped_sales(&engine, &view, GroupKey::Region, "Sales by Region");
    print_weekly_trend(&engine, &view);
    print_region_product_breakdown(&engine, &view);
    print_top_orders(&engine, &view, args.top);
    print_quantity_histogram(&engine, &view, args.bins)?;

    if args.show_raw {
        println!("\n== Raw records (filtered) ==");
        println!("{}", serde_json::to_string_pretty(view.records())?);
    }

    Ok(())
}

fn print_summary(engine: &AnalyticsEngine, view: &FilteredView, criteria: &FilterCriteria) {
    let summary = engine.summarize(view);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Total Sales",
        "Orders",
        "Avg Order Value",
        "Date Range",
    ]);
    table.add_row(vec![
        format!("{:.2}", summary.total_sales),
        summary.order_count.to_string(),
        format!("{:.2}", summary.average_order),
        format!("{} → {}", criteria.start_date, criteria.end_date),
    ]);

    println!("{table}");
}

fn print_grouped_sales(engine: &AnalyticsEngine, view: &FilteredView, key: GroupKey, title: &str) {
    let mut totals: Vec<(String, Decimal)> = engine.sum_by_key(view, key).into_iter().collect();
    // Presentation order: largest total first.
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![title, "Amount"]);
    for (group, total) in totals {
        table.add_row(vec![group, format!("{total:.2}")]);
    }

    println!("\n{table}");
}

fn print_weekly_trend(engine: &AnalyticsEngine, view: &FilteredView) {
    let series = engine.weekly_time_series(view);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Week Starting", "Amount"]);
    for (week_start, total) in series {
        table.add_row(vec![week_start.to_string(), format!("{total:.2}")]);
    }

    println!("\n{table}");
}

fn print_region_product_breakdown(engine: &AnalyticsEngine, view: &FilteredView) {
    let mut breakdown: Vec<((String, String), Decimal)> = engine
        .region_product_breakdown(view)
        .into_iter()
        .collect();
    breakdown.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Region", "Product", "Amount"]);
    for ((region, product), total) in breakdown {
        table.add_row(vec![region, product, format!("{total:.2}")]);
    }

    println!("\n{table}");
}

fn print_top_orders(engine: &AnalyticsEngine, view: &FilteredView, n: usize) {
    let top = engine.top_n(view, n);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Order ID",
        "Date",
        "Product",
        "Region",
        "Sales Rep",
        "Qty",
        "Amount",
    ]);
    for record in top {
        table.add_row(vec![
            record.order_id.clone(),
            record.order_date.to_string(),
            record.product.clone(),
            record.region.clone(),
            record.sales_rep.clone(),
            record.quantity.to_string(),
            format!("{:.2}", record.amount),
        ]);
    }

    println!("\nTop {n} Orders\n{table}");
}

fn print_quantity_histogram(
    engine: &AnalyticsEngine,
    view: &FilteredView,
    bins: usize,
) -> Result<()> {
    let histogram = engine.quantity_histogram(view, bins)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Quantity Range", "Orders"]);
    for bin in histogram {
        table.add_row(vec![
            format!("{:.1} - {:.1}", bin.lower, bin.upper),
            bin.count.to_string(),
        ]);
    }

    println!("\nQuantity Distribution\n{table}");
    Ok(())
}

// ==============================================================================
// Export Command Logic
// ==============================================================================

/// Handles the `export` command: filter, then write the portable JSON file.
fn handle_export(args: ExportArgs, store: &SalesStore) -> Result<()> {
    let criteria = build_criteria(store, &args.filters);
    let view = apply_filter(store.records(), &criteria);

    export::write_portable_json(&args.output, &view)?;
    println!(
        "Exported {} of {} records to {}",
        view.len(),
        store.len(),
        args.output.display()
    );

    Ok(())
}
