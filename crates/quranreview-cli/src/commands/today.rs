//! Daily review listing.

use chrono::NaiveDate;
use clap::Args;
use quranreview_core::{
    partition_for_today, Bucket, ItemRepository, MemorizationItem, TodayPartition,
};

#[derive(Args)]
pub struct TodayArgs {
    /// Day to plan for (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Print the buckets as JSON
    #[arg(long)]
    json: bool,
}

fn format_row(item: &MemorizationItem) -> String {
    let last = item
        .last_reviewed
        .map(|d| d.to_string())
        .unwrap_or_else(|| "not reviewed yet".to_string());
    format!(
        "  [{}] {} {}-{} ({} units)  {}  reviews: {}  last: {}",
        item.id,
        item.section_name,
        item.from_unit,
        item.to_unit,
        item.unit_count(),
        item.status,
        item.review_count,
        last
    )
}

pub fn run(args: TodayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = super::resolve_today(args.date);
    let repo = ItemRepository::open()?;
    let items = repo.load()?;
    let partition = partition_for_today(&items, today);
    tracing::info!(
        %today,
        mastered = partition.previously_mastered.len(),
        due = partition.due_today.len(),
        new = partition.newly_added.len(),
        "partitioned items"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&partition)?);
        return Ok(());
    }

    println!("Review plan for {today}");
    if partition.is_empty() {
        println!("Nothing to memorize today. Add a new memorization to get started!");
        return Ok(());
    }

    for line in render_plan(&partition) {
        println!("{line}");
    }
    Ok(())
}

/// Text listing of the buckets, one header per non-empty bucket.
fn render_plan(partition: &TodayPartition<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<Bucket> = None;
    for (bucket, item) in partition.display_order() {
        if current != Some(bucket) {
            lines.push(String::new());
            lines.push(format!("== {} ==", bucket.title()));
            current = Some(bucket);
        }
        lines.push(format_row(item));
    }
    lines
}
