use std::time::{Duration, Instant};

use colored::*;
use flowtally_common::config::Config;
use flowtally_common::flow::TagBucket;
use flowtally_core::analyzer::{self, Analysis};
use tracing::info;

use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn analyze(cfg: &Config) -> anyhow::Result<()> {
    print::header("analyzing flow log", cfg.quiet);

    let start_time: Instant = Instant::now();
    let analysis: Analysis = analyzer::analyze(cfg);

    analysis_ends(&analysis, start_time.elapsed(), cfg);
    Ok(())
}

fn analysis_ends(analysis: &Analysis, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    if cfg.quiet == 0 {
        print::header("tag counts", cfg.quiet);
        if analysis.tags.is_empty() {
            print::print_status("No flow records were counted");
        } else {
            print::as_tree_one_level(tag_details(analysis));
        }
    }

    print_summary(analysis, total_time, cfg);
}

fn tag_details(analysis: &Analysis) -> Vec<Detail> {
    analysis
        .tags
        .iter()
        .map(|(bucket, count)| {
            let key: String = bucket.to_string();
            let value: ColoredString = match bucket {
                TagBucket::Tagged(_) => count.to_string().color(colors::ACCENT),
                TagBucket::Untagged => count.to_string().color(colors::UNTAGGED),
            };
            (key, value)
        })
        .collect()
}

fn print_summary(analysis: &Analysis, total_time: Duration, cfg: &Config) {
    let records: ColoredString = format!("{} flow records", analysis.records_counted())
        .bold()
        .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Analysis Complete: {records} counted in {total_time}");

    match cfg.quiet {
        0 => {
            print::header("summary", cfg.quiet);
            print::set_key_width(&["Rules", "Pairs", "Tagged", "Untagged", "Report"]);
            print::aligned_line("Rules", analysis.rules.len().to_string());
            print::aligned_line("Pairs", analysis.pairs.len().to_string());
            print::aligned_line("Tagged", analysis.records_tagged().to_string());
            print::aligned_line(
                "Untagged",
                analysis
                    .tags
                    .get(&TagBucket::Untagged)
                    .unwrap_or(0)
                    .to_string(),
            );
            match &analysis.report {
                Some(path) => print::aligned_line("Report", path.display().to_string()),
                None => print::aligned_line("Report", "not written".red()),
            }
            print::fat_separator();
            print::centerln(&output);
        }
        _ => info!("{}", output),
    }
}
