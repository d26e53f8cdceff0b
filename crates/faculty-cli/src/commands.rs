use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use faculty_cli::batch::{BatchOptions, MentionBatch};
use faculty_cli::input::{load_config, load_mentions, load_overrides, load_registry};
use faculty_match::{
    MatcherConfig, NameNormalizer, PlaceholderFilter, ResolutionReport, Resolver, VariantGenerator,
};
use faculty_model::MatchResult;

use crate::cli::{NormalizeArgs, PresetArg, ResolveArgs};
use crate::summary::apply_table_style;
use crate::types::ResolveRun;

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolveRun> {
    let span = info_span!("resolve", roster = %args.roster.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Load roster, configuration and mentions
    // =========================================================================
    let load_start = Instant::now();
    let config = build_config(args)?;
    let registry = load_registry(&args.roster)?;
    let mentions = load_mentions(&args.mentions)?;
    info!(
        roster_size = registry.len(),
        mention_count = mentions.len(),
        override_count = config.overrides.len(),
        threshold = config.threshold,
        duration_ms = load_start.elapsed().as_millis(),
        "inputs loaded"
    );

    let roster_size = registry.len();
    let resolver = Resolver::from_config(registry, &config).context("build resolver")?;
    let dangling_overrides: Vec<_> = resolver
        .overrides()
        .dangling_targets(resolver.registry())
        .into_iter()
        .cloned()
        .collect();
    for entry in &dangling_overrides {
        warn!(
            key = %entry.normalized_key,
            faculty_id = %entry.faculty_id,
            "override points at unknown faculty id"
        );
    }

    // =========================================================================
    // Stage 2: Expand mentions and resolve
    // =========================================================================
    let options = BatchOptions {
        split_multiple: args.split_multiple,
        keep_placeholders: args.keep_placeholders,
    };
    let batch = MentionBatch::prepare(&mentions, options, &PlaceholderFilter::from_config(&config));
    if !batch.skipped.is_empty() {
        info!(skipped = batch.skipped.len(), "placeholder mentions skipped");
    }

    let resolve_start = Instant::now();
    let results = resolver.resolve_all(&batch.queries);
    for result in &results {
        log_outcome(result);
    }
    let report = ResolutionReport::from_results(&results);
    info!(
        total = report.total,
        matched = report.matched,
        unmatched = report.unmatched.len(),
        ambiguous = report.ambiguous.len(),
        duration_ms = resolve_start.elapsed().as_millis(),
        "resolution complete"
    );

    // =========================================================================
    // Stage 3: Write outputs
    // =========================================================================
    match &args.output {
        Some(path) => write_json(path, &results)?,
        None => print_json(&results)?,
    }
    if let Some(path) = &args.report {
        write_json(path, &report)?;
    }

    Ok(ResolveRun {
        roster_size,
        mention_count: mentions.len(),
        results,
        report,
        skipped_placeholders: batch.skipped,
        dangling_overrides,
        output: args.output.clone(),
        report_path: args.report.clone(),
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => MatcherConfig::default(),
    };
    config.validate().context("invalid matcher config")?;
    let normalizer = NameNormalizer::from_config(&config);
    let generator = VariantGenerator::new(normalizer.clone());

    let mut table = Table::new();
    table.set_header(vec!["Name", "Normalized", "Variants"]);
    apply_table_style(&mut table);
    for name in &args.names {
        let canonical = normalizer.normalize(name);
        let variants: Vec<String> = generator.variants(name).into_iter().collect();
        trace!(name = %name, variants = ?variants, "variants generated");
        table.add_row(vec![
            name.clone(),
            canonical.into_string(),
            variants.join("\n"),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn build_config(args: &ResolveArgs) -> Result<MatcherConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => match args.preset {
            PresetArg::Default => MatcherConfig::default(),
            PresetArg::Strict => MatcherConfig::strict(),
            PresetArg::Relaxed => MatcherConfig::relaxed(),
        },
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(path) = &args.overrides {
        let extra = load_overrides(path)?;
        debug!(count = extra.len(), path = %path.display(), "overrides loaded");
        config = config.with_overrides(extra);
    }
    config.validate().context("invalid matcher config")?;
    Ok(config)
}

fn log_outcome(result: &MatchResult) {
    match &result.faculty_id {
        Some(faculty_id) => debug!(
            query = %result.query,
            faculty_id = %faculty_id,
            strategy = %result.strategy,
            confidence = result.confidence,
            "matched"
        ),
        None => {
            let best = result.alternatives.first().map(|a| a.faculty_id.as_str());
            warn!(
                query = %result.query,
                strategy = %result.strategy,
                best_candidate = best.unwrap_or("-"),
                confidence = result.confidence,
                "no faculty match"
            );
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("serialize output")?;
    writeln!(stdout).context("write stdout")
}
