use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use shot_coach::coaching::{
    CoachingEngine, CoachingReport, FlawCatalog, FlawId, FlawSet, ImpactBreakdown,
    MeasurementImporter, ShotAnalysis,
};
use shot_coach::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// `metric,value` CSV export from the pose measurement step
    #[arg(long)]
    pub(crate) metrics: PathBuf,
    /// Print the full analysis as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Flaw id to include; repeat for several flaws, in detection order
    #[arg(long = "flaw", value_name = "ID")]
    pub(crate) flaws: Vec<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LevelArgs {
    /// Score on the 0-100 scale
    pub(crate) score: f64,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the validated catalog document as JSON
    #[arg(long)]
    pub(crate) export: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisEnvelope<'a> {
    analyzed_at: DateTime<Utc>,
    source: String,
    #[serde(flatten)]
    analysis: &'a ShotAnalysis,
}

pub(crate) fn run_analyze(catalog: FlawCatalog, args: AnalyzeArgs) -> Result<(), AppError> {
    let engine = CoachingEngine::new(catalog);
    let measurements = MeasurementImporter::from_path(&args.metrics)?;
    let analysis = engine.analyze(&measurements);

    if args.json {
        let envelope = AnalysisEnvelope {
            analyzed_at: Utc::now(),
            source: args.metrics.display().to_string(),
            analysis: &analysis,
        };
        print_json(&envelope);
        return Ok(());
    }

    println!("Shot analysis");
    println!("Source: {}", args.metrics.display());
    println!(
        "Measurements: {} metrics, {} signals",
        measurements.metrics.len(),
        measurements.signals.len()
    );
    if analysis.detected.is_empty() {
        println!("Detected flaws: none");
    } else {
        let detected: Vec<&str> = analysis.detected.iter().map(FlawId::as_str).collect();
        println!("Detected flaws: {}", detected.join(", "));
    }
    if let Some(combination) = &analysis.combination {
        let members: Vec<&str> = combination.flaw_ids.iter().map(FlawId::as_str).collect();
        println!("Combination: {}", members.join(" + "));
    }
    render_impact(&analysis.impact);
    println!(
        "Level: {} {} ({})",
        analysis.level.name, analysis.level.score_range, analysis.level.description
    );
    render_report(&analysis.report);

    Ok(())
}

pub(crate) fn run_report(catalog: FlawCatalog, args: ReportArgs) -> Result<(), AppError> {
    let engine = CoachingEngine::new(catalog);
    let flaws: FlawSet = args.flaws.into_iter().map(FlawId).collect();
    let report = engine.synthesize(&flaws);

    if args.json {
        print_json(&report);
        return Ok(());
    }

    render_impact(&engine.impact_breakdown(&flaws));
    render_report(&report);
    Ok(())
}

pub(crate) fn run_level(catalog: FlawCatalog, args: LevelArgs) -> Result<(), AppError> {
    let engine = CoachingEngine::new(catalog);
    let level = engine.classify(args.score);

    println!("{} (level {}) {}", level.name, level.level, level.score_range);
    println!("{}", level.description);
    for characteristic in &level.characteristics {
        println!("  - {characteristic}");
    }
    Ok(())
}

pub(crate) fn run_catalog(catalog: FlawCatalog, args: CatalogArgs) -> Result<(), AppError> {
    if args.export {
        print_json(&catalog.to_document());
        return Ok(());
    }

    println!("Flaw catalog: valid");
    println!(
        "{} flaws, {} combinations, {} levels",
        catalog.flaws().len(),
        catalog.combinations().len(),
        catalog.levels().len()
    );

    println!("\nFlaws");
    for flaw in catalog.flaws() {
        println!(
            "  {:<24} p{:<2} {:<10} {}",
            flaw.id,
            flaw.priority,
            flaw.category,
            flaw.detection_rule.metric()
        );
    }

    println!("\nLevels");
    for level in catalog.levels() {
        println!("  {:<13} {}", level.name, level.score_range);
    }

    Ok(())
}

fn render_impact(impact: &ImpactBreakdown) {
    println!("\nImpact");
    for component in &impact.components {
        println!(
            "  {:<24} priority {:>2} -> {} points",
            component.flaw, component.priority, component.points
        );
    }
    if impact.combination_bonus > 0 {
        println!("  combination bonus -> {} points", impact.combination_bonus);
    }
    let capped = if impact.capped { " (capped)" } else { "" };
    println!(
        "  deduction {}{} | final score {}",
        impact.deduction,
        capped,
        impact.final_score()
    );
}

fn render_report(report: &CoachingReport) {
    println!("\nPrimary issue: {}", report.primary_issue);
    if let Some(severity) = report.severity {
        println!("Severity: {}", severity.label());
    }
    println!("\nCause and effect\n{}", report.cause_and_effect);
    if let Some(impact) = &report.combination {
        println!("\nCombined impact: {impact}");
    }

    println!("\nFix order");
    for (position, fix) in report.fix_order.iter().enumerate() {
        println!("  {}. {fix}", position + 1);
    }

    println!("\nDrills");
    for drill in &report.drills {
        println!("  - {drill}");
    }

    if !report.secondary_issues.is_empty() {
        println!("\nAlso watch: {}", report.secondary_issues.join(", "));
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("json output unavailable: {err}"),
    }
}
