//! Console output for MST results.
//!
//! Text mode lists arcs by vertex name with a coloured summary; JSON mode
//! prints the serialized report so scripts can consume it.

use crate::config::{OutputConfig, OutputFormat};
use crate::graph::Graph;
use crate::mst::{Arc, MstReport, PartialTreeList};
use crate::verify::Verification;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Arc with endpoint names resolved, for JSON output.
#[derive(Serialize)]
struct NamedArc {
    from: String,
    to: String,
    weight: u32,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    vertices: usize,
    arcs: Vec<NamedArc>,
    total_weight: u64,
    spanning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<&'a Verification>,
}

fn named(graph: &Graph, arc: &Arc) -> NamedArc {
    NamedArc {
        from: graph.name_of(arc.v1),
        to: graph.name_of(arc.v2),
        weight: arc.weight,
    }
}

/// Prints the MST in the configured format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(
    graph: &Graph,
    report: &MstReport,
    verification: Option<&Verification>,
    output: &OutputConfig,
) -> Result<()> {
    match output.format {
        OutputFormat::Json => print_json(graph, report, verification),
        OutputFormat::Text => {
            print_text(graph, report, output.show_total);
            if let Some(v) = verification {
                print_verification(v);
            }
            Ok(())
        }
    }
}

fn print_json(graph: &Graph, report: &MstReport, verification: Option<&Verification>) -> Result<()> {
    let json = JsonReport {
        vertices: graph.vertex_count(),
        arcs: report.arcs.iter().map(|a| named(graph, a)).collect(),
        total_weight: report.total_weight(),
        spanning: report.spans(graph.vertex_count()),
        verification,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_text(graph: &Graph, report: &MstReport, show_total: bool) {
    for arc in &report.arcs {
        let a = named(graph, arc);
        println!("  {} {} {}  {}", a.from, "--".blue(), a.to, a.weight.to_string().yellow());
    }

    if !report.spans(graph.vertex_count()) {
        println!(
            "{}",
            format!(
                "warn: {} arcs for {} vertices; the graph is not connected",
                report.arcs.len(),
                graph.vertex_count()
            )
            .yellow()
        );
    }

    if show_total {
        let label = if report.spans(graph.vertex_count()) {
            "MST:".green().bold()
        } else {
            "Spanning forest:".yellow().bold()
        };
        println!(
            "{} {} arcs, total weight {}",
            label,
            report.arcs.len(),
            report.total_weight().to_string().bold()
        );
    }
}

/// Prints a one-line verdict plus the failing checks.
pub fn print_verification(v: &Verification) {
    if v.is_valid() {
        println!("{}", "[OK] Minimum spanning tree verified.".green().bold());
        return;
    }

    println!("{}", "[FAIL] Verification failed.".red().bold());
    if !v.is_minimal() {
        println!(
            "   {} expected weight {}, got {}",
            "=".blue(),
            v.expected_weight,
            v.actual_weight
        );
    }
    if v.arc_count != v.vertex_count.saturating_sub(1) {
        println!(
            "   {} {} arcs for {} vertices",
            "=".blue(),
            v.arc_count,
            v.vertex_count
        );
    }
    if v.cycle_arcs > 0 {
        println!("   {} {} arcs close a cycle", "=".blue(), v.cycle_arcs);
    }
    if v.foreign_arcs > 0 {
        println!("   {} {} arcs are not edges of the graph", "=".blue(), v.foreign_arcs);
    }
    if v.components > 1 {
        println!("   {} {} components remain", "=".blue(), v.components);
    }
}

/// Prints each tree of the list, front to back.
pub fn print_trees(graph: &Graph, list: &PartialTreeList) {
    println!("{} {}", "Partial trees:".cyan().bold(), list.size());
    for (i, tree) in list.iter().enumerate() {
        let cheapest = tree
            .arcs()
            .peek_min()
            .map_or_else(|| "-".dimmed().to_string(), |a| a.weight.to_string());
        println!(
            "  {:>3}. {}  {} candidate arcs, cheapest {}",
            i + 1,
            graph.name_of(tree.root()).bold(),
            tree.arcs().len(),
            cheapest
        );
    }
}
