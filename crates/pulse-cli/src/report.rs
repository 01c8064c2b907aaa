//! Human-readable rendering of a status report.

use pulse_core::models::{AggregateNode, StatusReport};

pub fn print(report: &StatusReport) {
    println!("pulse check: {} ({}ms)", report.status, report.elapsed_ms);
    for node in &report.checks {
        print_node(node, 1);
    }

    let summary = &report.summary;
    println!(
        "{} healthy, {} degraded, {} error",
        summary.healthy, summary.degraded, summary.error
    );
    // Every contributing failure is listed, not just the first.
    for failure in &summary.failures {
        match &failure.detail {
            Some(detail) => println!("  {} {} - {}", failure.status, failure.path, detail),
            None => println!("  {} {}", failure.status, failure.path),
        }
    }
}

fn print_node(node: &AggregateNode, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        AggregateNode::Group(group) => {
            println!("{pad}{}: {} ({}ms)", group.name, group.status, group.elapsed_ms);
            for child in &group.checks {
                print_node(child, depth + 1);
            }
        }
        AggregateNode::Probe(probe) => {
            let detail = probe
                .detail
                .as_deref()
                .map(|d| format!(" - {d}"))
                .unwrap_or_default();
            println!(
                "{pad}{}: {} ({}ms){detail}",
                probe.name, probe.status, probe.measurement.elapsed_ms
            );
        }
    }
}
