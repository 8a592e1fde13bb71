//! Terminal output for states and reports.

use crate::config::Config;
use cube_core::{Cycle, CubeState, CycleReport, FixedPoint, Orbit, ParseError};
use itertools::Itertools;
use owo_colors::OwoColorize;

fn position(orbit: Orbit, position: u8, config: &Config) -> String {
    match orbit.position_name(position) {
        Some(name) if config.names => name.to_owned(),
        _ => position.to_string(),
    }
}

fn twist_suffix(twist: u8) -> String {
    if twist == 0 {
        String::new()
    } else {
        format!("+{twist}")
    }
}

fn cycle(orbit: Orbit, cycle: &Cycle, config: &Config) -> String {
    format!(
        "({}){}",
        cycle
            .positions
            .iter()
            .map(|&p| position(orbit, p, config))
            .join(" "),
        twist_suffix(cycle.twist)
    )
}

fn fixed_point(orbit: Orbit, fixed: &FixedPoint, config: &Config) -> String {
    format!(
        "{}{}",
        position(orbit, fixed.position, config),
        twist_suffix(fixed.twist)
    )
}

/// One line per orbit: its cycles, then its fixed points if configured.
/// Twisted fixed points are always listed since they are part of the state.
pub fn cycle_report(report: &CycleReport, config: &Config) -> String {
    let mut out = format!("{:<9}", format!("{}:", report.orbit));
    if report.cycles.is_empty() {
        out.push_str("none");
    } else {
        out.push_str(
            &report
                .cycles
                .iter()
                .map(|c| cycle(report.orbit, c, config))
                .join(" "),
        );
    }

    let fixed = report
        .fixed_points
        .iter()
        .filter(|f| config.show_fixed_points || f.twist != 0)
        .map(|f| fixed_point(report.orbit, f, config))
        .collect_vec();
    if !fixed.is_empty() {
        out.push_str("  fixed: ");
        out.push_str(&fixed.join(" "));
    }
    out
}

/// Everything known about a state.
pub fn state(cube: &CubeState, config: &Config) -> String {
    let mut lines = vec![cube.to_string()];

    lines.push(if cube.is_solved() {
        "solved".green().bold().to_string()
    } else {
        "not solved".yellow().to_string()
    });

    let legality = cube.legality();
    lines.push(if legality.is_legal() {
        legality.green().to_string()
    } else {
        legality.red().to_string()
    });

    for report in [cube.corner_cycles(), cube.edge_cycles()] {
        lines.push(match report {
            Ok(report) => cycle_report(&report, config),
            Err(e) => e.red().to_string(),
        });
    }

    if let Ok(order) = cube.order() {
        lines.push(format!("order:   {}", order.bold()));
    }
    lines.join("\n")
}

/// The offending input with the bad token underlined.
pub fn parse_error(input: &str, err: &ParseError) -> String {
    let Some(token) = err.token() else {
        return err.red().to_string();
    };
    let offset = input[..token.span.start].chars().count();
    let width = token.text.chars().count();
    format!(
        "{input}\n{}{}\n{}",
        " ".repeat(offset),
        "^".repeat(width).red(),
        err.red()
    )
}
