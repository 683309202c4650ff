//! # View Rendering
//!
//! Writes each dashboard view as plain text or pretty JSON. Renderers only
//! read the session; they never mutate it.

use std::io::Write;

use anyhow::Result;
use serde_json::json;

use guardian_core::ViewMode;
use guardian_pack::ContentPack;
use guardian_tracker::{BadgeTone, Clock, ComplianceStats, DashboardSession};

use crate::config::OutputFormat;

const BAR_WIDTH: usize = 20;

/// Render the session's current view.
pub fn render_view<C: Clock>(
    out: &mut dyn Write,
    session: &DashboardSession<C>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = view_json(session);
            serde_json::to_writer_pretty(&mut *out, &payload)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "{} :: {}",
                session.variant().title(),
                session.view().as_str().to_uppercase()
            )?;
            writeln!(out)?;
            let pack = session.pack();
            match session.view() {
                ViewMode::Manual => manual_text(out, pack),
                ViewMode::Registry => registry_text(out, session),
                ViewMode::Statement => statement_text(out, pack),
                ViewMode::Mesh => mesh_text(out, pack),
                ViewMode::Languages => languages_text(out, pack),
            }
        }
    }
}

/// Render only the stats block.
pub fn render_stats(
    out: &mut dyn Write,
    stats: &ComplianceStats,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stats)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Text => stats_text(out, stats),
    }
}

/// `[#####---------------]` for `percentage`.
pub fn progress_bar(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn tone_label(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Complete => "complete",
        BadgeTone::Partial => "partial",
        BadgeTone::Empty => "empty",
    }
}

fn view_json<C: Clock>(session: &DashboardSession<C>) -> serde_json::Value {
    let pack = session.pack();
    let body = match session.view() {
        ViewMode::Manual => json!({
            "hardware": pack.hardware(),
            "calibration_steps": pack.calibration_steps(),
            "build_steps": pack.build_steps(),
            "system_configs": pack.system_configs(),
            "next_decisions": pack.next_decisions(),
            "full_build_script": pack.full_build_script(),
        }),
        ViewMode::Registry => {
            let tracker = session.tracker();
            let entries: Vec<_> = tracker.visible_entries().collect();
            json!({
                "category_filter": tracker.category_filter(),
                "stats": session.stats(),
                "entries": entries,
            })
        }
        ViewMode::Statement => json!({
            "core_guarantees": pack.core_guarantees(),
            "statement": pack.statement(),
        }),
        ViewMode::Mesh => json!({
            "nodes": pack.nodes(),
            "coherence": pack.coherence(),
            "pictogram_guide": pack.pictogram_guide(),
        }),
        ViewMode::Languages => json!({
            "language_packs": pack.language_packs(),
        }),
    };
    json!({
        "variant": session.variant(),
        "view": session.view(),
        "body": body,
    })
}

fn stats_text(out: &mut dyn Write, stats: &ComplianceStats) -> Result<()> {
    if let Some(site) = stats.site {
        writeln!(out, "Site: {}", site.label())?;
    }
    writeln!(
        out,
        "Compliance Integrity  {:>3}%  {} / {} VERIFIED",
        stats.progress, stats.completed, stats.total
    )?;
    writeln!(out, "{}", progress_bar(stats.progress))?;
    writeln!(out)?;
    for c in &stats.categories {
        writeln!(
            out,
            "  {:<10} {:>3}%  {}/{}  {}",
            c.category.short_label(),
            c.percentage,
            c.completed,
            c.total,
            tone_label(c.tone())
        )?;
    }
    Ok(())
}

fn registry_text<C: Clock>(out: &mut dyn Write, session: &DashboardSession<C>) -> Result<()> {
    let tracker = session.tracker();
    stats_text(out, &session.stats())?;
    writeln!(out)?;
    writeln!(out, "Filter: {}", tracker.category_filter())?;
    let mut shown = 0;
    for entry in tracker.visible_entries() {
        let mark = if entry.is_completed() { "x" } else { " " };
        writeln!(
            out,
            "[{mark}] {:<12} {}  ({})",
            entry.id.as_str(),
            entry.label,
            entry.requirement
        )?;
        writeln!(out, "    {}", entry.description)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "(no entries)")?;
    }
    Ok(())
}

fn manual_text(out: &mut dyn Write, pack: &ContentPack) -> Result<()> {
    writeln!(out, "01. HARDWARE SPECS")?;
    for spec in pack.hardware() {
        writeln!(out, "  {:<16} {}", spec.component, spec.detail)?;
    }
    writeln!(out)?;
    writeln!(out, "02. CALIBRATION")?;
    for (i, step) in pack.calibration_steps().iter().enumerate() {
        writeln!(out, "  {}. {step}", i + 1)?;
    }
    writeln!(out)?;
    writeln!(out, "03. BUILD PIPELINE (IMMUTABLE IMAGE)")?;
    for step in pack.build_steps() {
        writeln!(out, "  {} - {}", step.title, step.description)?;
        for line in step.code.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "04. SYSTEM CONFIGURATION")?;
    for file in pack.system_configs() {
        writeln!(out, "  {} ({})", file.path, file.purpose)?;
        for line in file.contents.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "NEXT REAL DECISIONS")?;
    for (i, d) in pack.next_decisions().iter().enumerate() {
        writeln!(out, "  {:02}. {}: {}", i + 1, d.title, d.description)?;
    }
    if let Some(script) = pack.full_build_script() {
        writeln!(out)?;
        writeln!(out, "FULL BUILD SCRIPT")?;
        for line in script.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

fn statement_text(out: &mut dyn Write, pack: &ContentPack) -> Result<()> {
    let statement = pack.statement();
    writeln!(out, "ETHICS & SAFETY STATEMENT")?;
    writeln!(out, "{}", statement.version)?;
    writeln!(out)?;
    writeln!(out, "What this is:")?;
    for line in statement.what_it_is {
        writeln!(out, "  - {line}")?;
    }
    writeln!(out, "What this is not:")?;
    for line in statement.what_it_is_not {
        writeln!(out, "  - {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Core guarantees:")?;
    for g in pack.core_guarantees() {
        writeln!(out, "  {}: {}", g.title, g.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Ethical boundary: {}", statement.boundary)?;
    writeln!(out, "{}", statement.seal)?;
    Ok(())
}

fn mesh_text(out: &mut dyn Write, pack: &ContentPack) -> Result<()> {
    let coherence = (pack.coherence() * 100.0).round() as u8;
    writeln!(out, "Mesh coherence  {coherence:>3}%")?;
    writeln!(out, "{}", progress_bar(coherence))?;
    writeln!(out)?;
    for node in pack.nodes() {
        writeln!(
            out,
            "  {:<4} {:<16} {:<8} {:>3}%",
            node.id,
            node.name,
            node.status,
            (node.coherence * 100.0).round() as u8
        )?;
    }
    if let Some(guide) = pack.pictogram_guide() {
        writeln!(out)?;
        writeln!(out, "{guide}")?;
    }
    Ok(())
}

fn languages_text(out: &mut dyn Write, pack: &ContentPack) -> Result<()> {
    for lang in pack.language_packs() {
        write!(
            out,
            "  {:<6} {:<16} {:<8} {}",
            lang.code, lang.name, lang.status, lang.checksum
        )?;
        match lang.note {
            Some(note) => writeln!(out, "  {note}")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}
