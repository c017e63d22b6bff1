//! Plain-text rendering of hydrated content.

use std::fmt::Write;

use crate::content::journey::{timeline, JourneyKind};
use crate::content::profile::{current_copyright, DISPLAY_NAME, LOCATION, SOCIAL_LINKS};
use crate::gateway::GatewayClient;
use crate::portfolio::PortfolioSnapshot;
use crate::preferences::Theme;
use crate::view_state::{filter_skills, Accordion, TabSelector, SKILL_CATEGORIES};

/// Render every section of a snapshot, in page order.
pub fn render_snapshot(snapshot: &PortfolioSnapshot, gateway: &GatewayClient, theme: Theme) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_snapshot(&mut out, snapshot, gateway, theme);
    out
}

fn write_snapshot(
    out: &mut String,
    snapshot: &PortfolioSnapshot,
    gateway: &GatewayClient,
    theme: Theme,
) -> std::fmt::Result {
    writeln!(out, "[theme: {}]", theme)?;
    writeln!(out)?;

    let hero = &snapshot.home.value;
    writeln!(out, "{} {}", hero.title, DISPLAY_NAME)?;
    writeln!(out, "  {}", hero.subtitles.join(" | "))?;
    writeln!(out)?;

    writeln!(out, "== About ==")?;
    let sections = snapshot.about.value.sections();
    let accordion = Accordion::new(sections.len());
    for (index, section) in sections.iter().enumerate() {
        let marker = if accordion.is_open(index) { "v" } else { ">" };
        writeln!(out, "{} {}", marker, section.title)?;
        writeln!(out, "    {}", section.body)?;
    }
    writeln!(out)?;

    writeln!(out, "== Skills ==")?;
    let skills = &snapshot.skills.value;
    if skills.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for category in SKILL_CATEGORIES.iter().skip(1) {
        let names: Vec<&str> = filter_skills(skills, category.key)
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        if !names.is_empty() {
            writeln!(out, "  {}: {}", category.label, names.join(", "))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "== Projects ==")?;
    if snapshot.projects.value.is_empty() {
        writeln!(out, "  No projects found.")?;
    }
    for project in &snapshot.projects.value {
        writeln!(out, "* {}", project.title)?;
        if !project.description.is_empty() {
            writeln!(out, "    {}", project.description)?;
        }
        if !project.tech_stack.is_empty() {
            writeln!(out, "    stack: {}", project.tech_stack.join(", "))?;
        }
        writeln!(out, "    image: {}", project.cover_image(gateway))?;
        if let Some(link) = &project.repo_link {
            writeln!(out, "    code:  {}", link)?;
        }
        if let Some(link) = &project.demo_link {
            writeln!(out, "    demo:  {}", link)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "== Journey ==")?;
    let mut tabs = TabSelector::<JourneyKind>::default();
    for kind in JourneyKind::ALL {
        tabs.select(kind);
        writeln!(out, "-- {} --", kind)?;
        for entry in tabs.visible(timeline(), |entry| entry.kind) {
            writeln!(out, "  {}  {} @ {}", entry.year, entry.title, entry.institution)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{} | {}", current_copyright(), LOCATION)?;
    for link in SOCIAL_LINKS {
        writeln!(out, "  {}: {}", link.label, link.url)?;
    }
    Ok(())
}
