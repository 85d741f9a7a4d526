//! Event command handlers.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::Local;
use tabled::Tabled;
use tokio_util::sync::CancellationToken;

use vigil_core::view::DATE_FORMAT;
use vigil_core::{
    CardSection, Console, CoreError, EventRow, EventSummary, MapView, StackingMode, Tone,
};

use crate::cli::{EventsArgs, EventsCommand, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output::{self, paint};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Building")]
    building: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl EventTableRow {
    fn new(row: &EventRow, color: bool) -> Self {
        Self {
            id: row.id.clone(),
            date: row.date.clone(),
            priority: paint(&row.priority.to_string(), row.priority_tone, color),
            event_type: row.event_type.clone(),
            device: row.device_name.clone(),
            location: row.location.clone(),
            building: row.building.clone(),
            floor: row.floor.clone(),
            status: paint(row.status, row.status_tone, color),
        }
    }
}

#[derive(Tabled)]
struct MarkerRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
    #[tabled(rename = "State")]
    state: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: EventsArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    let color = settings.color;
    match args.command {
        EventsCommand::List { view } => {
            console.update_view(|state| util::apply_view_args(state, view));
            let rows = console.rows();
            let out = output::render_list(
                settings.output,
                &rows,
                |r| EventTableRow::new(r, color),
                |r| r.id.clone(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EventsCommand::Cards { view, stack } => {
            console.update_view(|state| {
                util::apply_view_args(state, view);
                if let Some(stack) = stack {
                    state.stacking = stack.into();
                }
            });
            let mode = console.view().stacking;
            let sections = console.cards();
            let out = output::render_single(
                settings.output,
                &sections,
                |s| render_cards(mode, s, color),
                |s| {
                    s.iter()
                        .flat_map(|section| section.cards.iter().map(|c| c.id.as_str()))
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EventsCommand::Map {
            building,
            floor,
            status,
            search,
        } => {
            console.update_view(|state| {
                if let Some(status) = status {
                    state.filter.status = status.into();
                }
                if let Some(search) = search {
                    state.filter.search = search;
                }
                state.filter.building_id = Some(building.clone());
                state.filter.floor_id = Some(floor.clone());
            });
            let map = match console.map() {
                MapView::Floor(map) => map,
                MapView::SelectionRequired => {
                    return Err(CliError::SelectionRequired { building, floor });
                }
            };
            let out = match settings.output {
                OutputFormat::Table => {
                    let mut rows: Vec<MarkerRow> = map
                        .markers
                        .iter()
                        .map(|m| MarkerRow {
                            kind: "event",
                            id: m.event_id.clone(),
                            name: m.label.clone(),
                            x: format!("{:.0}", m.x),
                            y: format!("{:.0}", m.y),
                            state: paint(
                                &format!(
                                    "{}{}",
                                    m.priority,
                                    if m.acknowledged { " (ack)" } else { "" }
                                ),
                                m.tone,
                                color,
                            ),
                        })
                        .collect();
                    rows.extend(map.devices.iter().map(|d| MarkerRow {
                        kind: "device",
                        id: d.device_id.clone(),
                        name: d.name.clone(),
                        x: format!("{:.0}", d.x),
                        y: format!("{:.0}", d.y),
                        state: paint(&d.status.to_string(), d.tone, color),
                    }));
                    format!(
                        "{} / {} ({})\n{}",
                        map.building,
                        map.floor,
                        map.map_image,
                        output::render_table(&rows)
                    )
                }
                format => output::render_single(format, &map, |_| String::new(), |m| {
                    m.markers
                        .iter()
                        .map(|mk| mk.event_id.as_str())
                        .collect::<Vec<_>>()
                        .join("\n")
                })?,
            };
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EventsCommand::Summary => {
            let summary = console.summary();
            let out = output::render_single(
                settings.output,
                &summary,
                |s| render_summary(s, color),
                |s| s.unacknowledged.to_string(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EventsCommand::Ack { id, write } => {
            let Some(event) = console.events().get(&id) else {
                return Err(CoreError::EventNotFound { event_id: id }.into());
            };
            if let Some(previous) = &event.acknowledgement {
                let prompt = format!(
                    "{id} was already acknowledged by {} at {}. Acknowledge again?",
                    previous.by,
                    previous.at.format(DATE_FORMAT)
                );
                if !util::confirm(&prompt, "re-acknowledge", settings.yes)? {
                    output::print_status("Aborted", settings.quiet);
                    return Ok(());
                }
            }

            let outcome = console.acknowledge(&id).require_found()?;
            util::persist(console, settings, write)?;

            if let Some(event) = outcome.event() {
                let row = EventRow::from(event.as_ref());
                let out = output::render_single(
                    settings.output,
                    &row,
                    |r| {
                        format!(
                            "{} acknowledged by {}",
                            r.id,
                            r.acknowledged_by.as_deref().unwrap_or_default()
                        )
                    },
                    |r| r.id.clone(),
                )?;
                output::print_output(&out, settings.quiet);
            }
            Ok(())
        }

        EventsCommand::Watch { count, delay_ms } => {
            let delay = delay_ms.map_or(console.config().refresh_delay, Duration::from_millis);
            watch(console, settings, count, delay).await
        }
    }
}

// ── Watch loop ──────────────────────────────────────────────────────

async fn watch(
    console: &Console,
    settings: &Settings,
    count: u64,
    delay: Duration,
) -> Result<(), CliError> {
    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let mut completed = 0u64;
    let result = loop {
        let view = match console.refresh_after(delay, &cancel).await {
            Ok(view) => view,
            Err(CoreError::Cancelled) => break Ok(()),
            Err(e) => break Err(e.into()),
        };
        completed += 1;

        let summary = console.summary();
        let out = output::render_single(
            settings.output,
            &summary,
            |s| {
                format!(
                    "[{}] {} events ({} in view), {} unacknowledged, {} red unacknowledged",
                    Local::now().format("%H:%M:%S"),
                    s.total,
                    view.len(),
                    s.unacknowledged,
                    s.unacknowledged_red
                )
            },
            |s| s.unacknowledged.to_string(),
        );
        match out {
            Ok(out) => output::print_output(&out, settings.quiet),
            Err(e) => break Err(e),
        }

        if count != 0 && completed >= count {
            break Ok(());
        }
    };

    interrupt.abort();
    tracing::debug!(completed, "watch finished");
    result
}

// ── Detail renderers ────────────────────────────────────────────────

fn render_cards(mode: StackingMode, sections: &[CardSection], color: bool) -> String {
    if sections.is_empty() {
        return String::new();
    }
    let mut out = format!("{}\n\n", mode.label());
    for section in sections {
        if let Some(header) = &section.header {
            let title = format!("{} ({})", header.key, header.count);
            let _ = writeln!(out, "{}", paint(&title, header.tone, color));
        }
        for card in &section.cards {
            let _ = writeln!(
                out,
                "  {} {}  [{}]  {}",
                paint("●", card.tone, color),
                card.id,
                card.title,
                paint(card.status, card.status_tone, color),
            );
            let _ = writeln!(out, "    {}", card.place);
            let _ = writeln!(out, "    {} · {}", card.device_name, card.when);
            if !card.description.is_empty() {
                let _ = writeln!(out, "    {}", card.description);
            }
            if let Some(ack) = &card.acknowledgement {
                let _ = writeln!(out, "    {ack}");
            }
        }
    }
    out.trim_end().to_owned()
}

fn render_summary(s: &EventSummary, color: bool) -> String {
    let mut out = format!(
        "Total           {}\n\
         Acknowledged    {}\n\
         Unacknowledged  {}\n\
         {}             {} ({} unacknowledged)\n\
         {}           {}\n\
         {}            {}",
        s.total,
        s.acknowledged,
        s.unacknowledged,
        paint("Red", Tone::Red, color),
        s.red,
        s.unacknowledged_red,
        paint("Amber", Tone::Amber, color),
        s.amber,
        paint("Blue", Tone::Blue, color),
        s.blue,
    );
    if s.needs_attention() {
        let _ = write!(
            out,
            "\n\n{}",
            paint("Unacknowledged Red events need attention", Tone::Red, color)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_flags_unacknowledged_red() {
        let summary = EventSummary {
            total: 2,
            unacknowledged: 1,
            acknowledged: 1,
            red: 1,
            unacknowledged_red: 1,
            blue: 1,
            amber: 0,
        };
        let text = render_summary(&summary, false);
        assert!(text.starts_with("Total           2"));
        assert!(text.contains("Red             1 (1 unacknowledged)"));
        assert!(text.ends_with("need attention"));
    }

    #[test]
    fn empty_card_sections_render_nothing() {
        assert_eq!(render_cards(StackingMode::Priority, &[], false), "");
    }
}
