//! Visitor command handlers.

use std::sync::Arc;

use tabled::Tabled;

use vigil_core::view::DATE_FORMAT;
use vigil_core::{CheckIn, Console, CoreError, Visit};

use crate::cli::{VisitsArgs, VisitsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct VisitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Visitor")]
    visitor: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Zones")]
    zones: String,
    #[tabled(rename = "Escort")]
    escort: String,
    #[tabled(rename = "Checked In")]
    checked_in: String,
}

impl From<&Visit> for VisitRow {
    fn from(v: &Visit) -> Self {
        Self {
            id: v.id.clone(),
            visitor: v.visitor_name.clone(),
            company: v.company.clone(),
            host: v.host.clone(),
            status: v.status.to_string(),
            zones: v.zone_ids.join(", "),
            escort: v.escort.clone().unwrap_or_default(),
            checked_in: v
                .checked_in_at
                .map(|t| t.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

pub fn handle(console: &Console, args: VisitsArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        VisitsCommand::List => {
            let visits = console.visits().read();
            let out = output::render_list(
                settings.output,
                &visits,
                |v| VisitRow::from(v.as_ref()),
                |v| v.id.clone(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        VisitsCommand::CheckIn {
            id,
            zones,
            escort,
            write,
        } => {
            let request = CheckIn {
                zone_ids: zones,
                escort,
            };
            let visit = found(console.check_in(&id, request)?, id)?;
            util::persist(console, settings, write)?;
            print_visit(&visit, settings, "checked in")
        }

        VisitsCommand::CheckOut { id, write } => {
            let visit = found(console.check_out(&id)?, id)?;
            util::persist(console, settings, write)?;
            print_visit(&visit, settings, "checked out")
        }
    }
}

fn found(visit: Option<Arc<Visit>>, visit_id: String) -> Result<Arc<Visit>, CliError> {
    visit.ok_or_else(|| CoreError::VisitNotFound { visit_id }.into())
}

fn print_visit(visit: &Visit, settings: &Settings, verb: &str) -> Result<(), CliError> {
    let out = output::render_single(
        settings.output,
        visit,
        |v| format!("{} ({}) {verb}", v.visitor_name, v.id),
        |v| v.id.clone(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
