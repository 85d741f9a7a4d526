//! Access-zone command handlers.

use tabled::Tabled;

use vigil_core::{AccessZone, Console, CoreError, EscortBanner, EscortCheck, escort_zones};

use crate::cli::{ZonesArgs, ZonesCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Building")]
    building: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Escort")]
    escort: &'static str,
}

impl From<&AccessZone> for ZoneRow {
    fn from(z: &AccessZone) -> Self {
        Self {
            id: z.id.clone(),
            name: z.name.clone(),
            building: z.building.clone(),
            floor: z.floor.clone(),
            escort: if z.requires_escort { "required" } else { "-" },
        }
    }
}

pub fn handle(console: &Console, args: ZonesArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ZonesCommand::List => {
            let out = output::render_list(
                settings.output,
                console.zones(),
                |z| ZoneRow::from(z),
                |z| z.id.clone(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        ZonesCommand::Check { zones, escort } => {
            if let Some(unknown) = zones
                .iter()
                .find(|id| !console.zones().iter().any(|z| &z.id == *id))
            {
                return Err(CoreError::ZoneNotFound {
                    zone_id: unknown.clone(),
                }
                .into());
            }

            let check = console.check_escort(&zones, escort.as_deref());
            if !check.valid {
                let names: Vec<&str> = escort_zones(&zones, console.zones())
                    .map(|z| z.name.as_str())
                    .collect();
                return Err(CliError::EscortRequired {
                    zones: names.join(", "),
                });
            }

            let out = output::render_single(
                settings.output,
                &check,
                |c| describe(*c, escort.as_deref()),
                |c| c.any_zone_requires_escort.to_string(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}

fn describe(check: EscortCheck, escort: Option<&str>) -> String {
    match check.banner() {
        EscortBanner::None => "No escort required".into(),
        EscortBanner::Info => format!(
            "Escort required; assigned to {}",
            escort.unwrap_or_default()
        ),
        EscortBanner::Error => "Escort required; none assigned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_text_names_the_escort() {
        let check = EscortCheck {
            valid: true,
            any_zone_requires_escort: true,
        };
        assert_eq!(describe(check, Some("Sam")), "Escort required; assigned to Sam");
    }
}
