//! Dataset files: JSON, YAML or TOML, chosen by extension.

use std::path::Path;

use vigil_core::Dataset;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(dataset_err(
                path,
                "unsupported extension (expected .json, .yaml, .yml or .toml)",
            )),
        }
    }
}

fn dataset_err(path: &Path, reason: impl ToString) -> CliError {
    CliError::Dataset {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn load(path: &Path) -> Result<Dataset, CliError> {
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| dataset_err(path, e))?;

    let dataset: Dataset = match format {
        Format::Json => serde_json::from_str(&contents).map_err(|e| dataset_err(path, e))?,
        Format::Yaml => serde_yaml::from_str(&contents).map_err(|e| dataset_err(path, e))?,
        Format::Toml => toml::from_str(&contents).map_err(|e| dataset_err(path, e))?,
    };

    tracing::debug!(
        path = %path.display(),
        events = dataset.events.len(),
        visits = dataset.visits.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Write `dataset` back to `path` in the format its extension names.
pub fn save(path: &Path, dataset: &Dataset) -> Result<(), CliError> {
    let rendered = match Format::from_path(path)? {
        Format::Json => serde_json::to_string_pretty(dataset).map_err(|e| dataset_err(path, e))?,
        Format::Yaml => serde_yaml::to_string(dataset).map_err(|e| dataset_err(path, e))?,
        Format::Toml => toml::to_string_pretty(dataset).map_err(|e| dataset_err(path, e))?,
    };
    std::fs::write(path, rendered)?;
    tracing::info!(path = %path.display(), "dataset written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const YAML: &str = r"
buildings:
  - id: hq
    name: Headquarters
    floors:
      - id: hq-g
        name: Ground Floor
        mapImage: maps/hq-g.png
        devices: []
events:
  - id: EVT-1
    eventDate: 2024-03-01T08:15:00Z
    priority: Amber
    eventType: Tailgating
    deviceName: Turnstile 2
    location: Lobby
    building: Headquarters
    floor: Ground Floor
";

    #[test]
    fn loads_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        std::fs::write(&path, YAML).unwrap();

        let dataset = load(&path).unwrap();
        assert_eq!(dataset.events.len(), 1);
        assert_eq!(dataset.topology.buildings[0].floors[0].map_image, "maps/hq-g.png");
        assert!(dataset.zones.is_empty());
    }

    #[test]
    fn written_json_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("site.yaml");
        let json = dir.path().join("site.json");
        std::fs::write(&yaml, YAML).unwrap();

        let dataset = load(&yaml).unwrap();
        save(&json, &dataset).unwrap();
        assert_eq!(load(&json).unwrap(), dataset);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load(Path::new("site.csv")).unwrap_err();
        assert!(matches!(err, CliError::Dataset { .. }));
    }

    #[test]
    fn broken_acknowledgement_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"events":[{"id":"E1","eventDate":"2024-03-01T08:00:00Z","priority":"Red",
                "eventType":"t","deviceName":"d","location":"l","building":"b","floor":"f",
                "acknowledged":true}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err().to_string();
        assert!(err.contains("acknowledgedBy"), "{err}");
    }
}
