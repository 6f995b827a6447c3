// ABOUTME: The check command: discover tracked YAML files, parse them, summarize
// ABOUTME: Falls back to a skipped outcome when built without YAML support

use crate::discovery::{DiscoveryError, TrackedFileSource};
use crate::report::CheckOutcome;

/// Whether this build can parse YAML at all.
pub const YAML_SUPPORT: bool = cfg!(feature = "yaml");

#[cfg(feature = "yaml")]
pub async fn check_tracked_yaml(
    source: &dyn TrackedFileSource,
) -> Result<CheckOutcome, DiscoveryError> {
    use crate::checker::YamlChecker;
    use tracing::info;

    info!("Discovering tracked YAML files via {}", source.name());
    let files = source.discover().await?;

    let problems = YamlChecker::new().check_all(&files).await;
    Ok(CheckOutcome::from_report(files.len(), problems))
}

#[cfg(not(feature = "yaml"))]
pub async fn check_tracked_yaml(
    source: &dyn TrackedFileSource,
) -> Result<CheckOutcome, DiscoveryError> {
    tracing::debug!("YAML support disabled; not querying {}", source.name());
    Ok(CheckOutcome::Skipped)
}
