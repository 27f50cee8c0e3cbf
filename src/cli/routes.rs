//! Route listing commands: routes, stats

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::MapperConfig;
use crate::format::{format_routes, format_stats_text, OutputFormat};
use crate::index::{build_index, filter_by_method, IndexStats, Route};
use crate::syntax::SourceModel;

fn load_routes(model_path: &Path, config: &MapperConfig) -> Result<Vec<Route>> {
    let model = SourceModel::load(model_path)
        .with_context(|| format!("failed to load model {}", model_path.display()))?;
    Ok(build_index(&model, &config.family))
}

/// Print the consolidated listing.
pub fn routes(
    model_path: &Path,
    config: &MapperConfig,
    format: Option<OutputFormat>,
    http_method: Option<&str>,
) -> Result<()> {
    let mut routes = load_routes(model_path, config)?;
    if let Some(http_method) = http_method {
        routes = filter_by_method(routes, http_method);
    }

    let format = format.unwrap_or(config.output.format);
    print!("{}", format_routes(&routes, format)?);
    Ok(())
}

/// Print per-method counts.
pub fn stats(model_path: &Path, config: &MapperConfig) -> Result<()> {
    let routes = load_routes(model_path, config)?;
    print!("{}", format_stats_text(&IndexStats::from_routes(&routes)));
    Ok(())
}
