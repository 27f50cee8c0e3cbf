//! Output formatting for route listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::index::{IndexStats, Route};

/// Listing format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// One line per route: `METHOD path Class#method`, method column padded.
pub fn format_routes_text(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes found\n".to_string();
    }

    let width = routes
        .iter()
        .map(|r| r.http_method.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for route in routes {
        output.push_str(&format!(
            "{:<width$} {} {}\n",
            route.http_method,
            route.path,
            route.method,
            width = width
        ));
    }
    output
}

pub fn format_routes_json(routes: &[Route]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(routes)
}

pub fn format_routes(routes: &[Route], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_routes_text(routes)),
        OutputFormat::Json => format_routes_json(routes).map(|s| s + "\n"),
    }
}

pub fn format_stats_text(stats: &IndexStats) -> String {
    let mut output = format!("Routes: {}\nMethods: {}\n", stats.routes, stats.methods);
    for (http_method, count) in &stats.by_method {
        output.push_str(&format!("  {}: {}\n", http_method, count));
    }
    output
}
