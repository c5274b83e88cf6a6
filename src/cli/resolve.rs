//! Resolve a point against a zone file

use super::CliError;
use crate::{EvalContext, ZoneRegistry, store};

/// Options for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Zone file contents (JSON)
    pub zones: Option<String>,
    pub world: String,
    /// Biome at the point; empty when unknown
    pub biome: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// List every matching zone instead of only the winner
    pub all: bool,
}

/// Load the zones and return the ids of the governing zone (or, with `all`,
/// every matching zone in precedence order followed by the fallback).
///
/// Zone records that fail to compile are skipped, as a server would on
/// startup.
pub fn execute_resolve(options: &ResolveOptions) -> Result<Vec<String>, CliError> {
    let json = options.zones.as_ref().ok_or(CliError::NoInput)?;
    let file = store::from_json(json)?;

    let registry = ZoneRegistry::new();
    registry.import(file);

    let ctx = EvalContext::new(
        &options.world,
        &options.biome,
        options.x,
        options.y,
        options.z,
    );

    let ids = if options.all {
        registry
            .matching(&ctx)
            .iter()
            .chain(std::iter::once(&registry.fallback()))
            .map(|zone| zone.id().to_string())
            .collect()
    } else {
        vec![registry.resolve(&ctx).id().to_string()]
    };
    Ok(ids)
}
