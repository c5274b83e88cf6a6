//! Named zones and the registry that resolves which zone governs a point.
//!
//! Every zone pairs a compiled [`Condition`] with a priority. When several
//! zones contain a point, the one with the highest priority governs it; ties
//! go to the zone defined most recently. A fallback zone matching everything
//! sits below all of them, so resolution always has an answer.

use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{
    error::CompileError,
    evaluator::{EvalContext, LocationSource},
    predicate::Condition,
};

/// Id of the fallback zone unless configured otherwise.
pub const DEFAULT_FALLBACK_ID: &str = "default";

/// Source text of the fallback zone.
pub const FALLBACK_SPEC: &str = "all()";

/// Priority of the fallback zone. User zones must rank above it.
pub const FALLBACK_PRIORITY: i32 = i32::MIN;

static ZONE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("zone id pattern is valid")
});

/// Errors from defining a zone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("invalid zone id '{0}': use letters, digits, '_', '.' and '-'")]
    InvalidId(String),

    #[error("zone id '{0}' is reserved for the fallback zone")]
    Reserved(String),

    #[error("priority {0} is reserved for the fallback zone")]
    ReservedPriority(i32),
}

fn check_priority(priority: i32) -> Result<(), ZoneError> {
    if priority == FALLBACK_PRIORITY {
        return Err(ZoneError::ReservedPriority(priority));
    }
    Ok(())
}

/// A named, prioritised region of the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: String,
    priority: i32,
    condition: Condition,
    source: String,
    data: serde_json::Value,
    revision: u64,
}

impl Zone {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Higher priorities override lower ones where zones overlap.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The specification text exactly as it was defined.
    pub fn describe(&self) -> &str {
        &self.source
    }

    /// Opaque payload attached by other subsystems (drop tables, mob
    /// replacements, ...).
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Strictly increasing per registry; larger means defined later.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, ctx: &EvalContext<'_>) -> bool {
        self.condition.evaluate(ctx)
    }

    /// True if this zone takes precedence over `other` where both match.
    pub fn outranks(&self, other: &Zone) -> bool {
        (self.priority, self.revision) > (other.priority, other.revision)
    }

    fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}

#[derive(Debug, Clone, Default)]
struct ZoneTable {
    /// Insertion order; a re-defined zone keeps its slot
    zones: Vec<Arc<Zone>>,
}

impl ZoneTable {
    fn position(&self, id: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.matches_id(id))
    }
}

/// The set of user-defined zones plus the fallback zone.
///
/// Reads take a snapshot of the zone table and evaluate without holding any
/// lock. Writes copy the table, change the copy and swap it in, so a reader
/// sees either the old zone or the new one, never a mix.
pub struct ZoneRegistry {
    table: RwLock<Arc<ZoneTable>>,
    fallback: Arc<Zone>,
    next_revision: AtomicU64,
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::with_fallback_id(DEFAULT_FALLBACK_ID)
    }

    /// Create a registry whose fallback zone has the given id.
    pub fn with_fallback_id(id: impl Into<String>) -> Self {
        let fallback = Zone {
            id: id.into(),
            priority: FALLBACK_PRIORITY,
            condition: Condition::always(),
            source: FALLBACK_SPEC.to_string(),
            data: serde_json::Value::Null,
            revision: 0,
        };
        ZoneRegistry {
            table: RwLock::new(Arc::default()),
            fallback: Arc::new(fallback),
            next_revision: AtomicU64::new(1),
        }
    }

    /// Compile `spec` and install it under `id`.
    ///
    /// A new zone gets priority 0; re-defining a zone keeps its priority and
    /// payload and replaces only the specification. On error the registry is
    /// unchanged.
    pub fn define(&self, id: &str, spec: &str) -> Result<Arc<Zone>, ZoneError> {
        self.install(id, None, None, spec)
    }

    /// Like [`define`](Self::define), also setting the priority.
    pub fn define_with_priority(
        &self,
        id: &str,
        priority: i32,
        spec: &str,
    ) -> Result<Arc<Zone>, ZoneError> {
        self.install(id, Some(priority), None, spec)
    }

    /// Install a whole zone (specification, priority and payload) in one
    /// swap.
    pub fn define_with_data(
        &self,
        id: &str,
        priority: i32,
        spec: &str,
        data: serde_json::Value,
    ) -> Result<Arc<Zone>, ZoneError> {
        self.install(id, Some(priority), Some(data), spec)
    }

    fn install(
        &self,
        id: &str,
        priority: Option<i32>,
        data: Option<serde_json::Value>,
        spec: &str,
    ) -> Result<Arc<Zone>, ZoneError> {
        self.check_id(id)?;
        if let Some(priority) = priority {
            check_priority(priority)?;
        }
        let condition = Condition::compile(spec)?;

        let mut table = self.table.write();
        let existing = table.position(id);
        let previous = existing.map(|i| Arc::clone(&table.zones[i]));

        let zone = Arc::new(Zone {
            id: previous
                .as_ref()
                .map_or_else(|| id.to_string(), |z| z.id.clone()),
            priority: priority
                .or(previous.as_ref().map(|z| z.priority))
                .unwrap_or(0),
            condition,
            source: spec.to_string(),
            data: data.unwrap_or_else(|| {
                previous
                    .as_ref()
                    .map_or(serde_json::Value::Null, |z| z.data.clone())
            }),
            revision: self.next_revision.fetch_add(1, Ordering::Relaxed),
        });

        let zones = &mut Arc::make_mut(&mut *table).zones;
        match existing {
            Some(i) => zones[i] = Arc::clone(&zone),
            None => zones.push(Arc::clone(&zone)),
        }
        debug!(
            zone = %zone.id,
            priority = zone.priority,
            replaced = existing.is_some(),
            "defined zone"
        );
        Ok(zone)
    }

    fn check_id(&self, id: &str) -> Result<(), ZoneError> {
        if self.fallback.matches_id(id) {
            return Err(ZoneError::Reserved(id.to_string()));
        }
        if !ZONE_ID.is_match(id) {
            return Err(ZoneError::InvalidId(id.to_string()));
        }
        Ok(())
    }

    /// Remove a zone. Returns false if there was no such zone; the fallback
    /// zone is never removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut table = self.table.write();
        let Some(i) = table.position(id) else {
            return false;
        };
        let zone = Arc::make_mut(&mut *table).zones.remove(i);
        debug!(zone = %zone.id, "removed zone");
        true
    }

    /// Change a zone's priority without recompiling it. Counts as a
    /// re-definition for tie-breaking. Returns false if there is no such
    /// zone.
    pub fn set_priority(&self, id: &str, priority: i32) -> Result<bool, ZoneError> {
        check_priority(priority)?;
        Ok(self.update(id, |zone| zone.priority = priority))
    }

    /// Replace a zone's payload. Does not affect tie-breaking.
    pub fn set_data(&self, id: &str, data: serde_json::Value) -> bool {
        self.update(id, |zone| zone.data = data)
    }

    fn update(&self, id: &str, change: impl FnOnce(&mut Zone)) -> bool {
        let mut table = self.table.write();
        let Some(i) = table.position(id) else {
            return false;
        };
        let mut zone = Zone::clone(&table.zones[i]);
        let priority = zone.priority;
        change(&mut zone);
        if zone.priority != priority {
            zone.revision = self.next_revision.fetch_add(1, Ordering::Relaxed);
        }
        Arc::make_mut(&mut *table).zones[i] = Arc::new(zone);
        true
    }

    /// Look up a user-defined zone or the fallback zone by id.
    pub fn get(&self, id: &str) -> Option<Arc<Zone>> {
        if self.fallback.matches_id(id) {
            return Some(Arc::clone(&self.fallback));
        }
        let table = self.snapshot();
        table.position(id).map(|i| Arc::clone(&table.zones[i]))
    }

    /// The specification text of a zone, for display or persistence.
    pub fn describe(&self, id: &str) -> Option<String> {
        self.get(id).map(|zone| zone.describe().to_string())
    }

    /// All user-defined zones, in the order they were first defined.
    pub fn zones(&self) -> Vec<Arc<Zone>> {
        self.snapshot().zones.clone()
    }

    pub fn fallback(&self) -> Arc<Zone> {
        Arc::clone(&self.fallback)
    }

    /// Number of user-defined zones.
    pub fn len(&self) -> usize {
        self.snapshot().zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Arc<ZoneTable> {
        Arc::clone(&*self.table.read())
    }

    /// The zone governing a location: the matching zone with the highest
    /// priority, the most recently defined on ties, else the fallback zone.
    pub fn resolve(&self, ctx: &EvalContext<'_>) -> Arc<Zone> {
        let table = self.snapshot();
        let mut best: Option<&Arc<Zone>> = None;
        for zone in &table.zones {
            if best.is_some_and(|b| !zone.outranks(b)) {
                // Cannot win even if it matches
                continue;
            }
            if zone.contains(ctx) {
                best = Some(zone);
            }
        }
        best.map_or_else(|| Arc::clone(&self.fallback), Arc::clone)
    }

    /// Resolve a location through the host world model.
    pub fn resolve_at(
        &self,
        source: &dyn LocationSource,
        world: &str,
        x: f64,
        y: f64,
        z: f64,
    ) -> Arc<Zone> {
        match source.lookup(world, x, y, z) {
            Some(block) => self.resolve(&EvalContext::from_block(&block, x, y, z)),
            None => self.resolve(&EvalContext::without_biome(world, x, y, z)),
        }
    }

    /// Every user-defined zone containing the location, highest precedence
    /// first. The fallback zone is not included.
    pub fn matching(&self, ctx: &EvalContext<'_>) -> Vec<Arc<Zone>> {
        let table = self.snapshot();
        let mut zones: Vec<Arc<Zone>> = table
            .zones
            .iter()
            .filter(|zone| zone.contains(ctx))
            .cloned()
            .collect();
        zones.sort_by(|a, b| (b.priority, b.revision).cmp(&(a.priority, a.revision)));
        zones
    }
}
