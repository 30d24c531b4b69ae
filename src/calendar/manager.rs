use std::sync::Arc;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::native::{CalendarBackend, IconDate, IndexedDate, NestedDate};
use super::{
    CalendarAdapter, CalendarError, IconSeasonAdapter, IndexedSeasonAdapter, NestedSeasonAdapter,
};

/// Native date shape a backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Icon,
    Indexed,
    Nested,
}

/// One entry of the prioritized probe list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCandidate {
    pub id: String,
    pub min_version: String,
    pub kind: BackendKind,
}

impl BackendCandidate {
    pub fn new(id: &str, min_version: &str, kind: BackendKind) -> Self {
        BackendCandidate {
            id: id.to_string(),
            min_version: min_version.to_string(),
            kind,
        }
    }

    pub fn defaults() -> Vec<BackendCandidate> {
        vec![
            BackendCandidate::new("simple-calendar", "2.4.0", BackendKind::Icon),
            BackendCandidate::new("seasons-and-stars", "0.6.0", BackendKind::Indexed),
            BackendCandidate::new("calendaria", "0.7.0", BackendKind::Nested),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatus {
    pub active: bool,
    pub version: String,
}

/// What the host application knows about its installed calendar modules.
pub trait CalendarHost {
    fn module(&self, id: &str) -> Option<ModuleStatus>;

    fn icon_backend(&self, _id: &str) -> Option<Arc<dyn CalendarBackend<IconDate>>> {
        None
    }

    fn indexed_backend(&self, _id: &str) -> Option<Arc<dyn CalendarBackend<IndexedDate>>> {
        None
    }

    fn nested_backend(&self, _id: &str) -> Option<Arc<dyn CalendarBackend<NestedDate>>> {
        None
    }
}

/// Parse a module version, zero-filling missing minor/patch parts.
pub(crate) fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches('v');
    let core = trimmed.split(['-', '+']).next().unwrap_or(trimmed);
    let dots = core.matches('.').count();
    let padded = match dots {
        0 => format!("{}.0.0{}", core, &trimmed[core.len()..]),
        1 => format!("{}.0{}", core, &trimmed[core.len()..]),
        _ => trimmed.to_string(),
    };
    Version::parse(&padded).ok()
}

fn meets_minimum(version: &str, minimum: &str) -> bool {
    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(min)) => v >= min,
        _ => false,
    }
}

/// Picks the single active calendar adapter, once, at startup.
pub struct CalendarManager {
    active: Option<Arc<dyn CalendarAdapter>>,
    detected: Vec<String>,
}

impl CalendarManager {
    /// Probe `candidates` in priority order. When more than one is active,
    /// none is selected and [`CalendarManager::multiple_calendars`] is set.
    pub fn detect(host: &dyn CalendarHost, candidates: &[BackendCandidate]) -> Self {
        let found: Vec<&BackendCandidate> = candidates
            .iter()
            .filter(|c| {
                host.module(&c.id)
                    .is_some_and(|m| m.active && meets_minimum(&m.version, &c.min_version))
            })
            .collect();
        let detected: Vec<String> = found.iter().map(|c| c.id.clone()).collect();

        let active = match found.as_slice() {
            [] => {
                info!("No calendar backend detected");
                None
            }
            [only] => {
                let adapter = Self::build(host, only);
                match &adapter {
                    Some(_) => info!(backend = %only.id, kind = ?only.kind, "Calendar backend selected"),
                    None => warn!(backend = %only.id, "Calendar module is active but exposes no backend"),
                }
                adapter
            }
            _ => {
                warn!(backends = ?detected, "Multiple calendar backends active, selecting none");
                None
            }
        };

        CalendarManager { active, detected }
    }

    fn build(host: &dyn CalendarHost, candidate: &BackendCandidate) -> Option<Arc<dyn CalendarAdapter>> {
        let id = candidate.id.as_str();
        let adapter: Arc<dyn CalendarAdapter> = match candidate.kind {
            BackendKind::Icon => Arc::new(IconSeasonAdapter::new(id, host.icon_backend(id)?)),
            BackendKind::Indexed => {
                Arc::new(IndexedSeasonAdapter::new(id, host.indexed_backend(id)?))
            }
            BackendKind::Nested => Arc::new(NestedSeasonAdapter::new(id, host.nested_backend(id)?)),
        };
        Some(adapter)
    }

    pub fn adapter(&self) -> Option<Arc<dyn CalendarAdapter>> {
        self.active.clone()
    }

    pub fn multiple_calendars(&self) -> bool {
        self.detected.len() > 1
    }

    /// The active adapter, or the reason there is none.
    pub fn require(&self) -> Result<Arc<dyn CalendarAdapter>, CalendarError> {
        if self.multiple_calendars() {
            return Err(CalendarError::MultipleCalendars(self.detected.clone()));
        }
        self.active.clone().ok_or(CalendarError::NoCalendar)
    }
}
