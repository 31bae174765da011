//! Application context - wires everything together

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stipend_core::{Principal, Role};
use stipend_custody::PooledCustody;
use stipend_events::{EventSink, JsonlSink, LifecycleEvent};
use stipend_registry::{Registry, RegistrySnapshot};
use stipend_roles::{MemoryRoleGate, RoleGate};

const STATE_FILE: &str = "state.json";
const EVENTS_DIR: &str = "events";

/// Everything persisted between invocations
#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    registry: RegistrySnapshot,
    custody: PooledCustody,
    grants: Vec<(Role, Principal)>,
}

/// Application context - the registry plus its wired collaborators
pub struct AppContext {
    pub registry: Registry,
    pub custody: PooledCustody,
    pub roles: Arc<MemoryRoleGate>,
    sink: Arc<JsonlSink>,
    state_path: PathBuf,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("state_path", &self.state_path)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Initialize a fresh data directory with the given quorum.
    ///
    /// Fails if the directory was already initialized; the quorum is fixed
    /// for the registry's lifetime.
    pub fn init(data_path: impl AsRef<Path>, quorum: u32) -> Result<Self, anyhow::Error> {
        let data_path = data_path.as_ref();
        let state_path = data_path.join(STATE_FILE);
        if state_path.exists() {
            anyhow::bail!("already initialized: {}", state_path.display());
        }
        std::fs::create_dir_all(data_path)?;

        let quorum = NonZeroU32::new(quorum)
            .ok_or_else(|| anyhow::anyhow!("quorum must be a positive integer"))?;

        let roles = Arc::new(MemoryRoleGate::new());
        let sink = Arc::new(JsonlSink::new(data_path.join(EVENTS_DIR))?);
        let registry = Registry::new(quorum, roles.clone(), sink.clone());

        let ctx = Self {
            registry,
            custody: PooledCustody::new(),
            roles,
            sink,
            state_path,
        };
        ctx.save()?;
        Ok(ctx)
    }

    /// Load a previously initialized data directory
    pub fn load(data_path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let data_path = data_path.as_ref();
        let state_path = data_path.join(STATE_FILE);

        let raw = std::fs::read_to_string(&state_path).with_context(|| {
            format!(
                "no state at {} (run `stipend init` first)",
                state_path.display()
            )
        })?;
        let state: StateFile = serde_json::from_str(&raw)
            .with_context(|| format!("corrupt state file {}", state_path.display()))?;

        let roles = Arc::new(MemoryRoleGate::new());
        for (role, who) in &state.grants {
            roles.grant(*role, who);
        }

        let sink = Arc::new(JsonlSink::new(data_path.join(EVENTS_DIR))?);
        let registry = Registry::restore(state.registry, roles.clone(), sink.clone());

        Ok(Self {
            registry,
            custody: state.custody,
            roles,
            sink,
            state_path,
        })
    }

    /// Persist current state to the data directory
    pub fn save(&self) -> Result<(), anyhow::Error> {
        let state = StateFile {
            registry: self.registry.snapshot(),
            custody: self.custody.clone(),
            grants: self.roles.grants(),
        };
        let json = serde_json::to_string_pretty(&state)?;
        std::fs::write(&self.state_path, json)?;
        Ok(())
    }

    /// Record an administrative event on the audit trail (best-effort)
    pub fn record_admin(&self, event: LifecycleEvent) {
        self.sink.record(&event);
    }
}
