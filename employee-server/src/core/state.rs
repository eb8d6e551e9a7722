use crate::core::Config;
use crate::db::repository::EmployeeRepository;

/// Server state - shared handles for all request handlers
///
/// Cloning is shallow; the repository shares its storage across clones.
/// The employee store is scoped to this state instance: it starts empty
/// when the state is constructed and is discarded when the last clone is
/// dropped. There is no process-global store.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Employee storage
    pub employees: EmployeeRepository,
}

impl ServerState {
    /// Create a fresh state with an empty employee store
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            employees: EmployeeRepository::new(),
        }
    }
}
