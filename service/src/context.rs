//! Shared application state injected into every request handler.

use crate::kansas::districts::DistrictRegistry;
use crate::legislators::types::Legislator;

/// Immutable state shared by all handlers via `Extension(Arc<AppContext>)`.
///
/// Both rosters are loaded once at startup and never mutated afterwards,
/// so handlers can read them without locking. Refreshing the data means
/// restarting the process.
#[derive(Debug)]
pub struct AppContext {
    /// National legislator roster, in file order.
    pub legislators: Vec<Legislator>,

    /// Kansas senate district roster and contact table.
    pub districts: DistrictRegistry,

    /// Shared secret every API request must present.
    pub api_key: String,

    /// Geography layer name for upper-chamber districts in geocoder payloads.
    pub upper_chamber_layer: String,
}
