pub mod family;
pub mod invert;
pub mod random;
pub mod swatches;

pub use family::{__path_handle_family_find, __path_handle_family_list};
pub use family::{handle_family_find, handle_family_list, ColorForm};
pub use invert::{handle_invert, __path_handle_invert};
pub use random::{__path_handle_random, __path_handle_random_family};
pub use random::{handle_random, handle_random_family};
pub use swatches::{handle_swatches, __path_handle_swatches};

/// Liveness probe
pub async fn handle_healthz() -> &'static str {
    "ok"
}
