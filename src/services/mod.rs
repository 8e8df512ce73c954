// eKill services
// Leaf components: version comparison and persisted-state loading.

pub mod settings_store;
pub mod version_compare;
