// ============================================================================
// Module : store
// ============================================================================
// Persistance du carnet de taux sur disque
// ============================================================================

pub mod file; // Lecture/écriture du fichier JSON de taux

// Re-exports pour simplifier les imports
pub use file::{load_rates, save_rates, LoadOutcome, RATES_FILE};
