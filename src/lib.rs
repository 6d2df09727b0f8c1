// ============================================================================
// LazyChange - Library
// ============================================================================
// Expose les modules publics pour les tests
// ============================================================================

pub mod models; // Structures de données (carnet de taux, devises)
pub mod store;  // Persistance du carnet de taux (fichier JSON)
pub mod app;    // État de l'application
pub mod ui;     // Interface utilisateur
