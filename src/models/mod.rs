// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
// ============================================================================

pub mod rates;    // Carnet de taux de change et conversion pivot
pub mod currency; // Ligne de devise pour l'affichage du tableau des taux

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazychange::models::rates::RateBook;
// On peut faire : use lazychange::models::RateBook;
pub use rates::{parse_amount, RateBook, RateError};
pub use currency::Currency;
