// ============================================================================
// Structure : Currency
// ============================================================================
// Représente une ligne de devise pour l'affichage du tableau des taux
//
// CONCEPTS RUST :
// 1. Composition : le carnet produit des Currency via entries()
// 2. Méthodes : formatage d'une ligne prête à afficher
// ============================================================================

use crate::models::RateBook;

/// Une devise du carnet avec son taux contre la devise pivot
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    /// Code de la devise (ex: "EUR")
    pub code: String,

    /// Taux : unités de cette devise pour 1 unité de la devise pivot
    pub rate: f64,
}

impl Currency {
    /// Crée une nouvelle ligne de devise
    pub fn new(code: String, rate: f64) -> Self {
        Self { code, rate }
    }

    /// Vérifie si c'est la devise pivot
    pub fn is_base(&self) -> bool {
        self.code == RateBook::BASE
    }

    /// Formatte la ligne pour l'affichage dans le tableau des taux
    ///
    /// Format : "EUR        0.9300   1 USD = 0.9300 EUR"
    ///
    /// CONCEPT RUST : format! avec alignements
    /// - {:<8} : aligné à gauche sur 8 caractères
    /// - {:>12.4} : aligné à droite sur 12 caractères, 4 décimales
    pub fn display(&self) -> String {
        format!(
            "{:<8} {:>12.4}   1 {} = {:.4} {}",
            self.code,
            self.rate,
            RateBook::BASE,
            self.rate,
            self.code
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base() {
        assert!(Currency::new("USD".to_string(), 1.0).is_base());
        assert!(!Currency::new("EUR".to_string(), 0.93).is_base());
    }

    #[test]
    fn test_display() {
        let line = Currency::new("EUR".to_string(), 0.93).display();
        assert!(line.starts_with("EUR"));
        assert!(line.contains("0.9300"));
        assert!(line.contains("1 USD = 0.9300 EUR"));
    }

    #[test]
    fn test_entries_from_book() {
        let book = RateBook::defaults();
        let entries = book.entries();
        assert_eq!(entries.len(), 5);
        // BTreeMap : ordre alphabétique des codes
        assert_eq!(entries[0].code, "EUR");
        assert_eq!(entries[4].code, "USD");
    }
}
