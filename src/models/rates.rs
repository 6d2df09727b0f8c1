// ============================================================================
// Structure : RateBook
// ============================================================================
// Le carnet de taux : mapping devise -> taux de change contre la devise pivot
//
// CONCEPTS RUST :
// 1. BTreeMap : map triée par clé (ordre déterministe pour les sélecteurs)
// 2. Ownership : le carnet est possédé par App, pas de singleton global
// 3. Erreurs typées : enum fermé RateError avec thiserror
//
// CONVENTION : chaque taux exprime "combien d'unités de cette devise pour
// 1 USD". USD vaut donc 1.0 dans les défauts. C'est une convention : la
// formule pivot ne lit jamais l'entrée USD elle-même (division par le taux
// source, multiplication par le taux cible).
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enum : RateError
// ============================================================================
// CONCEPT RUST : Enums pour les erreurs métier
// - Chaque variant représente une erreur précise et récupérable
// - thiserror dérive Display : le message est affiché tel quel dans la
//   barre de statut
// - Aucune de ces erreurs n'est fatale : l'appelant ré-affiche et continue
// ============================================================================

/// Erreurs métier du carnet de taux
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Devise absente du carnet (côté source ou cible d'une conversion)
    #[error("Devise inconnue : {0}")]
    UnknownCurrency(String),

    /// Taux rejeté : un taux de change doit être strictement positif
    #[error("Taux invalide : {0} (le taux doit être strictement positif)")]
    NonPositiveRate(f64),

    /// Ajout rejeté : la devise existe déjà dans le carnet
    #[error("La devise {0} existe déjà")]
    DuplicateCurrency(String),

    /// Montant saisi non numérique
    #[error("Montant invalide : \"{0}\" (entrez un nombre)")]
    InvalidAmount(String),
}

/// Carnet de taux de change
///
/// CONCEPT RUST : #[serde(transparent)]
/// - Le carnet se (dé)sérialise comme la map qu'il contient
/// - Le fichier JSON garde la forme plate { "USD": 1.0, ... }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateBook {
    rates: BTreeMap<String, f64>,
}

impl RateBook {
    /// Devise pivot : toutes les conversions passent par elle
    pub const BASE: &'static str = "USD";

    /// Crée un carnet vide
    pub fn new() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Carnet de base : 5 devises avec leurs taux de référence contre USD
    ///
    /// Utilisé au premier lancement et en repli si le fichier de taux est
    /// absent ou illisible
    pub fn defaults() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("EUR".to_string(), 0.93);
        rates.insert("GBP".to_string(), 0.80);
        rates.insert("NGN".to_string(), 1530.00);
        rates.insert("JPY".to_string(), 149.00);
        Self { rates }
    }

    /// Retourne le taux d'une devise, ou None si elle est inconnue
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Vérifie si une devise est présente dans le carnet
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Liste triée des codes de devises
    ///
    /// CONCEPT RUST : BTreeMap itère par ordre de clé
    /// - Les sélecteurs de l'UI affichent donc toujours le même ordre
    pub fn codes(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    /// Liste triée des entrées (code, taux) du carnet
    pub fn entries(&self) -> Vec<super::Currency> {
        self.rates
            .iter()
            .map(|(code, rate)| super::Currency::new(code.clone(), *rate))
            .collect()
    }

    /// Nombre de devises dans le carnet
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Vérifie si le carnet est vide
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Vérifie que tous les taux du carnet sont valides (finis et > 0)
    ///
    /// Utilisé par le store pour rejeter un fichier corrompu
    pub fn is_valid(&self) -> bool {
        self.rates.values().all(|r| r.is_finite() && *r > 0.0)
    }

    /// Insère ou remplace le taux d'une devise
    ///
    /// CONCEPT RUST : validation avant mutation
    /// - Le taux est vérifié AVANT d'écrire dans la map
    /// - En cas d'erreur, le carnet est garanti inchangé
    pub fn set_rate(&mut self, code: &str, rate: f64) -> Result<(), RateError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::NonPositiveRate(rate));
        }
        self.rates.insert(code.to_string(), rate);
        Ok(())
    }

    /// Ajoute une nouvelle devise au carnet
    ///
    /// Comme set_rate, mais refuse une devise déjà présente : la mise à
    /// jour d'un taux existant passe par set_rate
    pub fn add_currency(&mut self, code: &str, rate: f64) -> Result<(), RateError> {
        if self.rates.contains_key(code) {
            return Err(RateError::DuplicateCurrency(code.to_string()));
        }
        self.set_rate(code, rate)
    }

    /// Convertit un montant d'une devise vers une autre
    ///
    /// CONCEPT : Conversion pivot
    /// - 1. Montant source -> équivalent en devise pivot (division)
    /// - 2. Équivalent pivot -> devise cible (multiplication)
    /// - Aucun taux croisé n'est stocké : le pivot est le seul chemin
    ///
    /// Les deux codes doivent être présents dans le carnet ; sinon
    /// UnknownCurrency et aucun état n'est modifié
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, RateError> {
        let from_rate = self
            .get(from)
            .ok_or_else(|| RateError::UnknownCurrency(from.to_string()))?;
        let to_rate = self
            .get(to)
            .ok_or_else(|| RateError::UnknownCurrency(to.to_string()))?;

        // From -> pivot -> To
        let amount_in_base = amount / from_rate;
        Ok(amount_in_base * to_rate)
    }
}

impl Default for RateBook {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parsing du montant saisi
// ============================================================================

/// Parse un montant saisi par l'utilisateur
///
/// CONCEPT RUST : str::parse::<f64>()
/// - Retourne Result : la saisie non numérique devient une erreur typée
/// - is_finite() rejette "inf" et "NaN" que parse() accepterait
pub fn parse_amount(input: &str) -> Result<f64, RateError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RateError::InvalidAmount(trimmed.to_string())),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_five_currencies() {
        let book = RateBook::defaults();
        assert_eq!(book.len(), 5);
        assert_eq!(book.get("USD"), Some(1.0));
        assert_eq!(book.get("EUR"), Some(0.93));
        assert_eq!(book.get("GBP"), Some(0.80));
        assert_eq!(book.get("NGN"), Some(1530.00));
        assert_eq!(book.get("JPY"), Some(149.00));
    }

    #[test]
    fn test_codes_sorted() {
        let book = RateBook::defaults();
        assert_eq!(book.codes(), vec!["EUR", "GBP", "JPY", "NGN", "USD"]);
    }

    #[test]
    fn test_convert_usd_to_ngn() {
        // Exemple de référence : 10 USD = 15300 NGN
        let book = RateBook::defaults();
        let result = book.convert(10.0, "USD", "NGN").unwrap();
        assert!((result - 15300.00).abs() < 1e-9);
    }

    #[test]
    fn test_convert_identity() {
        // Convertir une devise vers elle-même rend le montant inchangé
        let book = RateBook::defaults();
        for code in book.codes() {
            let result = book.convert(42.5, &code, &code).unwrap();
            assert!((result - 42.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_convert_round_trip() {
        // A -> B puis B -> A retombe sur le montant initial (tolérance float)
        let book = RateBook::defaults();
        let there = book.convert(123.45, "EUR", "JPY").unwrap();
        let back = book.convert(there, "JPY", "EUR").unwrap();
        assert!((back - 123.45).abs() < 1e-9);
    }

    #[test]
    fn test_convert_unknown_currency() {
        let book = RateBook::defaults();

        let err = book.convert(10.0, "XXX", "USD").unwrap_err();
        assert_eq!(err, RateError::UnknownCurrency("XXX".to_string()));

        let err = book.convert(10.0, "USD", "XXX").unwrap_err();
        assert_eq!(err, RateError::UnknownCurrency("XXX".to_string()));
    }

    #[test]
    fn test_set_rate_updates_existing() {
        let mut book = RateBook::defaults();
        book.set_rate("EUR", 0.95).unwrap();
        assert_eq!(book.get("EUR"), Some(0.95));
    }

    #[test]
    fn test_set_rate_rejects_non_positive() {
        let mut book = RateBook::defaults();
        let before = book.clone();

        assert_eq!(
            book.set_rate("EUR", 0.0),
            Err(RateError::NonPositiveRate(0.0))
        );
        assert_eq!(
            book.set_rate("EUR", -1.5),
            Err(RateError::NonPositiveRate(-1.5))
        );
        assert!(book.set_rate("EUR", f64::NAN).is_err());

        // Le carnet est inchangé après un rejet
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_currency() {
        let mut book = RateBook::defaults();
        book.add_currency("CAD", 1.36).unwrap();
        assert_eq!(book.get("CAD"), Some(1.36));
        assert_eq!(book.len(), 6);
    }

    #[test]
    fn test_add_currency_rejects_duplicate() {
        let mut book = RateBook::defaults();
        let before = book.clone();

        assert_eq!(
            book.add_currency("EUR", 0.95),
            Err(RateError::DuplicateCurrency("EUR".to_string()))
        );

        // Le carnet est inchangé après un rejet
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_currency_rejects_non_positive() {
        let mut book = RateBook::defaults();
        assert!(book.add_currency("CAD", 0.0).is_err());
        assert!(!book.contains("CAD"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Ok(10.0));
        assert_eq!(parse_amount("  3.14 "), Ok(3.14));
        assert_eq!(parse_amount("-5"), Ok(-5.0));

        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1,5").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_serde_flat_json() {
        // Le fichier garde la forme plate { code: taux } du format d'origine
        let book = RateBook::defaults();
        let json = serde_json::to_string(&book).unwrap();
        let parsed: RateBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);

        let from_raw: RateBook =
            serde_json::from_str(r#"{"USD": 1.0, "NGN": 1530.0}"#).unwrap();
        assert_eq!(from_raw.len(), 2);
        assert_eq!(from_raw.get("NGN"), Some(1530.0));
    }
}
