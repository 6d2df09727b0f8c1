// ============================================================================
// Store : fichier de taux
// ============================================================================
// Charge et sauvegarde le carnet de taux dans un fichier JSON local
//
// CONCEPTS RUST :
// 1. Result<T, E> : gestion d'erreurs avec contexte (anyhow)
// 2. Serde : (dé)sérialisation JSON automatique du carnet
// 3. Repli gracieux : fichier absent ou corrompu -> défauts + avertissement
//
// Le fichier est un objet JSON plat { "USD": 1.0, "EUR": 0.93, ... },
// réécrit en entier après chaque mutation. Pas de versionnement, pas de
// mise à jour partielle.
// ============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::RateBook;

/// Nom du fichier de taux, relatif au répertoire de lancement
pub const RATES_FILE: &str = "exchange_rates.json";

// ============================================================================
// Chargement
// ============================================================================

/// Résultat du chargement du carnet
///
/// CONCEPT : Erreur non fatale remontée comme donnée
/// - Un fichier corrompu ne doit pas empêcher le lancement
/// - On charge les défauts et on remonte l'avertissement à afficher
#[derive(Debug)]
pub struct LoadOutcome {
    /// Le carnet chargé (depuis le fichier, ou les défauts en repli)
    pub book: RateBook,

    /// Avertissement à montrer à l'utilisateur (Some si repli sur défauts
    /// à cause d'un fichier illisible)
    pub warning: Option<String>,
}

/// Charge le carnet de taux depuis le fichier
///
/// - Fichier absent : carnet par défaut, sans avertissement (premier
///   lancement, cas normal)
/// - Fichier illisible, JSON invalide ou taux non positif : carnet par
///   défaut + avertissement non fatal
pub fn load_rates(path: &Path) -> LoadOutcome {
    if !path.exists() {
        info!(path = %path.display(), "Fichier de taux absent, carnet par défaut");
        return LoadOutcome {
            book: RateBook::defaults(),
            warning: None,
        };
    }

    match read_book(path) {
        Ok(book) => {
            info!(path = %path.display(), currencies = book.len(), "Carnet de taux chargé");
            LoadOutcome {
                book,
                warning: None,
            }
        }
        Err(e) => {
            // Repli : on continue avec les défauts, jamais d'arrêt ici
            warn!(path = %path.display(), error = ?e, "Fichier de taux illisible, repli sur les défauts");
            LoadOutcome {
                book: RateBook::defaults(),
                warning: Some(
                    "Fichier de taux illisible : taux par défaut utilisés".to_string(),
                ),
            }
        }
    }
}

/// Lit et valide le fichier de taux
///
/// CONCEPT RUST : ? et .context()
/// - Chaque étape peut échouer, ? propage
/// - .context() enrichit l'erreur pour les logs
fn read_book(path: &Path) -> Result<RateBook> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Échec de lecture de {}", path.display()))?;

    let book: RateBook =
        serde_json::from_str(&contents).context("JSON de taux invalide")?;

    // Un taux nul, négatif ou non fini viole l'invariant du carnet :
    // on traite le fichier comme corrompu
    if !book.is_valid() {
        anyhow::bail!("le fichier contient un taux non positif");
    }

    Ok(book)
}

// ============================================================================
// Sauvegarde
// ============================================================================

/// Sauvegarde le carnet de taux dans le fichier
///
/// Appelé après chaque mutation (mise à jour ou ajout de devise). Le
/// fichier est réécrit en entier. Une erreur ici est non fatale :
/// l'appelant l'affiche dans la barre de statut et continue
pub fn save_rates(path: &Path, book: &RateBook) -> Result<()> {
    let json = serde_json::to_string_pretty(book).context("Échec de sérialisation du carnet")?;

    std::fs::write(path, json)
        .with_context(|| format!("Échec d'écriture de {}", path.display()))?;

    info!(path = %path.display(), currencies = book.len(), "Carnet de taux sauvegardé");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);

        let outcome = load_rates(&path);
        // Fichier absent : défauts, sans avertissement
        assert_eq!(outcome.book, RateBook::defaults());
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);

        let mut book = RateBook::defaults();
        book.add_currency("CAD", 1.36).unwrap();
        save_rates(&path, &book).unwrap();

        let outcome = load_rates(&path);
        assert_eq!(outcome.book, book);
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_load_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);
        std::fs::write(&path, "pas du json {").unwrap();

        let outcome = load_rates(&path);
        assert_eq!(outcome.book, RateBook::defaults());
        assert!(outcome.warning.is_some());
    }

    #[test]
    fn test_load_non_positive_rate_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);
        std::fs::write(&path, r#"{"USD": 1.0, "EUR": -0.93}"#).unwrap();

        let outcome = load_rates(&path);
        assert_eq!(outcome.book, RateBook::defaults());
        assert!(outcome.warning.is_some());
    }

    #[test]
    fn test_save_keeps_flat_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);

        save_rates(&path, &RateBook::defaults()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        // Objet plat { code: taux }, pas d'enveloppe
        assert!(value.is_object());
        assert_eq!(value["USD"], 1.0);
        assert_eq!(value["NGN"], 1530.0);
    }
}
