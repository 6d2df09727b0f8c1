// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Ownership : App possède le carnet de taux, pas d'état global
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Chaque opération retourne par la barre de statut (pas de dialogue modal)
// ============================================================================

use std::path::PathBuf;

use tracing::{error, info};

use crate::models::{parse_amount, RateBook};
use crate::store;

/// Durée de vie d'un message de statut, en ticks de la boucle d'événements
/// (un tick ~ 250ms : un message reste visible environ 6 secondes)
const STATUS_TICKS: u16 = 24;

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Représente les différents écrans de l'application
// - Un seul écran actif à la fois
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : montant, sélecteurs de devises, résultat
    Converter,

    /// Vue tableau : toutes les devises du carnet avec leurs taux
    RateTable,

    /// Mode saisie : capture du texte utilisateur dans le footer
    /// Remplace les dialogues modaux du programme d'origine
    InputMode,
}

/// Champ actif sur l'écran de conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Saisie du montant
    Amount,

    /// Sélecteur de la devise source
    From,

    /// Sélecteur de la devise cible
    To,
}

// ============================================================================
// Enum : InputFlow
// ============================================================================
// CONCEPT : Request/response au lieu de dialogues modaux
// - Le programme d'origine enchaînait des simpledialog bloquants
// - Ici chaque étape de saisie est un état explicite : le footer pose une
//   question, Enter avance, ESC annule
// ============================================================================

/// Étape en cours d'une saisie multi-étapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFlow {
    /// Ajout : saisie du code de la nouvelle devise
    AddCode,

    /// Ajout : saisie du taux pour la devise `code`
    AddRate { code: String },

    /// Mise à jour : saisie du code de la devise à modifier
    UpdateCode,

    /// Mise à jour : saisie du nouveau taux pour la devise `code`
    UpdateRate { code: String },
}

/// Niveau d'un message de statut (pilote la couleur d'affichage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Message affiché dans la barre de statut
///
/// Remplace les messagebox du programme d'origine : l'erreur est montrée,
/// l'état reste inchangé, l'utilisateur corrige et recommence
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Le carnet de taux, possédé par App et passé explicitement au store
    pub rates: RateBook,

    /// Chemin du fichier de taux (réécrit après chaque mutation)
    pub rates_path: PathBuf,

    /// Liste triée des codes, cache pour les sélecteurs
    pub codes: Vec<String>,

    /// Index de la devise source dans `codes`
    pub from_index: usize,

    /// Index de la devise cible dans `codes`
    pub to_index: usize,

    /// Champ actif sur l'écran de conversion
    pub focus: Focus,

    /// Buffer de saisie du montant
    pub amount_input: String,

    /// Dernier résultat de conversion formaté ("10.00 USD = 15300.00 NGN")
    pub result: Option<String>,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Écran auquel revenir en sortant du mode saisie
    pub return_screen: Screen,

    /// Index sélectionné dans le tableau des taux
    pub selected_index: usize,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// Two-step quit : première pression de 'q' arme la confirmation,
    /// deuxième pression quitte, toute autre touche annule
    pub confirm_quit: bool,

    /// Buffer de saisie pour le mode Input
    pub input_buffer: String,

    /// Prompt affiché en mode Input (ex: "Code de la devise : ")
    pub input_prompt: String,

    /// Étape de saisie en cours (None hors mode Input)
    pub input_flow: Option<InputFlow>,

    /// Message de statut courant
    pub status: Option<StatusMessage>,

    /// Ticks restants avant effacement du statut
    status_ticks: u16,
}

impl App {
    /// Crée l'état de l'application avec un carnet chargé
    ///
    /// Sélection initiale : USD -> NGN comme le programme d'origine
    pub fn new(rates: RateBook, rates_path: PathBuf) -> Self {
        let codes = rates.codes();
        let from_index = codes
            .iter()
            .position(|c| c == RateBook::BASE)
            .unwrap_or(0);
        let to_index = codes
            .iter()
            .position(|c| c == "NGN")
            .unwrap_or_else(|| codes.len().saturating_sub(1));

        Self {
            running: true,
            rates,
            rates_path,
            codes,
            from_index,
            to_index,
            focus: Focus::Amount,
            amount_input: String::new(),
            result: None,
            current_screen: Screen::Converter,
            return_screen: Screen::Converter,
            selected_index: 0,
            confirm_quit: false,
            input_buffer: String::new(),
            input_prompt: String::new(),
            input_flow: None,
            status: None,
            status_ticks: 0,
        }
    }

    // ========================================================================
    // Cycle de vie
    // ========================================================================

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Demande la confirmation de quitter (première pression de 'q')
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// CONCEPT : Event Loop Pattern
    /// - Permet de mettre à jour l'état même sans événement utilisateur
    /// - Ici : fait expirer le message de statut après quelques secondes
    pub fn tick(&mut self) {
        if self.status.is_some() {
            self.status_ticks = self.status_ticks.saturating_sub(1);
            if self.status_ticks == 0 {
                self.status = None;
            }
        }
    }

    // ========================================================================
    // Écrans
    // ========================================================================

    /// Affiche le tableau des taux
    pub fn show_rate_table(&mut self) {
        self.current_screen = Screen::RateTable;
        // Re-clamp : la liste a pu grandir depuis la dernière visite
        self.selected_index = self.selected_index.min(self.codes.len().saturating_sub(1));
    }

    /// Retourne à l'écran de conversion
    pub fn show_converter(&mut self) {
        self.current_screen = Screen::Converter;
    }

    /// Vérifie si on est sur l'écran de conversion
    pub fn is_on_converter(&self) -> bool {
        self.current_screen == Screen::Converter
    }

    /// Vérifie si on est sur le tableau des taux
    pub fn is_on_rate_table(&self) -> bool {
        self.current_screen == Screen::RateTable
    }

    /// Vérifie si on est en mode saisie
    pub fn is_in_input_mode(&self) -> bool {
        self.current_screen == Screen::InputMode
    }

    // ========================================================================
    // Écran de conversion : focus, sélecteurs, montant
    // ========================================================================

    /// Passe au champ suivant : Montant -> Source -> Cible -> Montant
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Amount => Focus::From,
            Focus::From => Focus::To,
            Focus::To => Focus::Amount,
        };
    }

    /// Code de la devise source sélectionnée
    pub fn from_code(&self) -> Option<&str> {
        self.codes.get(self.from_index).map(String::as_str)
    }

    /// Code de la devise cible sélectionnée
    pub fn to_code(&self) -> Option<&str> {
        self.codes.get(self.to_index).map(String::as_str)
    }

    /// Devise précédente dans le sélecteur actif (avec rebouclage)
    pub fn selector_previous(&mut self) {
        if self.codes.is_empty() {
            return;
        }
        let len = self.codes.len();
        match self.focus {
            Focus::From => self.from_index = (self.from_index + len - 1) % len,
            Focus::To => self.to_index = (self.to_index + len - 1) % len,
            Focus::Amount => {}
        }
    }

    /// Devise suivante dans le sélecteur actif (avec rebouclage)
    pub fn selector_next(&mut self) {
        if self.codes.is_empty() {
            return;
        }
        let len = self.codes.len();
        match self.focus {
            Focus::From => self.from_index = (self.from_index + 1) % len,
            Focus::To => self.to_index = (self.to_index + 1) % len,
            Focus::Amount => {}
        }
    }

    /// Échange les devises source et cible
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_index, &mut self.to_index);
    }

    /// Ajoute un caractère au buffer de montant
    pub fn append_amount_char(&mut self, c: char) {
        self.amount_input.push(c);
    }

    /// Supprime le dernier caractère du buffer de montant
    pub fn amount_backspace(&mut self) {
        self.amount_input.pop();
    }

    // ========================================================================
    // Opérations métier
    // ========================================================================

    /// Convertit le montant saisi entre les devises sélectionnées
    ///
    /// CONCEPT : Request/response
    /// - Succès : le résultat formaté remplace le précédent
    /// - Erreur (montant non numérique, devise inconnue) : message de
    ///   statut, aucun état modifié, l'utilisateur corrige et recommence
    pub fn convert(&mut self) {
        let amount = match parse_amount(&self.amount_input) {
            Ok(a) => a,
            Err(e) => {
                self.set_status(e.to_string(), StatusLevel::Error);
                return;
            }
        };

        let (Some(from), Some(to)) = (self.from_code(), self.to_code()) else {
            self.set_status(
                "Sélection de devise invalide".to_string(),
                StatusLevel::Error,
            );
            return;
        };
        let (from, to) = (from.to_string(), to.to_string());

        match self.rates.convert(amount, &from, &to) {
            Ok(out) => {
                info!(amount, from = %from, to = %to, result = out, "Conversion effectuée");
                self.result = Some(format!("{:.2} {} = {:.2} {}", amount, from, out, to));
            }
            Err(e) => {
                self.set_status(e.to_string(), StatusLevel::Error);
            }
        }
    }

    // ========================================================================
    // Mode saisie (remplace les dialogues modaux)
    // ========================================================================

    /// Entre en mode saisie pour une étape donnée
    fn start_input(&mut self, flow: InputFlow, prompt: String) {
        if self.current_screen != Screen::InputMode {
            self.return_screen = self.current_screen;
        }
        self.current_screen = Screen::InputMode;
        self.input_buffer.clear();
        self.input_prompt = prompt;
        self.input_flow = Some(flow);
    }

    /// Démarre la mise à jour d'un taux (demande d'abord le code)
    pub fn start_update_flow(&mut self) {
        self.start_input(
            InputFlow::UpdateCode,
            "Code de la devise à modifier (ex: NGN) : ".to_string(),
        );
    }

    /// Démarre la mise à jour du taux d'une devise déjà connue
    /// (depuis le tableau des taux : le code est celui de la ligne choisie)
    pub fn start_update_flow_for(&mut self, code: String) {
        let prompt = format!("Nouveau taux pour 1 {} en {} : ", RateBook::BASE, code);
        self.start_input(InputFlow::UpdateRate { code }, prompt);
    }

    /// Démarre l'ajout d'une devise (demande d'abord le code)
    pub fn start_add_flow(&mut self) {
        self.start_input(
            InputFlow::AddCode,
            "Code de la NOUVELLE devise (ex: CAD) : ".to_string(),
        );
    }

    /// Code de la devise sélectionnée dans le tableau des taux
    pub fn selected_code(&self) -> Option<&str> {
        self.codes.get(self.selected_index).map(String::as_str)
    }

    /// Annule le mode saisie et revient à l'écran d'origine
    pub fn cancel_input(&mut self) {
        self.current_screen = self.return_screen;
        self.input_buffer.clear();
        self.input_prompt.clear();
        self.input_flow = None;
    }

    /// Ajoute un caractère au buffer de saisie
    pub fn input_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    /// Supprime le dernier caractère du buffer de saisie
    pub fn input_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Valide la saisie courante et avance dans le flow
    ///
    /// CONCEPT RUST : Option::take()
    /// - Récupère le flow en laissant None derrière
    /// - Évite un conflit d'emprunt avec les mutations qui suivent
    pub fn submit_input(&mut self) {
        let value = self.input_buffer.trim().to_string();
        let flow = self.input_flow.take();
        self.input_buffer.clear();
        self.input_prompt.clear();
        self.current_screen = self.return_screen;

        match flow {
            Some(InputFlow::UpdateCode) => {
                let code = value.to_uppercase();
                if code.is_empty() {
                    return; // saisie vide : simple annulation
                }
                if !self.rates.contains(&code) {
                    self.set_status(
                        format!("Devise {} inconnue. Utilisez [a] pour l'ajouter.", code),
                        StatusLevel::Error,
                    );
                    return;
                }
                self.start_update_flow_for(code);
            }

            Some(InputFlow::UpdateRate { code }) => {
                self.apply_set_rate(&code, &value);
            }

            Some(InputFlow::AddCode) => {
                let code = value.to_uppercase();
                if code.is_empty() {
                    return;
                }
                if self.rates.contains(&code) {
                    self.set_status(
                        format!("La devise {} existe déjà", code),
                        StatusLevel::Error,
                    );
                    return;
                }
                let prompt = format!("Taux pour 1 {} en {} : ", RateBook::BASE, code);
                self.start_input(InputFlow::AddRate { code }, prompt);
            }

            Some(InputFlow::AddRate { code }) => {
                self.apply_add_currency(&code, &value);
            }

            None => {}
        }
    }

    /// Applique la mise à jour d'un taux, puis persiste le carnet
    fn apply_set_rate(&mut self, code: &str, raw_rate: &str) {
        let Some(rate) = parse_rate(raw_rate) else {
            self.set_status(
                format!("Taux invalide : \"{}\" (entrez un nombre positif)", raw_rate),
                StatusLevel::Error,
            );
            return;
        };

        match self.rates.set_rate(code, rate) {
            Ok(()) => {
                info!(code = %code, rate, "Taux mis à jour");
                self.persist();
                self.set_status(
                    format!("Taux de {} mis à jour", code),
                    StatusLevel::Info,
                );
            }
            Err(e) => {
                self.set_status(e.to_string(), StatusLevel::Error);
            }
        }
    }

    /// Applique l'ajout d'une devise, puis persiste le carnet
    fn apply_add_currency(&mut self, code: &str, raw_rate: &str) {
        let Some(rate) = parse_rate(raw_rate) else {
            self.set_status(
                format!("Taux invalide : \"{}\" (entrez un nombre positif)", raw_rate),
                StatusLevel::Error,
            );
            return;
        };

        match self.rates.add_currency(code, rate) {
            Ok(()) => {
                info!(code = %code, rate, "Devise ajoutée");
                self.refresh_codes();
                self.persist();
                self.set_status(format!("Devise {} ajoutée", code), StatusLevel::Info);
            }
            Err(e) => {
                self.set_status(e.to_string(), StatusLevel::Error);
            }
        }
    }

    /// Sauvegarde le carnet sur disque
    ///
    /// Une erreur est signalée mais jamais fatale : la mutation en mémoire
    /// est conservée (comportement du programme d'origine)
    fn persist(&mut self) {
        if let Err(e) = store::save_rates(&self.rates_path, &self.rates) {
            error!(error = ?e, "Échec de sauvegarde du carnet");
            self.set_status(format!("Échec de sauvegarde : {}", e), StatusLevel::Error);
        }
    }

    /// Recalcule la liste des codes après un ajout, en préservant les
    /// devises sélectionnées (les index bougent quand la liste triée grandit)
    fn refresh_codes(&mut self) {
        let from = self.from_code().map(str::to_string);
        let to = self.to_code().map(str::to_string);

        self.codes = self.rates.codes();

        self.from_index = from
            .and_then(|c| self.codes.iter().position(|x| *x == c))
            .unwrap_or(0);
        self.to_index = to
            .and_then(|c| self.codes.iter().position(|x| *x == c))
            .unwrap_or_else(|| self.codes.len().saturating_sub(1));
        self.selected_index = self.selected_index.min(self.codes.len().saturating_sub(1));
    }

    // ========================================================================
    // Tableau des taux : navigation
    // ========================================================================

    /// Navigue vers le haut dans le tableau des taux
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Navigue vers le bas dans le tableau des taux
    pub fn navigate_down(&mut self) {
        let max_index = self.codes.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    // ========================================================================
    // Barre de statut
    // ========================================================================

    /// Affiche un message de statut (remplace les messagebox)
    pub fn set_status(&mut self, text: String, level: StatusLevel) {
        self.status = Some(StatusMessage { text, level });
        self.status_ticks = STATUS_TICKS;
    }
}

/// Parse un taux saisi par l'utilisateur (None si non numérique ou non fini ;
/// la positivité est vérifiée par le carnet lui-même)
fn parse_rate(input: &str) -> Option<f64> {
    match input.trim().parse::<f64>() {
        Ok(r) if r.is_finite() => Some(r),
        _ => None,
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// App de test : carnet par défaut, fichier dans un répertoire temporaire
    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchange_rates.json");
        (App::new(RateBook::defaults(), path), dir)
    }

    #[test]
    fn test_app_creation() {
        let (app, _dir) = test_app();
        assert!(app.is_running());
        assert_eq!(app.current_screen, Screen::Converter);
        assert_eq!(app.focus, Focus::Amount);
        // Sélection initiale : USD -> NGN
        assert_eq!(app.from_code(), Some("USD"));
        assert_eq!(app.to_code(), Some("NGN"));
    }

    #[test]
    fn test_two_step_quit() {
        let (mut app, _dir) = test_app();
        assert!(!app.is_awaiting_quit_confirmation());

        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        assert!(app.is_running());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_focus_cycle() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.focus, Focus::Amount);
        app.focus_next();
        assert_eq!(app.focus, Focus::From);
        app.focus_next();
        assert_eq!(app.focus, Focus::To);
        app.focus_next();
        assert_eq!(app.focus, Focus::Amount);
    }

    #[test]
    fn test_selector_wraps() {
        let (mut app, _dir) = test_app();
        app.focus = Focus::From;
        app.from_index = 0;

        app.selector_previous();
        assert_eq!(app.from_index, app.codes.len() - 1);

        app.selector_next();
        assert_eq!(app.from_index, 0);
    }

    #[test]
    fn test_swap() {
        let (mut app, _dir) = test_app();
        app.swap();
        assert_eq!(app.from_code(), Some("NGN"));
        assert_eq!(app.to_code(), Some("USD"));
    }

    #[test]
    fn test_convert_sets_result() {
        let (mut app, _dir) = test_app();
        app.amount_input = "10".to_string();

        app.convert();
        assert_eq!(app.result, Some("10.00 USD = 15300.00 NGN".to_string()));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_convert_invalid_amount() {
        let (mut app, _dir) = test_app();
        app.amount_input = "abc".to_string();

        app.convert();
        // Erreur affichée, aucun résultat, carnet inchangé
        assert!(app.result.is_none());
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert_eq!(app.rates, RateBook::defaults());
    }

    #[test]
    fn test_update_flow() {
        let (mut app, _dir) = test_app();

        app.start_update_flow();
        assert!(app.is_in_input_mode());

        // Étape 1 : le code
        app.input_buffer = "eur".to_string();
        app.submit_input();
        // Le code existe : on enchaîne sur la saisie du taux
        assert!(app.is_in_input_mode());
        assert_eq!(
            app.input_flow,
            Some(InputFlow::UpdateRate {
                code: "EUR".to_string()
            })
        );

        // Étape 2 : le taux
        app.input_buffer = "0.95".to_string();
        app.submit_input();
        assert!(!app.is_in_input_mode());
        assert_eq!(app.rates.get("EUR"), Some(0.95));
        assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Info);
    }

    #[test]
    fn test_update_flow_unknown_code() {
        let (mut app, _dir) = test_app();

        app.start_update_flow();
        app.input_buffer = "CAD".to_string();
        app.submit_input();

        // Devise inconnue : erreur, retour à l'écran de conversion
        assert!(!app.is_in_input_mode());
        assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Error);
        assert_eq!(app.rates, RateBook::defaults());
    }

    #[test]
    fn test_update_flow_rejects_non_positive_rate() {
        let (mut app, _dir) = test_app();

        app.start_update_flow_for("EUR".to_string());
        app.input_buffer = "-1".to_string();
        app.submit_input();

        assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Error);
        // Le carnet est inchangé après le rejet
        assert_eq!(app.rates, RateBook::defaults());
    }

    #[test]
    fn test_add_flow() {
        let (mut app, _dir) = test_app();

        app.start_add_flow();
        app.input_buffer = "cad".to_string();
        app.submit_input();
        assert_eq!(
            app.input_flow,
            Some(InputFlow::AddRate {
                code: "CAD".to_string()
            })
        );

        app.input_buffer = "1.36".to_string();
        app.submit_input();

        assert_eq!(app.rates.get("CAD"), Some(1.36));
        // La nouvelle devise apparaît dans les sélecteurs
        assert!(app.codes.contains(&"CAD".to_string()));
        // Les sélections sont préservées malgré le décalage des index
        assert_eq!(app.from_code(), Some("USD"));
        assert_eq!(app.to_code(), Some("NGN"));
    }

    #[test]
    fn test_add_flow_rejects_duplicate() {
        let (mut app, _dir) = test_app();

        app.start_add_flow();
        app.input_buffer = "EUR".to_string();
        app.submit_input();

        assert!(!app.is_in_input_mode());
        assert_eq!(app.status.as_ref().unwrap().level, StatusLevel::Error);
        assert_eq!(app.rates.len(), 5);
    }

    #[test]
    fn test_add_persists_to_disk() {
        let (mut app, _dir) = test_app();

        app.start_add_flow();
        app.input_buffer = "CHF".to_string();
        app.submit_input();
        app.input_buffer = "0.88".to_string();
        app.submit_input();

        // Le fichier a été réécrit avec la nouvelle devise
        let outcome = store::load_rates(&app.rates_path);
        assert_eq!(outcome.book.get("CHF"), Some(0.88));
    }

    #[test]
    fn test_cancel_input_returns_to_origin_screen() {
        let (mut app, _dir) = test_app();

        app.show_rate_table();
        app.start_add_flow();
        assert!(app.is_in_input_mode());

        app.cancel_input();
        assert!(app.is_on_rate_table());
        assert!(app.input_flow.is_none());
    }

    #[test]
    fn test_rate_table_navigation() {
        let (mut app, _dir) = test_app();
        app.show_rate_table();

        assert_eq!(app.selected_index, 0);
        app.navigate_up();
        assert_eq!(app.selected_index, 0);

        app.navigate_down();
        assert_eq!(app.selected_index, 1);

        for _ in 0..10 {
            app.navigate_down();
        }
        // Clamp sur la dernière ligne
        assert_eq!(app.selected_index, app.codes.len() - 1);
    }

    #[test]
    fn test_status_expires_after_ticks() {
        let (mut app, _dir) = test_app();
        app.set_status("test".to_string(), StatusLevel::Info);
        assert!(app.status.is_some());

        for _ in 0..STATUS_TICKS {
            app.tick();
        }
        assert!(app.status.is_none());
    }
}
