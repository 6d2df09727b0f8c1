// ============================================================================
// LazyChange - Convertisseur de devises hors-ligne
// ============================================================================
// Programme TUI : conversion entre devises via un carnet de taux éditable,
// persisté dans un fichier JSON local
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle infinie qui gère événements et rendering
// 3. Ownership : le carnet de taux appartient à App, aucun état global
// 4. RAII : restauration du terminal sur tous les chemins de sortie
// ============================================================================

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use lazychange::app::{App, StatusLevel};
use lazychange::store;
use lazychange::ui::{events::EventHandler, render};

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans :
/// - Linux/WSL : ~/.local/share/lazychange/logs/lazychange.log
/// - macOS : ~/Library/Application Support/lazychange/logs/lazychange.log
/// - Windows : C:\Users\<user>\AppData\Local\lazychange\logs\lazychange.log
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/lazychange/logs/lazychange.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=debug cargo run
/// RUST_LOG=lazychange=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Répertoire de logs cross-platform via dirs
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lazychange")
        .join("logs");

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    // Rotation quotidienne : évite que les logs deviennent trop gros
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazychange.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender) // Écrit dans le fichier
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true) // Inclut le module (ex: lazychange::store::file)
                .with_line_number(true), // Inclut le numéro de ligne
        )
        .with(
            // Filtre par niveau via RUST_LOG
            // Par défaut : debug pour lazychange, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazychange=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Logging d'abord : si l'init échoue, on continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("LazyChange starting up");

    // Charge le carnet de taux (fichier local, ou défauts en repli)
    let rates_path = PathBuf::from(store::RATES_FILE);
    let outcome = store::load_rates(&rates_path);

    let mut app = App::new(outcome.book, rates_path);
    if let Some(warning) = outcome.warning {
        // Avertissement non fatal : affiché dans la barre de statut
        app.set_status(warning, StatusLevel::Warning);
    }

    // Setup du terminal en mode TUI
    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // Crée le gestionnaire d'événements et exécute l'event loop
    let events = EventHandler::new();
    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// CONCEPT : Event Loop Pattern
// - À chaque itération : render -> input -> update
// - Mono-thread : aucun travail en arrière-plan, le carnet n'est accédé
//   que depuis cette boucle
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        if !app.is_running() {
            break;
        }

        // ========================================
        // 1. RENDER : Dessine l'interface
        // ========================================
        terminal.draw(|frame| render(frame, app))?;

        // ========================================
        // 2. INPUT : Traite les événements
        // ========================================
        match events.next() {
            Ok(event) => handle_event(app, event),
            Err(e) => {
                error!(error = ?e, "Erreur de lecture d'événement");
            }
        }

        // ========================================
        // 3. UPDATE : Met à jour l'état
        // ========================================
        app.tick();
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// CONCEPT : Event Handler Pattern
// - Pattern matching avec guards pour router selon l'écran actif
// - Le mode saisie capture les touches en premier : 'q' y redevient un
//   caractère ordinaire
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: lazychange::ui::events::Event) {
    use lazychange::ui::events::{
        get_char_from_event, is_add_event, is_amount_char_event, is_backspace_event,
        is_down_event, is_enter_event, is_escape_event, is_input_char_event, is_quit_event,
        is_rates_event, is_space_event, is_swap_event, is_tab_event, is_up_event,
        is_update_event, Event,
    };
    use lazychange::app::Focus;

    match event {
        // ========================================
        // Mode saisie : prioritaire sur tout le reste
        // ========================================

        // ESC : annuler la saisie et revenir à l'écran d'origine
        Event::Key(_) if is_escape_event(&event) && app.is_in_input_mode() => {
            info!("User cancelled input");
            app.cancel_input();
        }

        // Enter : valider la saisie et avancer dans le flow
        Event::Key(_) if is_enter_event(&event) && app.is_in_input_mode() => {
            app.submit_input();
        }

        // Backspace : supprimer le dernier caractère
        Event::Key(_) if is_backspace_event(&event) && app.is_in_input_mode() => {
            app.input_backspace();
        }

        // Caractères : ajouter au buffer
        Event::Key(_) if is_input_char_event(&event) && app.is_in_input_mode() => {
            if let Some(c) = get_char_from_event(&event) {
                app.input_char(c);
            }
        }

        // Toute autre touche en mode saisie : ignorée
        Event::Key(_) if app.is_in_input_mode() => {}

        // ========================================
        // Quit two-step (hors mode saisie)
        // ========================================
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // ========================================
        // Tableau des taux
        // ========================================

        // ESC, Espace ou 'r' : retour à l'écran de conversion
        Event::Key(_)
            if (is_escape_event(&event) || is_space_event(&event) || is_rates_event(&event))
                && app.is_on_rate_table() =>
        {
            app.cancel_quit();
            debug!("User returned to converter");
            app.show_converter();
        }

        // Navigation dans le tableau
        Event::Key(_) if is_up_event(&event) && app.is_on_rate_table() => {
            app.cancel_quit();
            app.navigate_up();
        }
        Event::Key(_) if is_down_event(&event) && app.is_on_rate_table() => {
            app.cancel_quit();
            app.navigate_down();
        }

        // 'u' : modifier le taux de la ligne sélectionnée
        Event::Key(_) if is_update_event(&event) && app.is_on_rate_table() => {
            app.cancel_quit();
            if let Some(code) = app.selected_code().map(str::to_string) {
                info!(code = %code, "User requested rate update from table");
                app.start_update_flow_for(code);
            }
        }

        // 'a' : ajouter une devise
        Event::Key(_) if is_add_event(&event) && app.is_on_rate_table() => {
            app.cancel_quit();
            info!("User requested add currency");
            app.start_add_flow();
        }

        // ========================================
        // Écran de conversion
        // ========================================

        // Enter : convertir
        Event::Key(_) if is_enter_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            app.convert();
        }

        // Tab : champ suivant (Montant -> Source -> Cible)
        Event::Key(_) if is_tab_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            app.focus_next();
        }

        // Flèches : devise précédente/suivante dans le sélecteur actif
        Event::Key(_) if is_up_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            app.selector_previous();
        }
        Event::Key(_) if is_down_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            app.selector_next();
        }

        // 's' : échanger les devises source et cible
        Event::Key(_) if is_swap_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            debug!("User swapped currencies");
            app.swap();
        }

        // 'u' : mettre à jour un taux (demande le code puis le taux)
        Event::Key(_) if is_update_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            info!("User requested rate update");
            app.start_update_flow();
        }

        // 'a' : ajouter une devise (demande le code puis le taux)
        Event::Key(_) if is_add_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            info!("User requested add currency");
            app.start_add_flow();
        }

        // 'r' : afficher le tableau des taux
        Event::Key(_) if is_rates_event(&event) && app.is_on_converter() => {
            app.cancel_quit();
            debug!("User opened rate table");
            app.show_rate_table();
        }

        // Chiffres, '.' et '-' : saisie du montant (champ Montant actif)
        Event::Key(_)
            if is_amount_char_event(&event)
                && app.is_on_converter()
                && app.focus == Focus::Amount =>
        {
            if let Some(c) = get_char_from_event(&event) {
                app.append_amount_char(c);
            }
        }

        // Backspace : effacer le montant
        Event::Key(_)
            if is_backspace_event(&event)
                && app.is_on_converter()
                && app.focus == Focus::Amount =>
        {
            app.amount_backspace();
        }

        Event::Tick => {
            // Tick régulier : l'expiration du statut est gérée par app.tick()
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation de quit si active
            app.cancel_quit();
        }

        _ => {
            // Autres événements : ignorés
        }
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// CONCEPT RUST : Terminal raw mode
// - Raw mode : on reçoit tous les caractères directement
// - Alternate screen : écran secondaire (ne pollue pas l'historique)
//
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
///
/// Appelé dans main() même en cas d'erreur, pour ne pas laisser le
/// terminal cassé
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    terminal.show_cursor()?;

    Ok(())
}
