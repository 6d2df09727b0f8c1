// ============================================================================
// Converter - Rendu de l'interface principale
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Widgets : composants UI (Block, Paragraph, etc.)
// 3. Layout : découpage de l'espace en zones
// 4. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Screen, StatusLevel};
use crate::ui::rate_table;

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Pattern matching sur app.current_screen
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0]);

    // Le corps dépend de l'écran ; en mode saisie, on garde l'écran
    // d'origine en arrière-plan (pas de fenêtre modale)
    let body_screen = if app.current_screen == Screen::InputMode {
        app.return_screen
    } else {
        app.current_screen
    };
    match body_screen {
        Screen::Converter => render_converter_body(frame, app, chunks[1]),
        Screen::RateTable => rate_table::render_list(frame, app, chunks[1]),
        // return_screen ne vaut jamais InputMode, mais le match doit
        // être exhaustif
        Screen::InputMode => render_converter_body(frame, app, chunks[1]),
    }

    render_status(frame, app, chunks[2]);

    if app.current_screen == Screen::InputMode {
        render_input_footer(frame, app, chunks[3]);
    } else {
        render_footer(frame, app, chunks[3]);
    }
}

/// Crée le layout principal (header, corps, statut, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Corps : tout le reste
            Constraint::Length(3), // Barre de statut : 3 lignes
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Header : Titre de l'application
// ============================================================================

/// Dessine le header avec le titre
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" LazyChange ")
        .title_alignment(Alignment::Center);

    let text = vec![Line::from(Span::styled(
        "💱 Convertisseur de devises hors-ligne",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Corps : montant, sélecteurs, résultat
// ============================================================================

/// Dessine le corps de l'écran de conversion
fn render_converter_body(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Montant
            Constraint::Length(3), // Sélecteurs source/cible
            Constraint::Length(3), // Résultat
            Constraint::Min(0),    // Reste : vide
        ])
        .split(area);

    render_amount_box(frame, app, rows[0]);

    // Sélecteurs côte à côte
    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_selector(
        frame,
        " Devise source ",
        app.from_code(),
        app.focus == Focus::From,
        selectors[0],
    );
    render_selector(
        frame,
        " Devise cible ",
        app.to_code(),
        app.focus == Focus::To,
        selectors[1],
    );

    render_result_box(frame, app, rows[2]);
}

/// Couleur de bordure : vert pour le champ actif, cyan sinon
fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Dessine la zone de saisie du montant
fn render_amount_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Amount && !app.is_in_input_mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Montant ");

    let mut spans = vec![Span::styled(
        app.amount_input.as_str(),
        Style::default().fg(Color::White),
    )];
    if focused {
        // Curseur clignotant comme indicateur de saisie
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine un sélecteur de devise ("◀ USD ▶")
fn render_selector(
    frame: &mut Frame,
    title: &str,
    code: Option<&str>,
    focused: bool,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(title.to_string());

    let code = code.unwrap_or("---");
    let line = if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                code,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled(code, Style::default().fg(Color::White)))
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine la zone de résultat
fn render_result_box(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Résultat ");

    let line = match &app.result {
        Some(result) => Line::from(Span::styled(
            result.clone(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Le résultat s'affichera ici",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Barre de statut
// ============================================================================

/// Dessine la barre de statut (remplace les messagebox du programme
/// d'origine : l'erreur s'affiche ici, puis expire)
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Statut ");

    let line = match &app.status {
        Some(status) => {
            let (color, prefix) = match status.level {
                StatusLevel::Info => (Color::Green, "✓ "),
                StatusLevel::Warning => (Color::Yellow, "⚠ "),
                StatusLevel::Error => (Color::Red, "✗ "),
            };
            Line::from(Span::styled(
                format!("{}{}", prefix, status.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Footer : raccourcis
// ============================================================================

/// Raccourci stylé pour le footer
fn shortcut(key: &'static str, label: &'static str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
    ]
}

/// Dessine le footer avec les raccourcis clavier
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        // Message de confirmation de quit (two-step)
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_on_rate_table() {
        Line::from(
            [
                shortcut("[Esc]", " Retour  ", Color::Yellow),
                shortcut("[↑↓ / j k]", " Naviguer  ", Color::Yellow),
                shortcut("[u]", " Modifier  ", Color::Magenta),
                shortcut("[a]", " Ajouter  ", Color::Green),
                shortcut("[q]", " Quitter", Color::Red),
            ]
            .concat(),
        )
    } else {
        Line::from(
            [
                shortcut("[Tab]", " Champ  ", Color::Yellow),
                shortcut("[↑↓]", " Devise  ", Color::Yellow),
                shortcut("[Enter]", " Convertir  ", Color::Green),
                shortcut("[s]", " Échanger  ", Color::Cyan),
                shortcut("[u]", " Taux  ", Color::Magenta),
                shortcut("[a]", " Ajouter  ", Color::Green),
                shortcut("[r]", " Tableau  ", Color::Yellow),
                shortcut("[q]", " Quitter", Color::Red),
            ]
            .concat(),
        )
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine le footer en mode saisie avec la ligne d'input
///
/// CONCEPT : Saisie non modale
/// - L'écran d'origine reste visible en arrière-plan
/// - ESC annule, Enter valide
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)); // Vert : mode saisie

    let input_line = Line::from(vec![
        Span::styled(
            &app.input_prompt,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(&app.input_buffer, Style::default().fg(Color::White)),
        Span::styled(
            "█", // Curseur
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let paragraph = Paragraph::new(vec![input_line])
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
