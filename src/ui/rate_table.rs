// ============================================================================
// Rate Table - Rendu du tableau des taux
// ============================================================================
// Affiche toutes les devises du carnet avec leur taux contre la devise pivot
//
// CONCEPT RATATUI : List widget
// - Widget pour afficher une liste d'items
// - Highlight : style spécial pour la ligne sélectionnée
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::RateBook;

/// Dessine la liste des taux dans la zone donnée
pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📒 Taux (pivot : {}) ", RateBook::BASE));

    // Si le carnet est vide, affiche un message
    if app.rates.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Aucune devise dans le carnet",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    // CONCEPT RUST : Iterator chaining
    // - entries() donne les lignes triées par code
    // - map() transforme chaque devise en ListItem stylé
    let items: Vec<ListItem> = app
        .rates
        .entries()
        .iter()
        .enumerate()
        .map(|(index, currency)| {
            // La devise pivot se distingue des autres
            let style = if currency.is_base() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let mut list_item = ListItem::new(format!(" {}", currency.display())).style(style);

            // Ligne sélectionnée : gras + couleurs inversées
            if index == app.selected_index {
                list_item = list_item.style(
                    style
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::REVERSED),
                );
            }

            list_item
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
