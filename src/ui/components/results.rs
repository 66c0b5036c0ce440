//! Result card list.

use crate::ui::helpers::{attribute, text};
use crate::ui::viewmodel::ResultCard;

/// Renders one stream card.
#[must_use]
pub fn render_card(card: &ResultCard) -> String {
    format!(
        "<div class=\"result\">\n  <img class='stream-img' src=\"{}\"/><h1>{}</h1>\n  <h2>{} - {} Viewers</h2>\n  <p>{}</p>\n</div>",
        attribute(&card.image_url),
        text(&card.display_name),
        text(&card.game),
        card.viewers,
        text(&card.status),
    )
}

/// Renders all cards, concatenated in order.
#[must_use]
pub fn render_cards(cards: &[ResultCard]) -> String {
    cards.iter().map(render_card).collect()
}
