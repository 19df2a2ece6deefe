//! HTML rendering of cards and the gallery page.
//!
//! Markup uses Tailwind utility classes; the page pulls Tailwind from its CDN.

use askama::Template;

use crate::card::DisplayCard;
use crate::colors::type_color;
use crate::error::GalleryError;
use crate::view::ViewState;

const PAGE_TITLE: &str = "Pokédex";

/// Render-ready view of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub badges: Vec<Badge>,
}

/// One type badge. Keyed by its label; labels within a card are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: Option<&'static str>,
}

impl Badge {
    /// Color class, or empty for labels without a color.
    pub fn color_class(&self) -> &str {
        self.color.unwrap_or_default()
    }
}

impl From<&DisplayCard> for CardView {
    fn from(card: &DisplayCard) -> Self {
        Self {
            id: card.id,
            name: card.display_name(),
            image: card.image.clone(),
            badges: card
                .types
                .iter()
                .map(|label| Badge {
                    label: label.clone(),
                    color: type_color(label),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryTemplate {
    title: &'static str,
    loading: bool,
    error: Option<String>,
    cards: Vec<CardView>,
}

/// Renders the full gallery document for a view state.
///
/// Cards are only rendered for `Loaded`; a failed load shows the error alone.
pub fn render_page(state: &ViewState) -> Result<String, GalleryError> {
    let template = GalleryTemplate {
        title: PAGE_TITLE,
        loading: state.is_loading(),
        error: state
            .error()
            .map(|e| format!("Could not load the Pokédex: {e}")),
        cards: state.cards().iter().map(CardView::from).collect(),
    };
    Ok(template.render()?)
}
