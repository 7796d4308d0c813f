//! Interactive browser handler
//!
//! Owns the domain side of the TUI: the persisted `Browser` and which panel
//! is open. The renderer sends intents; each one is applied here and answered
//! with a freshly presented screen.

use anyhow::Result;
use scentdex_engine::Action;
use scentdex_runtime::{Browser, DisplayConfig};

use crate::context::ExecutionContext;
use crate::presentation::presenters::{self, Panel};
use crate::presentation::view_models::BrowserScreenViewModel;
use crate::presentation::{BrowserIntent, BrowserRenderer};

struct BrowseHandler {
    browser: Browser,
    display: DisplayConfig,
    panel: Panel,
}

impl BrowseHandler {
    fn screen(&self, notice: Option<String>) -> BrowserScreenViewModel {
        presenters::present_browser_screen(&self.browser, &self.display, &self.panel, notice)
    }

    fn apply(&mut self, intent: BrowserIntent) -> Result<BrowserScreenViewModel> {
        let notice = match intent {
            BrowserIntent::Dispatch(action) => {
                self.browser.dispatch(&action)?;
                self.notice_for(&action)
            }
            BrowserIntent::OpenDetails(code) => {
                self.panel = Panel::Item(code);
                None
            }
            BrowserIntent::OpenSimilar(code) => {
                self.panel = Panel::Similar(code);
                None
            }
            BrowserIntent::ClosePanel => {
                // Similar goes back to the item it was opened from.
                self.panel = match std::mem::take(&mut self.panel) {
                    Panel::Similar(code) => Panel::Item(code),
                    _ => Panel::Closed,
                };
                None
            }
            BrowserIntent::ToggleTheme => {
                let theme = self.browser.toggle_theme()?;
                Some(format!("Theme: {}", theme.name()))
            }
        };

        Ok(self.screen(notice))
    }

    fn notice_for(&self, action: &Action) -> Option<String> {
        match action {
            Action::ToggleFavorite(code) => {
                let name = self
                    .browser
                    .catalog()
                    .get(code)
                    .map_or(code.as_str(), |item| item.name.as_str());
                Some(if self.browser.is_favorite(code) {
                    format!("★ {} added to favorites", name)
                } else {
                    format!("☆ {} removed from favorites", name)
                })
            }
            Action::ToggleFavoritesView => Some(
                if self.browser.session().filters().scope.is_favorites_only() {
                    "Showing favorites only"
                } else {
                    "Showing all items"
                }
                .to_string(),
            ),
            Action::ClearAll => Some("Filters cleared".to_string()),
            _ => None,
        }
    }
}

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let display = ctx.config()?.display.clone();
    let browser = ctx.browser()?;

    let mut handler = BrowseHandler {
        browser,
        display,
        panel: Panel::Closed,
    };

    let initial = handler.screen(None);
    tracing::debug!(items = initial.summary.total, "starting browser");

    BrowserRenderer::new(initial).run(|intent| handler.apply(intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::DetailPanelViewModel;
    use scentdex_engine::Catalog;
    use scentdex_runtime::MemoryStore;
    use scentdex_types::{Facet, Item};
    use std::sync::Arc;

    fn handler() -> BrowseHandler {
        let catalog = Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus", "fresh"]),
            Item::new("A2", "Noir", "By").with_accords(["woody", "citrus"]),
        ]);
        BrowseHandler {
            browser: Browser::open(Arc::new(catalog), Box::new(MemoryStore::new())),
            display: DisplayConfig::default(),
            panel: Panel::Closed,
        }
    }

    #[test]
    fn test_dispatch_updates_screen() -> Result<()> {
        let mut handler = handler();
        let screen = handler.apply(BrowserIntent::Dispatch(Action::select(
            Facet::Accord,
            "woody",
        )))?;
        assert_eq!(screen.results.len(), 1);
        assert_eq!(screen.results[0].code, "A2");
        Ok(())
    }

    #[test]
    fn test_favorite_toggle_sets_notice() -> Result<()> {
        let mut handler = handler();
        let screen =
            handler.apply(BrowserIntent::Dispatch(Action::ToggleFavorite("A1".to_string())))?;
        assert_eq!(screen.notice.as_deref(), Some("★ Aqua added to favorites"));
        assert!(screen.results[0].favorite);
        Ok(())
    }

    #[test]
    fn test_closing_similar_returns_to_item() -> Result<()> {
        let mut handler = handler();
        handler.apply(BrowserIntent::OpenDetails("A1".to_string()))?;
        let screen = handler.apply(BrowserIntent::OpenSimilar("A1".to_string()))?;
        assert!(matches!(screen.detail, Some(DetailPanelViewModel::Similar(_))));

        let screen = handler.apply(BrowserIntent::ClosePanel)?;
        assert!(matches!(screen.detail, Some(DetailPanelViewModel::Item(_))));

        let screen = handler.apply(BrowserIntent::ClosePanel)?;
        assert!(screen.detail.is_none());
        Ok(())
    }

    #[test]
    fn test_theme_toggle() -> Result<()> {
        let mut handler = handler();
        let screen = handler.apply(BrowserIntent::ToggleTheme)?;
        assert!(screen.dark);
        assert_eq!(screen.notice.as_deref(), Some("Theme: dark"));
        Ok(())
    }
}
