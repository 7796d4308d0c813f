use std::fmt;

use crate::presentation::formatters::{accord_icons, favorite_icon, gender_icon, join_tags, truncate};
use crate::presentation::view_models::{
    BrandListViewModel, ChipViewModel, CreateView, FacetListViewModel, ItemSummaryViewModel,
    ResultListViewModel, ViewMode,
};
use scentdex_types::MatchMode;

// --------------------------------------------------------
// Result List View
// --------------------------------------------------------

impl CreateView for ResultListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ResultListView { data: self, mode })
    }
}

struct ResultListView<'a> {
    data: &'a ResultListViewModel,
    mode: ViewMode,
}

fn format_chips(chips: &[ChipViewModel]) -> String {
    chips
        .iter()
        .map(|chip| format!("[{}: {}]", title(chip.facet.as_str()), chip.label))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title(value: &str) -> String {
    crate::presentation::formatters::title_case(value)
}

impl<'a> ResultListView<'a> {
    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.summary.text)?;
        if let Some(brand) = &self.data.summary.brand {
            writeln!(f, "{}: {}", brand.name, brand.description)?;
        }
        if !self.data.chips.is_empty() {
            writeln!(f, "Filters: {}", format_chips(&self.data.chips))?;
        }
        if !self.data.query.is_empty() {
            writeln!(f, "Search: {:?}", self.data.query)?;
        }
        Ok(())
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.data.items {
            writeln!(f, "{}", item.code)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        if self.data.items.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        for item in &self.data.items {
            writeln!(
                f,
                "{} {:<10} {:<32} {:<20} {}",
                favorite_icon(item.favorite),
                item.code,
                truncate(&item.name, 32),
                truncate(&item.brand, 20),
                join_tags(&item.accords)
            )?;
        }
        self.render_footer(f)
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for item in &self.data.items {
            writeln!(f)?;
            render_item_block(f, item, false)?;
        }
        self.render_footer(f)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for item in &self.data.items {
            writeln!(f)?;
            render_item_block(f, item, true)?;
        }
        self.render_footer(f)
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.omitted > 0 {
            writeln!(f)?;
            writeln!(f, "... and {} more", self.data.omitted)?;
        }
        Ok(())
    }
}

fn render_item_block(
    f: &mut fmt::Formatter,
    item: &ItemSummaryViewModel,
    verbose: bool,
) -> fmt::Result {
    let mut line = format!(
        "{} {}  {} by {}",
        favorite_icon(item.favorite),
        item.code,
        item.name,
        item.brand
    );
    let gender = item.gender.as_deref().map(gender_icon).unwrap_or("");
    let icons = accord_icons(&item.accords);
    for mark in std::iter::once(gender).chain(icons).filter(|m| !m.is_empty()) {
        line.push(' ');
        line.push_str(mark);
    }
    writeln!(f, "{}", line)?;
    writeln!(f, "    Accords: {}", join_tags(&item.accords))?;
    if verbose {
        writeln!(f, "    Gender: {}", item.gender.as_deref().unwrap_or("-"))?;
        writeln!(f, "    Seasons: {}", join_tags(&item.seasons))?;
        writeln!(f, "    Occasions: {}", join_tags(&item.occasions))?;
    }
    Ok(())
}

impl<'a> fmt::Display for ResultListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Facet List View
// --------------------------------------------------------

impl CreateView for FacetListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FacetListView { data: self, mode })
    }
}

struct FacetListView<'a> {
    data: &'a FacetListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for FacetListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, facet) in self.data.facets.iter().enumerate() {
            if self.mode == ViewMode::Minimal {
                for option in facet.options.iter().filter(|o| o.viable) {
                    writeln!(f, "{}={}", facet.facet, option.value)?;
                }
                continue;
            }

            if i > 0 {
                writeln!(f)?;
            }
            let mode = match facet.mode {
                MatchMode::Any => "any of",
                MatchMode::All => "all of",
            };
            writeln!(f, "{} ({})", facet.label, mode)?;

            if facet.options.is_empty() {
                writeln!(f, "  (no values)")?;
                continue;
            }

            for option in &facet.options {
                if self.mode == ViewMode::Compact && !option.viable {
                    continue;
                }
                let mark = match (option.selected, option.viable) {
                    (true, _) => "[x]",
                    (false, true) => "[ ]",
                    (false, false) => "[-]",
                };
                writeln!(f, "  {} {:<24} {:>5}", mark, option.label, option.count)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Brand List View
// --------------------------------------------------------

impl CreateView for BrandListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(BrandListView { data: self, mode })
    }
}

struct BrandListView<'a> {
    data: &'a BrandListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for BrandListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.brands.is_empty() {
            writeln!(f, "No brands in the catalog.")?;
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for brand in &self.data.brands {
                writeln!(f, "{}", brand.name)?;
            }
            return Ok(());
        }

        writeln!(f, "{:<28} {:>6}  DESCRIPTION", "BRAND", "ITEMS")?;
        writeln!(f, "{}", "-".repeat(80))?;
        for brand in &self.data.brands {
            let description = brand.description.as_deref().unwrap_or("-");
            let description = if self.mode == ViewMode::Verbose {
                description.to_string()
            } else {
                truncate(description, 44)
            };
            writeln!(
                f,
                "{:<28} {:>6}  {}",
                truncate(&brand.name, 28),
                brand.items,
                description
            )?;
        }
        Ok(())
    }
}
