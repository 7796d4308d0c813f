use std::fmt;

use crate::presentation::formatters::{accord_icons, gender_icon, join_tags, percent};
use crate::presentation::view_models::{
    CreateView, ItemDetailViewModel, NotesViewModel, SimilarListViewModel, ViewMode,
};

pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_NOTES: &str = "No note details available.";

/// Non-empty note groups with their labels, top to base.
pub fn note_groups(notes: &NotesViewModel) -> Vec<(&'static str, &[String])> {
    [
        ("Top", notes.top.as_slice()),
        ("Heart", notes.heart.as_slice()),
        ("Base", notes.base.as_slice()),
    ]
    .into_iter()
    .filter(|(_, values)| !values.is_empty())
    .collect()
}

// --------------------------------------------------------
// Item Detail View
// --------------------------------------------------------

impl CreateView for ItemDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ItemDetailView { data: self, mode })
    }
}

struct ItemDetailView<'a> {
    data: &'a ItemDetailViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ItemDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}\t{}\t{}", d.code, d.name, d.brand);
        }

        writeln!(f, "{} ({})", d.name, d.code)?;
        match d.gender.as_deref() {
            Some(gender) => writeln!(f, "by {} · {} {}", d.brand, gender, gender_icon(gender))?,
            None => writeln!(f, "by {}", d.brand)?,
        }
        let icons = accord_icons(&d.accords);
        if !icons.is_empty() {
            writeln!(f, "{}", icons.join(" "))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", d.description.as_deref().unwrap_or(NO_DESCRIPTION))?;

        writeln!(f)?;
        writeln!(f, "Notes")?;
        let groups = note_groups(&d.notes);
        if groups.is_empty() {
            writeln!(f, "  {}", NO_NOTES)?;
        }
        for (label, values) in groups {
            writeln!(f, "  {:<6} {}", format!("{}:", label), values.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Accords:   {}", join_tags(&d.accords))?;
        writeln!(f, "Seasons:   {}", join_tags(&d.seasons))?;
        writeln!(f, "Occasions: {}", join_tags(&d.occasions))?;

        if self.mode != ViewMode::Compact {
            writeln!(f)?;
            writeln!(f, "Boost guide: {}", d.boost.title)?;
            for step in &d.boost.steps {
                writeln!(f, "  {:<6} + {}", step.bottle, step.boost)?;
            }

            writeln!(f)?;
            writeln!(f, "About {}", d.brand_info.name)?;
            writeln!(f, "  {}", d.brand_info.description)?;
        }

        writeln!(f)?;
        writeln!(f, "Favorite: {}", if d.favorite { "yes" } else { "no" })?;
        writeln!(f, "Link: {}", d.product_url)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Similar List View
// --------------------------------------------------------

impl CreateView for SimilarListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SimilarListView { data: self, mode })
    }
}

struct SimilarListView<'a> {
    data: &'a SimilarListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for SimilarListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for entry in &self.data.matches {
                writeln!(f, "{}", entry.code)?;
            }
            return Ok(());
        }

        let reference = &self.data.reference;
        writeln!(
            f,
            "Similar to {} by {} ({})",
            reference.name, reference.brand, reference.code
        )?;

        if self.data.matches.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        for (rank, entry) in self.data.matches.iter().enumerate() {
            writeln!(
                f,
                "{:>2}. {:>4}  {} by {} ({})",
                rank + 1,
                percent(entry.score),
                entry.name,
                entry.brand,
                entry.code
            )?;
            if !entry.shared_accords.is_empty() {
                writeln!(f, "           shared: {}", entry.shared_accords.join(", "))?;
            }
        }
        Ok(())
    }
}
