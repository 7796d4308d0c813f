use scentdex_engine::Distribution;

use crate::args::hints::cmd;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatsViewModel, StatusBadge, ValueCountViewModel,
};

pub fn stats(distribution: &Distribution) -> StatsViewModel {
    StatsViewModel {
        facet: distribution.facet,
        label: distribution.facet.label().to_string(),
        items: distribution.items,
        max_count: distribution.max_count(),
        values: distribution
            .values
            .iter()
            .map(|entry| ValueCountViewModel {
                value: entry.value.clone(),
                count: entry.count,
            })
            .collect(),
    }
}

pub fn present_stats(distribution: &Distribution) -> CommandResultViewModel<StatsViewModel> {
    let content = stats(distribution);

    if content.items == 0 {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("No items to count"))
            .with_suggestion(Guidance::new("Loosen the filters").with_command(cmd::FACETS));
    }
    if content.values.is_empty() {
        let label = content.label.to_lowercase();
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info(format!("No {} values in these items", label)));
    }

    CommandResultViewModel::new(content)
}
