use crate::presentation::view_models::{
    EventDetailViewModel, EventEntry, EventListViewModel, FilterSummary,
};
use da6_engine::CatalogFilter;
use da6_types::NightEvent;

/// Events keep their wheel position (1-based catalog order) even when a
/// search narrows the listing, so positions stay stable for jumping.
pub fn present_event_list(all: &[NightEvent], search: Option<String>) -> EventListViewModel {
    let filter = CatalogFilter::new().search(search.clone().unwrap_or_default());

    let events = all
        .iter()
        .enumerate()
        .filter(|(_, event)| filter.matches(*event))
        .map(|(index, event)| EventEntry {
            position: index + 1,
            id: event.id.clone(),
            title: event.title.clone(),
            venue: event.venue.clone(),
            date: event.date.clone(),
            mood: event.mood.to_string(),
        })
        .collect();

    EventListViewModel {
        events,
        total: all.len(),
        applied: FilterSummary { search, tag: None },
    }
}

pub fn present_event_detail(all: &[NightEvent], index: usize) -> EventDetailViewModel {
    let event = &all[index];

    EventDetailViewModel {
        id: event.id.clone(),
        title: event.title.clone(),
        venue: event.venue.clone(),
        date: event.date.clone(),
        mood: event.mood.to_string(),
        description: event.description.clone(),
        image: event.image.clone(),
        position: index + 1,
        total: all.len(),
    }
}
