use crate::presentation::view_models::{
    FilterSummary, PhotoDetailViewModel, PhotoEntry, PhotoListViewModel,
};
use da6_engine::distinct_tags;
use da6_types::Photo;

pub fn present_photo_list(
    all: &[Photo],
    filtered: &[&Photo],
    search: Option<String>,
    tag: Option<String>,
) -> PhotoListViewModel {
    let photos = filtered.iter().map(|photo| photo_entry(photo)).collect();

    PhotoListViewModel {
        photos,
        total: all.len(),
        available_tags: distinct_tags(all),
        applied: FilterSummary { search, tag },
    }
}

pub fn present_photo_detail(photo: &Photo) -> PhotoDetailViewModel {
    PhotoDetailViewModel {
        id: photo.id.clone(),
        caption: photo.caption.clone(),
        date: photo.date.clone(),
        tags: photo.tags.clone(),
        likes: photo.likes,
        comments: photo.comments,
        image: photo.image.clone(),
    }
}

fn photo_entry(photo: &Photo) -> PhotoEntry {
    PhotoEntry {
        id: photo.id.clone(),
        caption: photo.caption.clone(),
        date: photo.date.clone(),
        tags: photo.tags.clone(),
        likes: photo.likes,
        comments: photo.comments,
    }
}
