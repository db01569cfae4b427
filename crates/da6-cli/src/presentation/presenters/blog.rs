use crate::presentation::view_models::{
    FilterSummary, PostDetailViewModel, PostEntry, PostListViewModel,
};
use da6_engine::distinct_tags;
use da6_types::BlogPost;

pub fn present_post_list(
    all: &[BlogPost],
    filtered: &[&BlogPost],
    search: Option<String>,
    tag: Option<String>,
) -> PostListViewModel {
    let posts = filtered.iter().map(|post| post_entry(post)).collect();

    PostListViewModel {
        posts,
        total: all.len(),
        available_tags: distinct_tags(all),
        applied: FilterSummary { search, tag },
    }
}

pub fn present_post_detail(post: &BlogPost) -> PostDetailViewModel {
    PostDetailViewModel {
        id: post.id.clone(),
        title: post.title.clone(),
        date: post.date.clone(),
        mood: post.mood.to_string(),
        tags: post.tags.clone(),
        read_time: post.read_time.clone(),
        likes: post.likes,
        comments: post.comments,
        excerpt: post.excerpt.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
    }
}

fn post_entry(post: &BlogPost) -> PostEntry {
    PostEntry {
        id: post.id.clone(),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        date: post.date.clone(),
        mood: post.mood.to_string(),
        tags: post.tags.clone(),
        read_time: post.read_time.clone(),
        likes: post.likes,
        comments: post.comments,
    }
}
