//! Small catalogs with known contents.
//!
//! Integration tests assert against these records by id, so the ids are
//! deliberately distinct from the embedded catalog's numeric ones.

use da6_types::{BlogMood, BlogPost, Catalog, HomeModule, NightEvent, NightMood, Photo};

pub fn post(id: &str, title: &str, mood: BlogMood, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("Opening notes for {id}"),
        content: format!("{title}.\n\nA longer paragraph follows."),
        image: format!("https://img.example/{id}.jpg"),
        date: "2024-03-01".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        read_time: "3 min".to_string(),
        likes: 12,
        comments: 2,
        mood,
    }
}

pub fn photo(id: &str, caption: &str, tags: &[&str]) -> Photo {
    Photo {
        id: id.to_string(),
        image: format!("https://img.example/{id}.jpg"),
        caption: caption.to_string(),
        likes: 30,
        comments: 4,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: "2024-03-05".to_string(),
    }
}

pub fn event(id: &str, title: &str, venue: &str, mood: NightMood) -> NightEvent {
    NightEvent {
        id: id.to_string(),
        title: title.to_string(),
        venue: venue.to_string(),
        date: "2024.03.09".to_string(),
        description: format!("{title} at {venue}, doors at midnight."),
        image: format!("https://img.example/{id}.jpg"),
        mood,
    }
}

pub fn module(id: &str, title: &str, link: &str) -> HomeModule {
    HomeModule {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: format!("{title} subtitle"),
        description: format!("{title} description"),
        image: format!("https://img.example/{id}.jpg"),
        link: link.to_string(),
        color: "from-purple-600/80 to-pink-600/80".to_string(),
    }
}

/// Three posts, two photos, two events, three modules. Passes
/// `content check` with no findings.
pub fn small_catalog() -> Catalog {
    Catalog {
        posts: vec![
            post(
                "p1",
                "Neon alleys after rain",
                BlogMood::Observational,
                &["城市", "夜"],
            ),
            post(
                "p2",
                "Quiet server rooms",
                BlogMood::Introspective,
                &["夜", "機房"],
            ),
            post("p3", "Tape loops", BlogMood::Experimental, &["tape", "聲音"]),
        ],
        photos: vec![
            photo("g1", "雨後的巷子，燈光折成兩半", &["城市", "雨"]),
            photo("g2", "Last train window", &["夜"]),
        ],
        events: vec![
            event("n1", "Basement Frequencies", "B1 Warehouse", NightMood::Electronic),
            event("n2", "Fog Machine Hymns", "Attic East", NightMood::Ambient),
        ],
        modules: vec![
            module("m1", "Human Collection", "/human-collection"),
            module("m2", "Kingdom of Night", "/kingdom-of-night"),
            module("m3", "Blog", "/blog"),
        ],
    }
}

/// A catalog that parses but fails validation: a duplicate post id, a
/// blank title, an unparseable photo date, a module link naming no
/// section, and an empty events collection (warning).
pub fn broken_catalog() -> Catalog {
    let mut catalog = small_catalog();
    catalog.posts[1].id = "p1".to_string();
    catalog.posts[2].title = "   ".to_string();
    catalog.photos[0].date = "March 5".to_string();
    catalog.modules[0].link = "/basement".to_string();
    catalog.events.clear();
    catalog
}
