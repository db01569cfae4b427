use da6_types::{BlogMood, BlogPost, Catalog, HomeModule, NightEvent, NightMood, Photo};
use once_cell::sync::Lazy;

/// The embedded default catalog: the complete site content, present from
/// process start to process end. Used whenever no catalog file is named
/// by flag, environment or config.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    posts: builtin_posts(),
    photos: builtin_photos(),
    events: builtin_events(),
    modules: builtin_modules(),
});

fn builtin_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "城市夜晚的數位詩歌".to_string(),
            excerpt: "在霓虹燈的映照下，我們都是數位時代的遊魂。每個像素都承載著一個故事，每個代碼都編織著一段回憶...".to_string(),
            content: "夜晚降臨城市，螢幕的藍光成為了新的月光。我坐在24小時咖啡廳裡，觀察著每個路過的人。他們的臉龐被手機螢幕照亮，眼神專注而疏離。這是一個數位化的詩意時刻，科技與人性在此刻交匯。\n\n我想起了班雅明的「機械複製時代的藝術品」，在這個後網絡時代，我們的存在本身就是一件藝術品的複製。每個自拍、每個分享、每個點讚，都是對自我的重新定義和複製。\n\n城市的夜晚不再屬於夢境，而是屬於數據流。街燈像素化了，建築變成了巨大的顯示器，人們在其中穿梭，既是觀眾也是表演者。".to_string(),
            image: "https://images.pexels.com/photos/2068975/pexels-photo-2068975.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            date: "2024-01-15".to_string(),
            tags: vec![
                "數位詩歌".to_string(),
                "城市觀察".to_string(),
                "後網絡美學".to_string(),
            ],
            read_time: "5 min".to_string(),
            likes: 89,
            comments: 23,
            mood: BlogMood::Introspective,
        },
        BlogPost {
            id: "2".to_string(),
            title: "地鐵站的時間膠囊".to_string(),
            excerpt: "每個地鐵站都是一個時間膠囊，保存著城市的記憶。在這裡，過去、現在和未來在同一個空間中共存...".to_string(),
            content: "地鐵站是城市的靜脈，也是時間的容器。每天有數萬人在這裡聚集又散去，留下的是什麼？是腳步聲的回響，是急促呼吸的殘留，還是那些未曾說出口的故事？\n\n今天我在忠孝復興站等車，看到一個老人在看報紙，一個年輕人在滑手機，一個中年女性在聽音樂。三個不同時代的媒體載體，在同一個空間中並存。這就是現代城市的時間層次，每個人都活在自己的時間軸裡。\n\n地鐵的聲音是城市最純粹的音樂——軌道的摩擦聲、門的開關聲、廣播的回音。這些聲音組成了一首關於現代性的交響樂。".to_string(),
            image: "https://images.pexels.com/photos/1656684/pexels-photo-1656684.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            date: "2024-01-10".to_string(),
            tags: vec![
                "城市記憶".to_string(),
                "時間".to_string(),
                "觀察筆記".to_string(),
            ],
            read_time: "4 min".to_string(),
            likes: 67,
            comments: 15,
            mood: BlogMood::Observational,
        },
        BlogPost {
            id: "3".to_string(),
            title: "夜之實驗室".to_string(),
            excerpt: "夜晚是一個巨大的實驗室，在這裡，聲音、光線和情感發生著奇妙的化學反應...".to_string(),
            content: "昨晚在地下音樂場所，我體驗了一次聲音的煉金術。DJ像是一個聲音的科學家，將不同的頻率混合、碰撞、融化，創造出新的聽覺化合物。\n\n人群在黑暗中移動，身體成為了聲波的接收器。每個人都在進行著自己的實驗——有人在測試孤獨的邊界，有人在探索連結的可能性，有人在尋找遺失的自我。\n\n夜晚的城市是一個感官實驗室。霓虹燈是視覺的催化劑，音樂是聽覺的溶劑，觸碰是情感的反應物。在這個實驗中，沒有固定的公式，只有不斷的變化和驚喜。".to_string(),
            image: "https://images.pexels.com/photos/1387174/pexels-photo-1387174.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            date: "2024-01-05".to_string(),
            tags: vec![
                "夜生活".to_string(),
                "實驗性".to_string(),
                "感官體驗".to_string(),
            ],
            read_time: "6 min".to_string(),
            likes: 142,
            comments: 34,
            mood: BlogMood::Experimental,
        },
    ]
}

fn builtin_photos() -> Vec<Photo> {
    vec![
        Photo {
            id: "1".to_string(),
            image: "https://images.pexels.com/photos/2068975/pexels-photo-2068975.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "城市的夜晚總是充滿未知的故事，每個路人都是一個獨特的存在 #人類觀察 #都市異象".to_string(),
            likes: 142,
            comments: 23,
            tags: vec![
                "人類觀察".to_string(),
                "都市異象".to_string(),
                "夜晚".to_string(),
            ],
            date: "2024-01-15".to_string(),
        },
        Photo {
            id: "2".to_string(),
            image: "https://images.pexels.com/photos/1656684/pexels-photo-1656684.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "地鐵站的匆忙人群，每個人都有自己的目的地和故事 #通勤觀察".to_string(),
            likes: 89,
            comments: 12,
            tags: vec!["通勤觀察".to_string(), "人類收集".to_string()],
            date: "2024-01-12".to_string(),
        },
        Photo {
            id: "3".to_string(),
            image: "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "咖啡廳裡的獨處時光，現代人的孤獨美學 #孤獨美學 #都市生活".to_string(),
            likes: 234,
            comments: 45,
            tags: vec!["孤獨美學".to_string(), "都市生活".to_string()],
            date: "2024-01-10".to_string(),
        },
        Photo {
            id: "4".to_string(),
            image: "https://images.pexels.com/photos/1108099/pexels-photo-1108099.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "街角的音樂人，用旋律連接陌生的靈魂 #街頭藝術 #音樂".to_string(),
            likes: 167,
            comments: 34,
            tags: vec![
                "街頭藝術".to_string(),
                "音樂".to_string(),
                "人類收集".to_string(),
            ],
            date: "2024-01-08".to_string(),
        },
        Photo {
            id: "5".to_string(),
            image: "https://images.pexels.com/photos/1040881/pexels-photo-1040881.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "雨夜的反光，城市變成了另一個維度 #雨夜 #城市倒影".to_string(),
            likes: 198,
            comments: 28,
            tags: vec![
                "雨夜".to_string(),
                "城市倒影".to_string(),
                "都市異象".to_string(),
            ],
            date: "2024-01-05".to_string(),
        },
        Photo {
            id: "6".to_string(),
            image: "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "老人與鴿子的日常對話，時間在這裡緩慢流淌 #日常詩意".to_string(),
            likes: 156,
            comments: 19,
            tags: vec!["日常詩意".to_string(), "人類觀察".to_string()],
            date: "2024-01-03".to_string(),
        },
    ]
}

fn builtin_events() -> Vec<NightEvent> {
    vec![
        NightEvent {
            id: "1".to_string(),
            title: "Underground Frequencies".to_string(),
            venue: "The Bunker".to_string(),
            date: "2024.01.15".to_string(),
            description: "深入地下音樂場景，感受電子音樂的純粹力量。在黑暗中尋找光明，在節拍中找到自己。".to_string(),
            image: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            mood: NightMood::Electronic,
        },
        NightEvent {
            id: "2".to_string(),
            title: "Ambient Nights".to_string(),
            venue: "Warehouse 404".to_string(),
            date: "2024.01.08".to_string(),
            description: "氛圍音樂之夜，讓聲音在空間中流淌。每個音符都是一次心靈的觸碰，每個節拍都是時間的印記。".to_string(),
            image: "https://images.pexels.com/photos/2240763/pexels-photo-2240763.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            mood: NightMood::Ambient,
        },
        NightEvent {
            id: "3".to_string(),
            title: "Experimental Soundscapes".to_string(),
            venue: "Black Box".to_string(),
            date: "2024.01.01".to_string(),
            description: "實驗聲響的探索之旅。在未知的聲音領域中冒險，體驗音樂的無限可能性。".to_string(),
            image: "https://images.pexels.com/photos/1387174/pexels-photo-1387174.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            mood: NightMood::Experimental,
        },
        NightEvent {
            id: "4".to_string(),
            title: "Neon Dreams".to_string(),
            venue: "Cyber Club".to_string(),
            date: "2023.12.25".to_string(),
            description: "霓虹燈下的電子夢境。科技與人性的交匯點，未來與現在的對話。".to_string(),
            image: "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            mood: NightMood::Electronic,
        },
        NightEvent {
            id: "5".to_string(),
            title: "Midnight Rituals".to_string(),
            venue: "Sacred Space".to_string(),
            date: "2023.12.18".to_string(),
            description: "午夜的儀式感，音樂作為連接靈魂的媒介。在神聖的空間中體驗集體的狂歡與孤獨。".to_string(),
            image: "https://images.pexels.com/photos/1449824/pexels-photo-1449824.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
            mood: NightMood::Ambient,
        },
    ]
}

fn builtin_modules() -> Vec<HomeModule> {
    vec![
        HomeModule {
            id: "human-collection".to_string(),
            title: "Human Collection".to_string(),
            subtitle: "人類收集計畫".to_string(),
            description: "Urban observations through photographic narratives".to_string(),
            image: "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            link: "/human-collection".to_string(),
            color: "from-purple-600/80 to-pink-600/80".to_string(),
        },
        HomeModule {
            id: "kingdom-of-night".to_string(),
            title: "Kingdom of Night".to_string(),
            subtitle: "夜之王國".to_string(),
            description: "Nocturnal chronicles from underground scenes".to_string(),
            image: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            link: "/kingdom-of-night".to_string(),
            color: "from-indigo-600/80 to-purple-600/80".to_string(),
        },
        HomeModule {
            id: "blog".to_string(),
            title: "BLOG".to_string(),
            subtitle: "文字與影像的混合筆記".to_string(),
            description: "Fragments of thoughts and visual poetry".to_string(),
            image: "https://images.pexels.com/photos/1656684/pexels-photo-1656684.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            link: "/blog".to_string(),
            color: "from-slate-600/80 to-indigo-600/80".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_the_expected_shape() {
        let catalog = builtin_catalog();

        assert_eq!(catalog.posts.len(), 3);
        assert_eq!(catalog.photos.len(), 6);
        assert_eq!(catalog.events.len(), 5);
        assert_eq!(catalog.modules.len(), 3);
    }

    #[test]
    fn builtin_module_links_all_resolve() {
        for module in &builtin_catalog().modules {
            assert!(
                module.section().is_some(),
                "module {} links to unknown section {}",
                module.id,
                module.link
            );
        }
    }

    #[test]
    fn builtin_catalog_round_trips_through_json() {
        let catalog = builtin_catalog();
        let json = serde_json::to_string(catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, catalog);
    }
}
