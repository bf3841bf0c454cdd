use serde_json::json;

use super::*;

fn image(url: &str, width: u32) -> ImageCandidate {
    ImageCandidate {
        url: url.to_string(),
        width,
    }
}

#[test]
fn decodes_full_episode() {
    let value = json!({
        "episodeId": "l_e1",
        "titles": { "title": "Episode 1", "subtitle": "About things" },
        "date": "2024-03-01T05:00:00Z",
        "duration": "PT42M17S",
        "image": [
            { "url": "https://gfx.example/ep-300.jpg", "width": 300 },
            { "url": "https://gfx.example/ep-960.jpg", "width": 960 }
        ],
        "squareImage": [
            { "url": "https://gfx.example/show-1400.jpg", "width": 1400 }
        ],
        "originalTitle": "Monsens univers",
        "_links": { "share": { "href": "https://radio.nrk.no/podkast/monsens_univers/l_e1" } },
        "durationInSeconds": 2537,
        "badges": []
    });

    let ep: Episode = serde_json::from_value(value).expect("episode should decode");

    assert_eq!(ep.episode_id, "l_e1");
    assert_eq!(ep.titles.title, "Episode 1");
    assert_eq!(ep.titles.subtitle, "About things");
    assert_eq!(ep.date, "2024-03-01T05:00:00Z");
    assert_eq!(ep.duration, "PT42M17S");
    assert_eq!(ep.image.len(), 2);
    assert_eq!(ep.original_title, "Monsens univers");
    assert_eq!(
        ep.share_link(),
        "https://radio.nrk.no/podkast/monsens_univers/l_e1"
    );
}

#[test]
fn missing_and_null_fields_become_defaults() {
    let value = json!({
        "episodeId": "l_e2",
        "titles": { "title": "Only a title", "subtitle": null },
        "duration": null,
        "image": null,
        "_links": {}
    });

    let ep: Episode = serde_json::from_value(value).expect("episode should decode");

    assert_eq!(ep.titles.subtitle, "");
    assert_eq!(ep.date, "");
    assert_eq!(ep.duration, "");
    assert!(ep.image.is_empty());
    assert!(ep.square_image.is_empty());
    assert_eq!(ep.original_title, "");
    assert_eq!(ep.share_link(), "");
}

#[test]
fn best_image_picks_max_width_regardless_of_order() {
    let ep = Episode {
        image: vec![
            image("https://gfx.example/960.jpg", 960),
            image("https://gfx.example/300.jpg", 300),
            image("https://gfx.example/600.jpg", 600),
        ],
        ..Default::default()
    };
    assert_eq!(ep.best_image().unwrap().url, "https://gfx.example/960.jpg");
}

#[test]
fn best_image_tie_keeps_first() {
    let ep = Episode {
        square_image: vec![
            image("https://gfx.example/a.jpg", 500),
            image("https://gfx.example/b.jpg", 500),
        ],
        ..Default::default()
    };
    assert_eq!(
        ep.best_square_image().unwrap().url,
        "https://gfx.example/a.jpg"
    );
}

#[test]
fn best_image_none_for_empty_list() {
    let ep = Episode::default();
    assert!(ep.best_image().is_none());
    assert!(ep.best_square_image().is_none());
}

#[test]
fn best_image_none_when_widest_has_no_url() {
    let ep = Episode {
        image: vec![image("https://gfx.example/small.jpg", 100), image("", 900)],
        ..Default::default()
    };
    assert!(ep.best_image().is_none());
}

#[test]
fn unresolved_episode_has_empty_playback_url() {
    let resolved = ResolvedEpisode::new(Episode::default(), Some("https://cdn.example/a.mp3".to_string()));
    assert!(resolved.is_resolved());
    assert_eq!(resolved.playback_url(), "https://cdn.example/a.mp3");

    let unresolved = ResolvedEpisode::new(Episode::default(), None);
    assert!(!unresolved.is_resolved());
    assert_eq!(unresolved.playback_url(), "");
}
