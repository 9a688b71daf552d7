use portfolio::features::projects::{cards, validate, ProjectDescriptor, PROJECTS};
use portfolio::features::theme::Theme;

const fn project(title: &'static str, url: &'static str) -> ProjectDescriptor {
    ProjectDescriptor {
        title,
        url,
        tagline: "",
        tags: &[],
        preview: "",
    }
}

#[test]
fn renders_two_cards_keyed_a_and_b_in_every_theme() {
    let projects = [
        project("A", "https://a.example/"),
        project("B", "https://b.example/"),
    ];
    for theme in Theme::ALL {
        let rendered = cards(&projects, theme);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].key, "A");
        assert_eq!(rendered[1].key, "B");
    }
}

#[test]
fn reversed_catalog_renders_reversed() {
    let reversed: Vec<_> = PROJECTS.iter().rev().copied().collect();
    let keys: Vec<_> = cards(&reversed, Theme::Light)
        .into_iter()
        .map(|card| card.key)
        .collect();
    assert_eq!(keys, vec!["KeepGoing", "Wishlist Mini", "StudyDot", "One Ting"]);
}

#[test]
fn every_shipped_card_opens_without_opener_access() {
    assert!(validate(PROJECTS).is_ok());
    for card in cards(PROJECTS, Theme::Dark) {
        assert_eq!(card.link.target, "_blank");
        assert!(card.link.rel.contains("noopener"));
        assert!(card.link.href.starts_with("https://"));
    }
}
