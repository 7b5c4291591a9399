use repairdesk::core::Shop;
use repairdesk::core::catalog::{CATEGORY_ALL, categories_of, filter_damages};
use repairdesk::core::embed::{convert_to_embed_url, extract_video_id};
use repairdesk::core::notify::Change;
use repairdesk::models::damage::{parse_cost, parse_steps};
use repairdesk::models::{Damage, NewDamage};
use repairdesk::store::{KEY_DAMAGES, MemoryStore, load_json};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

fn new_damage(name: &str, category: &str, video: &str) -> NewDamage {
    NewDamage {
        name: name.to_string(),
        category: category.to_string(),
        description: "desc".to_string(),
        video_url: video.to_string(),
        steps: vec!["Buka casing.".to_string(), "Ganti part.".to_string()],
        estimated_cost: 300000.0,
    }
}

#[test]
fn test_short_link_is_rewritten_to_embed() {
    let mut shop = Shop::open(MemoryStore::new());
    let added = shop
        .add_damage(new_damage("Kamera Buram", "Kamera", "https://youtu.be/qiJ_2-8Tf7w"))
        .unwrap();

    assert_eq!(
        added.video_embed_url,
        "https://www.youtube.com/embed/qiJ_2-8Tf7w"
    );
}

#[test]
fn test_embed_url_shapes() {
    // already embeddable → unchanged
    let embed = "https://www.youtube.com/embed/zEqyR4D3-3w";
    assert_eq!(convert_to_embed_url(embed), embed);

    // watch link, with extra query params
    assert_eq!(
        convert_to_embed_url("https://www.youtube.com/watch?v=YXd6s-HYp3E&t=42s"),
        "https://www.youtube.com/embed/YXd6s-HYp3E"
    );
    assert_eq!(
        convert_to_embed_url("youtube.com/watch?feature=share&v=5N7uIIA6S2c"),
        "https://www.youtube.com/embed/5N7uIIA6S2c"
    );
    assert_eq!(
        convert_to_embed_url("https://www.youtube.com/v/0T0i1D-S2pY"),
        "https://www.youtube.com/embed/0T0i1D-S2pY"
    );

    // unparseable → verbatim, never panics
    assert_eq!(convert_to_embed_url("not a url"), "not a url");
    assert_eq!(
        convert_to_embed_url("https://vimeo.com/12345"),
        "https://vimeo.com/12345"
    );
    assert_eq!(convert_to_embed_url("https://youtu.be/short"), "https://youtu.be/short");
    assert_eq!(convert_to_embed_url(""), "");

    assert_eq!(extract_video_id("https://youtu.be/qiJ_2-8Tf7w"), Some("qiJ_2-8Tf7w"));
}

#[test]
fn test_add_prepends_with_unique_ids_and_persists() {
    let mut shop = Shop::open(MemoryStore::new());
    let before = shop.damages.len();

    let first = shop
        .add_damage(new_damage("A", "Layar", "x"))
        .unwrap()
        .id
        .clone();
    let second = shop
        .add_damage(new_damage("B", "Layar", "y"))
        .unwrap()
        .id
        .clone();

    assert_ne!(first, second);
    assert!(first.starts_with("dmg") && second.starts_with("dmg"));
    assert_eq!(shop.damages.len(), before + 2);
    assert_eq!(shop.damages.list()[0].id, second);
    assert_eq!(shop.damages.list()[1].id, first);

    let ids: HashSet<&str> = shop.damages.list().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), shop.damages.len());

    let stored: Vec<Damage> = load_json(&shop.store, KEY_DAMAGES).unwrap();
    assert_eq!(stored.as_slice(), shop.damages.list());
}

#[test]
fn test_add_notifies_listeners() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);

    let mut shop = Shop::open(MemoryStore::new());
    shop.damages.subscribe(move |c| {
        assert_eq!(c, Change::Damages);
        counter.set(counter.get() + 1);
    });

    shop.add_damage(new_damage("A", "Audio", "")).unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_categories_in_first_seen_order() {
    let shop = Shop::open(MemoryStore::new());
    assert_eq!(
        shop.categories(),
        vec![CATEGORY_ALL, "Layar", "Baterai", "Komponen", "Audio"]
    );
    assert_eq!(categories_of(&[]), vec![CATEGORY_ALL]);
}

#[test]
fn test_search_is_case_insensitive_on_name_or_category() {
    let shop = Shop::open(MemoryStore::new());

    for term in ["layar", "LAYAR", "LaYaR"] {
        let found = shop.search_damages(term, CATEGORY_ALL);
        let ids: Vec<&str> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["dmg001"], "term {term}");
    }

    // matches on category text too
    let komponen = shop.search_damages("komp", CATEGORY_ALL);
    assert_eq!(komponen.len(), 2);

    // empty search matches everything
    assert_eq!(shop.search_damages("", CATEGORY_ALL).len(), 5);
}

#[test]
fn test_category_filter_combines_with_search() {
    let damages = repairdesk::core::seed::damages();

    let in_komponen = filter_damages(&damages, "", "Komponen");
    assert_eq!(in_komponen.len(), 2);

    let power = filter_damages(&damages, "power", "Komponen");
    assert_eq!(power.len(), 1);
    assert_eq!(power[0].id, "dmg004");

    assert!(filter_damages(&damages, "power", "Audio").is_empty());
    // category match is exact, not case-folded
    assert!(filter_damages(&damages, "", "komponen").is_empty());
}

#[test]
fn test_form_helpers() {
    assert_eq!(
        parse_steps("Buka casing\n\n  \nGanti baterai\r\nTes"),
        vec!["Buka casing", "Ganti baterai", "Tes"]
    );
    assert_eq!(parse_cost("150000"), 150000.0);
    assert_eq!(parse_cost(" 99.5 "), 99.5);
    assert_eq!(parse_cost("abc"), 0.0);
    assert_eq!(parse_cost("NaN"), 0.0);
    assert_eq!(parse_cost(""), 0.0);
}

#[test]
fn test_parse_cost_keeps_leading_number() {
    assert_eq!(parse_cost("150000abc"), 150000.0);
    assert_eq!(parse_cost("  12.5rb"), 12.5);
    assert_eq!(parse_cost("-250"), -250.0);
    assert_eq!(parse_cost(".5"), 0.5);
    assert_eq!(parse_cost("7."), 7.0);
    assert_eq!(parse_cost("1e3 rupiah"), 1000.0);
    assert_eq!(parse_cost("2e"), 2.0);
    assert_eq!(parse_cost("Rp 5000"), 0.0);
    assert_eq!(parse_cost("1e999"), 0.0);
}
