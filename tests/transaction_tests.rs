use chrono::NaiveDate;
use repairdesk::core::Shop;
use repairdesk::core::notify::Change;
use repairdesk::core::transactions::{UNKNOWN_DAMAGE, resolve_damage_name};
use repairdesk::models::{NewDamage, NewTransaction, Transaction, TransactionStatus};
use repairdesk::store::{KEY_TRANSACTIONS, MemoryStore, load_json};
use std::cell::RefCell;
use std::rc::Rc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(damage_id: &str) -> NewTransaction {
    NewTransaction {
        customer_name: "Dewi Kartika".to_string(),
        customer_phone: "085678901234".to_string(),
        damage_id: damage_id.to_string(),
        entry_date: date(2024, 3, 5),
        pickup_date: None,
    }
}

#[test]
fn test_add_snapshots_cost_and_starts_pending() {
    let mut shop = Shop::open(MemoryStore::new());
    let before = shop.transactions.len();

    let tx = shop.add_transaction(order("dmg002")).unwrap().unwrap().clone();

    assert!(tx.id.starts_with("trx"));
    assert_eq!(tx.cost, 450000.0);
    assert_eq!(tx.status, TransactionStatus::Pending);
    assert_eq!(tx.entry_date, date(2024, 3, 5));
    assert_eq!(tx.pickup_date, None);
    assert_eq!(shop.transactions.len(), before + 1);
    assert_eq!(shop.transactions.list()[0], tx);

    let stored: Vec<Transaction> = load_json(&shop.store, KEY_TRANSACTIONS).unwrap();
    assert_eq!(stored.as_slice(), shop.transactions.list());
}

#[test]
fn test_add_with_dangling_damage_is_a_silent_no_op() {
    let mut shop = Shop::open(MemoryStore::new());
    let before = shop.transactions.list().to_vec();

    let added = shop.add_transaction(order("dmg-missing")).unwrap();
    assert!(added.is_none());

    assert_eq!(shop.transactions.list(), before.as_slice());
    assert!(load_json::<Vec<Transaction>>(&shop.store, KEY_TRANSACTIONS).is_none());
}

#[test]
fn test_cost_is_not_affected_by_later_catalog_prices() {
    let mut shop = Shop::open(MemoryStore::new());
    let damage_id = shop
        .add_damage(NewDamage {
            name: "Layar OLED".into(),
            category: "Layar".into(),
            estimated_cost: 1200000.0,
            ..Default::default()
        })
        .unwrap()
        .id
        .clone();

    let tx_id = shop.add_transaction(order(&damage_id)).unwrap().unwrap().id.clone();

    // a later process sees a repriced catalog entry
    let mut repriced = shop.damages.list().to_vec();
    repriced[0].estimated_cost = 1500000.0;
    let shop = Shop {
        damages: repairdesk::core::damages::DamageRepository::from_items(repriced),
        ..shop
    };

    assert_eq!(shop.transactions.get(&tx_id).unwrap().cost, 1200000.0);
    assert_eq!(shop.report().total_revenue, 1550000.0 + 1200000.0);
}

#[test]
fn test_status_and_pickup_updates_in_place() {
    let mut shop = Shop::open(MemoryStore::new());

    assert!(shop.set_status("trx003", TransactionStatus::Completed).unwrap());
    assert!(shop.set_pickup_date("trx003", Some(date(2023, 10, 9))).unwrap());

    let tx = shop.transactions.get("trx003").unwrap();
    assert_eq!(tx.status, TransactionStatus::Completed);
    assert_eq!(tx.pickup_date, Some(date(2023, 10, 9)));
    assert_eq!(tx.cost, 250000.0);
    assert_eq!(tx.customer_name, "Citra Lestari");

    // clearing the pickup date
    assert!(shop.set_pickup_date("trx001", None).unwrap());
    assert_eq!(shop.transactions.get("trx001").unwrap().pickup_date, None);

    // order is untouched
    let ids: Vec<&str> = shop.transactions.list().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["trx001", "trx002", "trx003"]);

    let restored = Shop::open(shop.store);
    assert_eq!(
        restored.transactions.get("trx003").unwrap().status,
        TransactionStatus::Completed
    );
}

#[test]
fn test_updates_on_unknown_id_change_nothing() {
    let seen = Rc::new(RefCell::new(Vec::<Change>::new()));
    let sink = Rc::clone(&seen);

    let mut shop = Shop::open(MemoryStore::new());
    shop.transactions.subscribe(move |c| sink.borrow_mut().push(c));
    let before = shop.transactions.list().to_vec();

    assert!(!shop.set_status("trx999", TransactionStatus::PickedUp).unwrap());
    assert!(!shop.set_pickup_date("trx999", Some(date(2024, 1, 1))).unwrap());

    assert_eq!(shop.transactions.list(), before.as_slice());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_damage_name_falls_back_to_unknown() {
    let shop = Shop::open(MemoryStore::new());
    assert_eq!(shop.damage_name("dmg001"), "Layar LCD Retak");
    assert_eq!(shop.damage_name("gone"), UNKNOWN_DAMAGE);
    assert_eq!(resolve_damage_name("dmg001", &[]), "Unknown");
}

#[test]
fn test_status_codes() {
    assert_eq!(
        TransactionStatus::from_code("picked-up"),
        Some(TransactionStatus::PickedUp)
    );
    assert_eq!(
        TransactionStatus::from_code("PICKED_UP"),
        Some(TransactionStatus::PickedUp)
    );
    assert_eq!(
        TransactionStatus::from_code("Selesai"),
        Some(TransactionStatus::Completed)
    );
    assert_eq!(
        TransactionStatus::from_code("dalam perbaikan"),
        Some(TransactionStatus::Pending)
    );
    assert_eq!(TransactionStatus::from_code("lost"), None);

    for st in TransactionStatus::ALL {
        assert_eq!(TransactionStatus::from_code(st.code()), Some(st));
        assert_eq!(TransactionStatus::from_code(st.label()), Some(st));
    }
}

#[test]
fn test_back_to_back_orders_get_distinct_ids() {
    let mut shop = Shop::open(MemoryStore::new());
    let a = shop.add_transaction(order("dmg001")).unwrap().unwrap().id.clone();
    let b = shop.add_transaction(order("dmg001")).unwrap().unwrap().id.clone();

    assert_ne!(a, b);
    assert_eq!(shop.transactions.list()[0].id, b);
    assert_eq!(shop.transactions.list()[1].id, a);
}
