use repairdesk::core::Shop;
use repairdesk::core::notify::Change;
use repairdesk::models::Expense;
use repairdesk::store::{KEY_EXPENSES, KeyValueStore, MemoryStore, load_json};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_seed_expenses() {
    let shop = Shop::open(MemoryStore::new());
    let list = shop.expenses.list();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0], Expense::new(1, "Sewa Ruko Bulan Ini", 2000000.0));
    assert_eq!(list[1], Expense::new(2, "Pembelian Stok Sparepart", 3500000.0));
}

#[test]
fn test_add_appends_and_persists() {
    let mut shop = Shop::open(MemoryStore::new());

    let added = shop
        .add_expense("Listrik", 350000.0)
        .unwrap()
        .unwrap()
        .clone();

    assert_eq!(added.description, "Listrik");
    assert_eq!(added.amount, 350000.0);
    assert!(added.id > 2);
    assert_eq!(shop.expenses.len(), 3);
    assert_eq!(shop.expenses.list().last(), Some(&added));

    let stored: Vec<Expense> = load_json(&shop.store, KEY_EXPENSES).unwrap();
    assert_eq!(stored.as_slice(), shop.expenses.list());
}

#[test]
fn test_invalid_input_is_ignored() {
    let seen = Rc::new(RefCell::new(Vec::<Change>::new()));
    let sink = Rc::clone(&seen);

    let mut shop = Shop::open(MemoryStore::new());
    shop.expenses.subscribe(move |c| sink.borrow_mut().push(c));

    assert!(shop.add_expense("", 100000.0).unwrap().is_none());
    assert!(shop.add_expense("Air", 0.0).unwrap().is_none());
    assert!(shop.add_expense("Air", -5000.0).unwrap().is_none());
    assert!(shop.add_expense("Air", f64::NAN).unwrap().is_none());
    assert!(shop.add_expense("Air", f64::INFINITY).unwrap().is_none());

    assert_eq!(shop.expenses.len(), 2);
    assert!(!shop.store.contains(KEY_EXPENSES));
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_ids_keep_increasing() {
    let mut shop = Shop::open(MemoryStore::new());
    let a = shop.add_expense("Air", 100000.0).unwrap().unwrap().id;
    let b = shop.add_expense("Internet", 300000.0).unwrap().unwrap().id;
    assert!(b > a);
}

#[test]
fn test_remove_by_id() {
    let mut shop = Shop::open(MemoryStore::new());

    assert!(shop.remove_expense(1).unwrap());
    let ids: Vec<i64> = shop.expenses.list().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);

    let restored = Shop::open(shop.store);
    assert_eq!(restored.expenses.len(), 1);
    assert_eq!(restored.expenses.list()[0].description, "Pembelian Stok Sparepart");
}

#[test]
fn test_remove_unknown_id_changes_nothing() {
    let mut shop = Shop::open(MemoryStore::new());
    let before = shop.expenses.list().to_vec();

    assert!(!shop.remove_expense(42).unwrap());
    assert_eq!(shop.expenses.list(), before.as_slice());
    assert!(!shop.store.contains(KEY_EXPENSES));
}

#[test]
fn test_removing_every_expense_persists_an_empty_list() {
    let mut shop = Shop::open(MemoryStore::new());
    shop.remove_expense(1).unwrap();
    shop.remove_expense(2).unwrap();
    assert!(shop.expenses.is_empty());

    let restored = Shop::open(shop.store);
    assert!(restored.expenses.is_empty());
}

#[test]
fn test_add_after_largest_possible_id() {
    let mut store = MemoryStore::new();
    store
        .set_raw(
            KEY_EXPENSES,
            r#"[{"id":9223372036854775807,"description":"x","amount":1},{"id":1,"description":"y","amount":2}]"#,
        )
        .unwrap();

    let mut shop = Shop::open(store);
    assert_eq!(shop.expenses.len(), 2);

    let added = shop.add_expense("Listrik", 1000.0).unwrap().unwrap().clone();
    assert_eq!(added.id, 2);

    let next = shop.add_expense("Air", 500.0).unwrap().unwrap().id;
    assert_eq!(next, 3);

    let ids: Vec<i64> = shop.expenses.list().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![i64::MAX, 1, 2, 3]);
}
