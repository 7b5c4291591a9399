use crate::core::embed::convert_to_embed_url;
use crate::core::ids::fresh_token;
use crate::core::notify::{Change, Notifier};
use crate::core::seed;
use crate::errors::AppResult;
use crate::models::{Damage, NewDamage};
use crate::store::{KEY_DAMAGES, KeyValueStore, load_json, save_json};

/// The repair-guide catalog, newest first.
#[derive(Debug, Default)]
pub struct DamageRepository {
    items: Vec<Damage>,
    notifier: Notifier,
}

impl DamageRepository {
    /// Persisted catalog, or the built-in guides when none is stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let items = load_json::<Vec<Damage>>(store, KEY_DAMAGES).unwrap_or_else(seed::damages);
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Damage>) -> Self {
        Self {
            items,
            notifier: Notifier::default(),
        }
    }

    pub fn list(&self) -> &[Damage] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Damage> {
        self.items.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a new guide with a fresh id and an embeddable video URL.
    pub fn add(&mut self, store: &mut dyn KeyValueStore, new: NewDamage) -> AppResult<&Damage> {
        let id = fresh_token("dmg", |candidate| self.get(candidate).is_some());

        let damage = Damage {
            id,
            name: new.name,
            category: new.category,
            description: new.description,
            video_embed_url: convert_to_embed_url(&new.video_url),
            steps: new.steps,
            estimated_cost: new.estimated_cost,
        };

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(damage);
        next.extend(self.items.iter().cloned());

        save_json(store, KEY_DAMAGES, &next)?;
        store.audit("add", "damages", &format!("{} ({})", next[0].name, next[0].id));

        self.items = next;
        self.notifier.emit(Change::Damages);
        Ok(&self.items[0])
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + 'static,
    {
        self.notifier.subscribe(listener);
    }
}
