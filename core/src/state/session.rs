use hashbrown::HashMap;
use wisps_types::Category;

use crate::world::EntityId;

/// Pure storage for the tracked entities of one area.
/// Lifecycle logic lives in `WispTracker`.
///
/// An entity id appears in at most one category list. Encounters are
/// tracked independently of the category lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Category lists, indexed by `Category::index`, in insertion order
    categories: [Vec<EntityId>; Category::COUNT],
    /// Named encounters and their display labels
    encounters: HashMap<EntityId, String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    pub fn entities(&self, category: Category) -> &[EntityId] {
        &self.categories[category.index()]
    }

    pub fn encounters(&self) -> &HashMap<EntityId, String> {
        &self.encounters
    }

    pub fn encounter_label(&self, id: EntityId) -> Option<&str> {
        self.encounters.get(&id).map(String::as_str)
    }

    pub fn contains(&self, category: Category, id: EntityId) -> bool {
        self.entities(category).contains(&id)
    }

    /// The category list currently holding `id`, if any
    pub fn category_of(&self, id: EntityId) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&category| self.contains(category, id))
    }

    /// Number of ids in category lists plus encounters
    pub fn total_tracked(&self) -> usize {
        self.categories.iter().map(Vec::len).sum::<usize>() + self.encounters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_tracked() == 0
    }

    /// Per-category list lengths in `Category::ALL` order
    pub fn counts(&self) -> [(Category, usize); Category::COUNT] {
        Category::ALL.map(|category| (category, self.entities(category).len()))
    }

    // --- Mutation ---

    /// Append `id` to a category list.
    ///
    /// Returns false (and changes nothing) if `id` is already in any list.
    pub fn insert(&mut self, category: Category, id: EntityId) -> bool {
        if self.category_of(id).is_some() {
            return false;
        }
        self.categories[category.index()].push(id);
        true
    }

    /// Track a named encounter. An id that is already tracked keeps its label.
    pub fn insert_encounter(&mut self, id: EntityId, label: impl Into<String>) -> bool {
        if self.encounters.contains_key(&id) {
            return false;
        }
        self.encounters.insert(id, label.into());
        true
    }

    /// Remove `id` from one category list, keeping the order of the rest
    pub fn remove(&mut self, category: Category, id: EntityId) -> bool {
        let list = &mut self.categories[category.index()];
        match list.iter().position(|&tracked| tracked == id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_encounter(&mut self, id: EntityId) -> Option<String> {
        self.encounters.remove(&id)
    }

    /// Remove every id of `category` for which `evict` returns true.
    ///
    /// Returns the removed ids in list order.
    pub fn evict_where(
        &mut self,
        category: Category,
        mut evict: impl FnMut(EntityId) -> bool,
    ) -> Vec<EntityId> {
        let to_remove: Vec<EntityId> = self
            .entities(category)
            .iter()
            .copied()
            .filter(|&id| evict(id))
            .collect();

        for &id in &to_remove {
            self.remove(category, id);
        }
        to_remove
    }
}
