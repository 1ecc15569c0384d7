use super::avatar::{Avatar, AvatarKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvatarCollection {
    pub avatars: Vec<Avatar>,
    pub initialized: bool,
    pub loading: bool,
    /// Set when a selection changed the server-side list while a load was in flight.
    pub stale: bool,
}

impl AvatarCollection {
    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }

    fn find(&self, pk: u64) -> Option<&Avatar> {
        self.avatars.iter().find(|a| a.pk == pk)
    }

    fn clear_active(&mut self) {
        for avatar in self.avatars.iter_mut() {
            avatar.active = false;
        }
    }
}

/// What happened to a selection once the server answered.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    Changed(Avatar),
    Rejected,
    /// Accepted, but the avatar is no longer in the list it was clicked in.
    Missing,
}

/// Everything the picker knows about the page: both avatar lists, the visible tab and
/// whether a selection request is pending.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarCatalog {
    pub mine: AvatarCollection,
    pub preset: AvatarCollection,
    pub active_tab: AvatarKind,
    pub selecting: Option<u64>,
}

impl AvatarCatalog {
    pub fn new(active_tab: AvatarKind) -> Self {
        Self {
            mine: AvatarCollection::default(),
            preset: AvatarCollection::default(),
            active_tab,
            selecting: None,
        }
    }

    pub fn collection(&self, kind: AvatarKind) -> &AvatarCollection {
        match kind {
            AvatarKind::Mine => &self.mine,
            AvatarKind::Preset => &self.preset,
        }
    }

    fn collection_mut(&mut self, kind: AvatarKind) -> &mut AvatarCollection {
        match kind {
            AvatarKind::Mine => &mut self.mine,
            AvatarKind::Preset => &mut self.preset,
        }
    }

    pub fn needs_load(&self, kind: AvatarKind) -> bool {
        let collection = self.collection(kind);
        !collection.initialized && !collection.loading
    }

    pub fn begin_load(&mut self, kind: AvatarKind) -> bool {
        if !self.needs_load(kind) {
            return false;
        }
        let collection = self.collection_mut(kind);
        collection.loading = true;
        collection.stale = false;
        true
    }

    /// Stores a loaded list. Returns false when the list went stale during the load: it is
    /// kept for display with no active tile, and the collection stays uninitialized.
    pub fn finish_load(&mut self, kind: AvatarKind, avatars: Vec<Avatar>) -> bool {
        let collection = self.collection_mut(kind);
        let fresh = !collection.stale;
        collection.avatars = avatars;
        collection.loading = false;
        collection.stale = false;
        collection.initialized = fresh;
        if !fresh {
            collection.clear_active();
        }
        fresh
    }

    /// Leaves the collection uninitialized so the next tab activation retries.
    pub fn fail_load(&mut self, kind: AvatarKind) {
        let collection = self.collection_mut(kind);
        collection.loading = false;
        collection.stale = false;
    }

    pub fn is_active(&self, kind: AvatarKind, pk: u64) -> bool {
        self.collection(kind)
            .find(pk)
            .map(|a| a.active)
            .unwrap_or(false)
    }

    /// Decides whether a click on a tile sends a request. Own avatars that are already active
    /// are ignored; presets always post. Only one selection may be in flight.
    pub fn begin_selection(&mut self, kind: AvatarKind, pk: u64) -> bool {
        if self.selecting.is_some() {
            return false;
        }
        if kind == AvatarKind::Mine && self.is_active(kind, pk) {
            return false;
        }
        self.selecting = Some(pk);
        true
    }

    pub fn finish_selection(
        &mut self,
        kind: AvatarKind,
        pk: u64,
        accepted: bool,
    ) -> SelectionOutcome {
        self.selecting = None;
        if !accepted {
            return SelectionOutcome::Rejected;
        }
        let changed = match kind {
            AvatarKind::Mine => self.activate_mine(pk),
            AvatarKind::Preset => self.adopt_preset(pk),
        };
        changed
            .map(SelectionOutcome::Changed)
            .unwrap_or(SelectionOutcome::Missing)
    }

    pub fn activate_mine(&mut self, pk: u64) -> Option<Avatar> {
        self.mine.find(pk)?;
        self.mine.clear_active();
        self.preset.clear_active();
        let avatar = self.mine.avatars.iter_mut().find(|a| a.pk == pk)?;
        avatar.active = true;
        Some(avatar.clone())
    }

    /// Applies an accepted preset selection. The server stores a copy of the preset under a
    /// new pk: the copy is shown active on top of "mine", the preset tile itself stays
    /// unhighlighted, and "mine" is re-fetched on its next tab activation.
    pub fn adopt_preset(&mut self, pk: u64) -> Option<Avatar> {
        let mut adopted = self.preset.find(pk)?.clone();
        adopted.active = true;
        self.mine.clear_active();
        self.preset.clear_active();

        if self.mine.loading {
            self.mine.stale = true;
        } else if self.mine.initialized {
            self.mine.avatars.insert(0, adopted.clone());
            self.mine.initialized = false;
        }
        Some(adopted)
    }
}
