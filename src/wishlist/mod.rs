use tracing::warn;

use crate::api::wishlist::WishlistClient;
use crate::error::Result;
use crate::models::WishlistEntry;

/// Local wishlist with optimistic updates that reconcile.
///
/// A toggle flips the local list immediately so the UI never waits on the
/// round-trip, but keeps the pre-change snapshot; if the backend call
/// fails, the snapshot is restored and the error surfaced. Local and
/// server state therefore never silently diverge.
#[derive(Debug, Default)]
pub struct WishlistState {
    entries: Vec<WishlistEntry>,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hydrate(entries: Vec<WishlistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn contains(&self, entry: &WishlistEntry) -> bool {
        self.entries.iter().any(|e| e.same_item(entry))
    }

    fn flip(&mut self, entry: &WishlistEntry) {
        if let Some(pos) = self.entries.iter().position(|e| e.same_item(entry)) {
            self.entries.remove(pos);
        } else {
            self.entries.push(entry.clone());
        }
    }

    /// Optimistically add/remove the entry, then confirm with the backend.
    /// On failure the optimistic change is rolled back before the error
    /// is returned.
    pub async fn toggle(
        &mut self,
        client: &WishlistClient,
        token: &str,
        entry: &WishlistEntry,
    ) -> Result<()> {
        let snapshot = self.entries.clone();
        self.flip(entry);

        match client.toggle(token, entry).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("wishlist toggle for {} failed, rolling back: {}", entry.id, e);
                self.entries = snapshot;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingKind;

    fn entry(id: i64) -> WishlistEntry {
        WishlistEntry {
            id,
            kind: BookingKind::Movie,
            title: format!("Movie {}", id),
            genre: Some("Drama".to_string()),
            poster_url: None,
        }
    }

    #[test]
    fn flip_adds_then_removes() {
        let mut state = WishlistState::new();
        state.flip(&entry(1));
        assert!(state.contains(&entry(1)));
        state.flip(&entry(1));
        assert!(!state.contains(&entry(1)));
    }

    #[test]
    fn same_item_ignores_metadata_differences() {
        let mut state = WishlistState::hydrate(vec![entry(1)]);
        let mut renamed = entry(1);
        renamed.title = "Director's Cut".to_string();
        state.flip(&renamed);
        assert!(state.entries().is_empty());
    }
}
