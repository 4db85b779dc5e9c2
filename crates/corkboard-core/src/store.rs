//! The board store: single source of truth for the document.
//!
//! Every mutation flows through [`BoardStore`], which keeps the one
//! in-memory copy of the [`Document`], persists it after each operation, and
//! enforces the ownership invariants (cascading deletes, atomic card moves,
//! monotonic id allocation). Readers always see the latest state -- there is
//! no caching layer.

use crate::document::{Board, Card, Document, List};
use crate::ids::{BoardId, CardId, ListId};

/// Persistence adapter for the whole document.
///
/// The store calls `load` once when opened and `save` after every mutating
/// operation. Implementations live outside this crate (see
/// `corkboard-storage`); the store depends only on this trait so that
/// alternative backends can be substituted in tests.
pub trait DocumentStore {
    type Error: std::error::Error;

    /// Returns the previously saved document, or `None` when no valid
    /// document exists. A structurally invalid stored value is reported as
    /// `None`, not as an error.
    fn load(&self) -> Result<Option<Document>, Self::Error>;

    /// Persists the document as one unit.
    fn save(&self, doc: &Document) -> Result<(), Self::Error>;
}

/// Result kind of a mutating operation.
///
/// References to entities that no longer exist are a silent no-op by
/// contract (stale UI state is expected), but callers and tests can still
/// tell the cases apart through this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum OpStatus {
    /// The document was mutated and persisted.
    Applied,
    /// A referenced board, list, or card does not exist; nothing changed.
    NotFound,
    /// The input was rejected (empty name or title); nothing changed.
    Rejected,
}

impl OpStatus {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Typed partial update for a card. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Owns the document and exposes the mutation operations.
///
/// Each operation mutates in memory, persists synchronously, and returns the
/// affected entity (creates) or an [`OpStatus`]. A failed save is logged and
/// does not roll back the in-memory mutation; in-memory and persisted state
/// may diverge until the next successful save.
pub struct BoardStore<S: DocumentStore> {
    doc: Document,
    storage: S,
}

impl<S: DocumentStore> BoardStore<S> {
    /// Loads the persisted document, falling back to an empty one when no
    /// prior data exists or the stored value fails validation.
    pub fn open(storage: S) -> Self {
        let doc = match storage.load() {
            Ok(Some(doc)) => doc,
            Ok(None) => Document::default(),
            Err(e) => {
                tracing::warn!("failed to load document, starting empty: {e}");
                Document::default()
            }
        };
        Self { doc, storage }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.doc.board(id)
    }

    /// Replaces the whole document (snapshot import) and persists it.
    pub fn replace_document(&mut self, doc: Document) {
        self.doc = doc;
        self.persist();
    }

    // -- Boards --------------------------------------------------------------

    /// Appends a new board with no lists. Returns `None` (and does not
    /// allocate an id) when the name trims to empty.
    pub fn create_board(&mut self, name: &str) -> Option<&Board> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.doc.allocate_board_id();
        self.doc.boards.push(Board::new(id, name));
        self.persist();
        self.doc.boards.last()
    }

    pub fn rename_board(&mut self, id: BoardId, name: &str) -> OpStatus {
        let name = name.trim();
        if name.is_empty() {
            return OpStatus::Rejected;
        }
        let Some(board) = self.doc.board_mut(id) else {
            return OpStatus::NotFound;
        };
        board.name = name.to_owned();
        self.persist();
        OpStatus::Applied
    }

    /// Removes a board and everything nested under it.
    pub fn delete_board(&mut self, id: BoardId) -> OpStatus {
        let Some(index) = self.doc.boards.iter().position(|b| b.id == id) else {
            return OpStatus::NotFound;
        };
        self.doc.boards.remove(index);
        self.persist();
        OpStatus::Applied
    }

    // -- Lists ---------------------------------------------------------------

    /// Appends a new list to a board. Returns `None` when the board does not
    /// exist or the name trims to empty; no id is allocated in either case.
    pub fn create_list(&mut self, board_id: BoardId, name: &str) -> Option<&List> {
        let name = name.trim();
        if name.is_empty() || self.doc.board(board_id).is_none() {
            return None;
        }
        let id = self.doc.allocate_list_id();
        let board = self.doc.board_mut(board_id)?;
        board.lists.push(List::new(id, name));
        self.persist();
        self.doc.board(board_id).and_then(|b| b.lists.last())
    }

    pub fn rename_list(&mut self, board_id: BoardId, list_id: ListId, name: &str) -> OpStatus {
        let name = name.trim();
        if name.is_empty() {
            return OpStatus::Rejected;
        }
        let Some(list) = self
            .doc
            .board_mut(board_id)
            .and_then(|b| b.list_mut(list_id))
        else {
            return OpStatus::NotFound;
        };
        list.name = name.to_owned();
        self.persist();
        OpStatus::Applied
    }

    /// Removes a list and all its cards.
    pub fn delete_list(&mut self, board_id: BoardId, list_id: ListId) -> OpStatus {
        let Some(board) = self.doc.board_mut(board_id) else {
            return OpStatus::NotFound;
        };
        let Some(index) = board.lists.iter().position(|l| l.id == list_id) else {
            return OpStatus::NotFound;
        };
        board.lists.remove(index);
        self.persist();
        OpStatus::Applied
    }

    // -- Cards ---------------------------------------------------------------

    /// Appends a new card to a list. The description defaults to empty and
    /// is trimmed. Returns `None` when the board or list does not exist or
    /// the title trims to empty.
    pub fn create_card(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        title: &str,
        description: &str,
    ) -> Option<&Card> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return None;
        }
        self.doc.board(board_id)?.list(list_id)?;
        let id = self.doc.allocate_card_id();
        let list = self.doc.board_mut(board_id)?.list_mut(list_id)?;
        list.cards.push(Card::new(id, title, description));
        self.persist();
        self.doc
            .board(board_id)
            .and_then(|b| b.list(list_id))
            .and_then(|l| l.cards.last())
    }

    /// Applies a partial update to a card. `id` and `created_at` never
    /// change.
    pub fn update_card(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        card_id: CardId,
        update: &CardUpdate,
    ) -> OpStatus {
        if let Some(title) = update.title.as_deref() {
            if title.trim().is_empty() {
                return OpStatus::Rejected;
            }
        }
        let Some(card) = self
            .doc
            .board_mut(board_id)
            .and_then(|b| b.list_mut(list_id))
            .and_then(|l| l.cards.iter_mut().find(|c| c.id == card_id))
        else {
            return OpStatus::NotFound;
        };
        if let Some(title) = update.title.as_deref() {
            card.title = title.trim().to_owned();
        }
        if let Some(description) = update.description.as_deref() {
            card.description = description.trim().to_owned();
        }
        self.persist();
        OpStatus::Applied
    }

    pub fn delete_card(&mut self, board_id: BoardId, list_id: ListId, card_id: CardId) -> OpStatus {
        let Some(list) = self
            .doc
            .board_mut(board_id)
            .and_then(|b| b.list_mut(list_id))
        else {
            return OpStatus::NotFound;
        };
        let Some(index) = list.cards.iter().position(|c| c.id == card_id) else {
            return OpStatus::NotFound;
        };
        list.cards.remove(index);
        self.persist();
        OpStatus::Applied
    }

    /// Relocates a card between two list positions, possibly within the same
    /// list.
    ///
    /// The card is removed from the source list first; the insertion index
    /// in the target list is resolved *after* the removal, so a same-list
    /// move accounts for the shift. When `before` is given and found in the
    /// target list the card lands immediately before it; otherwise (absent,
    /// unknown, or naming the moved card itself) the card is appended. The
    /// card value moves unchanged -- never duplicated, never dropped.
    pub fn move_card(
        &mut self,
        board_id: BoardId,
        source_list_id: ListId,
        target_list_id: ListId,
        card_id: CardId,
        before: Option<CardId>,
    ) -> OpStatus {
        let Some(board) = self.doc.board_mut(board_id) else {
            return OpStatus::NotFound;
        };
        let Some(source_index) = board.lists.iter().position(|l| l.id == source_list_id) else {
            return OpStatus::NotFound;
        };
        let Some(target_index) = board.lists.iter().position(|l| l.id == target_list_id) else {
            return OpStatus::NotFound;
        };
        let Some(card_index) = board.lists[source_index]
            .cards
            .iter()
            .position(|c| c.id == card_id)
        else {
            return OpStatus::NotFound;
        };

        let card = board.lists[source_index].cards.remove(card_index);

        let target = &mut board.lists[target_index];
        let insert_at = before
            .and_then(|b| target.cards.iter().position(|c| c.id == b))
            .unwrap_or(target.cards.len());
        target.cards.insert(insert_at, card);

        self.persist();
        OpStatus::Applied
    }

    // -- Persistence ---------------------------------------------------------

    /// Best-effort synchronous save. A failure is reported to the log only;
    /// the in-memory mutation stands.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.doc) {
            tracing::warn!("failed to persist document: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Accepts every save and counts them.
    #[derive(Default)]
    struct CountingStore {
        saves: Rc<Cell<usize>>,
    }

    impl DocumentStore for CountingStore {
        type Error = std::convert::Infallible;

        fn load(&self) -> Result<Option<Document>, Self::Error> {
            Ok(None)
        }

        fn save(&self, _doc: &Document) -> Result<(), Self::Error> {
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("disk full")]
    struct DiskFull;

    /// Fails every save, simulating a quota/IO failure.
    struct FailingStore;

    impl DocumentStore for FailingStore {
        type Error = DiskFull;

        fn load(&self) -> Result<Option<Document>, Self::Error> {
            Ok(None)
        }

        fn save(&self, _doc: &Document) -> Result<(), Self::Error> {
            Err(DiskFull)
        }
    }

    fn store() -> BoardStore<CountingStore> {
        BoardStore::open(CountingStore::default())
    }

    /// Builds board "Work" with lists "To Do" and "Done" and three cards in
    /// "To Do".
    fn populated() -> (BoardStore<CountingStore>, BoardId, ListId, ListId) {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        let todo = s.create_list(board, "To Do").unwrap().id;
        let done = s.create_list(board, "Done").unwrap().id;
        s.create_card(board, todo, "one", "").unwrap();
        s.create_card(board, todo, "two", "").unwrap();
        s.create_card(board, todo, "three", "").unwrap();
        (s, board, todo, done)
    }

    fn titles(store: &BoardStore<CountingStore>, board: BoardId, list: ListId) -> Vec<String> {
        store
            .board(board)
            .unwrap()
            .list(list)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    // -- Creation and id allocation ------------------------------------------

    #[test]
    fn create_board_assigns_sequential_ids() {
        let mut s = store();
        assert_eq!(s.create_board("A").unwrap().id, BoardId(1));
        assert_eq!(s.create_board("B").unwrap().id, BoardId(2));
    }

    #[test]
    fn create_board_trims_name() {
        let mut s = store();
        assert_eq!(s.create_board("  Work  ").unwrap().name, "Work");
    }

    #[test]
    fn create_board_with_empty_name_is_noop() {
        let mut s = store();
        assert!(s.create_board("   ").is_none());
        assert!(s.document().boards.is_empty());
        // No id was burned.
        assert_eq!(s.create_board("A").unwrap().id, BoardId(1));
    }

    #[test]
    fn ids_stay_unique_across_deletes() {
        let mut s = store();
        let a = s.create_board("A").unwrap().id;
        assert_eq!(s.delete_board(a), OpStatus::Applied);
        let b = s.create_board("B").unwrap().id;
        assert_ne!(a, b);
        assert_eq!(b, BoardId(2));
    }

    #[test]
    fn list_and_card_ids_are_document_wide() {
        let mut s = store();
        let b1 = s.create_board("One").unwrap().id;
        let b2 = s.create_board("Two").unwrap().id;
        let l1 = s.create_list(b1, "A").unwrap().id;
        let l2 = s.create_list(b2, "B").unwrap().id;
        assert_ne!(l1, l2);
        let c1 = s.create_card(b1, l1, "x", "").unwrap().id;
        let c2 = s.create_card(b2, l2, "y", "").unwrap().id;
        assert_ne!(c1, c2);
    }

    #[test]
    fn create_list_on_missing_board_returns_none_without_burning_id() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        assert!(s.create_list(BoardId(99), "Nope").is_none());
        assert_eq!(s.create_list(board, "To Do").unwrap().id, ListId(1));
    }

    #[test]
    fn create_card_defaults_and_trims_description() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        let list = s.create_list(board, "To Do").unwrap().id;
        let card = s.create_card(board, list, "  Title  ", "  desc  ").unwrap();
        assert_eq!(card.title, "Title");
        assert_eq!(card.description, "desc");
    }

    #[test]
    fn create_card_on_missing_list_returns_none() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        assert!(s.create_card(board, ListId(99), "x", "").is_none());
        assert_eq!(s.document().card_count(), 0);
    }

    // -- Rename / update ------------------------------------------------------

    #[test]
    fn rename_board_replaces_trimmed_name() {
        let mut s = store();
        let id = s.create_board("Old").unwrap().id;
        assert_eq!(s.rename_board(id, "  New  "), OpStatus::Applied);
        assert_eq!(s.board(id).unwrap().name, "New");
    }

    #[test]
    fn rename_missing_board_is_silent_noop() {
        let mut s = store();
        assert_eq!(s.rename_board(BoardId(7), "X"), OpStatus::NotFound);
    }

    #[test]
    fn rename_with_empty_name_is_rejected() {
        let mut s = store();
        let id = s.create_board("Keep").unwrap().id;
        assert_eq!(s.rename_board(id, "   "), OpStatus::Rejected);
        assert_eq!(s.board(id).unwrap().name, "Keep");
    }

    #[test]
    fn update_card_applies_only_given_fields() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        let list = s.create_list(board, "To Do").unwrap().id;
        let card = s.create_card(board, list, "Title", "desc").unwrap().id;

        let update = CardUpdate {
            description: Some("new desc".into()),
            ..CardUpdate::default()
        };
        assert_eq!(s.update_card(board, list, card, &update), OpStatus::Applied);
        let card = s.board(board).unwrap().list(list).unwrap().card(card).unwrap();
        assert_eq!(card.title, "Title");
        assert_eq!(card.description, "new desc");
    }

    #[test]
    fn update_card_rejects_empty_title() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        let list = s.create_list(board, "To Do").unwrap().id;
        let card = s.create_card(board, list, "Title", "").unwrap().id;

        let update = CardUpdate {
            title: Some("  ".into()),
            ..CardUpdate::default()
        };
        assert_eq!(s.update_card(board, list, card, &update), OpStatus::Rejected);
    }

    #[test]
    fn update_card_preserves_id_and_created_at() {
        let mut s = store();
        let board = s.create_board("Work").unwrap().id;
        let list = s.create_list(board, "To Do").unwrap().id;
        let created = s.create_card(board, list, "Title", "").unwrap().clone();

        let update = CardUpdate {
            title: Some("Renamed".into()),
            ..CardUpdate::default()
        };
        assert_eq!(s.update_card(board, list, created.id, &update), OpStatus::Applied);
        let card = s
            .board(board)
            .unwrap()
            .list(list)
            .unwrap()
            .card(created.id)
            .unwrap();
        assert_eq!(card.id, created.id);
        assert_eq!(card.created_at, created.created_at);
    }

    // -- Cascade delete -------------------------------------------------------

    #[test]
    fn delete_board_cascades_to_lists_and_cards() {
        let (mut s, board, _, _) = populated();
        assert_eq!(s.delete_board(board), OpStatus::Applied);
        assert!(s.document().boards.is_empty());
        assert_eq!(s.document().card_count(), 0);
        // Counters keep their values.
        assert_eq!(s.document().next_board_id, 2);
        assert_eq!(s.document().next_list_id, 3);
        assert_eq!(s.document().next_card_id, 4);
    }

    #[test]
    fn delete_list_cascades_to_cards() {
        let (mut s, board, todo, _) = populated();
        assert_eq!(s.delete_list(board, todo), OpStatus::Applied);
        assert_eq!(s.document().card_count(), 0);
        // The remaining list keeps its position and identity.
        assert_eq!(s.board(board).unwrap().lists.len(), 1);
    }

    #[test]
    fn delete_missing_entities_is_silent_noop() {
        let (mut s, board, todo, _) = populated();
        assert_eq!(s.delete_board(BoardId(9)), OpStatus::NotFound);
        assert_eq!(s.delete_list(board, ListId(9)), OpStatus::NotFound);
        assert_eq!(s.delete_card(board, todo, CardId(9)), OpStatus::NotFound);
        assert_eq!(s.document().card_count(), 3);
    }

    // -- move_card ------------------------------------------------------------

    #[test]
    fn move_to_other_list_appends_without_before() {
        let (mut s, board, todo, done) = populated();
        let card = s.board(board).unwrap().list(todo).unwrap().cards[0].id;

        assert_eq!(s.move_card(board, todo, done, card, None), OpStatus::Applied);
        assert_eq!(titles(&s, board, todo), vec!["two", "three"]);
        assert_eq!(titles(&s, board, done), vec!["one"]);
        assert_eq!(s.document().card_count(), 3);
    }

    #[test]
    fn move_with_before_inserts_immediately_before_it() {
        let (mut s, board, todo, done) = populated();
        let cards: Vec<CardId> = s
            .board(board)
            .unwrap()
            .list(todo)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id)
            .collect();

        // Seed the target list, then drop a card in front of the seed.
        assert_eq!(s.move_card(board, todo, done, cards[2], None), OpStatus::Applied);
        assert_eq!(
            s.move_card(board, todo, done, cards[0], Some(cards[2])),
            OpStatus::Applied
        );
        assert_eq!(titles(&s, board, done), vec!["one", "three"]);
    }

    #[test]
    fn same_list_reorder_changes_order_only() {
        let (mut s, board, todo, _) = populated();
        let cards: Vec<CardId> = s
            .board(board)
            .unwrap()
            .list(todo)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id)
            .collect();

        // Move "three" before "one".
        assert_eq!(
            s.move_card(board, todo, todo, cards[2], Some(cards[0])),
            OpStatus::Applied
        );
        assert_eq!(titles(&s, board, todo), vec!["three", "one", "two"]);
        assert_eq!(s.board(board).unwrap().list(todo).unwrap().cards.len(), 3);
    }

    #[test]
    fn same_list_move_to_end_accounts_for_removal_shift() {
        let (mut s, board, todo, _) = populated();
        let first = s.board(board).unwrap().list(todo).unwrap().cards[0].id;

        assert_eq!(s.move_card(board, todo, todo, first, None), OpStatus::Applied);
        assert_eq!(titles(&s, board, todo), vec!["two", "three", "one"]);
    }

    #[test]
    fn unknown_before_falls_back_to_append() {
        let (mut s, board, todo, done) = populated();
        let card = s.board(board).unwrap().list(todo).unwrap().cards[0].id;

        assert_eq!(
            s.move_card(board, todo, done, card, Some(CardId(999))),
            OpStatus::Applied
        );
        assert_eq!(titles(&s, board, done), vec!["one"]);
    }

    #[test]
    fn self_referential_before_falls_back_to_append() {
        let (mut s, board, todo, _) = populated();
        let first = s.board(board).unwrap().list(todo).unwrap().cards[0].id;

        // The card was already removed when `before` is resolved, so it
        // cannot match itself; the move must not crash or lose the card.
        assert_eq!(
            s.move_card(board, todo, todo, first, Some(first)),
            OpStatus::Applied
        );
        assert_eq!(titles(&s, board, todo), vec!["two", "three", "one"]);
        assert_eq!(s.document().card_count(), 3);
    }

    #[test]
    fn move_of_missing_card_leaves_document_unchanged() {
        let (mut s, board, todo, done) = populated();
        let snapshot = s.document().clone();

        assert_eq!(
            s.move_card(board, todo, done, CardId(999), None),
            OpStatus::NotFound
        );
        assert_eq!(s.document(), &snapshot);
    }

    #[test]
    fn move_with_missing_list_leaves_card_in_place() {
        let (mut s, board, todo, _) = populated();
        let card = s.board(board).unwrap().list(todo).unwrap().cards[0].id;
        let snapshot = s.document().clone();

        assert_eq!(
            s.move_card(board, todo, ListId(999), card, None),
            OpStatus::NotFound
        );
        assert_eq!(
            s.move_card(board, ListId(999), todo, card, None),
            OpStatus::NotFound
        );
        assert_eq!(s.document(), &snapshot);
    }

    #[test]
    fn move_preserves_total_card_count() {
        let (mut s, board, todo, done) = populated();
        let cards: Vec<CardId> = s
            .board(board)
            .unwrap()
            .list(todo)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id)
            .collect();

        for card in cards {
            assert_eq!(s.move_card(board, todo, done, card, None), OpStatus::Applied);
            assert_eq!(s.document().card_count(), 3);
        }
        assert!(s.board(board).unwrap().list(todo).unwrap().cards.is_empty());
    }

    // -- Persistence behavior -------------------------------------------------

    #[test]
    fn every_mutation_persists_once() {
        let saves = Rc::new(Cell::new(0));
        let mut s = BoardStore::open(CountingStore { saves: saves.clone() });

        let board = s.create_board("Work").unwrap().id;
        assert_eq!(saves.get(), 1);
        let list = s.create_list(board, "To Do").unwrap().id;
        assert_eq!(saves.get(), 2);
        s.create_card(board, list, "x", "").unwrap();
        assert_eq!(saves.get(), 3);
        assert_eq!(s.delete_board(board), OpStatus::Applied);
        assert_eq!(saves.get(), 4);
    }

    #[test]
    fn noops_do_not_persist() {
        let saves = Rc::new(Cell::new(0));
        let mut s = BoardStore::open(CountingStore { saves: saves.clone() });

        assert!(s.create_board("  ").is_none());
        assert_eq!(s.rename_board(BoardId(1), "X"), OpStatus::NotFound);
        assert_eq!(s.delete_board(BoardId(1)), OpStatus::NotFound);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn save_failure_does_not_roll_back_mutation() {
        let mut s = BoardStore::open(FailingStore);
        let board = s.create_board("Work").unwrap().id;
        assert!(s.board(board).is_some());
        let list = s.create_list(board, "To Do").unwrap().id;
        assert!(s.board(board).unwrap().list(list).is_some());
    }

    // -- The worked example from the original system ---------------------------

    #[test]
    fn example_scenario_end_to_end() {
        let mut s = store();

        let board = s.create_board("Work").unwrap().id;
        assert_eq!(board, BoardId(1));
        let todo = s.create_list(board, "To Do").unwrap().id;
        assert_eq!(todo, ListId(1));
        let done = s.create_list(board, "Done").unwrap().id;
        assert_eq!(done, ListId(2));
        let card = s.create_card(board, todo, "Write spec", "").unwrap().id;
        assert_eq!(card, CardId(1));

        assert_eq!(s.move_card(board, todo, done, card, None), OpStatus::Applied);
        assert!(s.board(board).unwrap().list(todo).unwrap().cards.is_empty());
        let done_cards = &s.board(board).unwrap().list(done).unwrap().cards;
        assert_eq!(done_cards.len(), 1);
        assert_eq!(done_cards[0].id, CardId(1));

        assert_eq!(s.delete_board(board), OpStatus::Applied);
        assert!(s.document().boards.is_empty());
        assert_eq!(s.document().next_board_id, 2);
        assert_eq!(s.document().next_list_id, 3);
        assert_eq!(s.document().next_card_id, 2);
    }
}
