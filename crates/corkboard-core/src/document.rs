//! The document: every board plus the id counters, persisted as one unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BoardId, CardId, ListId};

/// The whole persisted state.
///
/// Counters are monotonic and strictly greater than any id ever issued for
/// their kind; they are never reset, so ids stay unique for the lifetime of
/// the document even across deletions. Field names serialize in camelCase --
/// the blob format the original application established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub boards: Vec<Board>,
    pub next_board_id: u64,
    pub next_list_id: u64,
    pub next_card_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            boards: Vec::new(),
            next_board_id: 1,
            next_list_id: 1,
            next_card_id: 1,
        }
    }
}

impl Document {
    /// Issues a fresh board id and advances the counter.
    pub fn allocate_board_id(&mut self) -> BoardId {
        let id = BoardId(self.next_board_id);
        self.next_board_id += 1;
        id
    }

    /// Issues a fresh list id and advances the counter.
    pub fn allocate_list_id(&mut self) -> ListId {
        let id = ListId(self.next_list_id);
        self.next_list_id += 1;
        id
    }

    /// Issues a fresh card id and advances the counter.
    pub fn allocate_card_id(&mut self) -> CardId {
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        id
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == id)
    }

    /// Total number of cards across every board and list.
    pub fn card_count(&self) -> usize {
        self.boards.iter().map(Board::card_count).sum()
    }
}

/// Top-level container owning an ordered sequence of lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub lists: Vec<List>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board with no lists. `name` is expected to be trimmed.
    pub fn new(id: BoardId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            lists: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    /// Number of cards across all lists on this board.
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

/// Container within a board owning an ordered sequence of cards.
///
/// The position of a list within `Board::lists` is stable: card operations
/// never reorder lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Creates a list with no cards. `name` is expected to be trimmed.
    pub fn new(id: ListId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

/// Leaf entity: a title plus an optional (possibly empty) description.
///
/// A card belongs to exactly one list at any time; a move transfers the card
/// value itself, so `id` and `created_at` survive relocation unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card. `title` and `description` are expected to be trimmed.
    pub fn new(id: CardId, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            created_at: Utc::now(),
        }
    }
}
