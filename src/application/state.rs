//! Application state management for the terminal flashcard app.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface. Every public method is one atomic,
//! synchronous state transition; invalid transitions (navigating past
//! an edge, deleting the sole remaining card, submitting an empty
//! form) are silent no-ops rather than errors.

use crate::domain::{Card, Deck};

/// Represents the current mode of the application.
///
/// The mode determines how user input is interpreted and whether the
/// add-card form is displayed over the deck view.
#[derive(Debug)]
pub enum AppMode {
    /// Browsing the deck - navigation, flip, add and delete available
    Browse,
    /// The add-card form is open and keystrokes edit the drafts
    AddCard,
}

/// Which draft field of the add-card form currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Question,
    Answer,
}

/// Main application state containing the deck and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and step through the deck. It is the single owner of the deck and
/// the view state for the lifetime of the screen.
///
/// # Examples
///
/// ```
/// use tcards::application::App;
///
/// let app = App::default();
/// assert_eq!(app.current_index, 0);
/// assert!(!app.flipped);
/// ```
#[derive(Debug)]
pub struct App {
    /// The deck of flashcards
    pub deck: Deck,
    /// Index of the card currently shown (zero-based)
    pub current_index: usize,
    /// Whether the answer face is currently shown
    pub flipped: bool,
    /// Current application mode
    pub mode: AppMode,
    /// In-progress question text for the add-card form
    pub draft_question: String,
    /// In-progress answer text for the add-card form
    pub draft_answer: String,
    /// Draft field that currently receives keystrokes
    pub active_field: DraftField,
    /// Cursor position within the active draft field
    pub cursor_position: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            deck: Deck::default(),
            current_index: 0,
            flipped: false,
            mode: AppMode::Browse,
            draft_question: String::new(),
            draft_answer: String::new(),
            active_field: DraftField::Question,
            cursor_position: 0,
        }
    }
}

impl App {
    /// Creates an app over a specific deck, starting at the first card
    /// with the question face up.
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// The card currently shown, or `None` for an empty deck.
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current_index)
    }

    /// Whether the add-card form is open.
    pub fn is_adding(&self) -> bool {
        matches!(self.mode, AppMode::AddCard)
    }

    /// Advances to the next card and shows its question face.
    ///
    /// No-op at the last card: the index stays put and the current
    /// flip state is left alone.
    pub fn next_card(&mut self) {
        if self.current_index + 1 < self.deck.len() {
            self.current_index += 1;
            self.flipped = false;
        }
    }

    /// Steps back to the previous card and shows its question face.
    ///
    /// No-op at the first card.
    pub fn previous_card(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.flipped = false;
        }
    }

    /// Toggles between the question and answer face of the current
    /// card. Always succeeds.
    pub fn flip_card(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Opens the add-card form with empty focus state.
    ///
    /// The drafts keep whatever text they already hold; they are only
    /// cleared when the form closes.
    pub fn open_add_form(&mut self) {
        self.mode = AppMode::AddCard;
        self.active_field = DraftField::Question;
        self.cursor_position = self.draft_question.len();
    }

    /// Closes the add-card form and clears both drafts.
    ///
    /// Used by cancel and by a successful submit; both paths leave the
    /// form empty for the next time it opens.
    pub fn close_add_form(&mut self) {
        self.mode = AppMode::Browse;
        self.draft_question.clear();
        self.draft_answer.clear();
        self.active_field = DraftField::Question;
        self.cursor_position = 0;
    }

    /// Replaces the question draft verbatim. No validation happens
    /// until submit.
    pub fn set_draft_question(&mut self, text: impl Into<String>) {
        self.draft_question = text.into();
        if self.active_field == DraftField::Question {
            self.cursor_position = self.draft_question.len();
        }
    }

    /// Replaces the answer draft verbatim. No validation happens
    /// until submit.
    pub fn set_draft_answer(&mut self, text: impl Into<String>) {
        self.draft_answer = text.into();
        if self.active_field == DraftField::Answer {
            self.cursor_position = self.draft_answer.len();
        }
    }

    /// Moves input focus to the other draft field, placing the cursor
    /// at the end of that field's text.
    pub fn switch_draft_field(&mut self) {
        self.active_field = match self.active_field {
            DraftField::Question => DraftField::Answer,
            DraftField::Answer => DraftField::Question,
        };
        self.cursor_position = self.active_draft().len();
    }

    /// The text of the draft field that currently has focus.
    pub fn active_draft(&self) -> &str {
        match self.active_field {
            DraftField::Question => &self.draft_question,
            DraftField::Answer => &self.draft_answer,
        }
    }

    /// Mutable access to the focused draft, for in-field editing.
    pub fn active_draft_mut(&mut self) -> &mut String {
        match self.active_field {
            DraftField::Question => &mut self.draft_question,
            DraftField::Answer => &mut self.draft_answer,
        }
    }

    /// Validates the drafts and appends a new card to the deck.
    ///
    /// If either draft is empty after trimming whitespace, nothing
    /// happens: the form stays open and the drafts keep the text as
    /// typed. Otherwise a card with the next id and the raw untrimmed
    /// draft text is appended to the end of the deck, the drafts are
    /// cleared and the form closes. The current card and flip state
    /// are untouched; the new card is not auto-selected.
    pub fn submit_add_card(&mut self) {
        if self.draft_question.trim().is_empty() || self.draft_answer.trim().is_empty() {
            return;
        }

        let question = std::mem::take(&mut self.draft_question);
        let answer = std::mem::take(&mut self.draft_answer);
        self.deck.add_card(question, answer);
        self.close_add_form();
    }

    /// Removes the card currently shown.
    ///
    /// No-op when only one card remains; the deck never shrinks to
    /// zero. On success the index stays put so the next card slides
    /// into view, except when the last card was removed, in which case
    /// the index clamps to the new last card. The question face is
    /// shown after every successful deletion.
    pub fn delete_current_card(&mut self) {
        if self.deck.len() <= 1 {
            return;
        }

        if self.deck.remove_card(self.current_index).is_some() {
            if self.current_index >= self.deck.len() {
                self.current_index = self.deck.len() - 1;
            }
            self.flipped = false;
        }
    }
}
