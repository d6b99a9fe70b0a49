/// One flashcard: a question/answer pair with a stable identifier.
///
/// Identity is the `id`; two cards with the same text are still
/// distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u64,
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(id: u64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered collection of cards. Insertion order is the navigation
/// order; removal shifts later cards toward the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: vec![
                Card::new(
                    1,
                    "What is ownership?",
                    "Each value has a single owner responsible for freeing it",
                ),
                Card::new(
                    2,
                    "What is borrowing?",
                    "Taking a reference to a value without taking ownership of it",
                ),
                Card::new(
                    3,
                    "What is a trait?",
                    "A collection of methods a type can implement, similar to an interface",
                ),
                Card::new(
                    4,
                    "What is a lifetime?",
                    "A compile-time scope annotation describing how long a reference is valid",
                ),
                Card::new(
                    5,
                    "What does the ? operator do?",
                    "Returns early with the error when a Result is Err, otherwise unwraps it",
                ),
            ],
        }
    }
}

impl Deck {
    /// Creates a deck from an explicit list of cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Next id to allocate: one past the largest id currently present.
    ///
    /// The first card added to an empty deck gets id 1, and ids climb
    /// monotonically even after deletions, so a freed id is never
    /// handed out again while a later card remains.
    pub fn next_id(&self) -> u64 {
        self.cards.iter().map(|card| card.id).max().unwrap_or(0) + 1
    }

    /// Appends a new card built from the given text, returning its id.
    /// Text is stored verbatim, untrimmed.
    pub fn add_card(&mut self, question: impl Into<String>, answer: impl Into<String>) -> u64 {
        let id = self.next_id();
        self.cards.push(Card::new(id, question, answer));
        id
    }

    /// Removes and returns the card at `index`, or `None` if out of
    /// bounds. The deck itself places no lower bound on length; the
    /// keep-at-least-one rule belongs to the application layer.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }
}
