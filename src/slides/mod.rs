mod deck;

pub use deck::DeckBuilder;
