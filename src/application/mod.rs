pub mod add_phrase;
pub mod search;
