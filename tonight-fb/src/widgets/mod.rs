pub mod chips;
pub mod movie_card;
