pub mod error_shape;
pub mod handler_games_if_match;
