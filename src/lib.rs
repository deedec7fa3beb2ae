pub mod export;
pub mod fake_feed;
pub mod game;
pub mod rankings;
pub mod season;
pub mod team;
