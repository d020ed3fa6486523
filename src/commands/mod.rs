pub mod event;
pub mod feed;
pub mod mark;
pub mod prices;
pub mod profile;
pub mod search;
pub mod user;
