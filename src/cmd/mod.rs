pub mod events;
pub mod interactive;
pub mod summary;
pub mod view;
