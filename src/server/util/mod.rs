pub mod item_level;
pub mod media;
pub mod slug;
