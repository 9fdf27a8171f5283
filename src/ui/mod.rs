pub mod floor_map;
pub mod messages;
pub mod render;
