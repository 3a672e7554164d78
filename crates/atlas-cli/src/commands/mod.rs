pub mod dispatch;
pub mod objects;
pub mod report;
pub mod resources;
