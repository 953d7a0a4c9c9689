mod reference;

pub use reference::{CategoryRecord, StudioRecord};
