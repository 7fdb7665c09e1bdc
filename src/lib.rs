pub mod artifact;
pub mod crawler;
pub mod indexer;
pub mod limits;
pub mod queryengine;
