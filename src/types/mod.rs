pub mod errors;
pub mod ganzhi;
pub mod keys;
pub mod record;
pub mod state;
pub mod timeline;
