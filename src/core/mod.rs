pub mod backup;
pub mod chrono_key;
pub mod extract;
pub mod import;
pub mod lexicon;
pub mod pending;
pub mod store;
