// src/infrastructure/repositories/mod.rs
mod memory;

pub use memory::InMemoryStore;
