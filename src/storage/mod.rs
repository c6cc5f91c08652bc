//! Storage implementations for the repository trait

pub mod in_memory;

pub use in_memory::InMemoryRepository;
