mod store;

pub use store::MemoryTokenStore;
pub use store::TokenStore;
