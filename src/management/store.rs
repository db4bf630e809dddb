use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::Token;

/// Storage of token records keyed by session identifier.
///
/// Implementations must be safe to share between concurrently running
/// requests. Handlers only depend on this trait, so a persistent backend can
/// replace [`MemoryTokenStore`] without touching them.
pub trait TokenStore: Send + Sync {
    /// Inserts or overwrites the record for `session_id`.
    fn put(&self, session_id: &str, token: Token);

    /// Returns the record for `session_id`, if any.
    fn get(&self, session_id: &str) -> Option<Token>;

    /// Removes the record for `session_id`; no-op when absent.
    fn delete(&self, session_id: &str);
}

/// Process-local token store. Contents are lost on restart.
///
/// Readers proceed in parallel; `put` and `delete` take the write lock.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<String, Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions. Inspection helper, not part of [`TokenStore`].
    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn put(&self, session_id: &str, token: Token) {
        self.tokens.write().insert(session_id.to_string(), token);
    }

    fn get(&self, session_id: &str) -> Option<Token> {
        self.tokens.read().get(session_id).cloned()
    }

    fn delete(&self, session_id: &str) {
        self.tokens.write().remove(session_id);
    }
}
