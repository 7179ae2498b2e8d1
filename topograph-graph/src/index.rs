//! Bijective mapping between canonical topic strings and dense integer ids.
//!
//! `spec.md` §4.2. Constructed once on first use (via [`Index::load`] or the
//! testing-only [`Index::from_topics`]) and then treated as immutable for the
//! lifetime of the engine.

use std::collections::HashMap;
use std::path::Path;

use topograph_common::{canonicalize, Result};

/// Total function `[0, N) -> String` plus its partial inverse `String -> [0, N)`.
#[derive(Debug, Clone)]
pub struct Index {
    topic_of_id: Vec<String>,
    id_of_topic: HashMap<String, u32>,
}

impl Index {
    /// Builds an index directly from a list of already-canonical topics
    /// ordered by id. Used by [`Index::load`] and by the in-memory test
    /// graph builder.
    pub fn from_topics(topic_of_id: Vec<String>) -> Self {
        let id_of_topic = topic_of_id
            .iter()
            .enumerate()
            .map(|(id, topic)| (topic.clone(), id as u32))
            .collect();
        Self {
            topic_of_id,
            id_of_topic,
        }
    }

    /// Reads a persisted topic index artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let persisted = topograph_io::TopicIndex::read(path).map_err(topograph_io::index_error)?;
        Ok(Self::from_topics(persisted.topic_of_id))
    }

    /// Persists this index to disk in the artifact format [`Index::load`] reads.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        topograph_io::TopicIndex::new(self.topic_of_id.clone())
            .write(path)
            .map_err(topograph_io::index_error)
    }

    /// Canonicalizes `topic` and looks up its id. Absence is a normal outcome.
    pub fn lookup(&self, topic: &str) -> Option<u32> {
        self.id_of_topic.get(&canonicalize(topic)).copied()
    }

    /// Resolves an id back to its canonical topic name.
    ///
    /// # Panics
    /// Panics if `id` is out of range — an out-of-range id is a programmer
    /// error (`spec.md` §7 `ProgrammerError`), never produced by this engine
    /// on its own.
    pub fn name_of(&self, id: u32) -> &str {
        self.topic_of_id
            .get(id as usize)
            .unwrap_or_else(|| panic!("topic id {id} out of range for index of size {}", self.size()))
    }

    /// Number of topics in the index (`N`).
    pub fn size(&self) -> usize {
        self.topic_of_id.len()
    }
}
