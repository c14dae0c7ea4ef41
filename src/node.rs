//! Read-only access to per-node attribute data.
//!
//! Node attributes live in the external node store as one file per attribute
//! under a directory named after the node id. The engine never writes them.

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Sentinel for attributes that are missing or unreadable.
pub const PLACEHOLDER: &str = "[no contents]";

/// The per-node attributes the engine knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datum {
    Contents,
    State,
    Tags,
}

impl Datum {
    fn file_name(&self) -> &'static str {
        match self {
            Datum::Contents => "contents",
            Datum::State => "state",
            Datum::Tags => "tags",
        }
    }
}

/// Node states with a known display styling; anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    New,
    Todo,
    Done,
    Dropped,
    Waiting,
    Someday,
    Persist,
    Unknown,
}

impl State {
    pub fn parse(name: &str) -> State {
        match name {
            "NEW" => State::New,
            "TODO" => State::Todo,
            "DONE" => State::Done,
            "DROPPED" => State::Dropped,
            "WAITING" => State::Waiting,
            "SOMEDAY" => State::Someday,
            "PERSIST" => State::Persist,
            _ => State::Unknown,
        }
    }
}

/// Lazy, memoized reader over the node-attribute root.
///
/// One store is constructed per invocation; its cache lives exactly as long
/// as the process. Each `(datum, id)` pair is read from disk at most once.
pub struct NodeStore {
    root: PathBuf,
    cache: HashMap<(Datum, String), String>,
}

impl NodeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Read one attribute, trimmed, memoized for the life of this store.
    ///
    /// Unreadable or missing files yield [`PLACEHOLDER`] so queries over
    /// nodes with incomplete data still proceed.
    pub fn datum(&mut self, datum: Datum, id: &str) -> &str {
        let root = &self.root;
        self.cache
            .entry((datum, id.to_string()))
            .or_insert_with_key(|(datum, id)| {
                let path = root.join(id).join(datum.file_name());
                match fs::read_to_string(&path) {
                    Ok(raw) => raw.trim().to_string(),
                    Err(err) => {
                        debug!("Unreadable {} for node '{}': {}", datum.file_name(), id, err);
                        PLACEHOLDER.to_string()
                    }
                }
            })
    }

    pub fn contents(&mut self, id: &str) -> &str {
        self.datum(Datum::Contents, id)
    }

    /// Short display label: the first line of the node's contents.
    pub fn gloss(&mut self, id: &str) -> &str {
        self.contents(id).lines().next().unwrap_or_default()
    }

    /// Raw state string, for filters that compare by name.
    pub fn state_name(&mut self, id: &str) -> &str {
        self.datum(Datum::State, id)
    }

    /// Parsed state, for styling.
    pub fn state(&mut self, id: &str) -> State {
        State::parse(self.datum(Datum::State, id))
    }

    pub fn tags(&mut self, id: &str) -> &str {
        self.datum(Datum::Tags, id)
    }
}
