//! Block tree of a loaded application.
//!
//! Every signal and parameter is filed under the block path it belongs to.
//! Keys are sanitized names: each non-alphanumeric character becomes `_`,
//! so distinct raw names can end up on the same key. The later entry wins
//! and the clash is recorded in [`Model::collisions`].

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::Result;
use crate::session::XpcApi;

/// Replace every non-alphanumeric character with `_`, one for one.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// A read-only value produced by the running model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    index: i32,
    path: String,
}

impl Signal {
    pub fn new(index: i32, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// Raw block path of the signal.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Current value.
    pub fn read(&self, api: &XpcApi) -> Result<f64> {
        api.signal(self.index)
    }
}

/// A tunable value consumed by the running model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    index: i32,
    path: String,
}

impl Param {
    pub fn new(index: i32, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// Raw block path of the parameter.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, api: &XpcApi) -> Result<f64> {
        api.param(self.index)
    }

    pub fn set(&self, api: &XpcApi, value: f64) -> Result<()> {
        api.set_param(self.index, value)
    }
}

/// Result of a tree lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Block(&'a Block),
    Signal(&'a Signal),
    Param(&'a Param),
    NotFound,
}

impl<'a> Node<'a> {
    pub fn as_block(self) -> Option<&'a Block> {
        match self {
            Node::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_signal(self) -> Option<&'a Signal> {
        match self {
            Node::Signal(signal) => Some(signal),
            _ => None,
        }
    }

    pub fn as_param(self) -> Option<&'a Param> {
        match self {
            Node::Param(param) => Some(param),
            _ => None,
        }
    }

    pub fn is_found(self) -> bool {
        !matches!(self, Node::NotFound)
    }
}

/// A namespace node mirroring one subsystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    path: String,
    blocks: BTreeMap<String, Block>,
    signals: BTreeMap<String, Signal>,
    params: BTreeMap<String, Param>,
}

impl Block {
    fn with_path(path: String) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Raw `/`-separated path, empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn blocks(&self) -> impl Iterator<Item = (&str, &Block)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn signals(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.signals.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Direct child by sanitized key; blocks shadow signals, signals
    /// shadow parameters.
    pub fn child(&self, key: &str) -> Node<'_> {
        if let Some(block) = self.blocks.get(key) {
            Node::Block(block)
        } else if let Some(signal) = self.signals.get(key) {
            Node::Signal(signal)
        } else if let Some(param) = self.params.get(key) {
            Node::Param(param)
        } else {
            Node::NotFound
        }
    }

    /// Descendant by dot-separated sanitized keys, e.g. `"Plant.Gain.Gain"`.
    pub fn lookup(&self, dotted: &str) -> Node<'_> {
        let mut parts = dotted.split('.').peekable();
        let mut block = self;
        while let Some(key) = parts.next() {
            if parts.peek().is_none() {
                return block.child(key);
            }
            match block.blocks.get(key) {
                Some(next) => block = next,
                None => return Node::NotFound,
            }
        }
        Node::Block(block)
    }

    /// Indented outline of the block hierarchy.
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.render(0, &mut out);
        out
    }

    fn render(&self, depth: usize, out: &mut String) {
        if depth > 0 {
            out.push('\n');
        }
        let label = if self.path.is_empty() { "model root" } else { &self.path };
        let _ = write!(out, "{}{label}", "  ".repeat(depth));
        for block in self.blocks.values() {
            block.render(depth + 1, out);
        }
    }
}

/// Two distinct raw names that sanitized to the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Path of the block holding the key.
    pub block: String,
    pub key: String,
    /// Raw path that was replaced.
    pub replaced: String,
    /// Raw path that now owns the key.
    pub kept: String,
}

/// The block tree of one loaded application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    root: Block,
    collisions: Vec<Collision>,
}

impl std::ops::Deref for Model {
    type Target = Block;

    fn deref(&self) -> &Block {
        &self.root
    }
}

impl Model {
    /// Query every signal and parameter name and file them into blocks.
    pub fn build(api: &XpcApi) -> Result<Self> {
        let mut model = Model::default();

        for index in 0..api.num_signals()? {
            let name = api.signal_name(index)?;
            let (block, leaf) = name.rsplit_once('/').unwrap_or(("", name.as_str()));
            let label = api.signal_label(index)?;
            let key = if label.is_empty() { leaf } else { label.as_str() };
            model.insert_signal(block, key, Signal::new(index, join(block, leaf)));
        }

        for index in 0..api.num_params()? {
            let (block, param) = api.param_name(index)?;
            let path = join(&block, &param);
            model.insert_param(&block, &param, Param::new(index, path));
        }

        log::debug!(
            "built model tree with {} collisions",
            model.collisions.len()
        );
        Ok(model)
    }

    /// Sanitized-key clashes met while building the tree.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn root(&self) -> &Block {
        &self.root
    }

    /// File a signal under `block`, keyed by the sanitized `name`.
    pub fn insert_signal(&mut self, block: &str, name: &str, signal: Signal) {
        let key = sanitize(name);
        let kept = signal.path.clone();
        let (target, collisions) = self.block_mut(block);
        if let Some(old) = target.signals.insert(key.clone(), signal) {
            record(collisions, &target.path, key, old.path, kept);
        }
    }

    /// File a parameter under `block`, keyed by the sanitized `name`.
    pub fn insert_param(&mut self, block: &str, name: &str, param: Param) {
        let key = sanitize(name);
        let kept = param.path.clone();
        let (target, collisions) = self.block_mut(block);
        if let Some(old) = target.params.insert(key.clone(), param) {
            record(collisions, &target.path, key, old.path, kept);
        }
    }

    /// Walk to the block at the raw path, creating missing blocks.
    fn block_mut(&mut self, path: &str) -> (&mut Block, &mut Vec<Collision>) {
        let mut block = &mut self.root;
        if !path.is_empty() {
            for segment in path.split('/') {
                let key = sanitize(segment);
                let child_path = join(&block.path, segment);
                let child = block
                    .blocks
                    .entry(key.clone())
                    .or_insert_with(|| Block::with_path(child_path.clone()));
                if child.path != child_path {
                    log::warn!(
                        "blocks '{}' and '{child_path}' share key '{key}'",
                        child.path
                    );
                    self.collisions.push(Collision {
                        block: block_parent(&child_path),
                        key,
                        replaced: child_path,
                        kept: child.path.clone(),
                    });
                }
                block = child;
            }
        }
        (block, &mut self.collisions)
    }
}

fn record(
    collisions: &mut Vec<Collision>,
    block: &str,
    key: String,
    replaced: String,
    kept: String,
) {
    if kept == replaced {
        return;
    }
    log::warn!("'{replaced}' and '{kept}' share key '{key}'; keeping '{kept}'");
    collisions.push(Collision {
        block: block.to_string(),
        key,
        replaced,
        kept,
    });
}

fn join(block: &str, leaf: &str) -> String {
    if block.is_empty() {
        leaf.to_string()
    } else {
        format!("{block}/{leaf}")
    }
}

fn block_parent(path: &str) -> String {
    path.rsplit_once('/').map(|(parent, _)| parent.to_string()).unwrap_or_default()
}
