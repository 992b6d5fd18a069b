use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::error::{PlotAssistError, Result};
use crate::style::{ArgumentPool, StyleArgs, StyleValue};

/// Reserved style-argument name carrying deduplicated legend text.
pub const LABEL_KEY: &str = "label";

// ---------------------------------------------------------------------------
// PlotLabel – one label record
// ---------------------------------------------------------------------------

/// A label record for one logical data series: an opaque key, display text,
/// and a bag of style arguments.
///
/// `key` and `text` are immutable after creation. The consumed flag flips the
/// first time the text is retrieved and never reverts, so the text surfaces at
/// most once per key (one legend entry per series, however many draw calls).
#[derive(Debug, Clone)]
pub struct PlotLabel<K> {
    key: K,
    text: String,
    style_args: StyleArgs,
    consumed: bool,
}

impl<K> PlotLabel<K> {
    /// The caller-chosen key identifying this record.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The display text shown in a legend.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The stored style arguments.
    pub fn style_args(&self) -> &StyleArgs {
        &self.style_args
    }

    /// Whether the text has already been retrieved once.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl<K: fmt::Debug> fmt::Display for PlotLabel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlotLabel(key={:?}, text='{}', args={{", self.key, self.text)?;
        for (i, (name, value)) in self.style_args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}})")
    }
}

// ---------------------------------------------------------------------------
// PlotLabelManager – insertion-ordered label store with optional pools
// ---------------------------------------------------------------------------

/// Assigns and recalls, per caller-chosen key, a display label and a bag of
/// plotting style arguments.
///
/// Text is surfaced at most once per key (see [`PlotLabelManager::get_text`])
/// while style arguments remain available on every call. Optionally, style
/// arguments are auto-assigned from pre-declared [`ArgumentPool`]s as keys are
/// added.
///
/// Single-threaded by design; callers sharing a manager across threads must
/// synchronize externally.
pub struct PlotLabelManager<K> {
    /// Records in insertion order.
    labels: Vec<PlotLabel<K>>,
    /// key → position in `labels`.
    index: HashMap<K, usize>,
    /// Shared argument pools, consumed across all additions on this instance.
    pools: BTreeMap<String, ArgumentPool>,
}

impl<K> Default for PlotLabelManager<K> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            pools: BTreeMap::new(),
        }
    }
}

impl<K> PlotLabelManager<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Create an empty manager with no argument pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager seeded with argument pools: argument name →
    /// declared value sequence, consumed last-declared-first as keys are
    /// added without explicit style arguments.
    ///
    /// Pools of differing lengths are accepted with a warning; exhaustion only
    /// becomes an error once an [`add`](Self::add) actually drains a pool.
    pub fn with_pools(pools: BTreeMap<String, Vec<StyleValue>>) -> Self {
        let pools: BTreeMap<String, ArgumentPool> = pools
            .into_iter()
            .map(|(name, values)| (name, ArgumentPool::new(values)))
            .collect();

        if let Some(min_len) = shortest_mismatched_length(&pools) {
            log::warn!(
                "argument pools have differing lengths; shortest pool has {min_len} values"
            );
        }

        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            pools,
        }
    }

    /// Whether a record exists for `key`. Pure lookup, no side effect.
    pub fn key_exists(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insertion position of `key` among all added records.
    pub fn get_key_index(&self, key: &K) -> Result<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| PlotAssistError::key_not_found(key))
    }

    /// Number of records added so far.
    pub fn key_count(&self) -> usize {
        self.labels.len()
    }

    /// True when no record has been added yet.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Register a new label record under `key`.
    ///
    /// When `style_args` is `None`, one value is taken from every argument
    /// pool; any explicit bag (even an empty one) suppresses pool filling
    /// entirely. The add is atomic: on any failure no record is created and no
    /// pool value is consumed.
    pub fn add(
        &mut self,
        key: K,
        text: impl Into<String>,
        style_args: Option<StyleArgs>,
    ) -> Result<()> {
        if self.key_exists(&key) {
            return Err(PlotAssistError::duplicate_key(&key));
        }

        let text = text.into();
        if text.is_empty() {
            return Err(PlotAssistError::invalid_argument(
                "label text must not be empty",
            ));
        }

        let style_args = match style_args {
            Some(args) => args,
            None => self.take_pool_args()?,
        };

        self.index.insert(key.clone(), self.labels.len());
        self.labels.push(PlotLabel {
            key,
            text,
            style_args,
            consumed: false,
        });
        Ok(())
    }

    /// [`add`](Self::add), but a no-op when the key is already registered.
    pub fn try_add(
        &mut self,
        key: K,
        text: impl Into<String>,
        style_args: Option<StyleArgs>,
    ) -> Result<()> {
        if self.key_exists(&key) {
            return Ok(());
        }
        self.add(key, text, style_args)
    }

    /// The full record for `key`.
    pub fn get_plot_label(&self, key: &K) -> Result<&PlotLabel<K>> {
        let idx = self.get_key_index(key)?;
        Ok(&self.labels[idx])
    }

    /// A copy of the style arguments stored for `key`; mutating the returned
    /// bag never affects stored state.
    ///
    /// With `include_text`, the bag additionally carries
    /// [`LABEL_KEY`]` -> text` on the first retrieval for that key and
    /// [`LABEL_KEY`]` -> Null` on every later one, so the bag can be handed to
    /// a plotting call unconditionally without duplicating legend entries.
    pub fn get_args(&mut self, key: &K, include_text: bool) -> Result<StyleArgs> {
        let idx = self.get_key_index(key)?;
        let label = &mut self.labels[idx];

        let mut args = label.style_args.clone();
        if include_text {
            let text = if label.consumed {
                StyleValue::Null
            } else {
                label.consumed = true;
                StyleValue::String(label.text.clone())
            };
            args.insert(LABEL_KEY.to_string(), text);
        }
        Ok(args)
    }

    /// Deduplicated legend text for `key`: the stored text on the first call,
    /// `None` on every later one.
    pub fn get_text(&mut self, key: &K) -> Result<Option<&str>> {
        let idx = self.get_key_index(key)?;
        let label = &mut self.labels[idx];

        if label.consumed {
            Ok(None)
        } else {
            label.consumed = true;
            Ok(Some(label.text.as_str()))
        }
    }

    /// All records, read-only, in insertion order.
    pub fn get_all_labels(&self) -> &[PlotLabel<K>] {
        &self.labels
    }

    /// Remaining depth of the named argument pool, if one was declared.
    pub fn pool_remaining(&self, name: &str) -> Option<usize> {
        self.pools.get(name).map(ArgumentPool::remaining)
    }

    /// Take one value from every pool, failing before anything is consumed if
    /// any pool is dry.
    fn take_pool_args(&mut self) -> Result<StyleArgs> {
        for (name, pool) in &self.pools {
            if pool.is_exhausted() {
                return Err(PlotAssistError::pool_exhausted(name));
            }
        }

        let mut args = StyleArgs::new();
        for (name, pool) in &mut self.pools {
            if let Some(value) = pool.take() {
                args.insert(name.clone(), value);
            }
        }
        Ok(args)
    }
}

/// The shortest declared pool length when the pools differ in length, `None`
/// when they all match (including zero or one pool).
fn shortest_mismatched_length(pools: &BTreeMap<String, ArgumentPool>) -> Option<usize> {
    let lengths: BTreeSet<usize> = pools.values().map(|p| p.declared().len()).collect();
    if lengths.len() > 1 {
        lengths.first().copied()
    } else {
        None
    }
}

impl<K: fmt::Debug> fmt::Display for PlotLabelManager<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlotLabelManager:")?;
        for label in &self.labels {
            write!(f, "\n - {label}")?;
        }
        Ok(())
    }
}
