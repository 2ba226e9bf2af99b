//! Fine-grained reactive signal system
//!
//! Push-pull hybrid with automatic dependency tracking:
//! - Signals push invalidation notifications to subscribers
//! - Derived values pull (lazily compute) their values when accessed
//! - Effects are scheduled and batched
//!
//! The graph is single-threaded. Components share it through
//! [`SharedReactiveGraph`] and wrap individual signals in [`State<T>`].
//!
//! ```
//! use folio_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//! let scroll_y = graph.create_signal(0.0f32);
//! let half = graph.create_derived(move |g| g.get(scroll_y).unwrap_or(0.0) / 2.0);
//!
//! graph.set(scroll_y, 300.0);
//! assert_eq!(graph.get_derived(half), Some(150.0));
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
    /// Unique identifier for a derived/computed value
    pub struct DerivedId;
    /// Unique identifier for an effect
    pub struct EffectId;
}

/// Subscriber types that can react to signal changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriberId {
    Derived(DerivedId),
    Effect(EffectId),
}

/// A reactive signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    pub fn id(&self) -> SignalId {
        self.id
    }
}

/// A derived/computed value handle
#[derive(Debug)]
pub struct Derived<T> {
    id: DerivedId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Derived<T> {}

impl<T> Derived<T> {
    pub fn id(&self) -> DerivedId {
        self.id
    }
}

/// An effect handle
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn id(&self) -> EffectId {
        self.id
    }
}

type ComputeFn = Rc<dyn Fn(&ReactiveGraph) -> Box<dyn Any>>;
type EffectFn = Box<dyn FnMut(&ReactiveGraph)>;

struct SignalNode {
    value: Box<dyn Any>,
    subscribers: SmallVec<[SubscriberId; 4]>,
}

struct DerivedNode {
    value: Option<Box<dyn Any>>,
    compute: ComputeFn,
    dependencies: SmallVec<[SignalId; 4]>,
    subscribers: SmallVec<[SubscriberId; 4]>,
    dirty: Cell<bool>,
}

struct EffectNode {
    /// Taken out while the effect runs
    run: Option<EffectFn>,
    dependencies: SmallVec<[SignalId; 4]>,
    dirty: Cell<bool>,
}

/// The reactive graph that manages all signals, derived values, and effects
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    derived: SlotMap<DerivedId, DerivedNode>,
    effects: SlotMap<EffectId, EffectNode>,
    pending_effects: RefCell<VecDeque<EffectId>>,
    /// > 0 while inside a batch
    batch_depth: Cell<u32>,
    /// Dependencies recorded by the computation currently running
    tracking: RefCell<Option<Vec<SignalId>>>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            derived: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            pending_effects: RefCell::new(VecDeque::new()),
            batch_depth: Cell::new(0),
            tracking: RefCell::new(None),
        }
    }

    // =========================================================================
    // SIGNALS
    // =========================================================================

    /// Create a new signal with an initial value
    pub fn create_signal<T: 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            subscribers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    ///
    /// Inside a derived computation or an effect the signal is recorded as a
    /// dependency.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(ref mut deps) = *self.tracking.borrow_mut() {
            if !deps.contains(&signal.id) {
                deps.push(signal.id);
            }
        }

        self.get_untracked(signal)
    }

    /// Get the current value without tracking as a dependency
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal, triggering reactive updates
    pub fn set<T: 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(node) = self.signals.get_mut(signal.id) else {
            return;
        };
        node.value = Box::new(value);

        let subscribers = node.subscribers.clone();
        for sub in subscribers {
            self.mark_dirty(sub);
        }

        if self.batch_depth.get() == 0 {
            self.flush_effects();
        }
    }

    // =========================================================================
    // DERIVED VALUES
    // =========================================================================

    /// Create a derived (computed) value
    pub fn create_derived<T, F>(&mut self, compute: F) -> Derived<T>
    where
        T: Clone + 'static,
        F: Fn(&ReactiveGraph) -> T + 'static,
    {
        let compute: ComputeFn = Rc::new(move |graph: &ReactiveGraph| -> Box<dyn Any> {
            Box::new(compute(graph))
        });

        let id = self.derived.insert(DerivedNode {
            value: None,
            compute,
            dependencies: SmallVec::new(),
            subscribers: SmallVec::new(),
            dirty: Cell::new(true),
        });

        Derived {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the value of a derived, recomputing if any dependency changed
    pub fn get_derived<T: Clone + 'static>(&mut self, derived: Derived<T>) -> Option<T> {
        let node = self.derived.get(derived.id)?;

        if !node.dirty.get() {
            if let Some(ref cached) = node.value {
                return cached.downcast_ref::<T>().cloned();
            }
        }

        node.dirty.set(false);
        let compute = Rc::clone(&node.compute);

        self.tracking.replace(Some(Vec::new()));
        let value = compute(&*self);
        let deps = self.tracking.take().unwrap_or_default();

        let sub = SubscriberId::Derived(derived.id);
        let old_deps = self
            .derived
            .get(derived.id)
            .map(|node| node.dependencies.clone())
            .unwrap_or_default();
        self.resubscribe(sub, &old_deps, &deps);

        let node = self.derived.get_mut(derived.id)?;
        node.dependencies = deps.into_iter().collect();
        let result = value.downcast_ref::<T>().cloned();
        node.value = Some(value);
        result
    }

    // =========================================================================
    // EFFECTS
    // =========================================================================

    /// Create an effect that runs now and again whenever its dependencies change
    pub fn create_effect<F>(&mut self, run: F) -> Effect
    where
        F: FnMut(&ReactiveGraph) + 'static,
    {
        let id = self.effects.insert(EffectNode {
            run: Some(Box::new(run)),
            dependencies: SmallVec::new(),
            dirty: Cell::new(true),
        });

        self.pending_effects.borrow_mut().push_back(id);

        if self.batch_depth.get() == 0 {
            self.flush_effects();
        }

        Effect { id }
    }

    /// Dispose of an effect, removing it from the graph
    pub fn dispose_effect(&mut self, effect: Effect) {
        if let Some(node) = self.effects.remove(effect.id) {
            self.resubscribe(SubscriberId::Effect(effect.id), &node.dependencies, &[]);
        }
    }

    // =========================================================================
    // BATCHING
    // =========================================================================

    /// Start a batch - effects won't run until the batch ends
    pub fn batch_start(&self) {
        self.batch_depth.set(self.batch_depth.get() + 1);
    }

    /// End a batch and flush pending effects
    pub fn batch_end(&mut self) {
        let depth = self.batch_depth.get();
        if depth > 0 {
            self.batch_depth.set(depth - 1);
            if depth == 1 {
                self.flush_effects();
            }
        }
    }

    /// Run a function in a batch context
    pub fn batch<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.batch_start();
        let result = f(self);
        self.batch_end();
        result
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn mark_dirty(&mut self, sub: SubscriberId) {
        match sub {
            SubscriberId::Derived(id) => {
                if let Some(node) = self.derived.get(id) {
                    if !node.dirty.get() {
                        node.dirty.set(true);
                        let subscribers = node.subscribers.clone();
                        for sub in subscribers {
                            self.mark_dirty(sub);
                        }
                    }
                }
            }
            SubscriberId::Effect(id) => {
                if let Some(node) = self.effects.get(id) {
                    if !node.dirty.get() {
                        node.dirty.set(true);
                        self.pending_effects.borrow_mut().push_back(id);
                    }
                }
            }
        }
    }

    fn flush_effects(&mut self) {
        let effects: Vec<EffectId> = self.pending_effects.borrow_mut().drain(..).collect();
        for effect_id in effects {
            self.run_effect(effect_id);
        }
    }

    fn run_effect(&mut self, effect_id: EffectId) {
        let mut run = match self.effects.get_mut(effect_id) {
            Some(node) if node.dirty.get() => {
                node.dirty.set(false);
                match node.run.take() {
                    Some(run) => run,
                    None => return,
                }
            }
            _ => return,
        };

        self.tracking.replace(Some(Vec::new()));
        run(&*self);
        let deps = self.tracking.take().unwrap_or_default();

        let old_deps = match self.effects.get_mut(effect_id) {
            Some(node) => {
                node.run = Some(run);
                std::mem::take(&mut node.dependencies)
            }
            None => return,
        };
        self.resubscribe(SubscriberId::Effect(effect_id), &old_deps, &deps);
        if let Some(node) = self.effects.get_mut(effect_id) {
            node.dependencies = deps.into_iter().collect();
        }
    }

    fn resubscribe(&mut self, sub: SubscriberId, old: &[SignalId], new: &[SignalId]) {
        for &dep_id in old {
            if let Some(sig) = self.signals.get_mut(dep_id) {
                sig.subscribers.retain(|s| *s != sub);
            }
        }
        for &dep_id in new {
            if let Some(sig) = self.signals.get_mut(dep_id) {
                if !sig.subscribers.contains(&sub) {
                    sig.subscribers.push(sub);
                }
            }
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// STATE - High-level API for component state management
// =============================================================================

/// Reactive graph shared by all components of a page
pub type SharedReactiveGraph = Rc<RefCell<ReactiveGraph>>;

/// Set when a state change requires the render tree to be rebuilt
pub type DirtyFlag = Rc<Cell<bool>>;

/// Create an empty shared graph
pub fn shared_graph() -> SharedReactiveGraph {
    Rc::new(RefCell::new(ReactiveGraph::new()))
}

/// A bound state value with direct get/set methods
///
/// ```
/// use folio_core::reactive::{shared_graph, State};
/// use std::{cell::Cell, rc::Rc};
///
/// let graph = shared_graph();
/// let dirty = Rc::new(Cell::new(false));
/// let scroll = State::create(&graph, &dirty, 0.0f32);
///
/// scroll.set(120.0);
/// assert_eq!(scroll.get(), 120.0);
/// assert!(!dirty.get());
/// ```
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
}

impl<T: Clone + 'static> State<T> {
    /// Wrap an existing signal
    pub fn new(signal: Signal<T>, reactive: SharedReactiveGraph, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            reactive,
            dirty_flag,
        }
    }

    /// Create a signal in `graph` and wrap it
    pub fn create(graph: &SharedReactiveGraph, dirty_flag: &DirtyFlag, initial: T) -> Self {
        let signal = graph.borrow_mut().create_signal(initial);
        Self::new(signal, Rc::clone(graph), Rc::clone(dirty_flag))
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.reactive
            .borrow()
            .get_untracked(self.signal)
            .unwrap_or_default()
    }

    /// Set a new value without requesting a tree rebuild
    ///
    /// Renderers read values at render time, so visual-only changes show up
    /// on the next frame.
    pub fn set(&self, value: T) {
        self.reactive.borrow_mut().set(self.signal, value);
    }

    /// Set a new value AND request a render tree rebuild
    ///
    /// Only for changes that alter tree structure (swapping an icon, adding
    /// or removing elements).
    pub fn set_rebuild(&self, value: T) {
        self.reactive.borrow_mut().set(self.signal, value);
        self.dirty_flag.set(true);
    }

    pub fn signal(&self) -> Signal<T> {
        self.signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_create_get_set() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(0i32);
        assert_eq!(graph.get(count), Some(0));

        graph.set(count, 42);
        assert_eq!(graph.get(count), Some(42));
    }

    #[test]
    fn test_derived_caching() {
        let mut graph = ReactiveGraph::new();
        let compute_count = Rc::new(Cell::new(0));

        let count = graph.create_signal(5i32);
        let counter = compute_count.clone();
        let doubled = graph.create_derived(move |g| {
            counter.set(counter.get() + 1);
            g.get(count).unwrap_or(0) * 2
        });

        assert_eq!(graph.get_derived(doubled), Some(10));
        assert_eq!(compute_count.get(), 1);

        assert_eq!(graph.get_derived(doubled), Some(10));
        assert_eq!(compute_count.get(), 1);

        graph.set(count, 7);
        assert_eq!(graph.get_derived(doubled), Some(14));
        assert_eq!(compute_count.get(), 2);
    }

    #[test]
    fn test_derived_multiple_signals() {
        let mut graph = ReactiveGraph::new();

        let a = graph.create_signal(1.0f32);
        let b = graph.create_signal(2.0f32);
        let sum = graph.create_derived(move |g| g.get(a).unwrap_or(0.0) + g.get(b).unwrap_or(0.0));

        assert_eq!(graph.get_derived(sum), Some(3.0));
        graph.set(b, 10.0);
        assert_eq!(graph.get_derived(sum), Some(11.0));
    }

    #[test]
    fn test_effect_runs_on_change() {
        let mut graph = ReactiveGraph::new();
        let runs = Rc::new(RefCell::new(Vec::new()));

        let count = graph.create_signal(0i32);
        let runs_clone = runs.clone();
        let _effect = graph.create_effect(move |g| {
            runs_clone.borrow_mut().push(g.get(count).unwrap_or(0));
        });

        assert_eq!(*runs.borrow(), vec![0]);

        graph.set(count, 1);
        graph.set(count, 2);
        assert_eq!(*runs.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_batching() {
        let mut graph = ReactiveGraph::new();
        let runs = Rc::new(Cell::new(0));

        let a = graph.create_signal(1i32);
        let b = graph.create_signal(2i32);
        let runs_clone = runs.clone();
        let _effect = graph.create_effect(move |g| {
            let _a = g.get(a);
            let _b = g.get(b);
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        runs.set(0);
        graph.batch(|g| {
            g.set(a, 100);
            g.set(b, 200);
        });
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_dispose_effect() {
        let mut graph = ReactiveGraph::new();
        let runs = Rc::new(Cell::new(0));

        let count = graph.create_signal(0i32);
        let runs_clone = runs.clone();
        let effect = graph.create_effect(move |g| {
            let _val = g.get(count);
            runs_clone.set(runs_clone.get() + 1);
        });

        graph.set(count, 1);
        assert_eq!(runs.get(), 2);

        graph.dispose_effect(effect);
        graph.set(count, 2);
        assert_eq!(runs.get(), 2);
        assert_eq!(graph.get(count), Some(2));
    }

    #[test]
    fn test_state_rebuild_flag() {
        let graph = shared_graph();
        let dirty = Rc::new(Cell::new(false));
        let theme = State::create(&graph, &dirty, false);

        theme.set(true);
        assert!(!dirty.get());

        theme.set_rebuild(false);
        assert!(!theme.get());
        assert!(dirty.get());
    }
}
