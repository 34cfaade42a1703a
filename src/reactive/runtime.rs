use std::cell::RefCell;
use std::collections::BTreeSet;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

pub type SignalId = usize;
pub type EffectId = usize;

enum EffectSlot {
    Idle(Box<dyn FnMut()>),
    /// Callback is checked out while it runs.
    Running,
    Disposed,
}

/// Dependency tracking for signals and effects on the UI thread.
///
/// Pending effects are kept ordered by id, so effects always flush in the
/// order they were created. Ids of dropped signals and disposed effects are
/// reused, so the tables stay as large as the most that were alive at once.
#[derive(Default)]
pub struct Runtime {
    tracking: Vec<EffectId>,
    pending: BTreeSet<EffectId>,
    effects: Vec<EffectSlot>,
    effect_dependencies: Vec<BTreeSet<SignalId>>,
    signal_subscribers: Vec<BTreeSet<EffectId>>,
    free_signals: Vec<SignalId>,
    free_effects: Vec<EffectId>,
    batch_depth: usize,
    flushing: bool,
}

impl Runtime {
    pub fn allocate_signal(&mut self) -> SignalId {
        if let Some(id) = self.free_signals.pop() {
            return id;
        }
        self.signal_subscribers.push(BTreeSet::new());
        self.signal_subscribers.len() - 1
    }

    /// Unsubscribe every effect from `signal_id` and make the id reusable.
    fn release_signal(&mut self, signal_id: SignalId) {
        let Some(subscribers) = self.signal_subscribers.get_mut(signal_id) else {
            return;
        };
        for effect_id in std::mem::take(subscribers) {
            self.effect_dependencies[effect_id].remove(&signal_id);
        }
        self.free_signals.push(signal_id);
    }

    fn allocate_effect(&mut self, callback: Box<dyn FnMut()>) -> EffectId {
        if let Some(id) = self.free_effects.pop() {
            self.effects[id] = EffectSlot::Idle(callback);
            return id;
        }
        self.effects.push(EffectSlot::Idle(callback));
        self.effect_dependencies.push(BTreeSet::new());
        self.effects.len() - 1
    }

    pub fn track_read(&mut self, signal_id: SignalId) {
        let Some(&effect_id) = self.tracking.last() else {
            return;
        };
        if let Some(subscribers) = self.signal_subscribers.get_mut(signal_id) {
            subscribers.insert(effect_id);
            self.effect_dependencies[effect_id].insert(signal_id);
        }
    }

    /// Queue every subscriber of `signal_id`. Returns true when the caller
    /// should flush now.
    fn queue_subscribers(&mut self, signal_id: SignalId) -> bool {
        if let Some(subscribers) = self.signal_subscribers.get(signal_id) {
            self.pending.extend(subscribers.iter().copied());
        }
        self.batch_depth == 0 && !self.flushing && !self.pending.is_empty()
    }

    /// Detach the effect from its old dependencies and check its callback out.
    fn begin_run(&mut self, effect_id: EffectId) -> Option<Box<dyn FnMut()>> {
        match std::mem::replace(&mut self.effects[effect_id], EffectSlot::Running) {
            EffectSlot::Idle(callback) => {
                self.clear_dependencies(effect_id);
                self.tracking.push(effect_id);
                Some(callback)
            }
            // Disposed, or already running further up the stack
            other => {
                self.effects[effect_id] = other;
                None
            }
        }
    }

    /// Check the callback back in. If the effect was disposed while running,
    /// frees its id and hands the callback back to be dropped by the caller.
    fn end_run(
        &mut self,
        effect_id: EffectId,
        callback: Box<dyn FnMut()>,
    ) -> Option<Box<dyn FnMut()>> {
        self.tracking.pop();
        if matches!(self.effects[effect_id], EffectSlot::Running) {
            self.effects[effect_id] = EffectSlot::Idle(callback);
            return None;
        }
        self.clear_dependencies(effect_id);
        self.free_effects.push(effect_id);
        Some(callback)
    }

    fn clear_dependencies(&mut self, effect_id: EffectId) {
        for signal_id in std::mem::take(&mut self.effect_dependencies[effect_id]) {
            self.signal_subscribers[signal_id].remove(&effect_id);
        }
    }

    /// Returns the old slot so its callback is dropped outside the runtime borrow.
    ///
    /// A running effect keeps its id until its run ends.
    fn dispose_effect(&mut self, effect_id: EffectId) -> EffectSlot {
        self.clear_dependencies(effect_id);
        self.pending.remove(&effect_id);
        let slot = std::mem::replace(&mut self.effects[effect_id], EffectSlot::Disposed);
        if !matches!(slot, EffectSlot::Running) {
            self.free_effects.push(effect_id);
        }
        slot
    }

    #[cfg(test)]
    fn table_sizes(&self) -> (usize, usize) {
        (self.signal_subscribers.len(), self.effects.len())
    }
}

pub fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with_borrow_mut(f)
}

/// Run an effect with dependency tracking.
///
/// The runtime is not borrowed while the callback runs, so the callback may
/// read and write signals freely.
pub(crate) fn run_effect(effect_id: EffectId) {
    let Some(mut callback) = with_runtime(|rt| rt.begin_run(effect_id)) else {
        return;
    };
    callback();
    let disposed = with_runtime(|rt| rt.end_run(effect_id, callback));
    drop(disposed);
}

pub(crate) fn create_effect_id(callback: Box<dyn FnMut()>) -> EffectId {
    let id = with_runtime(|rt| rt.allocate_effect(callback));
    run_effect(id);
    id
}

pub(crate) fn dispose_effect(effect_id: EffectId) {
    let slot = with_runtime(|rt| rt.dispose_effect(effect_id));
    drop(slot);
}

/// Called when the last handle to a signal is dropped. Skipped if the
/// runtime is busy or already torn down; the id then simply stays unused.
pub(crate) fn release_signal(signal_id: SignalId) {
    let _ = RUNTIME.try_with(|rt| {
        if let Ok(mut rt) = rt.try_borrow_mut() {
            rt.release_signal(signal_id);
        }
    });
}

pub(crate) fn notify_write(signal_id: SignalId) {
    if with_runtime(|rt| rt.queue_subscribers(signal_id)) {
        flush_effects();
    }
}

fn flush_effects() {
    with_runtime(|rt| rt.flushing = true);
    while let Some(effect_id) = with_runtime(|rt| rt.pending.pop_first()) {
        run_effect(effect_id);
    }
    with_runtime(|rt| rt.flushing = false);
}

/// Group several writes so subscribed effects run once, after `f` returns.
pub fn batch<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    with_runtime(|rt| rt.batch_depth += 1);
    let result = f();
    let flush = with_runtime(|rt| {
        rt.batch_depth -= 1;
        rt.batch_depth == 0 && !rt.flushing && !rt.pending.is_empty()
    });
    if flush {
        flush_effects();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::super::{create_effect, create_signal};
    use super::*;

    #[test]
    fn test_dropped_signals_and_effects_reuse_slots() {
        for _ in 0..3 {
            let signal = create_signal(1);
            let effect = {
                let signal = signal.clone();
                create_effect(move || {
                    signal.get();
                })
            };
            drop(effect);
            drop(signal);
        }
        let warm = with_runtime(|rt| rt.table_sizes());

        for round in 0..100 {
            let signal = create_signal(round);
            let effect = {
                let signal = signal.clone();
                create_effect(move || {
                    signal.get();
                })
            };
            drop(effect);
            drop(signal);
        }

        assert_eq!(with_runtime(|rt| rt.table_sizes()), warm);
    }

    #[test]
    fn test_reused_signal_id_has_no_stale_subscribers() {
        let runs = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let old = create_signal(0);
            let _effect = {
                let (old, runs) = (old.clone(), runs.clone());
                create_effect(move || {
                    old.get();
                    runs.set(runs.get() + 1);
                })
            };
        }

        let fresh = create_signal(0);
        fresh.set(1);
        assert_eq!(runs.get(), 1);
    }
}
