use std::cell::RefCell;
use std::rc::Rc;

use super::AutosizeInput;
use crate::element::InputElement;
use crate::measure::TextMeasurer;
use crate::reactive::{create_effect, Effect, Signal};

/// An [`AutosizeInput`] whose value follows a `Signal<String>`.
///
/// Writing the signal measures and resizes before the write returns, so the
/// element never shows a width computed for a previous value. Dropping the
/// binding stops the updates.
pub struct BoundInput<E, M> {
    input: Rc<RefCell<AutosizeInput<E, M>>>,
    value: Signal<String>,
    _effect: Effect,
}

impl<E, M> BoundInput<E, M>
where
    E: InputElement + 'static,
    M: TextMeasurer + 'static,
{
    pub fn new(input: AutosizeInput<E, M>, value: Signal<String>) -> Self {
        let input = Rc::new(RefCell::new(input));

        let effect = {
            let input = Rc::clone(&input);
            let value = value.clone();
            create_effect(move || {
                let text = value.get();
                match input.try_borrow_mut() {
                    Ok(mut input) => {
                        input.set_value(text);
                    }
                    Err(_) => {
                        log::warn!("input is borrowed during a value change, width not updated")
                    }
                }
            })
        };

        if let Ok(mut input) = input.try_borrow_mut() {
            input.mount();
        }

        Self {
            input,
            value,
            _effect: effect,
        }
    }

    /// The signal driving the value.
    pub fn value(&self) -> &Signal<String> {
        &self.value
    }

    /// Shorthand for `self.value().set(..)`.
    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set(value.into());
    }

    pub fn resolved_width(&self) -> Option<f32> {
        self.input.borrow().resolved_width()
    }

    /// Borrow the underlying control.
    pub fn with<R>(&self, f: impl FnOnce(&AutosizeInput<E, M>) -> R) -> R {
        f(&self.input.borrow())
    }

    /// Mutably borrow the underlying control. Do not write the value signal
    /// from inside `f`.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut AutosizeInput<E, M>) -> R) -> R {
        f(&mut self.input.borrow_mut())
    }
}
