//! # Change Propagation
//!
//! Every editable node owns a [`ChangeNotifier`] created as a child of its
//! owner's notifier. Notifying a node delivers the change to that node's
//! listeners and then re-broadcasts it to every ancestor, so a single call
//! reaches whoever subscribed at the root.
//!
//! ```text
//! ActNode ─── notifier (root listener: dirty flag, autosave)
//!   └─ ListEditor<Scene> ─── child notifier
//!        └─ TextSceneNode ─── child notifier
//!             └─ Slot<TextExpression> ─── child notifier  ← notify() here
//! ```
//!
//! Children hold their parent, never the other way around, so a subtree
//! evicted from a slot stops reporting as soon as it is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// What kind of mutation produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A primitive control (text, number, choice) changed value
    Control,

    /// A slot received a new occupant (or was cleared by a gap)
    SlotFilled,

    /// A slot occupant was removed
    SlotEmptied,

    /// A list editor grew by one entry
    ListAppended,
}

/// Structural-change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptChange {
    pub origin: ChangeOrigin,
}

type Listener = Rc<dyn Fn(&ScriptChange)>;

#[derive(Default)]
struct Signal {
    parent: Option<ChangeNotifier>,
    listeners: RefCell<Vec<Listener>>,
    emitted: Cell<u64>,
}

/// Handle to one node's change signal
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<Signal>,
}

impl ChangeNotifier {
    /// Notifier with no parent (owned by whatever holds the root widget)
    pub fn root() -> Self {
        Self::default()
    }

    /// Notifier that re-broadcasts to `self`
    pub fn child(&self) -> Self {
        Self {
            inner: Rc::new(Signal {
                parent: Some(self.clone()),
                ..Signal::default()
            }),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&ScriptChange) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Deliver a change here and at every ancestor
    pub fn notify(&self, origin: ChangeOrigin) {
        let change = ScriptChange { origin };
        let mut current = Some(self);

        while let Some(notifier) = current {
            notifier.deliver(&change);
            current = notifier.inner.parent.as_ref();
        }
    }

    /// Number of changes delivered to this notifier, including those
    /// re-broadcast from descendants
    pub fn emitted(&self) -> u64 {
        self.inner.emitted.get()
    }

    fn deliver(&self, change: &ScriptChange) {
        self.inner.emitted.set(self.inner.emitted.get() + 1);

        // Listeners may subscribe further listeners while running.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("emitted", &self.emitted())
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("has_parent", &self.inner.parent.is_some())
            .finish()
    }
}
