//! "Repository changed" notifications.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Session,
    Damages,
    Transactions,
    Expenses,
}

type Listener = Box<dyn FnMut(Change)>;

/// Fan-out of change events to subscribed callbacks, in subscription order.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, change: Change) {
        for l in self.listeners.iter_mut() {
            l(change);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
