use std::cell::RefCell;
use std::rc::Rc;

use crate::Dispose;

pub type SubId = u64;

pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 1,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    // Callbacks run against a snapshot with no borrow held, so a subscriber
    // may re-enter the signal (get, set, subscribe, unsubscribe) freely.
    fn notify(&self)
    where
        T: Clone,
    {
        let (snapshot, subs) = {
            let inner = self.0.borrow();
            let subs: Vec<Rc<dyn Fn(&T)>> = inner.subs.iter().map(|(_, f)| f.clone()).collect();
            (inner.value.clone(), subs)
        };
        for f in subs {
            f(&snapshot);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }

    /// `subscribe` with a `Dispose` guard that unsubscribes on release.
    ///
    /// Registers in the current `Scope` (if any) so observers die with the
    /// scope that created them.
    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose
    where
        T: 'static,
    {
        let id = self.subscribe(f);
        let me = self.clone();
        crate::effects::effect(move || Dispose::new(move || me.unsubscribe(id)))
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
