use core::mem;
use std::rc::Rc;

use crate::runtime::{Object, HashMap};
use crate::runtime::strings::StringSymbol;


/// Handle to a scope stored in an `EnvArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

impl EnvId {
    pub fn index(&self) -> usize { self.0 }
}


/// A closure's hold on the scope it was defined in.
///
/// A finished scope is kept alive while any `CapturedEnv` for it exists.
#[derive(Debug, Clone)]
pub struct CapturedEnv {
    id: EnvId,
    guard: Rc<()>,
}

impl CapturedEnv {
    pub fn id(&self) -> EnvId { self.id }
}


#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<StringSymbol, Object>,
    outer: Option<EnvId>,
}

impl Environment {
    fn new(outer: Option<EnvId>) -> Self {
        Self {
            bindings: HashMap::default(),
            outer,
        }
    }

    pub fn outer(&self) -> Option<EnvId> { self.outer }

    pub fn lookup_local(&self, name: &StringSymbol) -> Option<&Object> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize { self.bindings.len() }

    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }

    // functions bound here that capture this same scope and are referenced from nowhere else
    fn self_captures(&self, id: EnvId) -> usize {
        self.bindings.values()
            .filter(|value| match value {
                Object::Function(fun) => fun.env() == id && Rc::strong_count(fun) == 1,
                _ => false,
            })
            .count()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Active,
    Finished, // released while still captured or enclosing live scopes
    Free,
}

#[derive(Debug)]
struct Slot {
    env: Environment,
    guard: Rc<()>,
    children: usize, // live scopes enclosed by this one
    state: SlotState,
}

impl Slot {
    fn new(outer: Option<EnvId>) -> Self {
        Self {
            env: Environment::new(outer),
            guard: Rc::new(()),
            children: 0,
            state: SlotState::Active,
        }
    }

    fn captures(&self) -> usize {
        Rc::strong_count(&self.guard) - 1
    }
}


const MIN_COLLECT_THRESHOLD: usize = 256;

/**
    Storage for all scopes of an interpreter.

    Scopes refer to their enclosing scope by `EnvId`, so closures that capture a
    scope don't form reference cycles through `Rc`. A scope created for a call or
    block is freed when it is released, unless a closure still captures it or it
    still encloses a live scope. Such scopes are kept on a pending list and freed
    by `collect()` once the last closure holding them is dropped.

    A closure bound inside the scope it captures (a local recursive helper) does
    not keep that scope alive by itself.
*/
#[derive(Debug)]
pub struct EnvArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    pending: Vec<EnvId>,
    collect_threshold: usize,
}

impl Default for EnvArena {
    fn default() -> Self { Self::new() }
}

impl EnvArena {
    pub fn new() -> Self {
        Self {
            slots: vec![ Slot::new(None) ],
            free: Vec::new(),
            pending: Vec::new(),
            collect_threshold: MIN_COLLECT_THRESHOLD,
        }
    }

    pub fn root(&self) -> EnvId { EnvId(0) }

    /// Create a new empty scope enclosed by `outer`.
    pub fn new_enclosed(&mut self, outer: EnvId) -> EnvId {
        let slot = Slot::new(Some(outer));

        let id = match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                EnvId(index)
            },
            None => {
                self.slots.push(slot);
                EnvId(self.slots.len() - 1)
            },
        };

        self.slots[outer.0].children += 1;

        log::trace!("new scope {} enclosed by {}", id.0, outer.0);
        id
    }

    pub fn env(&self, id: EnvId) -> &Environment {
        &self.slots[id.0].env
    }

    /// Look up `name`, walking outward through enclosing scopes.
    pub fn get(&self, id: EnvId, name: &StringSymbol) -> Option<&Object> {
        let mut next = Some(id);
        while let Some(id) = next {
            let env = self.env(id);
            if let Some(value) = env.lookup_local(name) {
                return Some(value);
            }
            next = env.outer();
        }
        None
    }

    /// Bind `name` in the scope `id` itself, never in an enclosing one. Returns the stored value.
    pub fn set(&mut self, id: EnvId, name: StringSymbol, value: Object) -> Object {
        self.slots[id.0].env.bindings.insert(name, value.clone());
        value
    }

    /// Take a hold on `id` for a closure defined in it.
    pub fn capture(&self, id: EnvId) -> CapturedEnv {
        CapturedEnv {
            id,
            guard: self.slots[id.0].guard.clone(),
        }
    }

    /// Number of closures currently holding `id`
    pub fn capture_count(&self, id: EnvId) -> usize {
        self.slots[id.0].captures()
    }

    /// Finish with a scope. It is freed now if nothing refers to it, otherwise once `collect()` finds it unreferenced.
    pub fn release(&mut self, id: EnvId) {
        if id == self.root() || self.slots[id.0].state != SlotState::Active {
            return;
        }

        if self.is_unreferenced(id) {
            self.free_slot(id);
        } else {
            self.slots[id.0].state = SlotState::Finished;
            self.pending.push(id);

            if self.pending.len() >= self.collect_threshold {
                self.collect();
            }
        }
    }

    /// Free every finished scope that is no longer captured or enclosing a live scope.
    pub fn collect(&mut self) {
        let before = self.len();

        loop {
            let mut progress = false;
            let mut idx = 0;
            while idx < self.pending.len() {
                let id = self.pending[idx];
                if self.is_unreferenced(id) {
                    self.pending.swap_remove(idx);
                    self.free_slot(id);
                    progress = true;
                } else {
                    idx += 1;
                }
            }

            if !progress {
                break;
            }
        }

        self.collect_threshold = MIN_COLLECT_THRESHOLD.max(2 * self.pending.len());

        log::debug!("collected {} scopes, {} still captured", before - self.len(), self.pending.len());
    }

    fn is_unreferenced(&self, id: EnvId) -> bool {
        let slot = &self.slots[id.0];
        slot.children == 0 && slot.captures() == slot.env.self_captures(id)
    }

    fn free_slot(&mut self, id: EnvId) {
        let slot = &mut self.slots[id.0];
        let env = mem::take(&mut slot.env);
        slot.state = SlotState::Free;
        self.free.push(id.0);

        if let Some(outer) = env.outer() {
            self.slots[outer.0].children -= 1;
        }

        log::trace!("freed scope {}", id.0);

        // bindings may hold closures over other scopes, those are picked up by the next `collect()`
        drop(env);
    }

    /// Number of live scopes
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
