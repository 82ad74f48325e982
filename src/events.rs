//! Semantic gesture events and the emitter that delivers them.
//!
//! The controller owns one [`EventEmitter`]; hosts subscribe through
//! [`GestureController::on`](crate::controller::GestureController::on).

use std::fmt;

use glam::Vec3;
use serde::Serialize;

use crate::input::InputEvent;

/// Event kinds listeners subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEventKind {
    /// Pointer moved over the surface.
    Hover,
    /// Press released without moving past the click slop.
    Click,
    /// Secondary press released without moving past the click slop.
    RightClick,
}

/// A semantic event produced by the gesture classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer moved over the surface.
    Hover {
        /// The move that produced it.
        input: InputEvent,
    },
    /// A committed click.
    Click {
        /// The release that produced it.
        input: InputEvent,
        /// Point on the reference plane under the cursor, if the view ray
        /// hits it.
        world_point: Option<Vec3>,
    },
    /// A committed right-click.
    RightClick {
        /// The release that produced it.
        input: InputEvent,
    },
}

impl GestureEvent {
    /// Kind tag used for listener lookup.
    #[must_use]
    pub fn kind(&self) -> GestureEventKind {
        match self {
            Self::Hover { .. } => GestureEventKind::Hover,
            Self::Click { .. } => GestureEventKind::Click,
            Self::RightClick { .. } => GestureEventKind::RightClick,
        }
    }

    /// The raw input carried by the event.
    #[must_use]
    pub fn input(&self) -> &InputEvent {
        match self {
            Self::Hover { input }
            | Self::Click { input, .. }
            | Self::RightClick { input } => input,
        }
    }
}

/// Handle returned by [`EventEmitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GestureEvent)>;

/// Registry of gesture listeners keyed by event kind.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<(ListenerId, GestureEventKind, Listener)>,
    next_id: u64,
}

impl EventEmitter {
    /// Create an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to events of `kind`.
    pub fn on<F>(&mut self, kind: GestureEventKind, handler: F) -> ListenerId
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, Box::new(handler)));
        id
    }

    /// Unsubscribe a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Whether anything listens for `kind`.
    #[must_use]
    pub fn has_listeners(&self, kind: GestureEventKind) -> bool {
        self.listeners.iter().any(|(_, k, _)| *k == kind)
    }

    /// Deliver `event` to every listener of its kind, in subscription
    /// order.
    pub fn emit(&mut self, event: &GestureEvent) {
        let kind = event.kind();
        for (_, _, handler) in
            self.listeners.iter_mut().filter(|(_, k, _)| *k == kind)
        {
            handler(event);
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
