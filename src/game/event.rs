//! Event system
//!
//! Events decouple the simulation from presentation side effects: the
//! session sends them while it updates, and the frame loop drains them
//! afterwards for console feedback. Queues are typed, collected during
//! the frame and drained at a single point.

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
pub struct Events {
    /// A coin was picked up
    pub coin_collected: EventQueue<CoinCollectedEvent>,

    /// The player lost a life
    pub damage: EventQueue<DamageEvent>,

    /// The player ran out of lives
    pub death: EventQueue<DeathEvent>,

    /// The session was restarted after a game over
    pub restart: EventQueue<RestartEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            coin_collected: EventQueue::new(),
            damage: EventQueue::new(),
            death: EventQueue::new(),
            restart: EventQueue::new(),
        }
    }

    /// Clear all event queues
    pub fn clear_all(&mut self) {
        self.coin_collected.clear();
        self.damage.clear();
        self.death.clear();
        self.restart.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A coin was picked up
#[derive(Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    /// Running total after this pickup
    pub collected: u32,
    /// Coins in the level
    pub total: u32,
}

/// The player lost a life this frame
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub lives_left: u32,
}

/// The player ran out of lives
#[derive(Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Final coin count for the session
    pub coins_collected: u32,
}

/// The session restarted after a game over
#[derive(Debug, Clone, Copy)]
pub struct RestartEvent;
