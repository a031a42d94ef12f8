//! Activity source for the PineTime
//!
//! No step counting driver runs on the watch yet, so every total is
//! reported as missing. Access is gated by the wearer's consent flag.

use watchface::sources::{ActivityProvider, PermissionRegistry};

pub struct ActivityTracker {
    consent: bool,
}

impl ActivityTracker {
    pub fn new(consent: bool) -> Self {
        Self { consent }
    }
}

impl ActivityProvider for ActivityTracker {
    fn steps(&self) -> Option<u32> {
        None
    }

    fn calories(&self) -> Option<u32> {
        None
    }

    fn distance_m(&self) -> Option<u32> {
        None
    }
}

impl PermissionRegistry for ActivityTracker {
    fn activity_granted(&self) -> bool {
        self.consent
    }
}
