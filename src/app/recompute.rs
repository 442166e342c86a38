//! Verzögerte Neuberechnung nach Layout-Änderungen.
//!
//! Eine Anforderung wird erst nach `settle_frames` Frame-Grenzen fällig.
//! Neuere Anforderungen verdrängen ältere: nur das jeweils neueste Ticket
//! ist gültig, ältere werden beim Ausführen verworfen.

/// Kennung einer angeforderten Neuberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeTicket(u64);

#[derive(Debug, Clone, Copy)]
struct PendingRecompute {
    ticket: RecomputeTicket,
    frames_left: u32,
}

/// Versionszähler mit Frame-Verzögerung.
#[derive(Debug, Clone)]
pub struct RecomputeScheduler {
    settle_frames: u32,
    latest: u64,
    pending: Option<PendingRecompute>,
}

impl RecomputeScheduler {
    /// Erstellt einen Scheduler mit der gegebenen Anzahl Wartezyklen (mindestens 1).
    pub fn new(settle_frames: u32) -> Self {
        Self {
            settle_frames: settle_frames.max(1),
            latest: 0,
            pending: None,
        }
    }

    /// Fordert eine Neuberechnung an.
    ///
    /// Ist bereits eine Anforderung ausstehend, übernimmt sie das neue
    /// Ticket, behält aber ihre Restlaufzeit.
    pub fn request(&mut self) -> RecomputeTicket {
        self.latest += 1;
        let ticket = RecomputeTicket(self.latest);
        match self.pending.as_mut() {
            Some(pending) => pending.ticket = ticket,
            None => {
                self.pending = Some(PendingRecompute {
                    ticket,
                    frames_left: self.settle_frames,
                })
            }
        }
        ticket
    }

    /// Schaltet eine Frame-Grenze weiter und liefert ein fällig gewordenes Ticket.
    pub fn tick(&mut self) -> Option<RecomputeTicket> {
        let pending = self.pending.as_mut()?;
        pending.frames_left = pending.frames_left.saturating_sub(1);
        if pending.frames_left > 0 {
            return None;
        }
        self.pending.take().map(|p| p.ticket)
    }

    /// Gibt zurück, ob das Ticket noch das neueste ist.
    pub fn is_current(&self, ticket: RecomputeTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Gibt zurück, ob eine Neuberechnung aussteht.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for RecomputeScheduler {
    fn default() -> Self {
        Self::new(crate::shared::options::RECOMPUTE_SETTLE_FRAMES)
    }
}
