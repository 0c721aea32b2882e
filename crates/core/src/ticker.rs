use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// When the host should run a pipeline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDiscipline {
    /// Tick only after a scroll or resize notification. Cheap, right for
    /// hosts with reliable event streams.
    EventDriven,
    /// Tick every frame regardless of events. Needed when geometry moves
    /// without scroll events (animated layout, the timeline spotlight).
    Continuous,
}

/// Frame-pump scheduler shared between a pipeline and its host.
///
/// The host calls [`Ticker::should_tick`] once per frame and runs a pass when
/// it returns true. Event-driven tickers arm on [`Ticker::request`] and
/// disarm when the frame consumes them; continuous tickers always fire. A
/// cancelled ticker never fires again.
///
/// The flags are shared atomics so a [`TickerHandle`] can request or cancel
/// from outside the frame loop (a resize observer, a drop guard, another
/// thread).
#[derive(Debug, Clone)]
pub struct Ticker {
    discipline: TickDiscipline,
    dirty: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    /// New ticker, armed for an initial pass.
    pub fn new(discipline: TickDiscipline) -> Self {
        Self {
            discipline,
            dirty: Arc::new(AtomicBool::new(true)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn discipline(&self) -> TickDiscipline {
        self.discipline
    }

    /// A handle sharing this ticker's flags.
    pub fn handle(&self) -> TickerHandle {
        TickerHandle {
            dirty: Arc::clone(&self.dirty),
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Arm the next frame. Idempotent between frames.
    pub fn request(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Stop the ticker for good.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Whether the current frame should run a pass. Consumes the armed flag
    /// in event-driven mode.
    pub fn should_tick(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        match self.discipline {
            TickDiscipline::Continuous => true,
            TickDiscipline::EventDriven => self.dirty.swap(false, Ordering::AcqRel),
        }
    }
}

/// Remote control for a [`Ticker`].
#[derive(Debug, Clone)]
pub struct TickerHandle {
    dirty: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn request(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_driven_fires_once_per_request() {
        let ticker = Ticker::new(TickDiscipline::EventDriven);
        // Armed on construction for the initial paint.
        assert!(ticker.should_tick());
        assert!(!ticker.should_tick());

        ticker.request();
        ticker.request();
        assert!(ticker.should_tick());
        assert!(!ticker.should_tick());
    }

    #[test]
    fn continuous_always_fires() {
        let ticker = Ticker::new(TickDiscipline::Continuous);
        for _ in 0..3 {
            assert!(ticker.should_tick());
        }
    }

    #[test]
    fn cancel_wins_over_everything() {
        let ticker = Ticker::new(TickDiscipline::Continuous);
        let handle = ticker.handle();
        handle.cancel();
        assert!(ticker.is_cancelled());
        assert!(!ticker.should_tick());

        ticker.request();
        assert!(!ticker.should_tick());
    }

    #[test]
    fn handle_arms_the_ticker() {
        let ticker = Ticker::new(TickDiscipline::EventDriven);
        assert!(ticker.should_tick());

        let handle = ticker.handle();
        handle.request();
        assert!(ticker.should_tick());
    }
}
