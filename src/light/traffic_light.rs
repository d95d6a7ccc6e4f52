//! Traffic light actor.
//!
//! A [`TrafficLight`] owns its message queue and a background thread
//! that toggles the phase between red and green every 4 to 6 seconds
//! (configurable). Every transition is published onto the queue, where
//! any number of threads can block in [`TrafficLight::wait_for_green`].

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::Rng;

use crate::light::config::LightConfig;
use crate::messaging::queue::{MessageQueue, RecvError};
use crate::phase::Phase;
use crate::utilities::errors::TrafficLightError;
use crate::utilities::logger::Logger;
use crate::utilities::printer::PrinterColor;

/// A traffic light that cycles between red and green on its own thread.
///
/// The light starts red and does nothing until
/// [`simulate`](TrafficLight::simulate) is called. From then on a
/// background thread toggles the phase on a randomized interval and
/// publishes each new phase onto the internal queue.
/// [`stop`](TrafficLight::stop), also run on drop, shuts the cycling
/// thread down and wakes every blocked waiter.
#[derive(Debug)]
pub struct TrafficLight {
    /// Current phase, encoded via `Phase::as_u8`. Written only by the
    /// cycling thread, read from anywhere.
    current_phase: Arc<AtomicU8>,
    /// Transition events, one per toggle.
    queue: Arc<MessageQueue<Phase>>,
    /// Cooperative shutdown flag, checked every loop iteration.
    shutdown: Arc<AtomicBool>,
    /// Handles of spawned cycling threads, joined on stop.
    workers: Mutex<Vec<JoinHandle<()>>>,
    /// Trace collaborator for toggle diagnostics.
    logger: Logger,
    config: LightConfig,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLight {
    /// Create a red light with default timing and a quiet logger.
    pub fn new() -> Self {
        Self {
            current_phase: Arc::new(AtomicU8::new(Phase::Red.as_u8())),
            queue: Arc::new(MessageQueue::new()),
            shutdown: Arc::new(AtomicBool::new(false)),
            workers: Mutex::new(Vec::new()),
            logger: Logger::new(false),
            config: LightConfig::default(),
        }
    }

    /// Create a red light with explicit timing and logging.
    pub fn with_config(config: LightConfig, logger: Logger) -> Result<Self, TrafficLightError> {
        config.validate()?;
        Ok(Self {
            current_phase: Arc::new(AtomicU8::new(Phase::Red.as_u8())),
            queue: Arc::new(MessageQueue::new()),
            shutdown: Arc::new(AtomicBool::new(false)),
            workers: Mutex::new(Vec::new()),
            logger,
            config,
        })
    }

    /// Latest committed phase.
    ///
    /// The cycling thread may toggle concurrently, so the value can be
    /// a moment stale, but it is never torn.
    pub fn current_phase(&self) -> Phase {
        Phase::from_u8(self.current_phase.load(Ordering::SeqCst))
    }

    /// Block until the next green transition is published.
    ///
    /// The queue is an event stream, not a state snapshot: a caller
    /// that arrives while the light is already green still blocks
    /// until the *following* green event, a full red cycle later. Use
    /// [`current_phase`](TrafficLight::current_phase) first if a
    /// snapshot is all you need.
    ///
    /// Returns [`TrafficLightError::Stopped`] if the light is stopped
    /// while waiting.
    pub fn wait_for_green(&self) -> Result<(), TrafficLightError> {
        loop {
            match self.queue.recv() {
                Ok(Phase::Green) => return Ok(()),
                Ok(Phase::Red) => continue,
                Err(RecvError::Closed) => return Err(TrafficLightError::Stopped),
            }
        }
    }

    /// Start the phase cycling thread.
    ///
    /// Intended to be called once per light; every call spawns another
    /// cycling thread against the same shared state.
    pub fn simulate(&self) {
        let worker = CycleWorker {
            current_phase: Arc::clone(&self.current_phase),
            queue: Arc::clone(&self.queue),
            shutdown: Arc::clone(&self.shutdown),
            logger: self.logger.clone(),
            config: self.config,
        };

        let handle = thread::Builder::new()
            .name("traffic-light-cycle".to_string())
            .spawn(move || worker.cycle_through_phases())
            .expect("Failed to spawn traffic light cycle thread");

        self.workers.lock().push(handle);
    }

    /// Stop the cycling thread and wake every blocked waiter.
    ///
    /// Blocked [`wait_for_green`](TrafficLight::wait_for_green) callers
    /// return [`TrafficLightError::Stopped`]. The cycling thread exits
    /// within one poll interval and is joined before this returns.
    /// Idempotent; also run on drop.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.queue.close();

        let workers: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        for worker in workers {
            if worker.join().is_err() {
                log::warn!("traffic light cycle thread panicked");
            }
        }
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State moved onto the cycling thread.
struct CycleWorker {
    current_phase: Arc<AtomicU8>,
    queue: Arc<MessageQueue<Phase>>,
    shutdown: Arc<AtomicBool>,
    logger: Logger,
    config: LightConfig,
}

impl CycleWorker {
    /// Poll-and-toggle loop; runs until the shutdown flag is set.
    ///
    /// Each iteration sleeps one poll interval, then measures the time
    /// since the last toggle. Once the drawn cycle duration has
    /// elapsed, the phase is toggled and published and a fresh duration
    /// is drawn for the next cycle. Toggles are therefore accurate to
    /// within one poll interval of the drawn target.
    fn cycle_through_phases(self) {
        // One generator for the lifetime of the thread; successive
        // draws are independent and uniform.
        let mut rng = rand::rng();
        let mut cycle_duration = self.draw_cycle_duration(&mut rng);
        let mut last_toggle = Instant::now();

        loop {
            thread::sleep(self.config.poll_interval);
            if self.shutdown.load(Ordering::SeqCst) {
                return;
            }

            let elapsed = last_toggle.elapsed();
            if elapsed < cycle_duration {
                continue;
            }

            let phase = self.toggle_phase();
            self.logger.log(
                "info",
                &format!("cycle completed after {}ms", elapsed.as_millis()),
                None,
            );
            self.queue.send(phase);
            last_toggle = Instant::now();
            cycle_duration = self.draw_cycle_duration(&mut rng);
        }
    }

    /// Flip the shared phase and trace the transition.
    fn toggle_phase(&self) -> Phase {
        let next = Phase::from_u8(self.current_phase.load(Ordering::SeqCst)).toggled();
        self.current_phase.store(next.as_u8(), Ordering::SeqCst);

        let color = match next {
            Phase::Red => PrinterColor::BoldRed,
            Phase::Green => PrinterColor::BoldGreen,
        };
        self.logger.log(
            "info",
            &format!(
                "traffic light toggled to {} in thread {:?}",
                next,
                thread::current().id()
            ),
            Some(color),
        );
        next
    }

    /// Draw the next cycle duration uniformly from
    /// `[min_cycle, max_cycle)`.
    fn draw_cycle_duration(&self, rng: &mut impl Rng) -> Duration {
        let min = self.config.min_cycle.as_millis() as u64;
        let max = self.config.max_cycle.as_millis() as u64;
        Duration::from_millis(rng.random_range(min..max))
    }
}
