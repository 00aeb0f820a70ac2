//! The per-frame orchestrator and session loop.
//!
//! One frame in, zero-or-one cursor update and zero-or-more actions out:
//! obtain landmarks, classify, map the index fingertip, run the state
//! machine, forward the cursor move first and then at most one discrete
//! action to the emitter. Single-threaded and synchronous; one frame is
//! fully dispatched before the next is requested, so all pipeline state is
//! owned exclusively by the loop and no locking exists. The stop handle is
//! the only cross-thread surface.

use crate::classifier;
use crate::error::{GestureError, GestureResult};
use crate::interpreter::{FrameInput, GestureInterpreter};
use crate::mapper::CursorMapper;
use crate::perf::PerfMonitor;
use crate::profile_scope;
use crate::settings::Settings;
use crate::types::{ActionEvent, FrameSize, GestureCandidate, LandmarkSet, MouseButton, ScreenPoint};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Source of per-frame hand observations (camera + detector).
///
/// `Ok(None)` is the ordinary no-hand case and must be cheap to return
/// repeatedly; `Err` is a camera-level fault and hard-stops the session.
/// The call is expected to block until the next frame is available - it
/// paces the loop. There is no timeout: a provider that blocks forever
/// stalls the loop. Known limitation, not mitigated here.
pub trait LandmarkProvider {
    fn next(&mut self) -> anyhow::Result<Option<LandmarkSet>>;
}

/// Sink for OS-level pointer actions.
///
/// All calls are synchronous and fire-and-forget from the pipeline's
/// perspective; failures are the collaborator's concern.
pub trait ActionEmitter {
    fn move_cursor(&mut self, x: i32, y: i32);
    fn click(&mut self, button: MouseButton);
    fn mouse_down(&mut self);
    fn mouse_up(&mut self);
    fn scroll(&mut self, ticks: i32);
}

// ============================================================================
// Stop Handle
// ============================================================================

/// Cooperative stop signal for the session loop.
///
/// Cancellation is coarse: the loop ends after the current frame completes,
/// and an in-progress drag is force-released on the way out.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to end after the current frame.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// What one processed frame produced, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Cursor position forwarded this frame, absent when no hand was seen
    pub cursor: Option<ScreenPoint>,
    /// Actions committed this frame, in emission order
    pub events: Vec<ActionEvent>,
}

/// The gesture interpretation pipeline.
///
/// Owns the mapper, the interpreter, and the frame counters; drives the
/// provider and the emitter once per frame.
pub struct Pipeline<P, E> {
    provider: P,
    emitter: E,
    settings: Settings,
    /// Camera frame dimensions in pixels
    frame: FrameSize,
    /// Destination screen dimensions in pixels
    screen: FrameSize,
    mapper: CursorMapper,
    interpreter: GestureInterpreter,
    perf: PerfMonitor,
    /// Frames obtained from the provider (monotonic)
    captured_frames: u64,
    /// Frames that ran classification and the state machine (monotonic)
    processed_frames: u64,
}

impl<P: LandmarkProvider, E: ActionEmitter> Pipeline<P, E> {
    /// Build a pipeline; settings are validated up front.
    pub fn new(
        provider: P,
        emitter: E,
        settings: Settings,
        frame: FrameSize,
        screen: FrameSize,
    ) -> GestureResult<Self> {
        settings.validate()?;
        Ok(Self {
            provider,
            emitter,
            settings: settings.clone(),
            frame,
            screen,
            mapper: CursorMapper::new(),
            interpreter: GestureInterpreter::new(settings),
            perf: PerfMonitor::new(),
            captured_frames: 0,
            processed_frames: 0,
        })
    }

    /// Run the session loop until the stop handle fires or the provider
    /// faults. Every exit path force-releases an active drag before
    /// returning, so the OS pointer button is never left logically down.
    pub fn run(&mut self, stop: &StopHandle) -> GestureResult<()> {
        info!(
            frame = ?self.frame,
            screen = ?self.screen,
            "gesture session started"
        );

        let result = loop {
            if stop.is_stopped() {
                break Ok(());
            }
            if let Err(e) = self.step() {
                break Err(e);
            }
        };

        self.shutdown();
        info!(
            captured = self.captured_frames,
            processed = self.processed_frames,
            avg_frame_ms = format!("{:.2}", self.perf.average_frame_time()),
            "gesture session ended"
        );
        result
    }

    /// Capture one frame from the provider and, unless it falls on a
    /// skipped slot, process it.
    ///
    /// Frame skipping is a pure performance knob: skipped frames still
    /// consume a provider frame (the provider call paces the loop) but run
    /// no classification and tick no counters - counters advance once per
    /// *processed* frame, so a larger skip proportionally lengthens
    /// effective cooldowns in wall-clock time.
    pub fn step(&mut self) -> GestureResult<()> {
        let landmarks = self.provider.next().map_err(GestureError::Provider)?;
        self.captured_frames += 1;

        if self.captured_frames % self.settings.frame_skip as u64 != 0 {
            return Ok(());
        }

        self.perf.begin_frame();
        self.process_frame(landmarks);
        self.perf.end_frame();
        Ok(())
    }

    /// Run one processed frame through the whole pipeline.
    ///
    /// A malformed landmark set degrades to a no-hand frame with a warning;
    /// gesture misdetection is never fatal. The cursor move is forwarded
    /// before any discrete action.
    pub fn process_frame(&mut self, landmarks: Option<LandmarkSet>) -> FrameOutcome {
        profile_scope!("process_frame");
        self.processed_frames += 1;

        let (candidate, observation) =
            match classifier::classify(landmarks.as_ref(), &self.settings) {
                Ok(candidate) => (candidate, landmarks),
                Err(e) => {
                    warn!(error = %e, "malformed landmark set, treating frame as no-hand");
                    (GestureCandidate::absent(), None)
                }
            };

        // Cursor move first. No hand means no mapping: the cursor freezes
        // where it was and the smoothed position is left intact.
        let mut cursor = None;
        let mut index_tip_y = None;
        if let Some(tip) = observation.as_ref().and_then(|set| set.index_tip()) {
            let point = self
                .mapper
                .map((tip.x, tip.y), self.frame, self.screen, &self.settings);
            self.emitter.move_cursor(point.x, point.y);
            cursor = Some(point);
            index_tip_y = Some(tip.y);
        }

        // Then at most one discrete action (plus a possible leading DragEnd).
        let events = self
            .interpreter
            .update(&FrameInput::new(candidate, index_tip_y));
        for event in &events {
            self.dispatch(*event);
        }

        FrameOutcome { cursor, events }
    }

    /// External reset: zero all counters, end an active drag (mouse-up
    /// first), and clear the smoothed cursor position.
    pub fn reset(&mut self) {
        info!("pipeline reset");
        self.release_and_clear();
        self.perf.reset();
    }

    /// Swap in new tuning parameters (settings hot-reload).
    pub fn apply_settings(&mut self, settings: Settings) -> GestureResult<()> {
        settings.validate()?;
        self.settings = settings.clone();
        self.interpreter.set_settings(settings);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }

    pub fn captured_frames(&self) -> u64 {
        self.captured_frames
    }

    pub fn processed_frames(&self) -> u64 {
        self.processed_frames
    }

    /// Session teardown shared by every exit path.
    fn shutdown(&mut self) {
        self.release_and_clear();
    }

    fn release_and_clear(&mut self) {
        if let Some(ActionEvent::DragEnd) = self.interpreter.reset() {
            warn!("drag active at teardown, force-releasing mouse button");
            self.emitter.mouse_up();
        }
        self.mapper.reset();
    }

    /// Forward one committed action to the emitter.
    ///
    /// `DragContinue` intentionally produces no call: the button is already
    /// down and the move was forwarded above.
    fn dispatch(&mut self, event: ActionEvent) {
        match event {
            ActionEvent::LeftClick => self.emitter.click(MouseButton::Left),
            ActionEvent::RightClick => self.emitter.click(MouseButton::Right),
            ActionEvent::DragStart => self.emitter.mouse_down(),
            ActionEvent::DragContinue => {}
            ActionEvent::DragEnd => self.emitter.mouse_up(),
            ActionEvent::Scroll { ticks } => self.emitter.scroll(ticks),
        }
    }
}
