//! Pointer drag over the ticker track.
//!
//! The controller never touches the DOM. Each transition returns the
//! [`TrackEffect`]s the browser layer must apply, in order.

use smallvec::{smallvec, SmallVec};

use crate::constants::DRAG_CLICK_SUPPRESS_PX;
use crate::marquee::LiveOffsets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    pub fn as_css(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackEffect {
    CapturePointer(i32),
    ReleasePointer(i32),
    Play(PlayState),
    Cursor(Cursor),
    Offsets(LiveOffsets),
}

pub type TrackEffects = SmallVec<[TrackEffect; 4]>;

/// Snapshot taken on pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: Option<i32>,
    /// Set when pointer capture was requested for `pointer_id`.
    pub captured: bool,
    pub start_client_x: f32,
    pub start_offset_px: f32,
    pub end_offset_at_start: f32,
}

impl DragSession {
    #[inline]
    pub fn delta(&self, client_x: f32) -> f32 {
        client_x - self.start_client_x
    }

    #[inline]
    pub fn offsets_at(&self, client_x: f32) -> LiveOffsets {
        LiveOffsets {
            start_px: self.start_offset_px,
            end_px: self.end_offset_at_start,
        }
        .shifted(self.delta(client_x))
    }

    fn accepts(&self, pointer_id: Option<i32>) -> bool {
        match (self.pointer_id, pointer_id) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    // Outlives the session: the click fires after pointer-up.
    suppress_next_click: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    #[inline]
    pub fn suppresses_next_click(&self) -> bool {
        self.suppress_next_click
    }

    /// Begin a session from the offsets currently on the track. A second
    /// pointer-down restarts the session from wherever the track is now.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<i32>,
        client_x: f32,
        current: LiveOffsets,
        can_capture: bool,
    ) -> TrackEffects {
        let capture = if can_capture { pointer_id } else { None };
        self.state = DragState::Dragging(DragSession {
            pointer_id,
            captured: capture.is_some(),
            start_client_x: client_x,
            start_offset_px: current.start_px,
            end_offset_at_start: current.end_px,
        });
        self.suppress_next_click = false;
        log::debug!("[drag] begin at x={:.1} pointer={:?}", client_x, pointer_id);

        let mut fx: TrackEffects = smallvec![];
        if let Some(id) = capture {
            fx.push(TrackEffect::CapturePointer(id));
        }
        fx.push(TrackEffect::Play(PlayState::Paused));
        fx.push(TrackEffect::Cursor(Cursor::Grabbing));
        fx
    }

    /// Moves while idle, or from another pointer, are ignored.
    pub fn pointer_move(&mut self, pointer_id: Option<i32>, client_x: f32) -> TrackEffects {
        let DragState::Dragging(session) = self.state else {
            return TrackEffects::new();
        };
        if !session.accepts(pointer_id) {
            return TrackEffects::new();
        }
        if session.delta(client_x).abs() > DRAG_CLICK_SUPPRESS_PX {
            self.suppress_next_click = true;
        }
        smallvec![TrackEffect::Offsets(session.offsets_at(client_x))]
    }

    /// Pointer-up and pointer-cancel both end the session.
    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> TrackEffects {
        let DragState::Dragging(session) = self.state else {
            return TrackEffects::new();
        };
        if !session.accepts(pointer_id) {
            return TrackEffects::new();
        }
        self.state = DragState::Idle;
        log::debug!(
            "[drag] end pointer={:?} suppress_click={}",
            session.pointer_id,
            self.suppress_next_click
        );

        let mut fx: TrackEffects = smallvec![];
        if let (true, Some(id)) = (session.captured, session.pointer_id) {
            fx.push(TrackEffect::ReleasePointer(id));
        }
        fx.push(TrackEffect::Play(PlayState::Running));
        fx.push(TrackEffect::Cursor(Cursor::Grab));
        fx
    }

    /// Capture-phase click. Returns true exactly once after a real drag,
    /// meaning the click must be cancelled.
    pub fn take_click(&mut self) -> bool {
        std::mem::replace(&mut self.suppress_next_click, false)
    }
}
