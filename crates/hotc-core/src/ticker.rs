use crate::constants::{VAR_MARQUEE_END, VAR_MARQUEE_START};
use crate::content::TickerSettings;
use crate::drag::{DragController, TrackEffect, TrackEffects};
use crate::marquee::{LiveOffsets, MarqueeGeometry};

/// Per-mount ticker state: latest geometry, offsets on the track, and the
/// drag controller.
#[derive(Debug)]
pub struct MarqueeTicker {
    settings: TickerSettings,
    geometry: Option<MarqueeGeometry>,
    live: LiveOffsets,
    drag: DragController,
}

impl MarqueeTicker {
    pub fn new(settings: TickerSettings) -> Self {
        Self {
            settings,
            geometry: None,
            live: LiveOffsets::default(),
            drag: DragController::new(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &TickerSettings {
        &self.settings
    }

    #[inline]
    pub fn geometry(&self) -> Option<&MarqueeGeometry> {
        self.geometry.as_ref()
    }

    #[inline]
    pub fn live(&self) -> LiveOffsets {
        self.live
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Recompute from fresh measurements and return the custom properties
    /// to write. While a drag is in progress the start/end positions belong
    /// to the drag, so only speed and gap are returned.
    pub fn measure(
        &mut self,
        base_width_px: f32,
        container_width_px: f32,
    ) -> Vec<(&'static str, String)> {
        let geometry = MarqueeGeometry::compute(
            base_width_px,
            container_width_px,
            self.settings.strip_gap,
            self.settings.speed_seconds,
            self.settings.direction,
        );
        log::debug!(
            "[ticker] measured base={:.1} container={:.1} start={:.1} end={:.1} loop={:.1}",
            base_width_px,
            container_width_px,
            geometry.start_offset_px,
            geometry.end_offset_px,
            geometry.loop_distance()
        );
        let vars = geometry.css_vars();
        let dragging = self.drag.is_dragging();
        if !dragging {
            self.live = geometry.offsets();
        }
        self.geometry = Some(geometry);
        vars.into_iter()
            .filter(|(name, _)| !dragging || (*name != VAR_MARQUEE_START && *name != VAR_MARQUEE_END))
            .collect()
    }

    /// Ignored until the first measurement has placed the track.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<i32>,
        client_x: f32,
        can_capture: bool,
    ) -> TrackEffects {
        if self.geometry.is_none() {
            log::debug!("[drag] press before first measurement ignored");
            return TrackEffects::new();
        }
        self.drag
            .pointer_down(pointer_id, client_x, self.live, can_capture)
    }

    pub fn pointer_move(&mut self, pointer_id: Option<i32>, client_x: f32) -> TrackEffects {
        let fx = self.drag.pointer_move(pointer_id, client_x);
        self.track_offsets(&fx);
        fx
    }

    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> TrackEffects {
        self.drag.pointer_up(pointer_id)
    }

    /// True when the click must be swallowed.
    pub fn click(&mut self) -> bool {
        self.drag.take_click()
    }

    fn track_offsets(&mut self, fx: &TrackEffects) {
        for effect in fx {
            if let TrackEffect::Offsets(o) = effect {
                self.live = *o;
            }
        }
    }
}
