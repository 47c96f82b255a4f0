//! Basic stream settings pane: resolution, framerate, bitrate.
//!
//! Three navigable items on a two-row layout: the resolution and fps
//! combos side by side, the bitrate field alone below them. Left/Right on
//! the bitrate item nudge the value instead of moving the cursor, with
//! auto-repeat suppression so a held key steps at a readable pace.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::settings::{
    adjust_bitrate, fps_label, high_bitrate, resolution_label, select_fps, select_resolution,
    BITRATE_MAX, BITRATE_MIN, BITRATE_STEP, FPS_PRESETS, RESOLUTION_PRESETS,
};
use crate::ui::components::dropdown::{dropdown, DropdownItem};
use crate::ui::nav::grid::{navigate, step_wrapped, GridMove, PaneGrid};
use crate::ui::nav::repeat::RepeatFilter;
use crate::ui::nav::types::{NavCursor, NavDirection, NavEvent, NavPhase, PaneMode};
use crate::ui::pane::{Pane, PaneCtx};
use crate::ui::theme;

const ITEM_RESOLUTION: usize = 0;
const ITEM_FPS: usize = 1;
const ITEM_BITRATE: usize = 2;

const GRID: PaneGrid = PaneGrid::new(&[2, 1]);

/// Which combo overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComboField {
    Resolution,
    Fps,
}

pub struct BasicPane {
    res_label: String,
    fps_label: String,
    combo: Option<ComboField>,
    combo_index: usize,
    repeat: RepeatFilter,
}

impl BasicPane {
    pub fn new() -> Self {
        Self {
            res_label: String::new(),
            fps_label: String::new(),
            combo: None,
            combo_index: 0,
            repeat: RepeatFilter::new(),
        }
    }

    /// Re-derive both display labels from the current settings.
    fn sync_labels(&mut self, ctx: &PaneCtx) {
        self.res_label = resolution_label(ctx.stream.width, ctx.stream.height);
        self.fps_label = fps_label(ctx.stream.fps);
    }

    fn open_combo(&mut self, ctx: &PaneCtx, field: ComboField) {
        self.combo = Some(field);
        self.combo_index = match field {
            ComboField::Resolution => RESOLUTION_PRESETS
                .iter()
                .position(|p| p.width == ctx.stream.width && p.height == ctx.stream.height)
                .unwrap_or(0),
            ComboField::Fps => FPS_PRESETS
                .iter()
                .position(|p| p.fps == ctx.stream.fps)
                .unwrap_or(0),
        };
    }

    fn commit_combo(&mut self, ctx: &mut PaneCtx, field: ComboField, index: usize) {
        match field {
            ComboField::Resolution => {
                if let Some(preset) = RESOLUTION_PRESETS.get(index) {
                    select_resolution(ctx.stream, preset.width, preset.height);
                }
            }
            ComboField::Fps => {
                if let Some(preset) = FPS_PRESETS.get(index) {
                    select_fps(ctx.stream, preset.fps);
                }
            }
        }
        self.combo = None;
        self.sync_labels(ctx);
    }

    fn overlay_len(&self) -> usize {
        match self.combo {
            Some(ComboField::Resolution) => RESOLUTION_PRESETS.len(),
            Some(ComboField::Fps) => FPS_PRESETS.len(),
            None => 0,
        }
    }

    pub fn render_with_focus(
        &mut self,
        ui: &mut Ui,
        ctx: &mut PaneCtx,
        cursor: &NavCursor,
        focused: bool,
    ) {
        let hovered = |item: usize| focused && cursor.index() == item;

        ui.add_space(4.0);
        ui.label("Resolution and FPS");

        let row_width = ui.available_width().min(360.0);
        ui.horizontal(|ui| {
            let res_items: Vec<DropdownItem> = RESOLUTION_PRESETS
                .iter()
                .map(|p| {
                    let selected =
                        p.width == ctx.stream.width && p.height == ctx.stream.height;
                    DropdownItem::new(p.name, selected)
                })
                .collect();
            let resp = dropdown(
                ui,
                "basic_resolution",
                &self.res_label,
                row_width * 0.6,
                &res_items,
                hovered(ITEM_RESOLUTION),
                self.combo == Some(ComboField::Resolution),
                self.combo_index,
            );
            if resp.toggled {
                match self.combo {
                    Some(ComboField::Resolution) => self.combo = None,
                    _ => self.open_combo(ctx, ComboField::Resolution),
                }
            }
            if let Some(idx) = resp.chosen {
                self.commit_combo(ctx, ComboField::Resolution, idx);
            }

            let fps_items: Vec<DropdownItem> = FPS_PRESETS
                .iter()
                .map(|p| DropdownItem::new(p.name, p.fps == ctx.stream.fps))
                .collect();
            let resp = dropdown(
                ui,
                "basic_fps",
                &self.fps_label,
                row_width * 0.4 - 8.0,
                &fps_items,
                hovered(ITEM_FPS),
                self.combo == Some(ComboField::Fps),
                self.combo_index,
            );
            if resp.toggled {
                match self.combo {
                    Some(ComboField::Fps) => self.combo = None,
                    _ => self.open_combo(ctx, ComboField::Fps),
                }
            }
            if let Some(idx) = resp.chosen {
                self.commit_combo(ctx, ComboField::Fps, idx);
            }
        });

        ui.add_space(8.0);
        ui.label("Video bitrate");

        let mut frame = egui::Frame::NONE.inner_margin(egui::Margin::same(2));
        if hovered(ITEM_BITRATE) {
            frame = frame.stroke(theme::focus_stroke());
        }
        frame.show(ui, |ui| {
            ui.add(
                egui::DragValue::new(&mut ctx.stream.bitrate)
                    .range(BITRATE_MIN..=BITRATE_MAX)
                    .speed(BITRATE_STEP)
                    .suffix(" kbps"),
            );
        });

        if high_bitrate(ctx.stream) {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "{} Too high resolution/fps/bitrate may cause blank screen or crash.",
                    icons::WARNING
                ))
                .color(theme::WARNING),
            );
        }
    }
}

impl Pane for BasicPane {
    fn item_count(&self) -> usize {
        GRID.item_count()
    }

    fn on_open(&mut self, ctx: &mut PaneCtx) {
        // Labels re-sync from the stored settings; the bitrate is left
        // exactly as persisted.
        self.sync_labels(ctx);
        self.combo = None;
    }

    fn mode(&self) -> PaneMode {
        if self.combo.is_some() {
            PaneMode::OverlayActive
        } else {
            PaneMode::Normal
        }
    }

    fn handle_navigation(
        &mut self,
        ctx: &mut PaneCtx,
        event: NavEvent,
        cursor: &mut NavCursor,
    ) -> bool {
        // The open overlay owns input; swallow without acting.
        if self.combo.is_some() {
            return true;
        }

        // On the bitrate item, Left/Right nudge the value instead of
        // moving the cursor. Nudges fire on key-down and are throttled
        // while the key is held.
        if cursor.index() == ITEM_BITRATE
            && matches!(event.direction, NavDirection::Left | NavDirection::Right)
        {
            if !self.repeat.should_suppress(event.phase, event.timestamp_ms) {
                let steps = if event.direction == NavDirection::Left { -1 } else { 1 };
                adjust_bitrate(ctx.stream, steps);
            }
            return true;
        }

        match navigate(&GRID, cursor.index(), event.direction) {
            GridMove::To(target) => {
                // Cursor movement applies on release
                if event.phase == NavPhase::Up {
                    cursor.set(target);
                }
                true
            }
            GridMove::Stay => true,
            GridMove::Exit => false,
        }
    }

    fn overlay_step(&mut self, direction: NavDirection) {
        self.combo_index = step_wrapped(self.combo_index, self.overlay_len(), direction);
    }

    fn activate(&mut self, ctx: &mut PaneCtx, cursor: &NavCursor) {
        if let Some(field) = self.combo {
            let index = self.combo_index;
            self.commit_combo(ctx, field, index);
            return;
        }
        match cursor.index() {
            ITEM_RESOLUTION => self.open_combo(ctx, ComboField::Resolution),
            ITEM_FPS => self.open_combo(ctx, ComboField::Fps),
            _ => {}
        }
    }

    fn back(&mut self) -> bool {
        if self.combo.is_some() {
            self.combo = None;
            return true;
        }
        false
    }

    fn render(&mut self, ui: &mut Ui, ctx: &mut PaneCtx, cursor: &NavCursor) {
        self.render_with_focus(ui, ctx, cursor, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{optimal_bitrate, StreamSettings};
    use crate::ui::nav::types::NavPhase;

    fn stream() -> StreamSettings {
        StreamSettings { width: 1920, height: 1080, fps: 60, bitrate: 20000 }
    }

    fn event(direction: NavDirection, phase: NavPhase, timestamp_ms: u64) -> NavEvent {
        NavEvent { direction, phase, timestamp_ms }
    }

    /// Press-and-release at a timestamp, as a key tap produces.
    fn tap(
        pane: &mut BasicPane,
        ctx: &mut PaneCtx,
        cursor: &mut NavCursor,
        direction: NavDirection,
        at: u64,
    ) -> bool {
        let down = pane.handle_navigation(ctx, event(direction, NavPhase::Down, at), cursor);
        let up = pane.handle_navigation(ctx, event(direction, NavPhase::Up, at + 30), cursor);
        down && up
    }

    #[test]
    fn test_item_count_matches_grid() {
        assert_eq!(BasicPane::new().item_count(), 3);
    }

    #[test]
    fn test_vertical_partition_between_rows() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let mut ctx = PaneCtx { stream: &mut stream };
        let mut cursor = NavCursor::new(pane.item_count());

        assert!(tap(&mut pane, &mut ctx, &mut cursor, NavDirection::Down, 1000));
        assert_eq!(cursor.index(), 2);
        assert!(tap(&mut pane, &mut ctx, &mut cursor, NavDirection::Up, 2000));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_left_on_first_column_propagates() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let mut ctx = PaneCtx { stream: &mut stream };
        let mut cursor = NavCursor::new(pane.item_count());

        let consumed =
            pane.handle_navigation(&mut ctx, event(NavDirection::Left, NavPhase::Down, 0), &mut cursor);
        assert!(!consumed);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_bitrate_nudges_instead_of_moving() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let mut ctx = PaneCtx { stream: &mut stream };
        let mut cursor = NavCursor::new(pane.item_count());
        cursor.set(2);

        let consumed =
            pane.handle_navigation(&mut ctx, event(NavDirection::Right, NavPhase::Down, 1000), &mut cursor);
        assert!(consumed);
        assert_eq!(cursor.index(), 2);
        assert_eq!(ctx.stream.bitrate, 20500);

        pane.handle_navigation(&mut ctx, event(NavDirection::Right, NavPhase::Up, 1030), &mut cursor);
        let consumed =
            pane.handle_navigation(&mut ctx, event(NavDirection::Left, NavPhase::Down, 2000), &mut cursor);
        assert!(consumed);
        assert_eq!(ctx.stream.bitrate, 20000);
    }

    #[test]
    fn test_held_key_nudges_are_throttled() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let mut ctx = PaneCtx { stream: &mut stream };
        let mut cursor = NavCursor::new(pane.item_count());
        cursor.set(2);

        pane.handle_navigation(&mut ctx, event(NavDirection::Right, NavPhase::Down, 1000), &mut cursor);
        assert_eq!(ctx.stream.bitrate, 20500);

        // Repeats inside the delay window are swallowed
        for t in [1016, 1033, 1050, 1100, 1200] {
            pane.handle_navigation(&mut ctx, event(NavDirection::Right, NavPhase::Repeat, t), &mut cursor);
        }
        assert_eq!(ctx.stream.bitrate, 20500);

        // Past the delay the nudge repeats
        pane.handle_navigation(&mut ctx, event(NavDirection::Right, NavPhase::Repeat, 1500), &mut cursor);
        assert_eq!(ctx.stream.bitrate, 21000);
    }

    #[test]
    fn test_overlay_swallows_directions_without_mutation() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let before = stream.clone();
        let mut ctx = PaneCtx { stream: &mut stream };
        let mut cursor = NavCursor::new(pane.item_count());

        pane.open_combo(&ctx, ComboField::Resolution);
        assert_eq!(pane.mode(), PaneMode::OverlayActive);

        for direction in
            [NavDirection::Up, NavDirection::Down, NavDirection::Left, NavDirection::Right]
        {
            for phase in [NavPhase::Down, NavPhase::Repeat, NavPhase::Up] {
                assert!(pane.handle_navigation(&mut ctx, event(direction, phase, 1000), &mut cursor));
            }
        }
        assert_eq!(cursor.index(), 0);
        assert_eq!(*ctx.stream, before);
    }

    #[test]
    fn test_activate_opens_then_commits_combo() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let mut ctx = PaneCtx { stream: &mut stream };
        let cursor = NavCursor::new(pane.item_count());

        pane.on_open(&mut ctx);
        assert_eq!(pane.res_label, "1080P");

        pane.activate(&mut ctx, &cursor);
        assert_eq!(pane.mode(), PaneMode::OverlayActive);
        // Highlight starts on the applied preset (1080P)
        assert_eq!(pane.combo_index, 1);

        // Step to 4K and commit
        pane.overlay_step(NavDirection::Down);
        pane.overlay_step(NavDirection::Down);
        pane.activate(&mut ctx, &cursor);

        assert_eq!(pane.mode(), PaneMode::Normal);
        assert_eq!((ctx.stream.width, ctx.stream.height), (3840, 2160));
        assert_eq!(ctx.stream.bitrate, optimal_bitrate(3840, 2160, 60));
        assert_eq!(pane.res_label, "4K");
    }

    #[test]
    fn test_on_open_syncs_labels_without_touching_bitrate() {
        let mut pane = BasicPane::new();
        let mut stream = StreamSettings { width: 1000, height: 1000, fps: 90, bitrate: 33333 };
        let mut ctx = PaneCtx { stream: &mut stream };

        pane.on_open(&mut ctx);
        assert_eq!(pane.res_label, "1000*1000");
        assert_eq!(pane.fps_label, "90 FPS");
        assert_eq!(ctx.stream.bitrate, 33333);
    }

    #[test]
    fn test_back_closes_overlay() {
        let mut pane = BasicPane::new();
        let mut stream = stream();
        let ctx = PaneCtx { stream: &mut stream };

        assert!(!pane.back());
        pane.open_combo(&ctx, ComboField::Fps);
        assert!(pane.back());
        assert_eq!(pane.mode(), PaneMode::Normal);
    }
}
