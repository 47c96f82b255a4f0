//! Keyboard/gamepad-compatible dropdown.
//!
//! The caller owns the open state and the highlighted index; this only
//! draws the button and the popup list and reports what was clicked.
//! Directional navigation and commit-on-activate are handled by the
//! owning page, so mouse and key input land on the same state.

use eframe::egui;

use crate::ui::theme;

pub struct DropdownItem {
    pub label: String,
    /// Whether this item is the currently applied value.
    pub is_selected: bool,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>, is_selected: bool) -> Self {
        Self { label: label.into(), is_selected }
    }
}

pub struct DropdownResponse {
    /// Button was clicked; caller should toggle the open state.
    pub toggled: bool,
    /// An item was clicked; caller should close and apply it.
    pub chosen: Option<usize>,
}

pub fn dropdown(
    ui: &mut egui::Ui,
    id: &str,
    button_text: &str,
    width: f32,
    items: &[DropdownItem],
    focused: bool,
    open: bool,
    highlight: usize,
) -> DropdownResponse {
    let mut response = DropdownResponse { toggled: false, chosen: None };

    let mut button = egui::Button::new(format!("{} \u{25BC}", button_text));
    if focused {
        button = button.stroke(theme::focus_stroke());
    }
    let btn = ui.add_sized([width, 24.0], button);
    if btn.clicked() {
        response.toggled = true;
    }

    if open {
        let popup_id = ui.make_persistent_id(format!("dropdown_popup_{}", id));

        egui::Popup::from_response(&btn)
            .id(popup_id)
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show(|ui| {
                ui.set_min_width(width);

                for (idx, item) in items.iter().enumerate() {
                    let highlighted = idx == highlight;
                    let label = if highlighted {
                        format!("\u{25B6} {}", item.label)
                    } else {
                        format!("  {}", item.label)
                    };
                    let row = ui.selectable_label(item.is_selected || highlighted, label);
                    if row.clicked() {
                        response.chosen = Some(idx);
                    }
                }
            });
    }

    response
}
