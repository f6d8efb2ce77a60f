//! Visual states for slots and entries: idle, drag hover, correct, and
//! incorrect — the counterparts of the page styling the quiz started with.

use eframe::egui;

/// Correctness tone a slot carries after a check, until the next check or
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTone {
    Correct,
    Incorrect,
}

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);
pub const CORRECT_TEXT: egui::Color32 = egui::Color32::from_rgb(67, 181, 129);
pub const INCORRECT_TEXT: egui::Color32 = egui::Color32::from_rgb(240, 71, 71);

const CORRECT_FILL: egui::Color32 = egui::Color32::from_rgb(34, 64, 48);
const CORRECT_STROKE: egui::Color32 = egui::Color32::from_rgb(67, 181, 129);
const INCORRECT_FILL: egui::Color32 = egui::Color32::from_rgb(96, 38, 38);
const INCORRECT_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);

pub fn slot_fill(tone: Option<SlotTone>, visuals: &egui::Visuals) -> egui::Color32 {
    match tone {
        Some(SlotTone::Correct) => CORRECT_FILL,
        Some(SlotTone::Incorrect) => INCORRECT_FILL,
        None => visuals.faint_bg_color,
    }
}

pub fn slot_stroke(tone: Option<SlotTone>, visuals: &egui::Visuals) -> egui::Stroke {
    match tone {
        Some(SlotTone::Correct) => egui::Stroke::new(1.0, CORRECT_STROKE),
        Some(SlotTone::Incorrect) => egui::Stroke::new(1.0, INCORRECT_STROKE),
        None => egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color),
    }
}

/// Stroke painted over a drop zone while a dragged entry hovers it.
pub fn hover_stroke() -> egui::Stroke {
    egui::Stroke::new(2.0, ACCENT)
}

pub fn verdict_text_color(
    verdict: &quiz_core::SlotVerdict,
    visuals: &egui::Visuals,
) -> egui::Color32 {
    match verdict {
        quiz_core::SlotVerdict::Correct { .. } => CORRECT_TEXT,
        quiz_core::SlotVerdict::Misplaced { .. } | quiz_core::SlotVerdict::Unrecognized { .. } => {
            INCORRECT_TEXT
        }
        quiz_core::SlotVerdict::Unfilled => visuals.weak_text_color(),
    }
}
