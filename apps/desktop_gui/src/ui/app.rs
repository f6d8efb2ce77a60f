//! App shell for the sequencer quiz: drag-and-drop board plus feedback panel.

use eframe::egui;
use quiz_core::{
    evaluate, Catalog, ConceptId, PlacementBoard, ReportTier, SequenceReport, SlotPosition,
    SlotVerdict,
};
use rand::rngs::StdRng;
use tracing::warn;

use crate::ui::theme::{self, SlotTone};

pub struct SequencerApp {
    catalog: Catalog,
    board: PlacementBoard,
    rng: StdRng,
    /// Result of the last check; cleared on reset. Slot coloring is derived
    /// from this and persists until the next check or reset.
    report: Option<SequenceReport>,
}

impl SequencerApp {
    pub fn new(catalog: Catalog, mut rng: StdRng) -> Self {
        let board = catalog.board(&mut rng);
        Self {
            catalog,
            board,
            rng,
            report: None,
        }
    }

    fn check(&mut self) {
        self.report = Some(evaluate(&self.catalog, &self.board));
    }

    fn reset(&mut self) {
        let order = self.catalog.shuffled_ids(&mut self.rng);
        self.board.reset(order);
        self.report = None;
    }

    fn slot_tone(&self, position: SlotPosition) -> Option<SlotTone> {
        let report = self.report.as_ref()?;
        let slot = report.slots.get(position.0.checked_sub(1)?)?;
        match slot.verdict {
            SlotVerdict::Unfilled => None,
            SlotVerdict::Correct { .. } => Some(SlotTone::Correct),
            SlotVerdict::Misplaced { .. } | SlotVerdict::Unrecognized { .. } => {
                Some(SlotTone::Incorrect)
            }
        }
    }

    fn concept_entry(&self, ui: &mut egui::Ui, id: &ConceptId) {
        let label = self
            .catalog
            .get(id)
            .map(|concept| concept.text.clone())
            .unwrap_or_else(|| id.to_string());
        let dragged_now = egui::DragAndDrop::payload::<ConceptId>(ui.ctx())
            .is_some_and(|payload| payload.as_ref() == id);

        ui.dnd_drag_source(
            egui::Id::new(("concept-entry", id.as_str())),
            id.clone(),
            |ui| {
                let text = if dragged_now {
                    egui::RichText::new(label).weak()
                } else {
                    egui::RichText::new(label).strong()
                };
                egui::Frame::none()
                    .fill(ui.visuals().extreme_bg_color)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.inactive.bg_stroke.color,
                    ))
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width().max(160.0));
                        ui.label(text);
                    });
            },
        );
    }

    fn slot_zone(&mut self, ui: &mut egui::Ui, position: SlotPosition) {
        let tone = self.slot_tone(position);
        let occupant = self.board.occupant(position).cloned();
        let frame = egui::Frame::none()
            .fill(theme::slot_fill(tone, ui.visuals()))
            .stroke(theme::slot_stroke(tone, ui.visuals()))
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8));

        let (zone, dropped) = ui.dnd_drop_zone::<ConceptId, ()>(frame, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{position}."))
                        .strong()
                        .size(16.0),
                );
                match &occupant {
                    Some(id) => self.concept_entry(ui, id),
                    None => {
                        ui.weak("Drop a concept here");
                    }
                }
            });
        });

        if zone.response.dnd_hover_payload::<ConceptId>().is_some() {
            ui.painter().rect_stroke(
                zone.response.rect,
                egui::Rounding::same(8),
                theme::hover_stroke(),
                egui::StrokeKind::Middle,
            );
        }
        if let Some(dragged) = dropped {
            if let Err(err) = self.board.drop_on_slot(position, &dragged) {
                warn!(%err, slot = position.0, "rejected drop on slot");
            }
        }
    }

    fn slot_column(&mut self, ui: &mut egui::Ui) {
        ui.heading("Program structure");
        ui.small("Order the concepts from the top of the sketch down to the main loop.");
        ui.add_space(6.0);
        for position in (1..=self.board.slot_count()).map(SlotPosition) {
            self.slot_zone(ui, position);
            ui.add_space(6.0);
        }
    }

    fn source_column(&mut self, ui: &mut egui::Ui) {
        ui.heading("Available concepts");
        ui.small("Drag a concept into a slot. Drop it back here to unplace it.");
        ui.add_space(6.0);

        let frame = egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(8, 8));
        let items: Vec<ConceptId> = self.board.source_items().to_vec();

        let (zone, dropped) = ui.dnd_drop_zone::<ConceptId, ()>(frame, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(120.0);
            if items.is_empty() {
                ui.weak("All concepts are placed.");
            }
            for id in &items {
                self.concept_entry(ui, id);
                ui.add_space(4.0);
            }
        });

        if zone.response.dnd_hover_payload::<ConceptId>().is_some() {
            ui.painter().rect_stroke(
                zone.response.rect,
                egui::Rounding::same(8),
                theme::hover_stroke(),
                egui::StrokeKind::Middle,
            );
        }
        if let Some(dragged) = dropped {
            if let Err(err) = self.board.drop_on_source(&dragged) {
                warn!(%err, "rejected drop on source list");
            }
        }
    }

    fn controls_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let check = egui::Button::new(egui::RichText::new("Check sequence").strong())
                .fill(theme::ACCENT);
            if ui.add(check).clicked() {
                self.check();
            }
            if ui.button("Reset quiz").clicked() {
                self.reset();
            }
        });
    }

    fn feedback_panel(&self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            ui.weak("Click \"Check sequence\" once every concept is placed.");
            return;
        };

        let headline = egui::RichText::new(report.headline());
        let headline = match report.tier() {
            ReportTier::Perfect => headline.color(theme::CORRECT_TEXT).strong(),
            ReportTier::NothingPlaced => headline,
            ReportTier::Incomplete | ReportTier::WrongOrder => headline.strong(),
        };
        ui.label(headline);

        if report.show_slot_lines() {
            ui.add_space(4.0);
            for slot in &report.slots {
                ui.label(
                    egui::RichText::new(slot.line())
                        .color(theme::verdict_text_color(&slot.verdict, ui.visuals())),
                );
            }
        }
    }
}

impl eframe::App for SequencerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Sketch Structure Sequencer");
            ui.small(
                "Arrange the building blocks of an Arduino sketch into the order \
                 they appear in a program.",
            );
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("feedback_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            self.controls_row(ui);
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    self.feedback_panel(ui);
                });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    self.slot_column(&mut columns[0]);
                    self.source_column(&mut columns[1]);
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app() -> SequencerApp {
        SequencerApp::new(Catalog::builtin(), StdRng::seed_from_u64(11))
    }

    #[test]
    fn starts_with_everything_unplaced_and_no_report() {
        let app = app();
        assert!(app.report.is_none());
        assert_eq!(app.board.placed_count(), 0);
        assert_eq!(app.board.source_items().len(), app.catalog.len());
    }

    #[test]
    fn slot_tones_track_the_last_report() {
        let mut app = app();
        let first = app.catalog.expected_order()[0].clone();
        let third = app.catalog.expected_order()[2].clone();
        app.board.drop_on_slot(SlotPosition(1), &first).unwrap();
        app.board.drop_on_slot(SlotPosition(2), &third).unwrap();
        app.check();

        assert_eq!(app.slot_tone(SlotPosition(1)), Some(SlotTone::Correct));
        assert_eq!(app.slot_tone(SlotPosition(2)), Some(SlotTone::Incorrect));
        assert_eq!(app.slot_tone(SlotPosition(3)), None);
    }

    #[test]
    fn reset_clears_the_report_and_unplaces_everything() {
        let mut app = app();
        let first = app.catalog.expected_order()[0].clone();
        app.board.drop_on_slot(SlotPosition(1), &first).unwrap();
        app.check();
        assert!(app.report.is_some());

        app.reset();
        assert!(app.report.is_none());
        assert_eq!(app.board.placed_count(), 0);
        assert_eq!(app.board.source_items().len(), app.catalog.len());
    }

    #[test]
    fn reset_is_idempotent_beyond_the_reshuffle() {
        let mut app = app();
        app.reset();
        let placed_after_one = app.board.placed_count();
        app.reset();
        assert_eq!(app.board.placed_count(), placed_after_one);
        assert_eq!(app.board.source_items().len(), app.catalog.len());
        assert!(app.report.is_none());
    }
}
