use super::*;
use crate::catalog::Catalog;
use crate::placement::PlacementBoard;

fn id(raw: &str) -> ConceptId {
    ConceptId::from(raw)
}

fn catalog() -> Catalog {
    Catalog::builtin()
}

fn empty_board(catalog: &Catalog) -> PlacementBoard {
    PlacementBoard::new(
        catalog.concepts().iter().map(|c| c.id.clone()).collect(),
        catalog.slot_count(),
    )
}

fn place_in_catalog_order(catalog: &Catalog, board: &mut PlacementBoard) {
    for (index, concept_id) in catalog.expected_order().to_vec().into_iter().enumerate() {
        board.drop_on_slot(SlotPosition(index + 1), &concept_id).unwrap();
    }
}

#[test]
fn perfect_sequence_reports_success_without_a_slot_list() {
    let catalog = catalog();
    let mut board = empty_board(&catalog);
    place_in_catalog_order(&catalog, &mut board);

    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::Perfect);
    assert!(report.is_perfect());
    assert!(!report.show_slot_lines());
    assert!(report.headline().starts_with("Congratulations"));
    assert!(report.slots.iter().all(|slot| slot.verdict.is_correct()));
}

#[test]
fn correct_slots_surface_the_concepts_feedback_text() {
    let catalog = catalog();
    let mut board = empty_board(&catalog);
    place_in_catalog_order(&catalog, &mut board);

    let report = evaluate(&catalog, &board);
    for slot in &report.slots {
        let expected = catalog
            .expected_for(slot.position)
            .and_then(|id| catalog.get(id))
            .unwrap();
        assert_eq!(slot.line(), expected.correct_feedback);
    }
}

#[test]
fn empty_board_prompts_to_begin_without_a_slot_list() {
    let catalog = catalog();
    let board = empty_board(&catalog);

    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::NothingPlaced);
    assert!(!report.show_slot_lines());
    assert!(report.headline().contains("to begin"));
    assert!(report
        .slots
        .iter()
        .all(|slot| slot.verdict == SlotVerdict::Unfilled));
}

#[test]
fn swapped_pair_marks_both_slots_misplaced_with_their_hints() {
    let catalog = catalog();
    let mut board = empty_board(&catalog);
    // c2 into slot 1 and c1 into slot 2; the rest in their designated slots.
    board.drop_on_slot(SlotPosition(1), &id("c2")).unwrap();
    board.drop_on_slot(SlotPosition(2), &id("c1")).unwrap();
    board.drop_on_slot(SlotPosition(3), &id("c3")).unwrap();
    board.drop_on_slot(SlotPosition(4), &id("c4")).unwrap();
    board.drop_on_slot(SlotPosition(5), &id("c5")).unwrap();

    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::WrongOrder);
    assert!(report.show_slot_lines());

    let c1 = catalog.get(&id("c1")).unwrap();
    let c2 = catalog.get(&id("c2")).unwrap();
    assert_eq!(
        report.slots[0].verdict,
        SlotVerdict::Misplaced {
            text: c2.text.clone(),
            hint: c2.incorrect_hint.clone(),
        }
    );
    assert_eq!(
        report.slots[1].verdict,
        SlotVerdict::Misplaced {
            text: c1.text.clone(),
            hint: c1.incorrect_hint.clone(),
        }
    );
    assert!(report.slots[0].line().contains(&c2.text));
    assert!(report.slots[0].line().contains(&c2.incorrect_hint));
    assert!(report.slots[2..].iter().all(|slot| slot.verdict.is_correct()));
}

#[test]
fn partially_filled_board_prompts_to_complete_placement() {
    let catalog = catalog();
    let mut board = empty_board(&catalog);
    board.drop_on_slot(SlotPosition(1), &id("c1")).unwrap();
    board.drop_on_slot(SlotPosition(2), &id("c2")).unwrap();
    board.drop_on_slot(SlotPosition(3), &id("c3")).unwrap();

    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::Incomplete);
    assert!(report.show_slot_lines());
    assert_eq!(report.placed, 3);

    let unfilled: Vec<_> = report
        .slots
        .iter()
        .filter(|slot| slot.verdict == SlotVerdict::Unfilled)
        .collect();
    assert_eq!(unfilled.len(), 2);
    assert_eq!(unfilled[0].line(), "Slot 4 is not filled yet.");
    assert_eq!(unfilled[1].line(), "Slot 5 is not filled yet.");
    assert_eq!(
        report
            .slots
            .iter()
            .filter(|slot| slot.verdict.is_correct())
            .count(),
        3
    );
}

#[test]
fn unrecognized_occupant_is_flagged_and_validation_continues() {
    let catalog = catalog();
    // A board seeded with an id the catalog does not know about.
    let mut board = PlacementBoard::new(
        vec![id("zz"), id("c2"), id("c3"), id("c4"), id("c5"), id("c1")],
        catalog.slot_count(),
    );
    board.drop_on_slot(SlotPosition(1), &id("zz")).unwrap();
    board.drop_on_slot(SlotPosition(2), &id("c2")).unwrap();
    board.drop_on_slot(SlotPosition(3), &id("c3")).unwrap();
    board.drop_on_slot(SlotPosition(4), &id("c4")).unwrap();
    board.drop_on_slot(SlotPosition(5), &id("c5")).unwrap();

    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::WrongOrder);
    assert_eq!(
        report.slots[0].verdict,
        SlotVerdict::Unrecognized { occupant: id("zz") }
    );
    assert!(report.slots[0].line().contains("unrecognized item"));
    // The slots after the anomaly still receive their ordinary verdicts.
    assert!(report.slots[1..].iter().all(|slot| slot.verdict.is_correct()));
}

#[test]
fn reset_after_a_failed_check_returns_to_the_begin_prompt() {
    let catalog = catalog();
    let mut board = empty_board(&catalog);
    board.drop_on_slot(SlotPosition(1), &id("c2")).unwrap();
    board.drop_on_slot(SlotPosition(2), &id("c1")).unwrap();
    assert_eq!(evaluate(&catalog, &board).tier(), ReportTier::Incomplete);

    board.reset(catalog.expected_order().to_vec());
    let report = evaluate(&catalog, &board);
    assert_eq!(report.tier(), ReportTier::NothingPlaced);
    assert_eq!(board.source_items().len(), catalog.len());
}
