use proptest::prelude::*;
use sheetfold_core::{BendDirection, ValidationError};
use sheetfold_designer::model::{FoldEnd, FoldId, GeometryModel, Point};

fn model_with_sheet(width: f64, height: f64) -> GeometryModel {
    let mut model = GeometryModel::new();
    model.set_sheet(width, height).unwrap();
    model
}

#[test]
fn test_new_model_is_empty() {
    let model = GeometryModel::new();
    assert!(!model.is_present());
    assert!(model.sheet().is_none());
    assert_eq!(model.fold_count(), 0);
}

#[test]
fn test_set_sheet_valid() {
    let mut model = GeometryModel::new();
    let sheet = model.set_sheet(500.0, 300.0).unwrap();
    assert_eq!(sheet.width(), 500.0);
    assert_eq!(sheet.height(), 300.0);
    assert!(model.is_present());
}

#[test]
fn test_set_sheet_rejects_non_positive_and_non_finite() {
    for (w, h) in [
        (0.0, 300.0),
        (500.0, 0.0),
        (-1.0, 300.0),
        (500.0, -20.0),
        (f64::NAN, 300.0),
        (500.0, f64::INFINITY),
    ] {
        let mut model = GeometryModel::new();
        assert_eq!(model.set_sheet(w, h), Err(ValidationError::InvalidSheet));
        assert!(!model.is_present(), "{}x{} should not create a sheet", w, h);
    }
}

#[test]
fn test_failed_set_sheet_drops_previous_sheet_and_folds() {
    let mut model = model_with_sheet(500.0, 300.0);
    model.add_fold(100.0, BendDirection::Up).unwrap();

    assert!(model.set_sheet(-5.0, 300.0).is_err());
    assert!(!model.is_present());
    assert_eq!(model.fold_count(), 0);
}

#[test]
fn test_resizing_sheet_clamps_existing_folds() {
    let mut model = model_with_sheet(500.0, 300.0);
    let id = model.add_fold(400.0, BendDirection::Down).unwrap();

    model.set_sheet(200.0, 100.0).unwrap();
    let fold = model.fold(id).unwrap();
    assert_eq!(fold.start, Point::new(200.0, 0.0));
    assert_eq!(fold.end, Point::new(200.0, 100.0));
    assert_eq!(fold.direction, BendDirection::Down);
}

#[test]
fn test_add_fold_is_full_span() {
    let mut model = model_with_sheet(500.0, 300.0);
    let id = model.add_fold(250.0, BendDirection::Up).unwrap();
    assert_eq!(id, FoldId::new(0));

    let fold = model.fold(id).unwrap();
    assert_eq!(fold.start, Point::new(250.0, 0.0));
    assert_eq!(fold.end, Point::new(250.0, 300.0));
    assert!(fold.is_full_span(model.sheet().unwrap()));
    assert_eq!(fold.length(), 300.0);
}

#[test]
fn test_add_fold_requires_sheet() {
    let mut model = GeometryModel::new();
    assert_eq!(
        model.add_fold(10.0, BendDirection::Up),
        Err(ValidationError::SheetMissing)
    );
}

#[test]
fn test_add_fold_position_bounds_are_exclusive() {
    let mut model = model_with_sheet(500.0, 300.0);
    for pos in [0.0, 500.0, -1.0, 501.0, f64::NAN] {
        let err = model.add_fold(pos, BendDirection::Up).unwrap_err();
        assert!(matches!(err, ValidationError::FoldOutOfRange { .. }));
    }
    assert_eq!(model.fold_count(), 0);

    assert!(model.add_fold(0.001, BendDirection::Up).is_ok());
    assert!(model.add_fold(499.999, BendDirection::Down).is_ok());
    assert_eq!(model.fold_count(), 2);
}

#[test]
fn test_folds_keep_insertion_order() {
    let mut model = model_with_sheet(500.0, 300.0);
    for pos in [300.0, 100.0, 200.0] {
        model.add_fold(pos, BendDirection::Up).unwrap();
    }
    let xs: Vec<f64> = model.folds().iter().map(|f| f.start.x).collect();
    assert_eq!(xs, vec![300.0, 100.0, 200.0]);
}

#[test]
fn test_remove_last_fold_on_empty_is_noop() {
    let mut model = model_with_sheet(500.0, 300.0);
    let before = model.clone();
    assert!(model.remove_last_fold().is_none());
    assert_eq!(model, before);
}

#[test]
fn test_remove_last_fold_drops_highest_index() {
    let mut model = model_with_sheet(500.0, 300.0);
    model.add_fold(100.0, BendDirection::Up).unwrap();
    model.add_fold(200.0, BendDirection::Down).unwrap();

    let removed = model.remove_last_fold().unwrap();
    assert_eq!(removed.start.x, 200.0);
    assert_eq!(model.fold_count(), 1);
    assert_eq!(model.folds()[0].start.x, 100.0);
}

#[test]
fn test_set_fold_endpoint_clamps() {
    let mut model = model_with_sheet(500.0, 300.0);
    let id = model.add_fold(250.0, BendDirection::Up).unwrap();

    assert!(model
        .set_fold_endpoint(id, FoldEnd::Start, Point::new(-40.0, -10.0))
        .unwrap());
    assert!(model
        .set_fold_endpoint(id, FoldEnd::End, Point::new(900.0, 1000.0))
        .unwrap());

    let fold = model.fold(id).unwrap();
    assert_eq!(fold.start, Point::new(0.0, 0.0));
    assert_eq!(fold.end, Point::new(500.0, 300.0));
    assert!(!fold.is_full_span(model.sheet().unwrap()));
}

#[test]
fn test_set_fold_endpoint_is_idempotent() {
    let mut model = model_with_sheet(500.0, 300.0);
    let id = model.add_fold(250.0, BendDirection::Up).unwrap();
    let target = Point::new(120.0, 40.0);

    assert!(model.set_fold_endpoint(id, FoldEnd::Start, target).unwrap());
    let once = model.clone();
    assert!(!model.set_fold_endpoint(id, FoldEnd::Start, target).unwrap());
    assert_eq!(model, once);
}

#[test]
fn test_set_fold_endpoint_ignores_non_finite_points() {
    let mut model = model_with_sheet(500.0, 300.0);
    let id = model.add_fold(250.0, BendDirection::Up).unwrap();
    let changed = model
        .set_fold_endpoint(id, FoldEnd::End, Point::new(f64::NAN, 10.0))
        .unwrap();
    assert!(!changed);
    assert_eq!(model.fold(id).unwrap().end, Point::new(250.0, 300.0));
}

#[test]
fn test_set_fold_endpoint_unknown_fold() {
    let mut model = model_with_sheet(500.0, 300.0);
    let err = model
        .set_fold_endpoint(FoldId::new(3), FoldEnd::Start, Point::new(1.0, 1.0))
        .unwrap_err();
    assert_eq!(err, ValidationError::UnknownFold { index: 3 });
    assert_eq!(err.to_string(), "Fold line 3 does not exist.");
}

#[test]
fn test_clear_removes_everything() {
    let mut model = model_with_sheet(500.0, 300.0);
    model.add_fold(100.0, BendDirection::Up).unwrap();
    model.clear();
    assert!(!model.is_present());
    assert_eq!(model.fold_count(), 0);
}

proptest! {
    #[test]
    fn prop_endpoints_stay_on_sheet(
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        use_end in any::<bool>(),
    ) {
        let mut model = model_with_sheet(width, height);
        let id = model.add_fold(width / 2.0, BendDirection::Up).unwrap();
        let end = if use_end { FoldEnd::End } else { FoldEnd::Start };

        model.set_fold_endpoint(id, end, Point::new(x, y)).unwrap();

        let sheet = *model.sheet().unwrap();
        let fold = model.fold(id).unwrap();
        prop_assert!(sheet.contains(fold.start));
        prop_assert!(sheet.contains(fold.end));
    }

    #[test]
    fn prop_resize_keeps_folds_on_sheet(
        first in 10.0f64..1000.0,
        second_w in 1.0f64..1000.0,
        second_h in 1.0f64..1000.0,
    ) {
        let mut model = model_with_sheet(first, first);
        model.add_fold(first * 0.75, BendDirection::Down).unwrap();
        model.set_sheet(second_w, second_h).unwrap();

        let sheet = *model.sheet().unwrap();
        for fold in model.folds() {
            prop_assert!(sheet.contains(fold.start));
            prop_assert!(sheet.contains(fold.end));
        }
    }
}
