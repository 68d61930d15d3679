//! Integration tests: data model + figure composition
//!
//! These tests exercise the composed figure description directly and
//! verify the documented panel contract: panel count and order, marker
//! placement, squared-error values, slice contents and titles, the
//! swap symmetry of the error panel, and determinism.

use nalgebra::DMatrix;
use solviz_rs::error::FigureError;
use solviz_rs::field::{FieldComparison, SpatialAxis, TemporalAxis, TimeMarkers};
use solviz_rs::figure::{compose, FigureStyle, PANEL_TAGS};

mod common;
use common::{assert_matrices_close, assert_slices_equal, small_comparison, traveling_wave};

// =================================================================================================
// Panel Structure
// =================================================================================================

#[test]
fn figure_has_exactly_six_panels_in_layout_order() {
    let figure = compose(
        &traveling_wave(50, 32),
        TimeMarkers::new(5, 25, 45),
        &FigureStyle::default(),
    )
    .unwrap();

    assert_eq!(figure.panels().len(), 6);

    // Three heatmaps, then three slices
    for panel in &figure.panels()[..3] {
        assert!(panel.as_heatmap().is_some(), "{} should be a heatmap", panel.tag);
    }
    for panel in &figure.panels()[3..] {
        assert!(panel.as_slice().is_some(), "{} should be a slice", panel.tag);
    }

    let tags: Vec<&str> = figure.panels().iter().map(|p| p.tag).collect();
    assert_eq!(tags, PANEL_TAGS);
}

#[test]
fn heatmap_titles_use_the_quantity_label() {
    let style = FigureStyle::for_quantity("h(t,x)");
    let figure = compose(&small_comparison(), TimeMarkers::new(0, 2, 4), &style).unwrap();

    assert_eq!(figure.panels()[0].title, "Predicted h(t,x)");
    assert_eq!(figure.panels()[1].title, "Exact h(t,x)");
    assert_eq!(figure.panels()[2].title, "Error");
}

// =================================================================================================
// Marker Lines
// =================================================================================================

#[test]
fn marker_lines_sit_at_the_selected_time_values() {
    let comparison = traveling_wave(100, 64);
    let markers = TimeMarkers::new(15, 45, 95);
    let figure = compose(&comparison, markers, &FigureStyle::default()).unwrap();

    let t = comparison.time().values();
    let expected: Vec<f64> = markers.indices().iter().map(|&i| t[i]).collect();

    let predicted = figure.panels()[0].as_heatmap().unwrap();
    assert_eq!(predicted.markers, expected);
}

#[test]
fn only_the_predicted_heatmap_carries_markers() {
    let figure = compose(
        &small_comparison(),
        TimeMarkers::new(1, 2, 4),
        &FigureStyle::default(),
    )
    .unwrap();

    assert_eq!(figure.panels()[0].as_heatmap().unwrap().markers.len(), 3);
    assert!(figure.panels()[1].as_heatmap().unwrap().markers.is_empty());
    assert!(figure.panels()[2].as_heatmap().unwrap().markers.is_empty());
}

// =================================================================================================
// Panel Values
// =================================================================================================

#[test]
fn error_panel_holds_the_elementwise_squared_difference() {
    let comparison = traveling_wave(60, 48);
    let figure = compose(
        &comparison,
        TimeMarkers::new(0, 30, 59),
        &FigureStyle::default(),
    )
    .unwrap();

    let expected = DMatrix::from_fn(60, 48, |i, j| {
        let d = comparison.predicted()[(i, j)] - comparison.reference()[(i, j)];
        d * d
    });

    let error = figure.panels()[2].as_heatmap().unwrap();
    assert_matrices_close(&error.values, &expected, 1e-14, "error heatmap");
}

#[test]
fn slice_panels_carry_the_field_rows_unchanged() {
    let comparison = traveling_wave(40, 24);
    let markers = TimeMarkers::new(3, 17, 39);
    let figure = compose(&comparison, markers, &FigureStyle::default()).unwrap();

    for (k, &m) in markers.indices().iter().enumerate() {
        let slice = figure.panels()[3 + k].as_slice().unwrap();

        let expected_ref: Vec<f64> = comparison.reference().row(m).iter().copied().collect();
        let expected_pre: Vec<f64> = comparison.predicted().row(m).iter().copied().collect();

        assert_slices_equal(&slice.reference, &expected_ref, "reference slice");
        assert_slices_equal(&slice.predicted, &expected_pre, "predicted slice");

        let expected_x: Vec<f64> = comparison.space().values().iter().copied().collect();
        assert_slices_equal(&slice.x_values, &expected_x, "slice x values");
    }
}

#[test]
fn slice_titles_format_the_time_value_to_two_decimals() {
    // time axis [0.0, 0.25, 0.5, 0.75, 1.0], markers [1, 2, 4]
    let figure = compose(
        &small_comparison(),
        TimeMarkers::new(1, 2, 4),
        &FigureStyle::default(),
    )
    .unwrap();

    assert_eq!(figure.panels()[3].title, "t = 0.25");
    assert_eq!(figure.panels()[4].title, "t = 0.50");
    assert_eq!(figure.panels()[5].title, "t = 1.00");
}

// =================================================================================================
// Symmetry and Determinism
// =================================================================================================

#[test]
fn swapping_fields_swaps_panels_but_not_the_error() {
    let forward = traveling_wave(30, 20);
    let swapped = FieldComparison::new(
        forward.space().clone(),
        forward.time().clone(),
        forward.reference().clone(),
        forward.predicted().clone(),
    )
    .unwrap();

    let markers = TimeMarkers::new(2, 15, 29);
    let style = FigureStyle::default();
    let fig_forward = compose(&forward, markers, &style).unwrap();
    let fig_swapped = compose(&swapped, markers, &style).unwrap();

    // Panels 1/2 exchange content
    assert_eq!(
        fig_forward.panels()[0].as_heatmap().unwrap().values,
        fig_swapped.panels()[1].as_heatmap().unwrap().values,
    );
    assert_eq!(
        fig_forward.panels()[1].as_heatmap().unwrap().values,
        fig_swapped.panels()[0].as_heatmap().unwrap().values,
    );

    // Slice curves exchange identity
    let s_forward = fig_forward.panels()[4].as_slice().unwrap();
    let s_swapped = fig_swapped.panels()[4].as_slice().unwrap();
    assert_eq!(s_forward.reference, s_swapped.predicted);
    assert_eq!(s_forward.predicted, s_swapped.reference);

    // The squared error is unchanged
    assert_eq!(
        fig_forward.panels()[2].as_heatmap().unwrap().values,
        fig_swapped.panels()[2].as_heatmap().unwrap().values,
    );
}

#[test]
fn composition_is_deterministic() {
    let comparison = traveling_wave(25, 16);
    let markers = TimeMarkers::new(1, 12, 24);
    let style = FigureStyle::for_quantity("u(t,x)");

    let first = compose(&comparison, markers, &style).unwrap();
    let second = compose(&comparison, markers, &style).unwrap();

    assert_eq!(first, second);
}

// =================================================================================================
// Input Validation
// =================================================================================================

#[test]
fn mismatched_field_shapes_are_rejected() {
    let space = SpatialAxis::from_vec(vec![0.0, 0.5, 1.0]).unwrap();
    let time = TemporalAxis::from_vec(vec![0.0, 1.0]).unwrap();
    let predicted = DMatrix::from_element(2, 2, 0.0); // 2 columns, axis has 3
    let reference = DMatrix::from_element(2, 3, 0.0);

    let err = FieldComparison::new(space, time, predicted, reference).unwrap_err();
    assert!(matches!(err, FigureError::ShapeMismatch { field: "predicted", .. }));
}

#[test]
fn out_of_range_markers_are_rejected_at_compose_time() {
    let comparison = small_comparison(); // 5 time points
    let err = compose(
        &comparison,
        TimeMarkers::new(0, 2, 7),
        &FigureStyle::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        FigureError::MarkerOutOfRange { index: 7, len: 5 }
    ));
}
