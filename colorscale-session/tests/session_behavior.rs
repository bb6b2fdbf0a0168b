//! Cross-component behavior of a colormap session: reset modes driving the
//! range holder, channel dedup, and error paths leaving state untouched.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use colorscale_session::{
    AutoLevelMode, ColormapSession, GradientDescriptor, HistogramBins, LevelRange,
};

fn ramp() -> Vec<f64> {
    (0..=100).map(f64::from).collect()
}

fn range_spy(session: &mut ColormapSession) -> Rc<RefCell<Vec<LevelRange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.range.subscribe(move |range| sink.borrow_mut().push(*range));
    seen
}

#[test]
fn test_reset_modes_over_integer_ramp() {
    let mut session = ColormapSession::new();
    session.set_samples(ramp());
    assert!(session.can_reset());

    // Default mode saturates the top 0.4% of counts.
    session.request_reset();
    let range = session.range.get();
    assert_abs_diff_eq!(range.min, 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(range.max, 99.0, epsilon = 0.05);

    // Min/max is exact.
    assert!(session.set_reset_mode(AutoLevelMode::MinMax));
    assert_eq!(session.range.get(), LevelRange::new(0.0, 100.0));

    // Mean±3std clips to the data bounds here (std ~ 29.15).
    session.range.set(-5.0, 200.0);
    assert!(session.set_reset_mode(AutoLevelMode::Mean3Std));
    assert_eq!(session.range.get(), LevelRange::new(0.0, 100.0));

    // Back to default.
    assert!(session.set_reset_mode(AutoLevelMode::Default));
    let range = session.range.get();
    assert_abs_diff_eq!(range.min, 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(range.max, 99.0, epsilon = 0.05);
}

#[test]
fn test_mode_change_notifies_even_when_range_is_unchanged() {
    let mut session = ColormapSession::new();
    session.set_samples(ramp());

    let modes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&modes);
    session.on_mode_changed(move |&mode| sink.borrow_mut().push(mode));
    let ranges = range_spy(&mut session);

    // Pre-seed the range with the min/max result.
    session.range.set(0.0, 100.0);
    assert_eq!(ranges.borrow().len(), 1);

    // The mode notification fires although the recomputed range dedups.
    assert!(session.set_reset_mode(AutoLevelMode::MinMax));
    assert_eq!(*modes.borrow(), vec![AutoLevelMode::MinMax]);
    assert_eq!(ranges.borrow().len(), 1);

    // Selecting the active mode again does nothing at all.
    assert!(!session.set_reset_mode(AutoLevelMode::MinMax));
    assert_eq!(modes.borrow().len(), 1);
}

#[test]
fn test_histogram_input_drives_resets() {
    let mut session = ColormapSession::new();
    let hist = HistogramBins::new(vec![0.0, 1.0, 2.0, 3.0], vec![1, 1, 1, 1]).unwrap();
    session.set_histogram(hist);

    // Histogram-form min/max reconstructs the upper bound from the bin width.
    session.set_reset_mode(AutoLevelMode::MinMax);
    assert_eq!(session.range.get(), LevelRange::new(0.0, 4.0));
}

#[test]
fn test_unknown_mode_name_leaves_everything_untouched() {
    let mut session = ColormapSession::new();
    session.set_samples(ramp());
    session.request_reset();
    let before = session.range.get();

    let modes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&modes);
    session.on_mode_changed(move |&mode| sink.borrow_mut().push(mode));

    assert!(session.set_reset_mode_by_name("bogus").is_err());
    assert_eq!(session.range.get(), before);
    assert_eq!(session.reset_mode(), AutoLevelMode::Default);
    assert!(modes.borrow().is_empty());
}

#[test]
fn test_reset_requests_dedup_through_the_range_holder() {
    let mut session = ColormapSession::new();
    session.set_samples(ramp());
    let ranges = range_spy(&mut session);

    session.request_reset();
    session.request_reset();

    // Identical recomputation produces a single notification.
    assert_eq!(ranges.borrow().len(), 1);
}

#[test]
fn test_gradient_and_normalization_are_independent_of_the_range_pipeline() {
    let mut session = ColormapSession::new();
    session.set_samples(ramp());
    let ranges = range_spy(&mut session);

    let gradients = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&gradients);
    session
        .gradients
        .subscribe(move |descriptor| sink.borrow_mut().push(descriptor.clone()));

    let custom = GradientDescriptor::rgb(&[(0.0, [1, 2, 3, 255]), (1.0, [4, 5, 6, 255])]);
    session.gradients.set_current(&custom);
    session.normalization.set_by_name("log").unwrap();

    assert_eq!(gradients.borrow().len(), 1);
    assert_eq!(session.gradients.current_name(), "Custom");
    assert_eq!(session.normalization.get().as_str(), "log");
    assert!(ranges.borrow().is_empty());
}
