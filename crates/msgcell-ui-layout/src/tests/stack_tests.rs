use super::*;

#[test]
fn vertical_stack_sums_heights_and_takes_max_width() {
    let config = StackConfig::vertical(2.0, EdgeInsets::from_components(12.0, 7.0, 12.0, 7.0));
    let measurement = measure_stack(
        &config,
        &[Size::new(100.0, 20.0), Size::new(60.0, 14.0)],
    );

    assert_eq!(measurement.measured_size, Size::new(124.0, 20.0 + 2.0 + 14.0 + 14.0));
}

#[test]
fn spacing_only_between_present_children() {
    let config = StackConfig::vertical(5.0, EdgeInsets::ZERO);

    let single = measure_stack(&config, &[Size::new(10.0, 10.0)]);
    assert_eq!(single.measured_size.height, 10.0);

    let empty = measure_stack(&config, &[]);
    assert_eq!(empty.measured_size, Size::ZERO);
    assert!(empty.is_empty());
}

#[test]
fn horizontal_stack_sums_widths() {
    let config = StackConfig::horizontal(8.0, EdgeInsets::ZERO);
    let measurement = measure_stack(&config, &[Size::new(28.0, 28.0), Size::new(200.0, 60.0)]);
    assert_eq!(measurement.measured_size, Size::new(236.0, 60.0));
}

#[test]
fn arrange_fills_cross_axis_inside_margins() {
    let config = StackConfig::vertical(2.0, EdgeInsets::from_components(12.0, 7.0, 12.0, 2.0));
    let measurement = measure_stack(&config, &[Size::new(80.0, 20.0), Size::new(40.0, 10.0)]);
    let frames = arrange_stack(&config, &measurement, Size::new(200.0, 41.0));

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], Rect::new(12.0, 7.0, 176.0, 20.0));
    assert_eq!(frames[1], Rect::new(12.0, 29.0, 176.0, 10.0));
}

#[test]
fn arrange_aligns_to_end_when_requested() {
    let config = StackConfig::horizontal(0.0, EdgeInsets::ZERO).with_alignment(StackAlignment::End);
    let measurement = measure_stack(&config, &[Size::new(28.0, 28.0), Size::new(100.0, 60.0)]);
    let frames = arrange_stack(&config, &measurement, measurement.measured_size);

    assert_eq!(frames[0], Rect::new(0.0, 32.0, 28.0, 28.0));
    assert_eq!(frames[1], Rect::new(28.0, 0.0, 100.0, 60.0));
}

#[test]
fn inner_max_width_never_negative() {
    let config = StackConfig::vertical(0.0, EdgeInsets::symmetric(30.0, 0.0));
    assert_eq!(config.inner_max_width(100.0), 40.0);
    assert_eq!(config.inner_max_width(10.0), 0.0);
}
