use autowidth::prelude::*;
use autowidth::resolver::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 10px per character, 4px per space, at 16px.
fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(10.0).with_advance(' ', 4.0)
}

fn mounted(
    value: &str,
    config: AutosizeConfig,
) -> AutosizeInput<InputNode, FixedAdvanceMeasurer> {
    let mut input = AutosizeInput::new(InputNode::new().attached(), measurer(), value, config);
    input.mount();
    input
}

#[test]
fn test_short_value_uses_min_width() {
    init_logging();
    // "hi" measures 20px
    let input = mounted("hi", AutosizeConfig::new().min_width(60.0).max_width(600.0));
    assert_eq!(input.content_width(), 20.0);
    assert_eq!(input.resolved_width(), Some(70.0));
    assert_eq!(input.element().width_px(), Some(70.0));
}

#[test]
fn test_search_placeholder_then_long_query() {
    init_logging();
    let mut input = mounted(
        "",
        AutosizeConfig::new()
            .min_width(60.0)
            .max_width(600.0)
            .placeholder("Search"),
    );

    let placeholder = input.placeholder_width();
    assert_eq!(placeholder, 60.0);
    let width = input.resolved_width().unwrap();
    assert_eq!(width, placeholder + FIXED_PADDING);
    assert!((70.0..=610.0).contains(&width));

    let long = "a very long search query string that overflows the maximum width by a lot";
    assert_eq!(input.set_value(long), Some(610.0));
    assert!(input.content_width() > 600.0);
    assert_eq!(input.element().width_px(), Some(610.0));
}

#[test]
fn test_placeholder_wider_than_min_sets_floor() {
    init_logging();
    let input = mounted("", AutosizeConfig::new().placeholder("Find a file"));
    // 9 letters + 2 spaces
    assert_eq!(input.placeholder_width(), 98.0);
    assert_eq!(input.resolved_width(), Some(108.0));
}

#[test]
fn test_content_between_bounds_is_measured_plus_padding() {
    init_logging();
    let mut input = mounted("", AutosizeConfig::new());
    for len in [7, 12, 30, 59] {
        let value = "x".repeat(len);
        let width = input.set_value(value).unwrap();
        assert_eq!(width, len as f32 * 10.0 + FIXED_PADDING);
    }
}

#[test]
fn test_whitespace_runs_widen_the_input() {
    init_logging();
    let mut input = mounted("", AutosizeConfig::new().min_width(0.0));
    let one = input.set_value("a b").unwrap();
    let many = input.set_value("a      b").unwrap();
    assert!(many > one);
    let trailing = input.set_value("a b   ").unwrap();
    assert!(trailing > one);
}

#[test]
fn test_resolving_twice_is_stable() {
    init_logging();
    let mut input = mounted("stable", AutosizeConfig::new());
    let first = input.refresh();
    let second = input.refresh();
    assert_eq!(first, second);
    assert_eq!(input.set_value("stable"), first);
}

#[test]
fn test_font_metrics_come_from_the_live_input() {
    init_logging();
    let node = InputNode::new()
        .with_stylesheet(
            StyleDeclaration::new()
                .with(StyleProperty::FONT_SIZE, "32px")
                .with(StyleProperty::COLOR, "rebeccapurple")
                .with(StyleProperty::LETTER_SPACING, "1px")
                .with(StyleProperty::TEXT_TRANSFORM, "uppercase"),
        )
        .attached();
    let mut input = AutosizeInput::new(node, measurer(), "abc", AutosizeConfig::new());
    input.mount();

    // 3 chars * 20px at 32px, plus 3 * 1px spacing
    assert_eq!(input.content_width(), 63.0);
    assert_eq!(input.resolved_width(), Some(73.0));

    let mirror_style = input.mirror().style();
    assert_eq!(mirror_style.value(StyleProperty::FONT_SIZE), Some("32px"));
    assert!(!mirror_style.contains(StyleProperty::COLOR));
    assert_eq!(input.mirror().font().text_transform, TextTransform::Uppercase);
}

#[test]
fn test_default_bounds() {
    init_logging();
    let config = AutosizeConfig::default();
    assert_eq!(config.min_width, DEFAULT_MIN_WIDTH);
    assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);

    let mut input = mounted("", config);
    assert_eq!(input.resolved_width(), Some(DEFAULT_MIN_WIDTH + FIXED_PADDING));
    assert_eq!(
        input.set_value("z".repeat(1000)),
        Some(DEFAULT_MAX_WIDTH + FIXED_PADDING)
    );
}

#[test]
fn test_instances_are_independent() {
    init_logging();
    let mut a = mounted("", AutosizeConfig::new().placeholder("Search everything"));
    let mut b = mounted("", AutosizeConfig::new());

    a.set_value("q");
    b.set_value("q");

    // Placeholder baseline: 16 letters + 1 space
    assert_eq!(a.placeholder_width(), 164.0);
    assert_eq!(a.resolved_width(), Some(174.0));
    assert_eq!(b.resolved_width(), Some(70.0));
}

#[test]
fn test_bound_input_resizes_in_the_same_update() {
    init_logging();
    let query = create_signal(String::new());
    let input = AutosizeInput::new(
        InputNode::new().attached(),
        measurer(),
        "",
        AutosizeConfig::new().placeholder("Search"),
    )
    .bind(query.clone());

    assert_eq!(input.resolved_width(), Some(70.0));

    query.set("rust text measurement".into());
    // 19 letters + 2 spaces
    assert_eq!(input.resolved_width(), Some(208.0));

    input.set_value("");
    assert_eq!(input.resolved_width(), Some(70.0));
}

#[test]
fn test_bound_input_batched_writes_resize_once() {
    init_logging();
    let query = create_signal(String::from("a"));
    let input = AutosizeInput::new(
        InputNode::new().attached(),
        measurer(),
        "",
        AutosizeConfig::new().min_width(0.0),
    )
    .bind(query.clone());

    batch(|| {
        query.set("ab".into());
        // Effects wait for the batch to finish
        assert_eq!(input.resolved_width(), Some(20.0));
        query.set("abcdef".into());
    });

    assert_eq!(input.resolved_width(), Some(70.0));
}
