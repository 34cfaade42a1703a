//! Search Box Example
//!
//! Types a query into an auto-sizing input one character at a time and
//! prints the width the input is given after each keystroke. Text is shaped
//! with the system fonts through cosmic-text.
//!
//! Run with `RUST_LOG=autowidth=trace` to see every width write.

use autowidth::prelude::*;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let stylesheet = StyleDeclaration::new()
        .with(StyleProperty::FONT_FAMILY, "\"DejaVu Sans\", sans-serif")
        .with(StyleProperty::FONT_SIZE, "14px")
        .with(StyleProperty::PADDING, "4px 8px");

    let query = create_signal(String::new());
    let input = AutosizeInput::new(
        InputNode::new().with_stylesheet(stylesheet).attached(),
        SharedCosmicMeasurer,
        "",
        AutosizeConfig::new()
            .min_width(60.0)
            .max_width(320.0)
            .placeholder("Search")
            .attribute("type", "search"),
    )
    .bind(query.clone());

    println!(
        "{:<40} placeholder baseline {}px -> {:?}",
        "(empty)",
        input.with(|input| input.placeholder_width()),
        input.resolved_width()
    );

    let text = "how wide is this search query, really?";
    for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
        query.set(text[..end].to_string());
        println!(
            "{:<40} content {:>6.1}px -> {:?}",
            format!("{:?}", &text[..end]),
            input.with(|input| input.content_width()),
            input.resolved_width()
        );
    }

    input.with(|input| {
        println!("style=\"{}\"", input.element().inline_style());
    });
}
