//! Example: Build a small form with iuai
//!
//! Run with `RUST_LOG=iuai=debug` to see stylesheet and reference logging.

use iuai::{AttrMap, Page, Value, elem};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page::new();
    let hint = page.ref_elem("p");

    let input = elem!(
        page,
        "input",
        AttrMap::new()
            .with("name", "email")
            .with("placeholder", "you@example.com")
            .with("aria-describedby", hint.id())
    );
    let help = elem!(page, (hint.tag(), hint.id()), "We never share your address.");
    let form = elem!(
        page,
        "form",
        AttrMap::new().with("className", "signup"),
        input.value,
        help.value,
        Value::from(vec!["Thanks!"])
    );

    let Some(form) = form.value.node() else {
        anyhow::bail!("form was not built");
    };
    page.mount(form)?;

    let rule = page.style(".signup input", &AttrMap::from([("borderColor", "#888 !important")]));
    for issue in &rule.issues {
        tracing::warn!("{}", issue);
    }
    let _ = page.media("(max-width: 600px)", &AttrMap::new().with(".signup", AttrMap::from([("padding", "0")])));

    let hint_node = hint.resolve(&page)?;
    println!("iuai v{}", iuai::VERSION);
    println!("hint resolves to {:?} via {}", hint_node, hint);
    println!("{}", page.body_html());
    if let Some(sheet) = page.sheet() {
        println!("{}", sheet.to_css());
    }
    Ok(())
}
