//! Command-line entry point (native).
//!
//! `pagedraft [SOURCE_DUMP]` prints the HTML preview of a saved source dump,
//! or of a small sample document when no file is given.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting PageDraft");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> pagedraft_app::AppResult<()> {
    use pagedraft_app::{AppConfig, Editor, ExportEvent};

    let config = AppConfig::from_env()?;
    log::info!(
        "{} ({}x{} canvas)",
        config.title,
        config.canvas_width,
        config.canvas_height
    );
    let path = std::env::args().nth(1);
    let mut editor = match &path {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            Editor::load(config, &source)?
        }
        None => sample(config)?,
    };

    editor.add_observer(|event: &ExportEvent| match event {
        ExportEvent::Preview(html) => println!("{}", html),
        ExportEvent::SourceDump(dump) => println!("{}", dump),
    });

    editor.preview();
    if path.is_none() {
        editor.source_dump()?;
    }
    Ok(())
}

/// Build a document touching every element kind through the toolbar and panel.
#[cfg(feature = "native")]
fn sample(config: pagedraft_app::AppConfig) -> pagedraft_app::AppResult<pagedraft_app::Editor> {
    use kurbo::Point;
    use pagedraft_app::{EditorAction, Toolbar};
    use pagedraft_core::{ListKind, StyleProperty};

    let mut editor = pagedraft_app::Editor::with_config(config);
    for button in Toolbar::buttons() {
        log::debug!("Pressing {:?}", button.label);
        editor.apply(button.action)?;
    }

    // Every element starts at the same spot; the last one added is on top.
    let ids = editor.document().ids().to_vec();
    for (i, id) in ids.iter().enumerate() {
        let grab = Point::new(150.0, 60.0);
        editor.pointer_down(grab, Some(pagedraft_core::PointerTarget::Body(*id)));
        editor.pointer_move(Point::new(grab.x, grab.y + 120.0 * i as f64));
        editor.pointer_up(Point::new(grab.x, grab.y + 120.0 * i as f64));
    }

    editor.select(ids.first().copied());
    editor.update_text_content("Welcome to PageDraft")?;
    editor.update_text_style(StyleProperty::FontSize, "24")?;
    editor.update_text_style(StyleProperty::Color, "#ff0000")?;

    editor.select(ids.last().copied());
    editor.update_list_items("Drag elements\nResize from the edges\nExport")?;
    editor.set_list_kind(ListKind::Ordered)?;
    Ok(editor)
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
