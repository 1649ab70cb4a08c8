//! Horizon Narrator Console Example
//!
//! Reads an accessibility tree aloud on the console, then replays a few
//! accessible events through the event queue.
//!
//! Run with: cargo run -p horizon-narrator --example narrate_screen [TREE] [CONFIG]
//!
//! `TREE` is a JSON or TOML element snapshot; without it a built-in login
//! screen is used. `CONFIG` is a narrator TOML configuration file.
//! Set `RUST_LOG=horizon_narrator=debug` to see routing decisions.

use std::error::Error;
use std::sync::Arc;

use horizon_narrator::prelude::*;
use tracing_subscriber::EnvFilter;

fn login_screen() -> Element {
    Element::new(AccessibleRole::Screen)
        .with_name("Login")
        .child(
            Element::new(AccessibleRole::TextField)
                .with_name("User name")
                .with_states(StateSet::FOCUSABLE | StateSet::EDITABLE)
                .text("alice"),
        )
        .child(
            Element::new(AccessibleRole::TextField)
                .with_name("Password")
                .with_states(StateSet::FOCUSABLE | StateSet::EDITABLE)
                .text(""),
        )
        .child(Element::new(AccessibleRole::CheckBox).with_name("Remember me"))
        .child(
            Element::new(AccessibleRole::Table)
                .with_name("Recent sessions")
                .table(
                    TableData::new()
                        .headers([
                            Some(Element::new(AccessibleRole::Label).with_name("Device")),
                            Some(Element::new(AccessibleRole::Label).with_name("When")),
                        ])
                        .row([
                            Some(Element::new(AccessibleRole::Label).with_name("Laptop")),
                            Some(Element::new(AccessibleRole::Label).with_name("Today")),
                        ]),
                ),
        )
        .child(
            Element::new(AccessibleRole::PushButton)
                .with_name("Sign in")
                .state(StateSet::FOCUSABLE),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let tree = match args.next() {
        Some(path) => Element::load(path)?,
        None => login_screen(),
    };
    let config = match args.next() {
        Some(path) => NarratorConfig::load(path)?,
        None => NarratorConfig::default(),
    };

    let speech = Arc::new(ConsoleSpeech::with_prefix(config.console_prefix.clone()));
    let narrator = Narrator::with_config(speech, config);

    println!("== Reading the whole tree ==");
    narrator.narrate(Some(&tree));

    println!("== Replaying events ==");
    let queue = EventQueue::spawn(ScreenReader::new(narrator))?;

    let mut remember = Element::new(AccessibleRole::CheckBox).with_name("Remember me");
    queue.post(
        EventKind::StateChanged,
        EventValue::State(StateSet::NONE),
        EventValue::State(StateSet::FOCUSED),
        remember.clone().state(StateSet::FOCUSED),
    )?;

    remember.set_states(StateSet::FOCUSED | StateSet::CHECKED);
    queue.post(
        EventKind::StateChanged,
        EventValue::State(StateSet::FOCUSED),
        EventValue::State(StateSet::FOCUSED | StateSet::CHECKED),
        remember,
    )?;

    queue.post(
        EventKind::TextChanged,
        EventValue::from(""),
        EventValue::from("hunter2"),
        Element::new(AccessibleRole::TextField).with_name("Password"),
    )?;

    queue.flush()?;
    queue.stop_and_join();
    Ok(())
}
