use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Reads terminal events on the calling thread. Nothing happens between user
/// interactions, so there is no tick.
#[derive(Default)]
pub struct EventSource;

impl EventSource {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next event that requires a redraw.
    pub fn next(&self) -> anyhow::Result<AppEvent> {
        loop {
            match event::read()? {
                // Release/Repeat events would double-apply edits on terminals
                // that report them.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key));
                }
                Event::Resize(_, _) => return Ok(AppEvent::Resize),
                _ => {}
            }
        }
    }
}
