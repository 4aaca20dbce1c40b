use std::cell::RefCell;

/// User-notification and navigation capability supplied by the embedding
/// environment.
pub trait Host {
    /// Shows a message and returns once it has been acknowledged.
    fn alert(&self, message: &str);

    /// Resets the current view.
    fn reload(&self);

    /// Moves the user to `location`, a path on the check-in server.
    fn navigate(&self, location: &str);
}

/// Host for a terminal session: alerts go to stdout, and navigation prints the
/// absolute URL the user should open.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    base_url: String,
}

impl TerminalHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn location_url(&self, location: &str) -> String {
        format!("{}{}", self.base_url, location)
    }
}

impl Host for TerminalHost {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn reload(&self) {
        println!("Refresh {} to see your updated points.", self.base_url);
    }

    fn navigate(&self, location: &str) {
        println!("Open {} to continue.", self.location_url(location));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEffect {
    Alert(String),
    Reload,
    Navigate(String),
}

/// Records every host call in order instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    effects: RefCell<Vec<HostEffect>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<HostEffect> {
        self.effects.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|effect| match effect {
                HostEffect::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.effects
            .borrow()
            .iter()
            .filter(|effect| **effect == HostEffect::Reload)
            .count()
    }
}

impl Host for RecordingHost {
    fn alert(&self, message: &str) {
        self.effects
            .borrow_mut()
            .push(HostEffect::Alert(message.to_string()));
    }

    fn reload(&self) {
        self.effects.borrow_mut().push(HostEffect::Reload);
    }

    fn navigate(&self, location: &str) {
        self.effects
            .borrow_mut()
            .push(HostEffect::Navigate(location.to_string()));
    }
}
