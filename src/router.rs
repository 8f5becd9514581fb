use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

pub const HOME_PATH: &str = "/";
pub const QUIZ_PATH: &str = "/quiz";
pub const RESULTS_PATH: &str = "/results";
pub const NOT_FOUND_PATH: &str = "/404";

/// A path plus its query string, e.g. `/quiz?id=ww2`.
///
/// Query keys and values are stored decoded. A parameter written without
/// `=` (`?flag`) keeps `None` as its value so it prints back the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, Option<String>)>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((p, q)) => (p, q),
            None => (target, ""),
        };

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .flat_map(|pair| {
                let has_value = pair.contains('=');
                form_urlencoded::parse(pair.as_bytes())
                    .map(move |(k, v)| (k.into_owned(), has_value.then(|| v.into_owned())))
            })
            .collect();

        let path = if path.is_empty() { HOME_PATH } else { path };
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// First value of `name` in the query string. A bare key yields `""`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }
}

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}", sep, encode(k))?;
            if let Some(v) = v {
                write!(f, "={}", encode(v))?;
            }
        }
        Ok(())
    }
}

/// Navigation intents raised by pages and the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Quiz { id: String },
    Results,
}

impl Navigation {
    pub fn target(&self) -> String {
        match self {
            Navigation::Home => HOME_PATH.to_string(),
            Navigation::Quiz { id } => format!("{}?id={}", QUIZ_PATH, encode(id)),
            Navigation::Results => RESULTS_PATH.to_string(),
        }
    }
}

/// Back/forward list of visited locations.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn push(&mut self, location: Location) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    pub fn current(&self) -> Option<&Location> {
        self.entries.get(self.cursor)
    }

    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lets the router stop a running countdown when leaving the quiz page.
pub trait TimerControl {
    fn stop_timer(&mut self);
}

pub type Handler<C> = Box<dyn FnMut(&mut C, &Location)>;

/// Exact-match path router. Handlers receive the host context mutably; the
/// router itself holds no application state besides history.
pub struct Router<C> {
    routes: HashMap<String, Handler<C>>,
    quiz_path: String,
    history: History,
}

impl<C: TimerControl> Router<C> {
    pub fn new() -> Self {
        Self::with_quiz_path(QUIZ_PATH)
    }

    pub fn with_quiz_path(quiz_path: &str) -> Self {
        Self {
            routes: HashMap::new(),
            quiz_path: quiz_path.to_string(),
            history: History::default(),
        }
    }

    /// Registers `handler` for `path`, replacing any earlier one.
    pub fn add_route<F>(&mut self, path: &str, handler: F)
    where
        F: FnMut(&mut C, &Location) + 'static,
    {
        self.routes.insert(path.to_string(), Box::new(handler));
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Runs the handler for `location.path`, or the `/404` handler. Returns
    /// false when neither exists. Leaving the quiz path stops the timer.
    pub fn dispatch(&mut self, ctx: &mut C, location: &Location) -> bool {
        let key = if self.routes.contains_key(&location.path) {
            location.path.as_str()
        } else {
            log::debug!("no route for {}, falling back to {}", location.path, NOT_FOUND_PATH);
            NOT_FOUND_PATH
        };

        let Some(handler) = self.routes.get_mut(key) else {
            log::debug!("no handler resolved for {}", location.path);
            return false;
        };

        log::debug!("dispatching {}", location);
        handler(ctx, location);

        if location.path != self.quiz_path {
            ctx.stop_timer();
        }
        true
    }

    /// Records `target` in history and dispatches it.
    pub fn navigate_to(&mut self, ctx: &mut C, target: &str) -> bool {
        let location = Location::parse(target);
        self.history.push(location.clone());
        self.dispatch(ctx, &location)
    }

    /// Re-dispatches the previous history entry. False when there is none.
    pub fn back(&mut self, ctx: &mut C) -> bool {
        match self.history.back().cloned() {
            Some(location) => self.dispatch(ctx, &location),
            None => false,
        }
    }

    pub fn forward(&mut self, ctx: &mut C) -> bool {
        match self.history.forward().cloned() {
            Some(location) => self.dispatch(ctx, &location),
            None => false,
        }
    }

    pub fn current(&self) -> Option<&Location> {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl<C: TimerControl> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}
