use tracing::debug;

use super::destination::{Destination, TopNavDestination};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackStackEntry {
    pub destination: Destination,
    pub args: Vec<String>,
}

impl BackStackEntry {
    pub fn route(&self) -> String {
        self.destination.route_with_args(self.args.as_slice())
    }

    /// First argument, e.g. the id in `system_games/<id>`.
    pub fn arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Back stack of visited destinations. Never empty.
#[derive(Clone, Debug)]
pub struct NavController {
    stack: Vec<BackStackEntry>,
}

impl NavController {
    pub fn new(start: Destination) -> Self {
        NavController {
            stack: vec![BackStackEntry {
                destination: start.start_destination(),
                args: Vec::new(),
            }],
        }
    }

    pub fn current(&self) -> &BackStackEntry {
        // the stack is seeded in new() and pop_back() keeps the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_destination(&self) -> Destination {
        self.current().destination
    }

    pub fn entries(&self) -> &[BackStackEntry] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate<S: AsRef<str>>(&mut self, dest: Destination, args: &[S]) {
        let entry = BackStackEntry {
            destination: dest.start_destination(),
            args: args
                .iter()
                .map(|a| a.as_ref().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
        };
        debug!(route = %entry.route(), depth = self.stack.len() + 1, "navigate");
        self.stack.push(entry);
    }

    /// Navigate to a route string. Unknown routes are ignored.
    pub fn navigate_route(&mut self, route: &str) -> bool {
        match Destination::parse(route) {
            Some((dest, args)) => {
                self.navigate(dest, args.as_slice());
                true
            }
            None => {
                debug!(route, "unknown route");
                false
            }
        }
    }

    /// Switch tabs: drop everything from the last visit of `tab` upwards,
    /// then push it again.
    pub fn navigate_tab(&mut self, tab: TopNavDestination) {
        let dest = tab.destination();
        if let Some(idx) = self.stack.iter().rposition(|e| e.destination == dest) {
            self.stack.truncate(idx);
        }
        self.navigate::<&str>(dest, &[]);
    }

    /// Pop the current entry. Returns false at the root.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with `dest`.
    pub fn reset_to(&mut self, dest: Destination) {
        *self = NavController::new(dest);
    }

    pub fn current_tab(&self) -> Option<TopNavDestination> {
        let entry = self.current();
        if entry.args.is_empty() {
            TopNavDestination::from_destination(entry.destination)
        } else {
            None
        }
    }

    pub fn should_show_top_bar(&self) -> bool {
        self.current_tab().is_some()
    }
}
