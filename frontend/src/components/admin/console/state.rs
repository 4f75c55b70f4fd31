//! Component state of the admin console.
//!
//! All console semantics live in `common::console::ConsoleState`; the
//! component only adds the one-time initialisation guard.

use common::console::ConsoleState;

pub struct AdminConsoleComponent {
    /// Types, mode, lists, drafts and busy controls.
    pub console: ConsoleState,

    /// Guard to fetch the record types only on the first render.
    pub loaded: bool,
}

impl AdminConsoleComponent {
    pub fn new() -> Self {
        Self {
            console: ConsoleState::new(),
            loaded: false,
        }
    }
}
