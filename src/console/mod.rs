//! Console Module
//!
//! Interactive menu front-end.
//!
//! ## Screens
//! ```text
//! Welcome ──Login(faculty)──▶ Faculty menu ──Logout──┐
//!    ▲    ──Login(student)──▶ Student menu ──Logout──┤
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic (`BufRead` / `Write`) so a whole session
//! can be scripted in tests. End of input ends the session cleanly.

mod menu;
mod prompt;
mod session;

pub use menu::{FacultyChoice, Menu, StudentChoice, WelcomeChoice};
pub use prompt::Prompter;
pub use session::Console;
