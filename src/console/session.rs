//! Console session: welcome screen, login, and the per-role dashboards.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::accounts::{AccountStore, Role, User};
use crate::command::{Command, Outcome, Profile};
use crate::error::Result;
use crate::registry::Registry;
use crate::student::Student;

use super::menu::{FacultyChoice, Menu, StudentChoice, WelcomeChoice};
use super::prompt::Prompter;

/// Upper bound on subjects per record at the insert prompt
const MAX_SUBJECTS: usize = 10;

/// Whether the session keeps going after a screen returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Unwrap an answer, or end the session on end of input
macro_rules! answer_or_quit {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

/// One interactive session over a registry and an account table
pub struct Console<'a, R, W> {
    registry: &'a Registry,
    accounts: &'a mut AccountStore,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(registry: &'a Registry, accounts: &'a mut AccountStore, input: R, output: W) -> Self {
        Self {
            registry,
            accounts,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.welcome()? == Flow::Continue {}
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    fn choose<M: Menu>(&mut self) -> Result<Option<M>> {
        loop {
            self.prompter.say(M::render())?;
            let Some(answer) = self.prompter.ask("Enter your choice: ")? else {
                return Ok(None);
            };
            match M::parse(&answer) {
                Some(choice) => return Ok(Some(choice)),
                None => self.prompter.say("Invalid choice. Try again.")?,
            }
        }
    }

    fn welcome(&mut self) -> Result<Flow> {
        let choice = answer_or_quit!(self.choose::<WelcomeChoice>());

        match choice {
            WelcomeChoice::Register => self.register(),
            WelcomeChoice::Login => self.login(),
            WelcomeChoice::Exit => {
                self.prompter.say("Exiting the system. Bye!")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn ask_role(&mut self) -> Result<Option<Role>> {
        self.prompter.ask_parsed("Role (faculty/student): ")
    }

    fn register(&mut self) -> Result<Flow> {
        let role = answer_or_quit!(self.ask_role());
        let username = answer_or_quit!(self.prompter.ask("Username: "));
        let password = answer_or_quit!(self.prompter.ask("Password: "));

        match self.accounts.register(&username, &password, role) {
            Ok(()) => self.prompter.say(format!("{} {} registered successfully.", role, username.trim()))?,
            Err(e) => self.prompter.say(format!("Error: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn login(&mut self) -> Result<Flow> {
        let role = answer_or_quit!(self.ask_role());
        let username = answer_or_quit!(self.prompter.ask("Username: "));
        let password = answer_or_quit!(self.prompter.ask("Password: "));

        let user = match self.accounts.login(&username, &password, role) {
            Ok(user) => user,
            Err(e) => {
                self.prompter.say(format!("Error: {}", e))?;
                return Ok(Flow::Continue);
            }
        };

        self.prompter.say(format!("Welcome, {}.", user.username))?;
        match user.role {
            Role::Faculty => self.faculty_dashboard(&user),
            Role::Student => self.student_dashboard(&user),
        }
    }

    fn faculty_dashboard(&mut self, user: &User) -> Result<Flow> {
        loop {
            let choice = answer_or_quit!(self.choose::<FacultyChoice>());

            let command = match choice {
                FacultyChoice::Insert => match answer_or_quit!(self.read_student()) {
                    Some(student) => Command::Add(student),
                    None => continue,
                },
                FacultyChoice::Delete => Command::Delete {
                    id: answer_or_quit!(self.prompter.ask_parsed("Enter student ID to delete: ")),
                },
                FacultyChoice::Search => Command::Search {
                    id: answer_or_quit!(self.prompter.ask_parsed("Enter student ID to search: ")),
                },
                FacultyChoice::Ranking => Command::Ranking,
                FacultyChoice::ListAll => Command::List,
                FacultyChoice::Save => {
                    let answer = answer_or_quit!(self
                        .prompter
                        .ask("Enter filename to save records (blank for default): "));
                    let answer = answer.trim();
                    Command::Save {
                        path: (!answer.is_empty()).then(|| PathBuf::from(answer)),
                    }
                }
                FacultyChoice::Load => {
                    let answer = answer_or_quit!(self.prompter.ask("Enter filename to load records: "));
                    if answer.trim().is_empty() {
                        self.prompter.say("Error: a filename is required.")?;
                        continue;
                    }
                    Command::Load {
                        path: PathBuf::from(answer.trim()),
                    }
                }
                FacultyChoice::Logout => {
                    tracing::info!("{} logged out", user.username);
                    return Ok(Flow::Continue);
                }
            };

            self.run_command(command)?;
        }
    }

    fn student_dashboard(&mut self, user: &User) -> Result<Flow> {
        loop {
            let choice = answer_or_quit!(self.choose::<StudentChoice>());

            match choice {
                StudentChoice::ViewProfile => {
                    let id: u32 = answer_or_quit!(self.prompter.ask_parsed("Enter your student ID: "));
                    match self.registry.get(id) {
                        Some(student) => self.prompter.say(Profile(&student))?,
                        None => self.prompter.say(Outcome::NotFound(id))?,
                    }
                }
                StudentChoice::Logout => {
                    tracing::info!("{} logged out", user.username);
                    return Ok(Flow::Continue);
                }
            }
        }
    }

    /// Prompt for every field of a new record
    ///
    /// `Some(None)` means the input was complete but invalid; the reason
    /// has already been printed.
    fn read_student(&mut self) -> Result<Option<Option<Student>>> {
        let Some(id) = self.prompter.ask_parsed::<u32>("Enter Student ID: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompter.ask("Enter Student Name: ")? else {
            return Ok(None);
        };
        let Some(subjects) = self
            .prompter
            .ask_in_range("Enter number of subjects: ", 1..=MAX_SUBJECTS)?
        else {
            return Ok(None);
        };

        let mut marks = Vec::with_capacity(subjects);
        for i in 1..=subjects {
            let prompt = format!("Enter marks for subject {}: ", i);
            let Some(mark) = self.prompter.ask_parsed::<f64>(&prompt)? else {
                return Ok(None);
            };
            marks.push(mark);
        }

        let Some(attendance) = self.prompter.ask_parsed::<f64>("Enter Attendance percentage: ")? else {
            return Ok(None);
        };

        match Student::new(id, name, marks, attendance) {
            Ok(student) => Ok(Some(Some(student))),
            Err(e) => {
                self.prompter.say(format!("Error: {}", e))?;
                Ok(Some(None))
            }
        }
    }

    /// Execute and print; registry errors are shown, not propagated
    fn run_command(&mut self, command: Command) -> Result<()> {
        match self.registry.execute(command) {
            Ok(outcome) => self.prompter.say(outcome),
            Err(e) => self.prompter.say(format!("Error: {}", e)),
        }
    }
}
