//! Menu definitions
//!
//! Each menu is an enum whose variants map 1:1 to numbered options.

/// A numbered console menu
pub trait Menu: Sized + Copy {
    /// Heading printed above the options
    const TITLE: &'static str;

    /// Option labels, numbered from 1
    const OPTIONS: &'static [&'static str];

    /// Variant for a 1-based option number
    fn from_number(number: usize) -> Option<Self>;

    /// Parse a user's answer ("3", " 3 ")
    fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<usize>().ok().and_then(Self::from_number)
    }

    /// Menu text as printed
    fn render() -> String {
        let mut text = format!("\n=== {} ===\n", Self::TITLE);
        for (i, label) in Self::OPTIONS.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, label));
        }
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeChoice {
    Register,
    Login,
    Exit,
}

impl Menu for WelcomeChoice {
    const TITLE: &'static str = "Academic Exam Result Management";
    const OPTIONS: &'static [&'static str] = &["Register", "Login", "Exit"];

    fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(WelcomeChoice::Register),
            2 => Some(WelcomeChoice::Login),
            3 => Some(WelcomeChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacultyChoice {
    Insert,
    Delete,
    Search,
    Ranking,
    ListAll,
    Save,
    Load,
    Logout,
}

impl Menu for FacultyChoice {
    const TITLE: &'static str = "Faculty Dashboard";
    const OPTIONS: &'static [&'static str] = &[
        "Insert Student Record",
        "Delete Student Record",
        "Search Student by ID",
        "Display Ranking (by CGPA)",
        "Display All Records (Sorted by ID)",
        "Save Records to File",
        "Load Records from File",
        "Logout",
    ];

    fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(FacultyChoice::Insert),
            2 => Some(FacultyChoice::Delete),
            3 => Some(FacultyChoice::Search),
            4 => Some(FacultyChoice::Ranking),
            5 => Some(FacultyChoice::ListAll),
            6 => Some(FacultyChoice::Save),
            7 => Some(FacultyChoice::Load),
            8 => Some(FacultyChoice::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentChoice {
    ViewProfile,
    Logout,
}

impl Menu for StudentChoice {
    const TITLE: &'static str = "Student Dashboard";
    const OPTIONS: &'static [&'static str] = &["View Profile", "Logout"];

    fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(StudentChoice::ViewProfile),
            2 => Some(StudentChoice::Logout),
            _ => None,
        }
    }
}
