use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Experience,
    Projects,
    Achievements,
    Certs,
    Skills,
    Contact,
    Clear,
    Exit,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Self::Help,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Achievements,
        Self::Certs,
        Self::Skills,
        Self::Contact,
        Self::Clear,
        Self::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Certs => "certs",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Clear => "clear",
            Self::Exit => "exit",
        }
    }

    pub fn output(&self) -> Vec<String> {
        let text = match self {
            Self::Help => include_str!("../../assets/terminal/help.txt"),
            Self::About => include_str!("../../assets/terminal/about.txt"),
            Self::Experience => include_str!("../../assets/terminal/experience.txt"),
            Self::Projects => include_str!("../../assets/terminal/projects.txt"),
            Self::Achievements => include_str!("../../assets/terminal/achievements.txt"),
            Self::Certs => include_str!("../../assets/terminal/certs.txt"),
            Self::Skills => include_str!("../../assets/terminal/skills.txt"),
            Self::Contact => include_str!("../../assets/terminal/contact.txt"),
            Self::Clear | Self::Exit => return Vec::new(),
        };
        text.lines().map(str::to_string).collect()
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or(())
    }
}
