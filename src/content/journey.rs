//! Journey timeline, compiled in.

use std::fmt;

/// Timeline tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JourneyKind {
    #[default]
    Experience,
    Education,
}

impl JourneyKind {
    pub const ALL: [JourneyKind; 2] = [JourneyKind::Experience, JourneyKind::Education];

    pub fn label(&self) -> &'static str {
        match self {
            JourneyKind::Experience => "Experience",
            JourneyKind::Education => "Education",
        }
    }
}

impl fmt::Display for JourneyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyEntry {
    pub id: u32,
    pub title: &'static str,
    pub institution: &'static str,
    /// Free-form period, e.g. `2024 - 2025`
    pub year: &'static str,
    pub details: &'static str,
    pub tags: &'static [&'static str],
    pub kind: JourneyKind,
}

static TIMELINE: [JourneyEntry; 5] = [
    JourneyEntry {
        id: 1,
        title: "Full Stack Developer Intern",
        institution: "I-BACUS-TECH Solutions Pvt Ltd",
        year: "Aug 2025 - Present",
        details: "Contribution in 6+ projects using React.js, Bootstrap, MongoDB, Node.js, Express.js.",
        tags: &["React.js", "Node.js", "Express.js", "MongoDB", "Prisma"],
        kind: JourneyKind::Experience,
    },
    JourneyEntry {
        id: 2,
        title: "College Treasurer",
        institution: "Bharathidasan College of Arts and Science",
        year: "2024 - 2025",
        details: "Managed budgeting and fund allocation for college-level events and student activities, and promoted student discipline and team cooperation.",
        tags: &["Budgeting", "Leadership", "Teamwork"],
        kind: JourneyKind::Experience,
    },
    JourneyEntry {
        id: 3,
        title: "Bsc Information Technology",
        institution: "Bharadhidasan college of arts and science",
        year: "2023 - present",
        details: "Completed 5 semesters with a GPA of 8. Courses in ReactJS, Web Development.",
        tags: &["ReactJS", "Tailwindcss", "JavaScript"],
        kind: JourneyKind::Education,
    },
    JourneyEntry {
        id: 4,
        title: "Higher Secondary (12th)",
        institution: "municipal girls higher secondary school",
        year: "May 2020 - May 2022",
        details: "Completed class 12 high school education at municipal girls higher secondary school, where I studied Mathematics with Computer Science.",
        tags: &["Computer Applications"],
        kind: JourneyKind::Education,
    },
    JourneyEntry {
        id: 5,
        title: "Matriculation (X)",
        institution: "E.K.M abdulgani madharasa islamia high school",
        year: "May 2019 - May 2020",
        details: "Completed my secondary education.",
        tags: &[],
        kind: JourneyKind::Education,
    },
];

/// All entries, experience first.
pub fn timeline() -> &'static [JourneyEntry] {
    &TIMELINE
}
