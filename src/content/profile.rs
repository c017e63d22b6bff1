//! Profile and footer details.

use chrono::Datelike;

pub const DISPLAY_NAME: &str = "Shamima";
pub const LOCATION: &str = "Erode, Tamil Nadu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/00shamima",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/shamima-007",
    },
    SocialLink {
        label: "Email",
        url: "mailto:shamima2802@gmail.com",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/vishakutty_280206/",
    },
    SocialLink {
        label: "WhatsApp",
        url: "https://wa.me/8220739186",
    },
];

/// Footer copyright line for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}", year, DISPLAY_NAME)
}

/// Footer copyright line for the current local year.
pub fn current_copyright() -> String {
    copyright_line(chrono::Local::now().year())
}
