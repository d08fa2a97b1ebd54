//! Static content shown across the site.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    /// Levels above 100 are clamped; the level is a display percentage.
    pub const fn new(name: &'static str, level: u8) -> Self {
        let level = if level > 100 { 100 } else { level };
        Self { name, level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// CSS width for the skill bar.
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
    pub image_fallback: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .rsplit(' ')
            .next()
            .unwrap_or(self.phone)
            .trim_start_matches('+');
        format!("tel:{digits}")
    }
}

pub static PROFILE: Profile = Profile {
    name: "Uttam Kumar",
    first_name: "Uttam",
    last_name: "Kumar",
    initials: "UK",
    headline: "Computer Science Engineer",
    tagline: "Building robust digital experiences through modern engineering and creative problem solving.",
    summary: "As a passionate Computer Science Engineer, I specialize in JAVA & C language, DSA, Oops, OS, CSO, SQL, DE, CWS and Web dev etc. I enjoy bridging the gap between technical requirements and user-centric design.",
    email: "uttamkumarchilous123@gmail.com",
    phone: "+91 6207749605",
    image: "https://raw.githubusercontent.com/the-muda-coder/storage/main/uttam_profile.png",
    image_fallback: "/img.jpeg",
};

pub static SKILLS: [Skill; 5] = [
    Skill::new("React / Frontend", 90),
    Skill::new("Node.js / Backend", 85),
    Skill::new("TypeScript", 80),
    Skill::new("UI/UX Design", 75),
    Skill::new("Python / ML", 70),
];

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack modern shopify-like experience.",
        tags: &["React", "Node", "MongoDB"],
        link: "#",
    },
    Project {
        title: "AI Resume Analyzer",
        description: "Uses LLMs to optimize resumes for ATS.",
        tags: &["Python", "Gemini API", "Flask"],
        link: "#",
    },
    Project {
        title: "Portfolio Pro",
        description: "Next-gen glassmorphism portfolio templates.",
        tags: &["React", "Tailwind", "Framer"],
        link: "#",
    },
];

pub static MILESTONES: [Milestone; 2] = [
    Milestone {
        year: "2020 - Present",
        title: "B.Tech in Computer Science",
        subtitle: "Engineering University",
    },
    Milestone {
        year: "2023 Summer",
        title: "Full Stack Intern",
        subtitle: "Tech Innovations Inc.",
    },
];

pub static SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/uttam-kumar-5a564a224",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/uttamkumar7291",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/vedavirus",
        icon: "extra-instagram",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/share/1D125x3Qm4/",
        icon: "devicon-facebook-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/UttamKumar85332",
        icon: "devicon-twitter-original",
    },
];

pub static DASHBOARD_STATS: [DashboardStat; 3] = [
    DashboardStat {
        label: "Active Projects",
        value: "12",
    },
    DashboardStat {
        label: "Upcoming Deadlines",
        value: "3",
    },
    DashboardStat {
        label: "Invoices Paid",
        value: "98%",
    },
];

/// Year the binary was built, for the copyright line.
pub fn build_year() -> String {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%Y").to_string())
        .unwrap_or_else(|_| env!("BUILD_TIME").chars().take(4).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(Skill::new("x", 0).level(), 0);
        assert_eq!(Skill::new("x", 100).level(), 100);
        assert_eq!(Skill::new("x", 101).level(), 100);
        assert_eq!(Skill::new("x", 255).level(), 100);
        assert_eq!(Skill::new("x", 42).bar_width(), "width: 42%");
    }

    #[test]
    fn test_static_skills_within_bounds() {
        assert!(SKILLS.iter().all(|s| s.level() <= 100));
        assert_eq!(SKILLS[0].name, "React / Frontend");
        assert_eq!(SKILLS[0].level(), 90);
    }

    #[test]
    fn test_projects_have_ordered_tags() {
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(PROJECTS[1].tags, &["Python", "Gemini API", "Flask"]);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(PROFILE.mailto(), "mailto:uttamkumarchilous123@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:6207749605");
    }

    #[test]
    fn test_build_year_is_four_digits() {
        let year = build_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
