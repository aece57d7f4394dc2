use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Abinas Keshari Singh";
pub const EMAIL: &str = "abinaskesharisingh@outlook.com";
pub const PHONE: &str = "+91 6370096587";
pub const LOCATION: &str = "Odisha, India";

pub const TAGLINE: &str = "I create exceptional digital experiences through innovative web development, combining cutting-edge technology with thoughtful design to bring ideas to life.";

pub const ROLES: [&str; 4] = [
    "Full Stack Developer",
    "Next.JS Specialist",
    "UI/UX Designer",
    "Problem Solver",
];
pub const ROLE_TYPE_INTERVAL_MS: u64 = 120;
pub const ROLE_HOLD_MS: u64 = 2500;

pub const CV_HREF: &str = "/assets/Abinas_Keshari_Singh_ATS_OnePage.docx";
pub const CV_FILENAME: &str = "Abinas_Keshari_Singh_ATS_OnePage.docx";

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

pub const LOGO_SRC: &str = "/logo.svg";
pub const PROFILE_SRC: &str = "/profile.svg";
pub const FAVICON_HREF: &str = "/favicon.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        href: "#home",
    },
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Element id targeted by an in-page anchor, or `None` for any other href.
pub fn nav_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class for the badge icon
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 13] = [
    Skill { name: "React", icon: "devicon-react-original" },
    Skill { name: "TypeScript", icon: "devicon-typescript-plain" },
    Skill { name: "Node.js", icon: "devicon-nodejs-plain" },
    Skill { name: "Python", icon: "devicon-python-plain" },
    Skill { name: "Next.js", icon: "devicon-nextjs-plain" },
    Skill { name: "TailwindCSS", icon: "devicon-tailwindcss-original" },
    Skill { name: "Sanity", icon: "devicon-sanity-plain" },
    Skill { name: "MongoDB", icon: "devicon-mongodb-plain" },
    Skill { name: "Google Cloud", icon: "devicon-googlecloud-plain" },
    Skill { name: "Docker", icon: "devicon-docker-plain" },
    Skill { name: "Supabase", icon: "devicon-supabase-plain" },
    Skill { name: "React Native", icon: "devicon-react-plain" },
    Skill { name: "REST APIs", icon: "devicon-express-original" },
];

pub const SKILL_STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code that stands the test of time.",
        icon: "</>",
    },
    Highlight {
        title: "Design-Focused",
        description: "Bridging the gap between design and development with pixel-perfect implementations.",
        icon: "🎨",
    },
    Highlight {
        title: "Performance",
        description: "Optimizing applications for speed, accessibility, and exceptional user experience.",
        icon: "🚀",
    },
    Highlight {
        title: "Collaboration",
        description: "Working effectively with cross-functional teams to deliver impactful solutions.",
        icon: "👥",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn title(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "📧",
            ContactKind::Phone => "📱",
            ContactKind::Location => "📍",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub kind: ContactKind,
    pub value: &'static str,
}

impl ContactInfo {
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ContactKind::Email => Some(format!("mailto:{}", self.value)),
            ContactKind::Phone => Some(format!(
                "tel:{}",
                self.value
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
            )),
            ContactKind::Location => None,
        }
    }
}

pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        kind: ContactKind::Email,
        value: EMAIL,
    },
    ContactInfo {
        kind: ContactKind::Phone,
        value: PHONE,
    },
    ContactInfo {
        kind: ContactKind::Location,
        value: LOCATION,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com/MR-kali98753",
        icon: "devicon-github-plain",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/abinas-singh",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com",
        icon: "devicon-twitter-original",
    },
];
