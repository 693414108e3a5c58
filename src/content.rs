//! Static page content. Everything here is fixed at compile time and rendered
//! in declaration order.

pub const OWNER_FIRST_NAME: &str = "Mahin";
pub const OWNER_LAST_NAME: &str = "Akond";
pub const CONTACT_EMAIL: &str = "mahinakond@cmail.carleton.ca";
pub const AVAILABILITY: &str = "Available for Summer 2026 Internships";
pub const TAGLINE: &str = "3rd year Computational Mathematics student at Carleton University, building at the intersection of hardware and software.";

pub const PORTRAIT_URL: &str = "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/69619967f075624bfbdb92c2_IMG_0880-Enhanced-NR-min.jpg";
pub const CONTACT_VISUAL_URL: &str = "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b7755a8493b0cad1d6f7_Screenshot_20251206-124628.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub role: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Display string, never parsed ("300+").
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    Github,
    Linkedin,
}

impl SocialIcon {
    /// Icon font class used to draw the glyph.
    pub fn class(self) -> &'static str {
        match self {
            Self::Instagram => "extra-instagram",
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram Profile",
            Self::Github => "GitHub Profile",
            Self::Linkedin => "LinkedIn Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub href: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "TreatQuest",
        subtitle: "Prototyp3",
        role: "Internship",
        year: "2025",
        description: "collaborated with a team of devs to design a Python-based grid-world game that uses reinforcement learning (Q-learning) to train an agent to navigate environments, optimize rewards, and adapt to increasing difficulty levels.",
        image: "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961a2e25a7866d79f8c0ca0_IMG_4889%20(1).jpg",
        tags: &["Python", "RL", "Q-Learning"],
    },
    Project {
        title: "CR24 McTriple",
        subtitle: "CU InSpace",
        role: "LC",
        year: "2024",
        description: "Contributed to designing Carleton's high powered sounding rocket CR24, competing for 30,000 ft category and representing the team in Launch Canada 2024 Timmins.",
        image: "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961a98c3c7dea665aa052ea_IMG_0308-Enhanced-NR%20(1).jpg",
        tags: &["Aerospace", "Engineering", "Competition"],
    },
    Project {
        title: "Recovery Reefing System",
        subtitle: "CU InSpace",
        role: "LC",
        year: "2025",
        description: "Developed a distributed embedded reefing system using Raspberry Pi Pico (RP2040), integrating sensor input, wireless communication, GPIO control, and non-volatile flight data logging for rocket recovery operations.",
        image: "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/696198f7712839d5309dcf9a/69619967f075624bfbdb92c2_IMG_0880-Enhanced-NR-min.jpg",
        tags: &["Embedded", "RP2040", "IoT"],
    },
];

pub const GALLERY_IMAGES: &[&str] = &[
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b045bf674bdacd74659a_IMG_5904.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b0b4246c273d78dfef66_Receiving_Box_Assembly-ezgif.com-video-to-gif-converter.gif",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961af376ed108d9400cd36a_IMG_0752.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961afa8fe8d7f02ccc47ecd_Level3.png",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961aeb3a818ccd52f37b375_IMG_4885.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961ae756f6f85a8479b0179_IMG_0560.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961ae9eee157a9f691c0d1f_IMG_5029.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961ae84a818ccd52f37aec6_000692200007.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961a6c8cbafb898e8622b88_frame00108013.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b7d5d26525f8561ac8f8_PXL_20251021_233711385.MP.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b7f5ddf2f3eebc9bfafc_PXL_20250913_162200279.MP.jpg",
    "https://cdn.prod.website-files.com/696198f7712839d5309dcf9a/6961b86f17d6448d5343dfcd_Screenshot_20251206-124605.png",
];

pub const STATS: &[Stat] = &[
    Stat {
        number: "300+",
        label: "people worked with",
    },
    Stat {
        number: "10+",
        label: "teams led",
    },
    Stat {
        number: "4+",
        label: "major projects",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: SocialIcon::Instagram,
        href: "https://www.instagram.com/akond1606/",
    },
    SocialLink {
        icon: SocialIcon::Github,
        href: "https://github.com/Mahin16063",
    },
    SocialLink {
        icon: SocialIcon::Linkedin,
        href: "https://www.linkedin.com/in/mahin-hossain-akond/",
    },
];

pub fn full_name() -> String {
    format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}")
}

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// Alt text for the gallery cell at `index` (zero based).
pub fn gallery_alt(index: usize) -> String {
    format!("Gallery {}", index + 1)
}
