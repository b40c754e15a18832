use std::fmt;

#[derive(Debug, Clone)]
pub struct Social {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug, Clone)]
pub struct Developer {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub resume: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub social: Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    Mobile,
    Backend,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
            Self::Backend => "backend",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub category: ProjectCategory,
}

/// Filter buttons on the portfolio page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Frontend),
        ProjectFilter::Only(ProjectCategory::Fullstack),
        ProjectFilter::Only(ProjectCategory::Backend),
        ProjectFilter::Only(ProjectCategory::Mobile),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(c) => c.as_str(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Design,
    ];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Design => "Design",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0-100
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub projects_completed: u32,
    pub years_experience: u32,
    pub clients_satisfied: u32,
    pub technologies_mastered: u32,
}

pub static DEVELOPER: Developer = Developer {
    name: "Juan Pertuz",
    title: "Full-Stack AI Developer",
    description: "Passionate junior developer with a keen eye for detail and a love for creating seamless user experiences. Specialized in React, Node.js, and modern web technologies.",
    image: "/images/profile.jpg",
    resume: "/HojaDeVida.pdf",
    email: "juanfernandopertuz@gmail.com",
    location: "Barranquilla, Co",
    phone: "+57 315 0602677",
    social: Social {
        github: "https://github.com/alexrivera",
        linkedin: "https://linkedin.com/in/alexrivera",
        twitter: "https://twitter.com/alexrivera",
    },
};

pub static STATS: Stats = Stats {
    projects_completed: 25,
    years_experience: 2,
    clients_satisfied: 15,
    technologies_mastered: 12,
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "E-Commerce Platform",
        description: "Modern e-commerce platform built with React and Node.js, featuring real-time inventory management and payment integration.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "TailwindCSS"],
        live_url: Some("https://example-ecommerce.com"),
        github_url: Some("https://github.com/alexrivera/ecommerce-platform"),
        category: ProjectCategory::Fullstack,
    },
    Project {
        id: "2",
        title: "Task Management App",
        description: "Collaborative task management application with real-time updates, drag-and-drop functionality, and team workspaces.",
        image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Firebase", "Material-UI", "TypeScript"],
        live_url: Some("https://taskmanager-demo.com"),
        github_url: Some("https://github.com/alexrivera/task-manager"),
        category: ProjectCategory::Frontend,
    },
    Project {
        id: "3",
        title: "Weather Dashboard",
        description: "Interactive weather dashboard with location-based forecasts, charts, and customizable widgets.",
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Vue.js", "Chart.js", "OpenWeather API", "Vuetify"],
        live_url: Some("https://weather-dashboard-demo.com"),
        github_url: Some("https://github.com/alexrivera/weather-dashboard"),
        category: ProjectCategory::Frontend,
    },
    Project {
        id: "4",
        title: "Social Media API",
        description: "RESTful API for social media platform with user authentication, post management, and real-time messaging.",
        image: "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Node.js", "Express", "MongoDB", "Socket.io", "JWT"],
        live_url: None,
        github_url: Some("https://github.com/alexrivera/social-api"),
        category: ProjectCategory::Backend,
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 90, category: SkillCategory::Frontend },
    Skill { name: "TypeScript", level: 85, category: SkillCategory::Frontend },
    Skill { name: "React", level: 88, category: SkillCategory::Frontend },
    Skill { name: "Vue.js", level: 75, category: SkillCategory::Frontend },
    Skill { name: "TailwindCSS", level: 90, category: SkillCategory::Frontend },
    Skill { name: "Node.js", level: 80, category: SkillCategory::Backend },
    Skill { name: "Express.js", level: 78, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", level: 70, category: SkillCategory::Backend },
    Skill { name: "MongoDB", level: 75, category: SkillCategory::Backend },
    Skill { name: "Git", level: 85, category: SkillCategory::Tools },
    Skill { name: "Docker", level: 65, category: SkillCategory::Tools },
    Skill { name: "Figma", level: 70, category: SkillCategory::Design },
];

pub static SERVICES: &[Service] = &[
    Service {
        id: "1",
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces using modern frameworks and best practices.",
        icon: "Code",
        features: &[
            "React & Vue.js Development",
            "Responsive Web Design",
            "Performance Optimization",
            "Cross-browser Compatibility",
        ],
    },
    Service {
        id: "2",
        title: "Backend Development",
        description: "Building robust server-side applications and APIs with secure authentication and data management.",
        icon: "Server",
        features: &[
            "RESTful API Development",
            "Database Design & Management",
            "Authentication & Authorization",
            "Third-party Integrations",
        ],
    },
    Service {
        id: "3",
        title: "Full-Stack Solutions",
        description: "End-to-end web application development from concept to deployment with modern technologies.",
        icon: "Layers",
        features: &[
            "Complete Web Applications",
            "Database Architecture",
            "Cloud Deployment",
            "Maintenance & Support",
        ],
    },
];

pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

/// Skills grouped in [`SkillCategory::ALL`] order. Categories without skills are left out.
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<&'static Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let skills = SKILLS
                .iter()
                .filter(|s| s.category == category)
                .collect::<Vec<_>>();
            if skills.is_empty() {
                None
            } else {
                Some((category, skills))
            }
        })
        .collect()
}

/// Value an animated counter shows on `frame` of `total_frames`.
///
/// Grows linearly, never decreases, and lands on `target` at the last frame.
pub fn counter_frame(target: u32, frame: u32, total_frames: u32) -> u32 {
    if total_frames == 0 || frame >= total_frames {
        return target;
    }
    (u64::from(target) * u64::from(frame) / u64::from(total_frames)) as u32
}

/// Whether a counter animation has shown its last frame and can stop ticking.
pub fn counter_finished(frame: u32, total_frames: u32) -> bool {
    frame >= total_frames
}
