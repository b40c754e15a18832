/// Top-level pages of the site, each with its own route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Services,
    Contact,
}

impl Section {
    /// Menu order
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Services,
        Section::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Hero => "/",
            Self::About => "/about",
            Self::Portfolio => "/portfolio",
            Self::Services => "/services",
            Self::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }

    /// Section for a location pathname. Unknown paths fall back to the hero.
    pub fn from_path(pathname: &str) -> Self {
        let first = pathname
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        match first {
            "about" => Self::About,
            "portfolio" => Self::Portfolio,
            "services" => Self::Services,
            "contact" => Self::Contact,
            _ => Self::Hero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_path(section.path()), section);
        }
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(Section::from_path(""), Section::Hero);
        assert_eq!(Section::from_path("/contact/"), Section::Contact);
        assert_eq!(Section::from_path("/about/skills"), Section::About);
        assert_eq!(Section::from_path("/nope"), Section::Hero);
    }
}
