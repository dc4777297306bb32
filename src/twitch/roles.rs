use std::str::FromStr;

/// Chat privilege tiers, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum UserRole {
    #[default]
    Viewer,
    Moderator,
    Broadcaster,
}

impl UserRole {
    /// Highest role granted by a set of chat badge names.
    pub fn from_badges<S: AsRef<str>>(badges: &[S]) -> Self {
        badges
            .iter()
            .filter_map(|badge| badge.as_ref().parse::<UserRole>().ok())
            .max()
            .unwrap_or_default()
    }

    pub fn is_moderator(&self) -> bool {
        *self >= UserRole::Moderator
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broadcaster" => Ok(UserRole::Broadcaster),
            "moderator" => Ok(UserRole::Moderator),
            "viewer" => Ok(UserRole::Viewer),
            _ => Err(()),
        }
    }
}
