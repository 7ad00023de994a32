use serde::{Deserialize, Serialize};

/// Public account profile as the upstream API reports it. Immutable once
/// fetched; display name and bio may be absent upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl Profile {
    /// Name to show on screen: the display name when set, the login
    /// otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_payload_with_null_fields() {
        let payload = serde_json::json!({
            "login": "octocat",
            "avatar_url": "https://avatars.example/u/1",
            "name": null,
            "bio": null,
            "public_repos": 8,
            "followers": 4000,
            "following": 9,
            "company": "ignored-extra-field"
        });

        let profile: Profile = serde_json::from_value(payload).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.followers, 4000);
    }

    #[test]
    fn display_name_prefers_the_set_name() {
        let profile = Profile {
            login: "octocat".to_string(),
            avatar_url: String::new(),
            name: Some("The Octocat".to_string()),
            bio: None,
            public_repos: 1,
            followers: 0,
            following: 0,
        };
        assert_eq!(profile.display_name(), "The Octocat");
    }
}
