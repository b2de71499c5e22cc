use serde::{Deserialize, Serialize};

/// Account record. No route exposes users, and the password never leaves the
/// process in a response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn from_new(id: String, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let user = User::from_new(
            "u-1".to_string(),
            NewUser { username: "jane".to_string(), password: "hunter2".to_string() },
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "jane");
        assert!(json.get("password").is_none());
    }
}
