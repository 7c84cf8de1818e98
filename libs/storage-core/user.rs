use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Used for authentication, compared case-insensitively.
    pub login: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub must_change_password: bool,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub password: Option<String>,
    pub must_change_password: Option<bool>,
}

impl UserPatch {
    pub fn apply(self, user: &User) -> User {
        User {
            id: user.id.clone(),
            name: self.name.unwrap_or_else(|| user.name.clone()),
            login: user.login.clone(),
            role: user.role,
            avatar: self.avatar.or_else(|| user.avatar.clone()),
            email: self.email.or_else(|| user.email.clone()),
            phone: self.phone.or_else(|| user.phone.clone()),
            telegram: self.telegram.or_else(|| user.telegram.clone()),
            password: self.password.or_else(|| user.password.clone()),
            must_change_password: self
                .must_change_password
                .unwrap_or(user.must_change_password),
        }
    }
}
