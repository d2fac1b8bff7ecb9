use std::collections::HashMap;

use super::{Claim, UserRecord};

const CLAIM_BASE: &str = "http://wso2.org/claims";

/// Read-only mapping from PIN to user.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl Default for UserDirectory {
    /// The fixed mock directory with a single user behind PIN `1234`.
    fn default() -> Self {
        let emily = UserRecord {
            id: "9f1ab106-ce85-46b1-8f41-6a071b54eb56".to_string(),
            claims: vec![
                Claim::new(format!("{CLAIM_BASE}/username"), "emilye"),
                Claim::new(format!("{CLAIM_BASE}/emailaddress"), "emily@aol.com"),
                Claim::new(format!("{CLAIM_BASE}/lastname"), "Ellon"),
                Claim::new(format!("{CLAIM_BASE}/givenname"), "Emily"),
            ],
        };

        Self::from_entries([("1234".to_string(), emily)])
    }
}

impl UserDirectory {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, UserRecord)>) -> Self {
        Self {
            users: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, pin: &str) -> Option<&UserRecord> {
        self.users.get(pin)
    }
}
