/// Injectable credential-verification capability.
///
/// Auth policy is decoupled from this core: the web layer parses whatever
/// credential material arrives on the wire and delegates the decision here.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed list of (username, password) pairs supplied by configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pairs: Vec<(String, String)>,
}

impl StaticCredentials {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.pairs
            .iter()
            .any(|(user, pass)| user == username && pass == password)
    }
}
