/// Hostname extracted from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupKey<'a>(&'a str);

impl<'a> LookupKey<'a> {
    /// Strips the leading separator from `path`.
    ///
    /// Returns `None` for paths of one byte or less (`"/"` and `""`). The
    /// first character is dropped whatever it is, so `"xevil.com"` yields
    /// `"evil.com"`.
    pub fn from_path(path: &'a str) -> Option<Self> {
        if path.len() <= 1 {
            return None;
        }
        let mut chars = path.chars();
        chars.next();
        Some(Self(chars.as_str()))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Outcome of a single lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupVerdict {
    /// The path carried no key.
    BadRequest,
    /// The key is on the blacklist.
    Blacklisted,
    /// The key is not on the blacklist.
    Allowed,
}

impl LookupVerdict {
    pub fn body(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Blacklisted => "blacklist",
            Self::Allowed => "OK",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Blacklisted => "blacklisted",
            Self::Allowed => "allowed",
        }
    }
}

impl std::fmt::Display for LookupVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
