use self::Env::*;
use std::{
    fmt,
    sync::{LazyLock, Mutex, PoisonError},
};

/// Names of the custom environments parsed so far.
static CUSTOM_ENV_NAMES: LazyLock<Mutex<Vec<&'static str>>> = LazyLock::new(Mutex::default);

/// Application running environment.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    #[default]
    /// The `dev` environment.
    Dev,
    /// The `prod` environment.
    Prod,
    /// A custom environment.
    Custom(&'static str),
}

impl Env {
    /// Parses the env from a name. An empty name yields the `dev` environment.
    ///
    /// Custom names are interned, so each distinct name is allocated once.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "" | "dev" => Dev,
            "prod" => Prod,
            name => {
                let mut names = CUSTOM_ENV_NAMES
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                if let Some(&interned) = names.iter().find(|&&interned| interned == name) {
                    Custom(interned)
                } else {
                    let interned: &'static str = name.to_owned().leak();
                    names.push(interned);
                    Custom(interned)
                }
            }
        }
    }

    /// Returns `true` if `self` is the `dev` environment.
    #[inline]
    pub fn is_dev(&self) -> bool {
        matches!(self, Dev)
    }

    /// Returns `true` if `self` is the `prod` environment.
    #[inline]
    pub fn is_prod(&self) -> bool {
        matches!(self, Prod)
    }

    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Dev => "dev",
            Prod => "prod",
            Custom(name) => name,
        }
    }
}

impl fmt::Display for Env {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl From<&'static str> for Env {
    #[inline]
    fn from(name: &'static str) -> Self {
        match name {
            "dev" => Dev,
            "prod" => Prod,
            _ => Custom(name),
        }
    }
}
