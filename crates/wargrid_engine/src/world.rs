//! The world collaborator.
//!
//! A [`World`] supplies the asset pools a map draws from: banners,
//! colors, and civilizations. The engine treats all three as opaque
//! references; it only ever compares them by value and hands them back
//! to the rendering layer. Maps hold a shared, non-owning handle to
//! exactly one world.

use std::fmt;
use std::sync::Arc;

macro_rules! opaque_reference {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Eq, PartialEq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Creates a reference from its name.
            #[must_use]
            pub fn new(name: impl Into<Arc<str>>) -> Self {
                Self(name.into())
            }

            /// Returns the referenced name.
            #[must_use]
            pub fn name(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }
    };
}

opaque_reference! {
    /// An opaque banner asset reference.
    Banner
}

opaque_reference! {
    /// An opaque color reference.
    Color
}

opaque_reference! {
    /// An opaque civilization reference.
    Civilization
}

/// A world definition: identity plus the asset pools maps draw from.
#[derive(Debug, Clone)]
pub struct World {
    uuid: String,
    name: String,
    banners: Vec<Banner>,
    colors: Vec<Color>,
    civilizations: Vec<Civilization>,
}

impl World {
    /// Creates a world with the given unique identifier and empty pools.
    #[must_use]
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            banners: Vec::new(),
            colors: Vec::new(),
            civilizations: Vec::new(),
        }
    }

    /// Replaces the banner pool.
    #[must_use]
    pub fn with_banners<I, T>(mut self, banners: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Banner>,
    {
        self.banners = banners.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the color pool.
    #[must_use]
    pub fn with_colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Color>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the civilization pool.
    #[must_use]
    pub fn with_civilizations<I, T>(mut self, civilizations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Civilization>,
    {
        self.civilizations = civilizations.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the world's unique identifier.
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Returns the world's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the available banners.
    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Returns the available colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the available civilizations.
    #[must_use]
    pub fn civilizations(&self) -> &[Civilization] {
        &self.civilizations
    }
}
