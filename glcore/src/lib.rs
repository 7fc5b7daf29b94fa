use std::{error, fmt};

#[expect(non_snake_case)]
mod api;
mod debug;
mod enums;
mod extensions;
mod libgl;
#[expect(non_snake_case)]
mod types;

pub use api::{Api, FnPtr};
pub use debug::{Call, PostCallback, PreCallback};
pub use enums::*;
pub use extensions::Extensions;
pub use types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u32, pub u32);

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(major, minor) = self;
        f.write_fmt(format_args!("{major}.{minor}"))
    }
}

// es and sc contexts prepend a textual blurb to the version number.
const VERSION_PREFIXES: [&str; 4] = [
    "OpenGL ES-CM ",
    "OpenGL ES-CL ",
    "OpenGL ES ",
    "OpenGL SC ",
];

impl Version {
    /// Parses a version out of a `GL_VERSION`-style string, for example
    /// `4.6.0 NVIDIA 535.129.03` or `OpenGL ES 3.2 Mesa 23.1`.
    pub fn parse(string: &str) -> Result<Self, LoadError> {
        let mut rest = string;
        for prefix in VERSION_PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }

        let major_end = rest
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(rest.len());
        let major = rest[..major_end]
            .parse::<u32>()
            .map_err(|_| LoadError::CouldNotParseVersion(string.to_string()))?;

        // the minor number is optional, anything trailing it is ignored
        let minor = match rest[major_end..].strip_prefix('.') {
            Some(tail) => {
                let minor_end = tail
                    .find(|ch: char| !ch.is_ascii_digit())
                    .unwrap_or(tail.len());
                tail[..minor_end].parse::<u32>().unwrap_or(0)
            }
            None => 0,
        };

        Ok(Self(major, minor))
    }
}

#[test]
fn test_version_ord() {
    assert!(Version(4, 6) > Version(4, 5));
    assert!(Version(4, 0) > Version(3, 3));
    assert!(Version(3, 3) >= Version(3, 3));
    assert!(Version(2, 1) < Version(3, 0));
}

#[test]
fn test_version_parse() {
    assert_eq!(Version::parse("4.6").unwrap(), Version(4, 6));
    assert_eq!(Version::parse("4.6.0 NVIDIA 535.129.03").unwrap(), Version(4, 6));
    assert_eq!(Version::parse("3.0 Mesa 23.1.9").unwrap(), Version(3, 0));
    assert_eq!(Version::parse("OpenGL ES 3.2 Mesa 23.1").unwrap(), Version(3, 2));
    assert_eq!(Version::parse("OpenGL ES-CM 1.1").unwrap(), Version(1, 1));
    assert_eq!(Version::parse("4").unwrap(), Version(4, 0));
    assert_eq!(Version::parse("4.").unwrap(), Version(4, 0));
    assert!(Version::parse("").is_err());
    assert!(Version::parse("Mesa 23.1").is_err());
}

#[test]
fn test_version_display() {
    assert_eq!(Version(4, 6).to_string(), "4.6");
}

#[derive(Debug)]
pub enum LoadError {
    CouldNotLoadLibGl(dynlib::Error),
    MissingGetString,
    CouldNotQueryVersion,
    CouldNotParseVersion(String),
    CouldNotQueryExtensions,
}

impl error::Error for LoadError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CouldNotLoadLibGl(err) => {
                f.write_fmt(format_args!("could not load the gl library: {err}"))
            }
            Self::MissingGetString => f.write_str("could not get the address of glGetString"),
            Self::CouldNotQueryVersion => f.write_str("could not query gl version"),
            Self::CouldNotParseVersion(string) => {
                f.write_fmt(format_args!("could not parse gl version {string:?}"))
            }
            Self::CouldNotQueryExtensions => f.write_str("could not query gl extensions"),
        }
    }
}
