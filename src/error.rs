use std::{
    fmt::{
        self,
        Display,
    },
    io,
};

pub(crate) enum Error {
    WriteFile(io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::WriteFile(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Yaml(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;

        match self {
            WriteFile(error) => write!(f, "Unable to write file: {}", error),
            Json(error) => write!(f, "Unable to serialize document to JSON: {}", error),
            Yaml(error) => write!(f, "Unable to serialize document to YAML: {}", error),
        }
    }
}
