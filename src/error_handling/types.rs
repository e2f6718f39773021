use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    DirectoryDoesNotExist(String),
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::DirectoryDoesNotExist(e) => write!(f, "Directory error: {}", e),
            ConfigError::InvalidLogLevel(e) => write!(f, "Invalid log level: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Errors raised by a key-value backend.
///
/// These never leave the storage layer: `RecordStore` logs and absorbs them.
#[derive(Debug)]
pub enum StorageError {
    ConnectionFailed,
    WriteFailed,
    ReadFailed,
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionFailed => write!(f, "Storage connection failed"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
            StorageError::ReadFailed => write!(f, "Storage read failed"),
            StorageError::InvalidKey(k) => write!(f, "Invalid storage key: {:?}", k),
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    NameRequired,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::NameRequired => write!(f, "Name is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    NotAuthenticated,
    StillLoading,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::NotAuthenticated => write!(f, "Not logged in"),
            AccessError::StillLoading => write!(f, "Session is still loading"),
        }
    }
}

impl std::error::Error for AccessError {}

#[derive(Debug)]
pub enum ExportError {
    UnknownDesign(String),
    UnsupportedSource(String),
    MalformedDataUri(String),
    IoError(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::UnknownDesign(id) => write!(f, "No design with id {}", id),
            ExportError::UnsupportedSource(s) => write!(f, "Unsupported image source: {}", s),
            ExportError::MalformedDataUri(e) => write!(f, "Malformed data URI: {}", e),
            ExportError::IoError(e) => write!(f, "Export IO error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err)
    }
}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    StorageError(StorageError),
    ValidationError(ValidationError),
    AccessError(AccessError),
    ExportError(ExportError),
    DesignNotFound(String),
    ConfirmationRequired,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::ValidationError(e) => write!(f, "{}", e),
            ControllerError::AccessError(e) => write!(f, "Access denied: {}", e),
            ControllerError::ExportError(e) => write!(f, "{}", e),
            ControllerError::DesignNotFound(id) => write!(f, "No design with id {}", id),
            ControllerError::ConfirmationRequired => {
                write!(f, "Refusing to clear all designs without --yes")
            }
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}

impl From<ValidationError> for ControllerError {
    fn from(err: ValidationError) -> Self {
        ControllerError::ValidationError(err)
    }
}

impl From<AccessError> for ControllerError {
    fn from(err: AccessError) -> Self {
        ControllerError::AccessError(err)
    }
}

impl From<ExportError> for ControllerError {
    fn from(err: ExportError) -> Self {
        ControllerError::ExportError(err)
    }
}
