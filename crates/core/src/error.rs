use std::error::Error;
use std::fmt;
use std::io;

/// Errors surfaced to the user while handling a subscription file.
///
/// Base64 decode problems never show up here; extraction recovers from them
/// by keeping the line unchanged.
#[derive(Debug)]
pub enum SubscriptionError {
    /// The selected file is not a `.txt` file
    InvalidFileType { name: String },
    /// The file could not be read
    ReadFailure(io::Error),
    /// Nothing was left after dropping blank and comment lines
    NoValidContent,
}

impl SubscriptionError {
    /// Short status line shown to the user
    pub fn status_message(&self) -> &'static str {
        match self {
            SubscriptionError::InvalidFileType { .. } => "请选择.txt文件",
            SubscriptionError::ReadFailure(_) => "文件读取失败",
            SubscriptionError::NoValidContent => "未找到有效订阅内容",
        }
    }
}

impl fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionError::InvalidFileType { name } => {
                write!(f, "Invalid file type: {} is not a .txt file", name)
            }
            SubscriptionError::ReadFailure(err) => write!(f, "Read failure: {}", err),
            SubscriptionError::NoValidContent => write!(f, "No valid subscription content"),
        }
    }
}

impl Error for SubscriptionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubscriptionError::ReadFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SubscriptionError {
    fn from(err: io::Error) -> Self {
        SubscriptionError::ReadFailure(err)
    }
}
