use std::fmt;

/// Failure raised by an assertion-library predicate
/// Implements Clone so results can be collected and reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// None of the accepted options appeared in the text
    NoOptionFound
    {   options: Vec<String>
      , text: String
    }
  , /// One or more required keywords were absent
    MissingKeywords
    {   missing: Vec<String>
      , text: String
    }
  , /// No uncertainty phrase was found where one was expected
    NoUncertaintyPhrase
    {   text: String
    }
  , /// The expected number was not among the digit runs in the text
    NumberNotFound
    {   expected: i64
      , found: Vec<i64>
      , text: String
    }
  , /// Text could not be parsed as JSON
    InvalidJson
    {   detail: String
      , text: String
    }
  , /// JSON parsed but the root was not an object (or list of objects)
    NotAJsonObject
    {   text: String
    }
  , /// A required JSON field was absent
    JsonFieldMissing
    {   field: String
      , text: String
    }
  , /// A JSON field held a different value than expected
    JsonFieldMismatch
    {   field: String
      , expected: String
      , actual: String
    }
  , /// Fewer numbered list items than required
    TooFewNumberedItems
    {   found: usize
      , minimum: usize
      , text: String
    }
  , /// Text was at least as long as the allowed bound
    TextTooLong
    {   length: usize
      , bound: usize
    }
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::NoOptionFound { options, text } => {
              write!(f,
                "None of {:?} found in: {}",
                options, text
              )
            }
          , Error::MissingKeywords { missing, text } => {
              write!(f,
                "Missing keywords {:?} in: {}",
                missing, text
              )
            }
          , Error::NoUncertaintyPhrase { text } => {
              write!(f,
                "No uncertainty acknowledgment in: {}",
                text
              )
            }
          , Error::NumberNotFound { expected, found, text } => {
              write!(f,
                "Expected {} among numbers {:?} in: {}",
                expected, found, text
              )
            }
          , Error::InvalidJson { detail, text } => {
              write!(f,
                "Output is not valid JSON: {}\nOutput:\n{}",
                detail, text
              )
            }
          , Error::NotAJsonObject { text } => {
              write!(f,
                "Expected a JSON object, got: {}",
                text
              )
            }
          , Error::JsonFieldMissing { field, text } => {
              write!(f,
                "Field '{}' missing from JSON: {}",
                field, text
              )
            }
          , Error::JsonFieldMismatch { field, expected, actual } => {
              write!(f,
                "Expected {} '{}', got '{}'",
                field, expected, actual
              )
            }
          , Error::TooFewNumberedItems { found, minimum, text } => {
              write!(f,
                "Expected at least {} numbered items, found {}.\nOutput:\n{}",
                minimum, found, text
              )
            }
          , Error::TextTooLong { length, bound } => {
              write!(f,
                "Text length {} not below bound {}",
                length, bound
              )
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
