//! Assertion library: independent predicate checks over generated text
//!
//! Each predicate returns Ok(()) on pass and a descriptive Error on
//! failure, with the observed text embedded so diagnostics are
//! self-contained. Keyword comparisons lower-case both sides.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use serde_json::Value;

use crate::error::Error;

lazy_static!
{   static ref DIGIT_RUN: Regex
      = Regex::new(r"\d+").unwrap();
    static ref NUMBERED_ITEM: Regex
      = Regex::new(r"(?m)^\d+\.\s+\S").unwrap();
}

/// Phrases accepted as an admission of uncertainty
pub const UNCERTAINTY_PHRASES: &[&str] = &[
    "i don't know"
  , "not sure"
  , "unknown"
  , "no record"
  , "cannot"
  , "doesn't make sense"
  , "nonsense"
  , "no favorite"
];

/// Pass if the text contains at least one of the options
pub fn contains_any_of(
  text: &str
, options: &[&str]
) -> Result<(), Error>
{   let haystack = text.to_lowercase();
    let found = options
      .iter()
      .any(|option| haystack.contains(&option.to_lowercase()));
    trace!("contains_any_of found match: {}", found);

    if found
    {   Ok(())
    } else
    {   Err(Error::NoOptionFound
        {   options: options
              .iter()
              .map(|s| s.to_string())
              .collect()
          , text: text.to_string()
        })
    }
}

/// Pass only if every required keyword is present;
/// the failure names the missing subset
pub fn contains_all_of(
  text: &str
, required: &[&str]
) -> Result<(), Error>
{   let haystack = text.to_lowercase();
    let missing: Vec<String> = required
      .iter()
      .filter(|keyword| {
        !haystack.contains(&keyword.to_lowercase())
      })
      .map(|s| s.to_string())
      .collect();

    if missing.is_empty()
    {   Ok(())
    } else
    {   Err(Error::MissingKeywords
        {   missing
          , text: text.to_string()
        })
    }
}

/// Pass if the text admits uncertainty using the default phrase set
pub fn admits_uncertainty(text: &str) -> Result<(), Error>
{   admits_uncertainty_with(text, UNCERTAINTY_PHRASES)
}

/// Pass if the text contains at least one of the given
/// uncertainty phrases
pub fn admits_uncertainty_with(
  text: &str
, phrases: &[&str]
) -> Result<(), Error>
{   let haystack = text.to_lowercase();
    let found = phrases
      .iter()
      .any(|phrase| haystack.contains(&phrase.to_lowercase()));

    if found
    {   Ok(())
    } else
    {   Err(Error::NoUncertaintyPhrase
        {   text: text.to_string()
        })
    }
}

/// Pass if `expected` appears among the integers parsed from the
/// maximal digit runs in the text; runs too large for i64 are skipped
pub fn contains_number(
  text: &str
, expected: i64
) -> Result<(), Error>
{   let found: Vec<i64> = DIGIT_RUN
      .find_iter(text)
      .filter_map(|run| run.as_str().parse().ok())
      .collect();
    trace!("contains_number parsed runs: {:?}", found);

    if found.contains(&expected)
    {   Ok(())
    } else
    {   Err(Error::NumberNotFound
        {   expected
          , found
          , text: text.to_string()
        })
    }
}

/// Pass if the text is valid JSON whose root is an object (or a
/// non-empty list of objects, in which case the first element is
/// used) and every named field's value, compared as text, equals
/// the expected value
pub fn valid_json_with_fields(
  text: &str
, fields: &[(&str, &str)]
) -> Result<(), Error>
{   let parsed: Value = serde_json::from_str(text.trim())
      .map_err(|e| Error::InvalidJson
      {   detail: e.to_string()
        , text: text.to_string()
      })?;

    // Accept either an object or a list of objects
    let object = match &parsed
    {   Value::Object(object) => object
      , Value::Array(items) => {
          match items.first()
          {   Some(Value::Object(object)) => object
            , _ => {
                return Err(Error::NotAJsonObject
                {   text: text.to_string()
                });
              }
          }
        }
      , _ => {
          return Err(Error::NotAJsonObject
          {   text: text.to_string()
          });
        }
    };

    for (field, expected) in fields
    {   let value = object.get(*field)
          .ok_or_else(|| Error::JsonFieldMissing
          {   field: field.to_string()
            , text: text.to_string()
          })?;

        let actual = match value
        {   Value::String(s) => s.clone()
          , other => other.to_string()
        };

        if actual != *expected
        {   return Err(Error::JsonFieldMismatch
            {   field: field.to_string()
              , expected: expected.to_string()
              , actual
            });
        }
    }
    Ok(())
}

/// Pass if at least `min_items` lines start with a numbered-list
/// marker: digits, a period, whitespace, then content
pub fn has_numbered_list(
  text: &str
, min_items: usize
) -> Result<(), Error>
{   let found = NUMBERED_ITEM.find_iter(text).count();
    trace!("has_numbered_list counted {} items", found);

    if found >= min_items
    {   Ok(())
    } else
    {   Err(Error::TooFewNumberedItems
        {   found
          , minimum: min_items
          , text: text.to_string()
        })
    }
}

/// Pass if the character length of the text is strictly below
/// the bound
pub fn length_below(
  text: &str
, bound: usize
) -> Result<(), Error>
{   let length = text.chars().count();

    if length < bound
    {   Ok(())
    } else
    {   Err(Error::TextTooLong
        {   length
          , bound
        })
    }
}
