use crate::error::{AppError, ParseError, Result};
use crate::index::DisplayIndex;
use crate::model::Tag;
use std::collections::BTreeSet;

/// Parses a lone 1-based index. Blank input is a format error; anything else
/// that is not a positive integer is an index error.
pub fn parse_index(text: &str, usage: &'static str) -> Result<DisplayIndex> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::InvalidFormat { usage }.into());
    }
    text.parse::<DisplayIndex>()
        .map_err(|_| ParseError::InvalidIndex { usage }.into())
}

pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>> {
    values.iter().map(|v| Tag::new(v.trim())).collect()
}

/// Tags for `edit`: a single empty `t/` clears them.
pub fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

pub fn parse_switch(text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(AppError::validation(
            "highlight",
            "Highlight should be either on or off",
        )),
    }
}

/// Fails with the command's format error unless `args` is blank.
pub fn expect_no_args(args: &str, usage: &'static str) -> Result<()> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::InvalidFormat { usage }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_errors() {
        assert!(matches!(
            parse_index("", "u"),
            Err(AppError::Parse(ParseError::InvalidFormat { .. }))
        ));
        for bad in ["0", "-1", "abc", "1 2"] {
            assert!(
                matches!(
                    parse_index(bad, "u"),
                    Err(AppError::Parse(ParseError::InvalidIndex { .. }))
                ),
                "{bad}"
            );
        }
        assert_eq!(parse_index(" 7 ", "u").unwrap().one_based(), 7);
    }

    #[test]
    fn edit_tags() {
        assert_eq!(parse_tags_for_edit(&[]).unwrap(), None);
        assert_eq!(
            parse_tags_for_edit(&[String::new()]).unwrap(),
            Some(BTreeSet::new())
        );
        let tags = parse_tags_for_edit(&["a".into(), "b".into()]).unwrap().unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags_for_edit(&["a".into(), "".into()]).is_err());
    }

    #[test]
    fn switches() {
        assert!(parse_switch("ON").unwrap());
        assert!(!parse_switch("off").unwrap());
        assert!(parse_switch("maybe").is_err());
    }
}
